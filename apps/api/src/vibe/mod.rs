// Signature vibe: record model, rule tables and the inference engine.
// The engine is a pure function; everything async lives in `card`.

pub mod assessment;
pub mod descriptor;
pub mod engine;
pub mod rules;

pub use assessment::AssessmentRecord;
pub use descriptor::{Placeholder, VibeDescriptor};
pub use engine::infer;
