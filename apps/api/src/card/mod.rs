// Signature vibe card: controller, collaborator seams and their adapters.
// The controller only sees the traits in `ports`; adapters are picked in main.

pub mod controller;
pub mod handlers;
pub mod html;
pub mod launcher;
pub mod ports;
pub mod store;
