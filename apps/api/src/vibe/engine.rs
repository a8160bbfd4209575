//! Vibe inference: composes the rule tables into a [`VibeDescriptor`].
//!
//! Pure and total: no I/O, no state, and every cascade ends in a default, so
//! any record (including `{}`) yields a tagline and exactly three traits.
//! Callers decide what to show when no assessment exists at all.

use crate::vibe::assessment::AssessmentRecord;
use crate::vibe::descriptor::{VibeDescriptor, VibeTrait, TAGLINE_SEPARATOR};
use crate::vibe::rules::{COMMUNICATION, ENERGY, INTENT, LIFESTYLE, STYLE};

pub fn classify_style(record: &AssessmentRecord) -> &'static str {
    STYLE.evaluate(record)
}

pub fn classify_energy(record: &AssessmentRecord) -> &'static str {
    ENERGY.evaluate(record)
}

pub fn communication_trait(record: &AssessmentRecord) -> VibeTrait {
    COMMUNICATION.evaluate(record).into()
}

pub fn lifestyle_trait(record: &AssessmentRecord) -> VibeTrait {
    LIFESTYLE.evaluate(record).into()
}

pub fn intent_trait(record: &AssessmentRecord) -> VibeTrait {
    INTENT.evaluate(record).into()
}

/// Derives the signature vibe for an assessment.
pub fn infer(record: &AssessmentRecord) -> VibeDescriptor {
    let tagline = format!(
        "{}{}{}",
        classify_style(record),
        TAGLINE_SEPARATOR,
        classify_energy(record)
    );

    VibeDescriptor {
        tagline,
        traits: [
            communication_trait(record),
            lifestyle_trait(record),
            intent_trait(record),
        ],
    }
}
