//! Rule tables. Ordered `(condition, result)` cascades with an unconditional fallback.
//!
//! Priority is the row order of each table: the first matching rule wins.
//! Reordering rows changes classification, so each cascade is tested on its own.

use crate::vibe::assessment::{
    AssessmentRecord, FieldPath, CONVERSATION_DEPTH, CONVERSATION_PACE, DATE_STYLE,
    FLIRTATION_COMFORT, HOBBIES, HUMOR_TYPE, INITIATIVE_LEVEL, RELATIONSHIP_GOAL,
};
use crate::vibe::descriptor::{IconId, TraitTemplate};

/// How a probe compares its label against the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// The answer is a list with an element equal to the label.
    Item,
    /// The answer is text containing the label.
    Text,
}

/// One containment test against a single answer.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub path: FieldPath,
    pub label: &'static str,
    pub mode: Match,
}

impl Probe {
    pub fn holds(&self, record: &AssessmentRecord) -> bool {
        let field = record.field(self.path);
        match self.mode {
            Match::Item => field.has_item(self.label),
            Match::Text => field.mentions(self.label),
        }
    }
}

// Struct literals (not fn calls) so the probe slices promote to 'static.
macro_rules! item {
    ($path:expr, $label:expr) => {
        Probe {
            path: $path,
            label: $label,
            mode: Match::Item,
        }
    };
}

macro_rules! text {
    ($path:expr, $label:expr) => {
        Probe {
            path: $path,
            label: $label,
            mode: Match::Text,
        }
    };
}

#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Holds when any probe matches.
    AnyOf(&'static [Probe]),
    /// Holds when the field is missing or is not a list of labels.
    NotSequence(FieldPath),
}

impl Condition {
    pub fn holds(&self, record: &AssessmentRecord) -> bool {
        match self {
            Condition::AnyOf(probes) => probes.iter().any(|p| p.holds(record)),
            Condition::NotSequence(path) => !record.field(*path).is_sequence(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule<T: 'static> {
    pub when: Condition,
    pub then: T,
}

/// An ordered rule list plus the result used when nothing matches.
#[derive(Debug)]
pub struct Cascade<T: 'static> {
    pub name: &'static str,
    pub rules: &'static [Rule<T>],
    pub fallback: T,
}

impl<T: Copy> Cascade<T> {
    pub fn evaluate(&self, record: &AssessmentRecord) -> T {
        match self.rules.iter().position(|r| r.when.holds(record)) {
            Some(index) => {
                tracing::trace!(cascade = self.name, rule = index, "cascade matched");
                self.rules[index].then
            }
            None => {
                tracing::trace!(cascade = self.name, "cascade fell back");
                self.fallback
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tagline halves
// ────────────────────────────────────────────────────────────────────────────

/// Humor style. A missing or non-list `humor_type` lands on the fallback.
pub static STYLE: Cascade<&str> = Cascade {
    name: "style",
    rules: &[
        Rule {
            when: Condition::AnyOf(&[item!(HUMOR_TYPE, "Witty & clever wordplay")]),
            then: "Sharp wit",
        },
        Rule {
            when: Condition::AnyOf(&[item!(HUMOR_TYPE, "Playful teasing & banter")]),
            then: "Playful energy",
        },
        Rule {
            when: Condition::AnyOf(&[item!(HUMOR_TYPE, "Sarcasm & dry humor")]),
            then: "Dry humor",
        },
        Rule {
            when: Condition::AnyOf(&[item!(HUMOR_TYPE, "Wholesome & sweet")]),
            then: "Warm vibes",
        },
    ],
    fallback: "Authentic style",
};

pub static ENERGY: Cascade<&str> = Cascade {
    name: "energy",
    rules: &[
        Rule {
            when: Condition::AnyOf(&[
                text!(FLIRTATION_COMFORT, "Bold & direct"),
                text!(INITIATIVE_LEVEL, "Me - I go for it"),
            ]),
            then: "confident moves",
        },
        Rule {
            when: Condition::AnyOf(&[text!(FLIRTATION_COMFORT, "Playful & subtle")]),
            then: "smooth charm",
        },
        Rule {
            when: Condition::AnyOf(&[text!(CONVERSATION_PACE, "Quick")]),
            then: "high energy",
        },
    ],
    fallback: "natural flow",
};

// ────────────────────────────────────────────────────────────────────────────
// Traits
// ────────────────────────────────────────────────────────────────────────────

pub static COMMUNICATION: Cascade<TraitTemplate> = Cascade {
    name: "communication",
    rules: &[
        Rule {
            when: Condition::AnyOf(&[item!(CONVERSATION_DEPTH, "Playful banter & flirting")]),
            then: TraitTemplate::new(IconId::Comments, "Playful banter > small talk"),
        },
        Rule {
            when: Condition::AnyOf(&[item!(CONVERSATION_DEPTH, "Deep philosophical talks")]),
            then: TraitTemplate::new(IconId::Brain, "Deep convos over surface level"),
        },
    ],
    fallback: TraitTemplate::new(IconId::Comments, "Real talk preferred"),
};

/// `Balanced lifestyle` only applies when hobbies is a list (possibly empty);
/// anything else short-circuits on the first row.
pub static LIFESTYLE: Cascade<TraitTemplate> = Cascade {
    name: "lifestyle",
    rules: &[
        Rule {
            when: Condition::NotSequence(HOBBIES),
            then: TraitTemplate::new(IconId::Heart, "Living life fully"),
        },
        Rule {
            when: Condition::AnyOf(&[item!(HOBBIES, "Music / Concerts")]),
            then: TraitTemplate::new(IconId::Music, "Music lover at heart"),
        },
        Rule {
            when: Condition::AnyOf(&[
                item!(HOBBIES, "Nature / Hiking"),
                item!(HOBBIES, "Traveling / Exploring"),
            ]),
            then: TraitTemplate::new(IconId::Mountain, "Adventure seeker"),
        },
        Rule {
            when: Condition::AnyOf(&[item!(HOBBIES, "Working out / Sports")]),
            then: TraitTemplate::new(IconId::Dumbbell, "Active lifestyle"),
        },
        Rule {
            when: Condition::AnyOf(&[item!(HOBBIES, "Art / Creative projects")]),
            then: TraitTemplate::new(IconId::Palette, "Creative spirit"),
        },
    ],
    fallback: TraitTemplate::new(IconId::Heart, "Balanced lifestyle"),
};

pub static INTENT: Cascade<TraitTemplate> = Cascade {
    name: "intent",
    rules: &[
        Rule {
            when: Condition::AnyOf(&[text!(RELATIONSHIP_GOAL, "Serious relationship")]),
            then: TraitTemplate::new(IconId::HeartPulse, "Looking for something real"),
        },
        Rule {
            when: Condition::AnyOf(&[text!(DATE_STYLE, "Active & adventurous")]),
            then: TraitTemplate::new(IconId::Bolt, "Adventure > dinner dates"),
        },
        Rule {
            when: Condition::AnyOf(&[text!(FLIRTATION_COMFORT, "Bold & direct")]),
            then: TraitTemplate::new(IconId::Fire, "Direct with intentions"),
        },
    ],
    fallback: TraitTemplate::new(IconId::HeartPulse, "Authentic connections"),
};
