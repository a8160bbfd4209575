use serde::{Deserialize, Serialize};

/// Joins the style and energy halves of a tagline.
pub const TAGLINE_SEPARATOR: &str = " + ";

/// Body text shown under a populated tagline.
pub const POPULATED_BODY: &str = "Your personality profile helps AI mirror your authentic voice.";

/// Icon vocabulary understood by the presentation layer (icon-font names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Comments,
    Brain,
    Heart,
    Music,
    Mountain,
    Dumbbell,
    Palette,
    HeartPulse,
    Bolt,
    Fire,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::Comments => "comments",
            IconId::Brain => "brain",
            IconId::Heart => "heart",
            IconId::Music => "music",
            IconId::Mountain => "mountain",
            IconId::Dumbbell => "dumbbell",
            IconId::Palette => "palette",
            IconId::HeartPulse => "heart-pulse",
            IconId::Bolt => "bolt",
            IconId::Fire => "fire",
        }
    }
}

/// Static trait entry as it appears in the rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitTemplate {
    pub icon: IconId,
    pub text: &'static str,
}

impl TraitTemplate {
    pub const fn new(icon: IconId, text: &'static str) -> Self {
        Self { icon, text }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeTrait {
    pub icon: IconId,
    pub text: String,
}

impl From<TraitTemplate> for VibeTrait {
    fn from(t: TraitTemplate) -> Self {
        Self {
            icon: t.icon,
            text: t.text.to_string(),
        }
    }
}

/// Derived summary: tagline plus communication, lifestyle and intent traits,
/// in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeDescriptor {
    pub tagline: String,
    pub traits: [VibeTrait; 3],
}

/// Shown instead of a descriptor until an assessment exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub tagline: String,
    pub body: String,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            tagline: "Complete your assessment".to_string(),
            body: "Take the 5-step personality assessment to unlock your unique signature vibe."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_serializes_kebab_case() {
        let json = serde_json::to_string(&IconId::HeartPulse).unwrap();
        assert_eq!(json, "\"heart-pulse\"");
        assert_eq!(IconId::HeartPulse.as_str(), "heart-pulse");
    }

    #[test]
    fn test_icon_as_str_matches_serde_name() {
        for icon in [
            IconId::Comments,
            IconId::Brain,
            IconId::Heart,
            IconId::Music,
            IconId::Mountain,
            IconId::Dumbbell,
            IconId::Palette,
            IconId::HeartPulse,
            IconId::Bolt,
            IconId::Fire,
        ] {
            let json = serde_json::to_value(icon).unwrap();
            assert_eq!(json.as_str(), Some(icon.as_str()));
        }
    }

    #[test]
    fn test_descriptor_traits_serialize_as_list() {
        let d = VibeDescriptor {
            tagline: "Sharp wit + natural flow".to_string(),
            traits: [
                TraitTemplate::new(IconId::Comments, "a").into(),
                TraitTemplate::new(IconId::Heart, "b").into(),
                TraitTemplate::new(IconId::Fire, "c").into(),
            ],
        };
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["traits"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["traits"][2]["icon"], "fire");
    }

    #[test]
    fn test_placeholder_text() {
        let p = Placeholder::default();
        assert_eq!(p.tagline, "Complete your assessment");
        assert!(p.body.contains("5-step personality assessment"));
    }
}
