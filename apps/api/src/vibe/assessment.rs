//! Assessment record model: explicit field shapes over a loosely-typed JSON record.
//!
//! The questionnaire is captured elsewhere, so nothing here trusts the shape of
//! the record. Every lookup resolves to a [`Field`] variant instead of failing.

use serde_json::{Map, Value};

/// Address of a single answer inside the record: `section.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    pub section: &'static str,
    pub key: &'static str,
}

impl FieldPath {
    pub const fn new(section: &'static str, key: &'static str) -> Self {
        Self { section, key }
    }
}

pub const HOBBIES: FieldPath = FieldPath::new("interests", "hobbies");
pub const HUMOR_TYPE: FieldPath = FieldPath::new("communication_style", "humor_type");
pub const CONVERSATION_DEPTH: FieldPath =
    FieldPath::new("communication_style", "conversation_depth");
pub const CONVERSATION_PACE: FieldPath =
    FieldPath::new("communication_style", "conversation_pace");
pub const FLIRTATION_COMFORT: FieldPath =
    FieldPath::new("dating_approach", "flirtation_comfort");
pub const INITIATIVE_LEVEL: FieldPath = FieldPath::new("dating_approach", "initiative_level");
pub const DATE_STYLE: FieldPath = FieldPath::new("dating_approach", "date_style");
pub const RELATIONSHIP_GOAL: FieldPath = FieldPath::new("values", "relationship_goal");

/// Shape of one answer as found in the record.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<'a> {
    /// Section or key missing, or an explicit null.
    Absent,
    Scalar(&'a str),
    /// Ordered labels. Non-string elements are skipped.
    Sequence(Vec<&'a str>),
    /// Present but neither text nor a list (number, bool, object), or the
    /// enclosing section is not an object.
    Malformed,
}

impl<'a> Field<'a> {
    /// True when the field is a list holding exactly `label`.
    pub fn has_item(&self, label: &str) -> bool {
        match self {
            Field::Sequence(items) => items.iter().any(|item| *item == label),
            _ => false,
        }
    }

    /// True when the field is text containing `label`, so answers may carry
    /// extra qualifiers.
    pub fn mentions(&self, label: &str) -> bool {
        match self {
            Field::Scalar(text) => text.contains(label),
            _ => false,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Field::Sequence(_))
    }
}

/// A personality assessment as stored by the capture flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentRecord {
    sections: Map<String, Value>,
}

impl AssessmentRecord {
    pub fn new(sections: Map<String, Value>) -> Self {
        Self { sections }
    }

    /// Anything other than a JSON object becomes an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(sections) => Self { sections },
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn field(&self, path: FieldPath) -> Field<'_> {
        let section = match self.sections.get(path.section) {
            None | Some(Value::Null) => return Field::Absent,
            Some(Value::Object(section)) => section,
            Some(_) => return Field::Malformed,
        };

        match section.get(path.key) {
            None | Some(Value::Null) => Field::Absent,
            Some(Value::String(text)) => Field::Scalar(text),
            Some(Value::Array(items)) => {
                Field::Sequence(items.iter().filter_map(Value::as_str).collect())
            }
            Some(_) => Field::Malformed,
        }
    }
}
