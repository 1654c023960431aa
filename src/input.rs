//! Typed access to the facts entered for one record.
//!
//! The transformation never looks at a form directly. It asks a [`FactSource`]
//! for resolved identifiers, texts and flags by typed key; [`Form`] is the
//! provider used by the binary and the HTTP surface.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::construct::Identifier;
use crate::error::Result;
use crate::suggestion::read_identifier;

pub const GIVEN_NAME_SLOTS: u8 = 4;
pub const CHILD_SLOTS: u8 = 6;

// ------------- Keys -------------
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum VitalEvent {
    Birth,
    Baptism,
    Death,
    Burial,
}
impl VitalEvent {
    pub const ALL: [VitalEvent; 4] = [VitalEvent::Birth, VitalEvent::Baptism, VitalEvent::Death, VitalEvent::Burial];

    pub fn key(&self) -> &'static str {
        match self {
            VitalEvent::Birth => "birth",
            VitalEvent::Baptism => "baptism",
            VitalEvent::Death => "death",
            VitalEvent::Burial => "burial",
        }
    }
}

/// Inputs that resolve to an identifier.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Slot {
    Subject,
    /// 1-based, up to [`GIVEN_NAME_SLOTS`].
    GivenName(u8),
    FamilyName,
    Mother,
    Father,
    /// 1-based, up to [`CHILD_SLOTS`].
    Child(u8),
    Spouse,
    Residence,
    Occupation,
    Place(VitalEvent),
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum TextField {
    Date(VitalEvent),
    Age(VitalEvent),
    LatestDate(VitalEvent),
    Gender,
    Collection,
    SourceUrl,
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum FlagField {
    Circa(VitalEvent),
}

// field names as the entry form spells them
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Subject => write!(f, "record-subject"),
            Slot::GivenName(n) => write!(f, "given-name{}", n),
            Slot::FamilyName => write!(f, "family-name"),
            Slot::Mother => write!(f, "mother"),
            Slot::Father => write!(f, "father"),
            Slot::Child(n) => write!(f, "child{}", n),
            Slot::Spouse => write!(f, "spouse"),
            Slot::Residence => write!(f, "residence"),
            Slot::Occupation => write!(f, "occupation"),
            Slot::Place(e) => write!(f, "place-of-{}", e.key()),
        }
    }
}
impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TextField::Date(e) => write!(f, "date-of-{}", e.key()),
            TextField::Age(e) => write!(f, "age-at-{}", e.key()),
            TextField::LatestDate(e) => write!(f, "latest-date-{}", e.key()),
            TextField::Gender => write!(f, "sexgender"),
            TextField::Collection => write!(f, "familysearch-collection"),
            TextField::SourceUrl => write!(f, "familysearch-url"),
        }
    }
}
impl fmt::Display for FlagField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlagField::Circa(e) => write!(f, "date-of-{}-circa", e.key()),
        }
    }
}

// ------------- FactSource -------------
/// Read-only view of the facts for one generation run.
///
/// Texts are empty when nothing was entered, identifiers are `None` when the
/// slot is unfilled or could not be resolved.
pub trait FactSource {
    fn identifier(&self, slot: Slot) -> Option<Identifier>;
    fn text(&self, field: TextField) -> String;
    fn flag(&self, field: FlagField) -> bool;
}

// ------------- Form -------------
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum FormValue {
    Flag(bool),
    Text(String),
    /// Read as its decimal text, so `"age-at-birth": 42` works like `"42"`.
    Number(serde_json::Number),
    Empty,
}

/// The entry form as a flat map from field name to value.
///
/// Identifier slots may hold either an autocomplete display string
/// (`"Mary - female given name - Q4128"`) or a bare identifier. Checkboxes may
/// be booleans or the `"on"` an HTML form submits. `null` counts as not filled.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Form {
    fields: HashMap<String, FormValue>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn with(mut self, name: impl fmt::Display, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_string(), FormValue::Text(value.into()));
        self
    }
    pub fn with_flag(mut self, name: impl fmt::Display, checked: bool) -> Self {
        self.fields.insert(name.to_string(), FormValue::Flag(checked));
        self
    }
    fn raw(&self, name: &str) -> Cow<'_, str> {
        match self.fields.get(name) {
            Some(FormValue::Text(s)) => Cow::Borrowed(s.trim()),
            Some(FormValue::Number(n)) => Cow::Owned(n.to_string()),
            _ => Cow::Borrowed(""),
        }
    }
}

impl FactSource for Form {
    fn identifier(&self, slot: Slot) -> Option<Identifier> {
        let name = slot.to_string();
        let raw = self.raw(&name);
        if raw.is_empty() {
            return None;
        }
        let resolved = read_identifier(&raw);
        if resolved.is_none() {
            debug!(field = %name, value = %raw, "unresolved identifier ignored");
        }
        resolved
    }
    fn text(&self, field: TextField) -> String {
        self.raw(&field.to_string()).to_string()
    }
    fn flag(&self, field: FlagField) -> bool {
        match self.fields.get(&field.to_string()) {
            Some(FormValue::Flag(checked)) => *checked,
            Some(FormValue::Text(s)) => matches!(s.trim(), "on" | "true"),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_follow_the_form() {
        assert_eq!(Slot::GivenName(3).to_string(), "given-name3");
        assert_eq!(Slot::Place(VitalEvent::Burial).to_string(), "place-of-burial");
        assert_eq!(TextField::LatestDate(VitalEvent::Death).to_string(), "latest-date-death");
        assert_eq!(FlagField::Circa(VitalEvent::Baptism).to_string(), "date-of-baptism-circa");
    }

    #[test]
    fn form_reads_json() {
        let form = Form::from_json(
            r#"{
                "record-subject": "Q1",
                "mother": "Jane Doe - person - Q77",
                "date-of-birth": " 1900-05-17 ",
                "date-of-birth-circa": "on",
                "date-of-death-circa": false
            }"#,
        )
        .unwrap();
        assert_eq!(form.identifier(Slot::Subject).as_deref(), Some("Q1"));
        assert_eq!(form.identifier(Slot::Mother).as_deref(), Some("Q77"));
        assert_eq!(form.identifier(Slot::Father), None);
        assert_eq!(form.text(TextField::Date(VitalEvent::Birth)), "1900-05-17");
        assert_eq!(form.text(TextField::Age(VitalEvent::Birth)), "");
        assert!(form.flag(FlagField::Circa(VitalEvent::Birth)));
        assert!(!form.flag(FlagField::Circa(VitalEvent::Death)));
        assert!(!form.flag(FlagField::Circa(VitalEvent::Burial)));
    }

    #[test]
    fn free_text_in_an_identifier_slot_is_unresolved() {
        let form = Form::new().with(Slot::Spouse, "somebody");
        assert_eq!(form.identifier(Slot::Spouse), None);
    }

    #[test]
    fn numbers_read_as_text_and_null_as_empty() {
        let form = Form::from_json(
            r#"{"age-at-birth": 42, "age-at-death": 0.5, "date-of-burial": null, "date-of-burial-circa": null}"#,
        )
        .unwrap();
        assert_eq!(form.text(TextField::Age(VitalEvent::Birth)), "42");
        assert_eq!(form.text(TextField::Age(VitalEvent::Death)), "0.5");
        assert_eq!(form.text(TextField::Date(VitalEvent::Burial)), "");
        assert!(!form.flag(FlagField::Circa(VitalEvent::Burial)));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(Form::from_json("[1, 2]").is_err());
    }
}
