//! The four groups of facts on the entry form, each turned into rows for one subject.

use tracing::debug;

use crate::construct::Statement;
use crate::datatype::format_quoted_string;
use crate::encode::{encode_event, encode_relation, PlaceRowLayout};
use crate::error::Result;
use crate::input::{FactSource, Slot, TextField, VitalEvent, CHILD_SLOTS, GIVEN_NAME_SLOTS};
use crate::vocabulary::*;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Gender {
    Male,
    Other,
}
impl Gender {
    pub fn from_selection(selection: &str) -> Self {
        if selection == "male" { Gender::Male } else { Gender::Other }
    }
    /// How a child of the subject points back at the subject.
    pub fn parent_property(&self) -> &'static str {
        match self {
            Gender::Male => FATHER,
            Gender::Other => MOTHER,
        }
    }
}

/// Given names carry their position among the filled slots as series ordinal;
/// empty slots do not use up an ordinal.
pub fn names(source: &dyn FactSource, subject: &str) -> Vec<Statement> {
    let mut statements: Vec<Statement> = (1..=GIVEN_NAME_SLOTS)
        .filter_map(|n| source.identifier(Slot::GivenName(n)))
        .enumerate()
        .map(|(index, name)| {
            Statement::new(subject, GIVEN_NAME, name)
                .with_qualifier(SERIES_ORDINAL, format_quoted_string(&(index + 1).to_string()))
        })
        .collect();
    if let Some(family_name) = source.identifier(Slot::FamilyName) {
        statements.push(Statement::new(subject, FAMILY_NAME, family_name));
    }
    debug!(rows = statements.len(), "names");
    statements
}

pub fn family(source: &dyn FactSource, subject: &str) -> Vec<Statement> {
    let parent_property = Gender::from_selection(&source.text(TextField::Gender)).parent_property();
    let mut statements = Vec::new();
    statements.extend(encode_relation(source, subject, Slot::Mother, MOTHER, CHILD));
    statements.extend(encode_relation(source, subject, Slot::Father, FATHER, CHILD));
    for n in 1..=CHILD_SLOTS {
        statements.extend(encode_relation(source, subject, Slot::Child(n), CHILD, parent_property));
    }
    statements.extend(encode_relation(source, subject, Slot::Spouse, SPOUSE, SPOUSE));
    debug!(rows = statements.len(), "family");
    statements
}

pub fn vital_dates(source: &dyn FactSource, subject: &str, layout: PlaceRowLayout) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();
    for event in VitalEvent::ALL {
        let (date_property, place_property) = match event {
            VitalEvent::Birth => (DATE_OF_BIRTH, Some(PLACE_OF_BIRTH)),
            VitalEvent::Baptism => (DATE_OF_BAPTISM, None),
            VitalEvent::Death => (DATE_OF_DEATH, Some(PLACE_OF_DEATH)),
            VitalEvent::Burial => (DATE_OF_BURIAL, Some(PLACE_OF_BURIAL)),
        };
        statements.extend(encode_event(source, subject, event, date_property, place_property, layout)?);
    }
    debug!(rows = statements.len(), "vital dates");
    Ok(statements)
}

pub fn other_personal(source: &dyn FactSource, subject: &str) -> Vec<Statement> {
    let mut statements = Vec::new();
    if let Some(residence) = source.identifier(Slot::Residence) {
        statements.push(Statement::new(subject, RESIDENCE, residence));
    }
    if let Some(occupation) = source.identifier(Slot::Occupation) {
        statements.push(Statement::new(subject, OCCUPATION, occupation));
    }
    debug!(rows = statements.len(), "other personal");
    statements
}
