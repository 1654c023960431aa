//! Encoders turning one relation or one vital event into statement rows.

use serde::Deserialize;

use crate::construct::Statement;
use crate::datatype::{format_age, format_date};
use crate::error::Result;
use crate::input::{FactSource, FlagField, Slot, TextField, VitalEvent};
use crate::vocabulary::{AGE_AT_EVENT, CIRCA, LATEST_DATE, SOURCING_CIRCUMSTANCES, UNKNOWN_VALUE};

/// Field order of the row stating where an event took place.
///
/// `Legacy` is what the entry form has always produced: the place in the
/// property column and the property code in the value column. `Canonical`
/// writes `subject, property, place` like every other row. The two give
/// different output, so switching is a visible behavior change.
#[derive(Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlaceRowLayout {
    #[default]
    Legacy,
    Canonical,
}

/// Emits `subject -forward-> object` and `object -inverse-> subject`, or
/// nothing when the slot holds no identifier.
pub fn encode_relation(
    source: &dyn FactSource,
    subject: &str,
    slot: Slot,
    forward: &str,
    inverse: &str,
) -> Vec<Statement> {
    match source.identifier(slot) {
        None => Vec::new(),
        Some(object) => vec![
            Statement::new(subject, forward, object.as_str()),
            Statement::new(object, inverse, subject),
        ],
    }
}

/// Emits the date row and the place row of one vital event.
///
/// Without a date the value becomes the unknown-value sentinel. That row is
/// kept as long as it carries a qualifier; a bare sentinel row is dropped.
pub fn encode_event(
    source: &dyn FactSource,
    subject: &str,
    event: VitalEvent,
    date_property: &str,
    place_property: Option<&str>,
    layout: PlaceRowLayout,
) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();

    let date = source.text(TextField::Date(event));
    let value = if date.is_empty() { UNKNOWN_VALUE.to_string() } else { format_date(&date)? };
    let mut date_row = Statement::new(subject, date_property, value);
    if source.flag(FlagField::Circa(event)) {
        date_row = date_row.with_qualifier(SOURCING_CIRCUMSTANCES, CIRCA);
    }
    let age = source.text(TextField::Age(event));
    if !age.is_empty() {
        date_row = date_row.with_qualifier(AGE_AT_EVENT, format_age(&age)?);
    }
    let latest = source.text(TextField::LatestDate(event));
    if !latest.is_empty() {
        date_row = date_row.with_qualifier(LATEST_DATE, format_date(&latest)?);
    }
    if !(date_row.qualifiers().is_empty() && date_row.value() == UNKNOWN_VALUE) {
        statements.push(date_row);
    }

    if let (Some(place), Some(place_property)) = (source.identifier(Slot::Place(event)), place_property) {
        statements.push(match layout {
            PlaceRowLayout::Legacy => Statement::new(subject, place, place_property),
            PlaceRowLayout::Canonical => Statement::new(subject, place_property, place),
        });
    }
    Ok(statements)
}
