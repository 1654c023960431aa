//! Assembles a full batch: every aggregated row followed by the shared reference.

use std::fmt;

use serde::Deserialize;
use tracing::{info, warn};

use crate::aggregate;
use crate::construct::{Reference, Statement, FIELD_SEPARATOR, ROW_SEPARATOR};
use crate::encode::PlaceRowLayout;
use crate::error::{KinsfolkError, Result};
use crate::input::{FactSource, Slot, TextField};
use crate::vocabulary::ARK_MARKER;

/// Output settings for a generation run.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Options {
    #[serde(default)]
    pub place_row_layout: PlaceRowLayout,
    /// Language tag of the collection name.
    #[serde(default = "default_language")]
    pub language: String,
}
impl Default for Options {
    fn default() -> Self {
        Self { place_row_layout: PlaceRowLayout::default(), language: default_language() }
    }
}
fn default_language() -> String {
    "en".to_string()
}

/// Builds the citation from the collection name and the record URL.
///
/// The ARK is whatever follows the first `familysearch.org/` in the URL; a URL
/// without it, or with nothing after it, is rejected rather than cited with an
/// empty ARK. Tabs and line breaks would split the row, so they are rejected too.
pub fn build_reference(collection: &str, url: &str, language: &str) -> Result<Reference> {
    let ark = match url.split_once(ARK_MARKER) {
        Some((_, ark)) if !ark.trim().is_empty() => ark,
        _ => return Err(KinsfolkError::MalformedReferenceUrl { value: url.to_string() }),
    };
    for value in [collection, ark] {
        if value.contains(['\t', '\r', '\n']) {
            return Err(KinsfolkError::MalformedReferenceText { value: value.to_string() });
        }
    }
    Ok(Reference::new(ark, collection, language))
}

/// The statements of one record, all citing the same reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    statements: Vec<Statement>,
    reference: Reference,
}

impl Batch {
    pub fn new(statements: Vec<Statement>, reference: Reference) -> Self {
        Self { statements, reference }
    }
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
    pub fn reference(&self) -> &Reference {
        &self.reference
    }
    pub fn len(&self) -> usize {
        self.statements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
    /// Each statement serialized with the reference appended.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let reference = self.reference.to_string();
        self.statements
            .iter()
            .map(move |statement| [statement.to_string(), reference.clone()].join(FIELD_SEPARATOR))
    }
}
impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lines().collect::<Vec<_>>().join(ROW_SEPARATOR))
    }
}

/// Runs all aggregators for the record in `source`.
///
/// Any malformed value aborts the whole batch, so a returned batch never
/// silently misses a row that was filled in.
pub fn generate(source: &dyn FactSource, options: &Options) -> Result<Batch> {
    let outcome = assemble(source, options);
    match &outcome {
        Ok(batch) => info!(rows = batch.len(), "batch generated"),
        Err(e) => warn!(error = %e, "batch rejected"),
    }
    outcome
}

fn assemble(source: &dyn FactSource, options: &Options) -> Result<Batch> {
    let subject = source.identifier(Slot::Subject).ok_or(KinsfolkError::MissingSubject)?;
    let reference = build_reference(
        &source.text(TextField::Collection),
        &source.text(TextField::SourceUrl),
        &options.language,
    )?;
    let mut statements = aggregate::names(source, &subject);
    statements.extend(aggregate::family(source, &subject));
    statements.extend(aggregate::vital_dates(source, &subject, options.place_row_layout)?);
    statements.extend(aggregate::other_personal(source, &subject));
    Ok(Batch::new(statements, reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ark_is_everything_after_the_marker() {
        let reference = build_reference(
            "Texas Births",
            "https://www.familysearch.org/ark:/61903/1:1:ABCD-123",
            "en",
        )
        .unwrap();
        assert_eq!(reference.ark(), "ark:/61903/1:1:ABCD-123");
        assert_eq!(reference.collection(), "Texas Births");
    }

    #[test]
    fn only_first_marker_splits() {
        let reference = build_reference("c", "familysearch.org/a/familysearch.org/b", "en").unwrap();
        assert_eq!(reference.ark(), "a/familysearch.org/b");
    }

    #[test]
    fn url_without_marker_is_rejected() {
        match build_reference("c", "https://example.org/ark:/1", "en") {
            Err(KinsfolkError::MalformedReferenceUrl { value }) => assert_eq!(value, "https://example.org/ark:/1"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn marker_without_ark_is_rejected() {
        for url in ["https://www.familysearch.org/", "https://www.familysearch.org/  "] {
            assert!(matches!(
                build_reference("c", url, "en"),
                Err(KinsfolkError::MalformedReferenceUrl { .. })
            ));
        }
    }

    #[test]
    fn breaks_in_reference_text_are_rejected() {
        assert!(matches!(
            build_reference("Texas\tBirths", "familysearch.org/x", "en"),
            Err(KinsfolkError::MalformedReferenceText { .. })
        ));
        assert!(matches!(
            build_reference("c", "familysearch.org/ark:/1\r\n2", "en"),
            Err(KinsfolkError::MalformedReferenceText { .. })
        ));
    }

    #[test]
    fn collection_quotes_are_escaped() {
        let reference = build_reference("The \"Old\" Parish", "familysearch.org/x", "de").unwrap();
        assert_eq!(reference.fields()[3], "de:\"The \\\"Old\\\" Parish\"");
    }

    #[test]
    fn empty_batch_renders_empty() {
        let batch = Batch::new(Vec::new(), Reference::new("a", "b", "en"));
        assert!(batch.is_empty());
        assert_eq!(batch.to_string(), "");
    }
}
