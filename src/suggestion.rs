//! The display-string contract shared with the autocomplete collaborator.
//!
//! Candidates are shown as `"<name> - <description> - <identifier>"`; once the
//! user picks one, the identifier is read back from the end of the string.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::construct::Identifier;
use crate::error::Result;

pub const DISPLAY_SEPARATOR: &str = " - ";

lazy_static! {
    static ref BARE_IDENTIFIER: Regex = Regex::new(r"^[QPL][0-9]+$").unwrap();
}

/// One entry of a reconciliation suggest response.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: Identifier,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
impl Suggestion {
    pub fn display(&self) -> String {
        format_suggestion(&self.name, &self.description, &self.id)
    }
}

#[derive(Deserialize)]
struct SuggestResponse {
    result: Vec<Suggestion>,
}

pub fn format_suggestion(name: &str, description: &str, id: &str) -> String {
    [name, description, id].join(DISPLAY_SEPARATOR)
}

/// Turns a suggest response body (`{"result": [...]}`) into display strings.
pub fn display_list(json: &str) -> Result<Vec<String>> {
    let response: SuggestResponse = serde_json::from_str(json)?;
    Ok(response.result.iter().map(Suggestion::display).collect())
}

/// The identifier at the end of a chosen display string.
///
/// Names and descriptions may themselves contain the separator, so only the
/// last segment counts. A segment with inner whitespace or control characters
/// is not an identifier.
pub fn identifier_from_display(text: &str) -> Option<Identifier> {
    if !text.contains(DISPLAY_SEPARATOR) {
        return None;
    }
    text.rsplit(DISPLAY_SEPARATOR)
        .next()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .filter(|id| !id.chars().any(|c| c.is_whitespace() || c.is_control()))
        .map(String::from)
}

/// Reads an identifier from either a display string or a bare `Q123`-style value.
pub fn read_identifier(text: &str) -> Option<Identifier> {
    let text = text.trim();
    if BARE_IDENTIFIER.is_match(text) {
        return Some(text.to_string());
    }
    identifier_from_display(text)
}
