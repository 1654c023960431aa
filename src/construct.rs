// used to print out the serialized form of a construct
use std::fmt;

use crate::datatype::format_quoted_string;
use crate::vocabulary::{COLLECTION, FAMILYSEARCH_ARK};

// ------------- Identifier -------------
/// An opaque name of an entity in the target knowledge base, such as `Q42`.
pub type Identifier = String;

pub const FIELD_SEPARATOR: &str = "\t";
pub const ROW_SEPARATOR: &str = "\n";

// ------------- Statement -------------
/// One row of the statement-edit format: subject, property, value and qualifier pairs.
///
/// Qualifiers are added while the statement is built. Once handed over to a
/// batch it is only read.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct Statement {
    subject: String,
    property: String,
    value: String,
    qualifiers: Vec<(String, String)>,
}

impl Statement {
    pub fn new(subject: impl Into<String>, property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            property: property.into(),
            value: value.into(),
            qualifiers: Vec::new(),
        }
    }
    pub fn with_qualifier(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.qualifiers.push((property.into(), value.into()));
        self
    }
    pub fn subject(&self) -> &str {
        &self.subject
    }
    pub fn property(&self) -> &str {
        &self.property
    }
    pub fn value(&self) -> &str {
        &self.value
    }
    pub fn qualifiers(&self) -> &[(String, String)] {
        &self.qualifiers
    }
    /// All fields in output order, qualifiers flattened into property/value pairs.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![self.subject.as_str(), self.property.as_str(), self.value.as_str()];
        for (property, value) in &self.qualifiers {
            fields.push(property);
            fields.push(value);
        }
        fields
    }
}
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fields().join(FIELD_SEPARATOR))
    }
}

// ------------- Reference -------------
/// The citation appended to every statement of a batch: the record's ARK and
/// the name of the collection it belongs to.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct Reference {
    ark: String,
    collection: String,
    language: String,
}

impl Reference {
    pub fn new(ark: impl Into<String>, collection: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            ark: ark.into(),
            collection: collection.into(),
            language: language.into(),
        }
    }
    pub fn ark(&self) -> &str {
        &self.ark
    }
    pub fn collection(&self) -> &str {
        &self.collection
    }
    pub fn fields(&self) -> [String; 4] {
        [
            FAMILYSEARCH_ARK.to_string(),
            format_quoted_string(&self.ark),
            COLLECTION.to_string(),
            format!("{}:{}", self.language, format_quoted_string(&self.collection)),
        ]
    }
}
impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fields().join(FIELD_SEPARATOR))
    }
}
