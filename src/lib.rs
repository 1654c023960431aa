//! Kinsfolk – turns the facts of a genealogical record into a batch of
//! statement-edit rows (the tab-separated QuickStatements format).
//!
//! A record is read through the [`input::FactSource`] trait: resolved
//! identifiers for people, places and names, raw texts for dates and ages, and
//! a few flags. From that the crate produces rows such as
//!
//! ```text
//! Q1	P569	+1900-05-17T00:00:00Z/11	S8091	"ark:/61903/1:1:ABCD-123"	S6333	en:"Texas Births"
//! ```
//!
//! ## Modules
//! * [`datatype`] – Quoted-string, date and age literals.
//! * [`construct`] – [`construct::Statement`] rows and the [`construct::Reference`] citation.
//! * [`encode`] – Relation rows with their inverse, and vital-event rows with qualifiers.
//! * [`aggregate`] – Names, family, vital dates and other personal facts of a subject.
//! * [`batch`] – Reference building and assembly of the final text.
//! * [`input`] – Typed keys, the [`input::FactSource`] trait and the JSON [`input::Form`].
//! * [`suggestion`] – The `name - description - id` strings of the autocomplete.
//! * [`config`] – Settings from `kinsfolk.toml` and the environment.
//! * [`server`] – An HTTP endpoint generating batches from posted forms.
//!
//! ## Rows
//! Every row has a subject, a property and a value, followed by qualifier pairs
//! and the four reference fields. Relations are written in both directions, so
//! a spouse `Q9` of `Q1` gives `Q1 P26 Q9` as well as `Q9 P26 Q1`. A vital
//! event without a date but with a qualifier (circa, age, latest date) is
//! written with the `somevalue` placeholder.
//!
//! ## Errors
//! A malformed date or age, a record URL that is not a FamilySearch one, or a
//! missing subject rejects the whole batch. Nothing is emitted for a record
//! that would otherwise lose a value silently.
//!
//! ## Quick Start
//! ```
//! use kinsfolk::batch::{generate, Options};
//! use kinsfolk::input::Form;
//! let form = Form::new()
//!     .with("record-subject", "Q1")
//!     .with("spouse", "Jane Doe - person - Q9")
//!     .with("familysearch-collection", "Texas Marriages")
//!     .with("familysearch-url", "https://www.familysearch.org/ark:/61903/1:1:XYZ");
//! let batch = generate(&form, &Options::default()).unwrap();
//! assert_eq!(batch.len(), 2);
//! ```

pub mod aggregate;
pub mod batch;
pub mod config;
pub mod construct;
pub mod datatype;
pub mod encode;
pub mod error;
pub mod input;
pub mod server;
pub mod suggestion;
pub mod vocabulary;

pub use error::{KinsfolkError, Result};
