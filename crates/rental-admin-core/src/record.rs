//! Record Layer - Core Resource Trait
//!
//! Every admin screen is generic over a `Resource`: a record type with a
//! backend-assigned identifier, a column layout and a matching draft.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::draft::Draft;

/// Opaque backend-assigned record identifier (`_id` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How a column's cell is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// Cell text is an image URL
    Image,
}

/// One table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn text(label: &'static str) -> Self {
        Self { label, kind: ColumnKind::Text }
    }

    pub const fn image(label: &'static str) -> Self {
        Self { label, kind: ColumnKind::Image }
    }
}

/// Core trait for every record shown in the console
///
/// `cells()` must return exactly one entry per `columns()` entry.
pub trait Resource:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Editable form of this record
    type Draft: Draft;

    /// Collection path segment, e.g. `items`
    const COLLECTION: &'static str;
    /// Singular noun used in messages, e.g. `Item`
    const NOUN: &'static str;
    const LIST_TITLE: &'static str;
    const REPORT_TITLE: &'static str;
    const ADD_LABEL: &'static str;
    const LIST_ROUTE: &'static str;
    const ADD_ROUTE: &'static str;
    /// Prefix of the edit route; the identifier is appended
    const UPDATE_ROUTE: &'static str;

    fn id(&self) -> &RecordId;

    /// Name shown in confirmations
    fn display_name(&self) -> &str;

    fn columns() -> &'static [Column];

    fn cells(&self) -> Vec<String>;

    /// Seed a draft for editing this record
    fn to_draft(&self) -> Self::Draft;

    fn update_route(id: &RecordId) -> String {
        format!("{}/{}", Self::UPDATE_ROUTE, id)
    }

    fn noun_lower() -> String {
        Self::NOUN.to_lowercase()
    }

    /// Text searched by the list filter: every cell plus the identifier
    fn search_text(&self) -> Vec<String> {
        let mut text = self.cells();
        text.push(self.id().to_string());
        text
    }
}
