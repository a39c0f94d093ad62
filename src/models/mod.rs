use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Multi-valued metadata field that category queries can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryField {
    Cast,
    Crew,
    Genres,
}

impl Display for CategoryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CategoryField::Cast => "cast",
            CategoryField::Crew => "crew",
            CategoryField::Genres => "genres",
        };
        write!(f, "{}", name)
    }
}

/// A single movie in the catalog
///
/// The `id` equals the record's position in the catalog and the row/column
/// index in the similarity matrix; the two index spaces must stay aligned.
/// Multi-valued fields are parsed once at load time and never re-parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub id: usize,
    pub title: String,
    pub cast: Vec<String>,
    pub crew: Vec<String>,
    pub genres: Vec<String>,
    pub keywords: Vec<String>,
}

impl MovieRecord {
    /// Returns the values of the given multi-valued field
    pub fn field_values(&self, field: CategoryField) -> &[String] {
        match field {
            CategoryField::Cast => &self.cast,
            CategoryField::Crew => &self.crew,
            CategoryField::Genres => &self.genres,
        }
    }

    /// Membership test against one multi-valued field (exact match)
    pub fn contains(&self, field: CategoryField, value: &str) -> bool {
        self.field_values(field).iter().any(|v| v == value)
    }
}

/// Parses a raw encoded-list field into its tokens
///
/// Strips one leading and one trailing bracket if present, removes all quote
/// characters and whitespace, then splits on commas. A missing raw value
/// yields an empty set. Empty bracket content yields a single empty-string
/// token, matching the legacy artifact semantics.
pub fn parse_list_field(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let inner = raw.strip_prefix('[').unwrap_or(raw);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    let cleaned: String = inner
        .chars()
        .filter(|c| *c != '\'' && *c != '"' && !c.is_whitespace())
        .collect();

    cleaned.split(',').map(str::to_owned).collect()
}
