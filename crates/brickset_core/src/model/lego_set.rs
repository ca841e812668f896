//! LEGO set record.
//!
//! # Responsibility
//! - Mirror one entry of the Brickset JSON dataset.
//! - Provide null-safe accessors used by query aggregations.
//!
//! # Invariants
//! - `pieces` is non-negative; a missing or `null` value loads as `0`.
//! - `tags == None` means "no tag collection" and is skipped by tag queries.
//! - `theme == None` means "no theme" and is skipped by theme grouping.
//! - Descriptive attributes (`number`, `name`, `year`, `subtheme`,
//!   `minifigs`) never fail a load: a value of an unexpected type loads as
//!   `None`, except numeric catalogue numbers, which load as text.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One LEGO set entry from the Brickset catalogue.
///
/// Attributes not listed here are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoSet {
    /// Catalogue number, e.g. `75192`.
    #[serde(default, deserialize_with = "text_or_number")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i32>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub subtheme: Option<String>,
    /// Ordered so repeated tags on one set are kept as separate occurrences.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub pieces: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub minifigs: Option<u32>,
}

impl LegoSet {
    /// Creates a bare record with only a piece count.
    pub fn new(pieces: u32) -> Self {
        Self {
            pieces,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Replaces the tag collection with `tags` (present, possibly empty).
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns whether this set carries exactly `tag` (case-sensitive).
    ///
    /// Always `false` when the tag collection is absent.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|candidate| candidate == tag))
    }

    /// Iterates tag occurrences; yields nothing when tags are absent.
    pub fn tags_iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().flatten().map(String::as_str)
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}
