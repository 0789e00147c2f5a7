//! Puzzle records as delivered by the puzzle service.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Puzzle kind. Decides which solver runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Math,
    Word,
    Logic,
    Trivia,
    /// Any category the engine has no solver for; the name is kept verbatim.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Math => "math",
            Category::Word => "word",
            Category::Logic => "logic",
            Category::Trivia => "trivia",
            Category::Other(name) => name,
        }
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    // Exact match only: the service sends lowercase names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "math" => Category::Math,
            "word" => Category::Word,
            "logic" => Category::Logic,
            "trivia" => Category::Trivia,
            other => Category::Other(other.to_string()),
        })
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(c) => c,
            Err(never) => match never {},
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other(String::new())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Category::from(name.as_str()))
    }
}

/// A multiple-choice option.
///
/// The service usually sends `{ "id": "B", "text": "Paris" }`, but plain values
/// (`"Paris"`, `3`) show up too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PuzzleOption {
    Choice {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<serde_json::Value>,
    },
    Bare(serde_json::Value),
}

impl PuzzleOption {
    pub fn choice(id: impl Into<String>, text: impl Into<String>) -> Self {
        PuzzleOption::Choice {
            id: Some(serde_json::Value::String(id.into())),
            text: Some(serde_json::Value::String(text.into())),
        }
    }

    /// The value a selection answer is built from: a choice's id, then its
    /// text; a bare value as-is. `None` when a choice carries neither.
    pub fn answer_value(&self) -> Option<String> {
        match self {
            PuzzleOption::Choice { id, text } => id.as_ref().or(text.as_ref()).map(value_to_string),
            PuzzleOption::Bare(value) => Some(value_to_string(value)),
        }
    }
}

/// Strings render without quotes; everything else uses its JSON form.
fn value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// An immutable puzzle handed to [`crate::solve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "game_type", alias = "category", default, deserialize_with = "null_as_default")]
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<PuzzleOption>,
}

/// The service sends `null` for absent fields as often as it omits them.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Puzzle {
    pub fn new(category: impl Into<Category>, question: impl Into<String>) -> Self {
        Puzzle { id: None, category: category.into(), question: question.into(), options: Vec::new() }
    }

    pub fn with_options(mut self, options: Vec<PuzzleOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
