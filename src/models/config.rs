use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

static COLUMN_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{1,3}$").expect("column letter pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Value written as `@context` at the top of every block
    pub context: String,

    pub layout: ColumnLayout,

    pub references: ReferenceConfig,

    /// Properties whose comma-separated value is emitted as a JSON array
    pub array_properties: Vec<String>,

    pub catalog: CatalogLayout,

    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        crate::defaults::DEFAULT_CONFIG.clone()
    }
}

impl Config {
    /// Load config from YAML content without merging defaults
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn is_array_property(&self, property: &str) -> bool {
        self.array_properties.iter().any(|p| p == property)
    }
}

/// Positions of the four meaningful cells in a table record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub id: Column,
    #[serde(rename = "type")]
    pub type_name: Column,
    pub property: Column,
    pub value: Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Pull `@type` for a `#`-reference from the row that follows it
    pub include_type: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogLayout {
    pub type_column: Column,
    pub properties_column: Column,
    pub header_rows: usize,

    /// Stripped from every property token before it is offered as a choice
    pub prefix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Escaped script markers inside a <code> element, for display
    Html,
    /// Literal <script> elements, for embedding in a page
    Script,
    /// Bare JSON-LD blocks separated by blank lines
    Json,
}

/// A zero-based column index.
///
/// Deserializes from either an index (`2`) or a spreadsheet letter (`"C"`),
/// and serializes back to the letter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColumnRef", into = "ColumnRef")]
pub struct Column(usize);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Index(usize),
    Letter(String),
}

impl Column {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    /// Parse a spreadsheet column letter: `A` is 0, `Z` is 25, `AA` is 26
    pub fn from_letter(letter: &str) -> Result<Self, ConfigError> {
        let letter = letter.trim();
        if !COLUMN_LETTERS.is_match(letter) {
            return Err(ConfigError::InvalidColumn(letter.to_string()));
        }

        let number = letter
            .bytes()
            .map(|b| usize::from(b.to_ascii_uppercase() - b'A') + 1)
            .fold(0, |acc, digit| acc * 26 + digit);

        Ok(Self(number - 1))
    }

    pub fn letter(self) -> String {
        let mut remaining = self.0 + 1;
        let mut letters = Vec::new();
        while remaining > 0 {
            let digit = (remaining - 1) % 26;
            letters.push(char::from(b'A' + digit as u8));
            remaining = (remaining - 1) / 26;
        }
        letters.iter().rev().collect()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<ColumnRef> for Column {
    type Error = ConfigError;

    fn try_from(value: ColumnRef) -> Result<Self, Self::Error> {
        match value {
            ColumnRef::Index(index) => Ok(Self(index)),
            ColumnRef::Letter(letter) => match letter.trim().parse::<usize>() {
                Ok(index) => Ok(Self(index)),
                Err(_) => Self::from_letter(&letter),
            },
        }
    }
}

impl From<Column> for ColumnRef {
    fn from(column: Column) -> Self {
        ColumnRef::Letter(column.letter())
    }
}
