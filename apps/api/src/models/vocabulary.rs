//! Content vocabulary — the closed tags every content block is described with.
//!
//! # Wire representation
//! - `Layout`: MAIN = 0, BODY = 1, COLUMNS = 2
//! - `ContentType`: TEXT = 0, CODE = 1, IMAGE = 2
//! - `Language`: "python", "java", "javascript", "typescript", "sql" (case-sensitive)
//!
//! Codes and spellings are stable; external serialization depends on them.
//! Every conversion from untrusted input goes through `TryFrom`/`FromStr` and
//! fails with a `VocabularyError` instead of coercing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("invalid layout code {0}: expected 0 (MAIN), 1 (BODY) or 2 (COLUMNS)")]
    InvalidLayout(i64),

    #[error("invalid content type code {0}: expected 0 (TEXT), 1 (CODE) or 2 (IMAGE)")]
    InvalidContentType(i64),

    #[error("invalid language tag '{0}': expected one of python, java, javascript, typescript, sql")]
    InvalidLanguageTag(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Structural arrangement of a content unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
#[repr(u8)]
pub enum Layout {
    Main = 0,
    Body = 1,
    Columns = 2,
}

impl Layout {
    /// All members in code order.
    pub const ALL: [Layout; 3] = [Layout::Main, Layout::Body, Layout::Columns];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Declared member name, e.g. `"MAIN"`.
    pub fn name(self) -> &'static str {
        match self {
            Layout::Main => "MAIN",
            Layout::Body => "BODY",
            Layout::Columns => "COLUMNS",
        }
    }
}

impl TryFrom<i64> for Layout {
    type Error = VocabularyError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Layout::Main),
            1 => Ok(Layout::Body),
            2 => Ok(Layout::Columns),
            _ => Err(VocabularyError::InvalidLayout(value)),
        }
    }
}

impl TryFrom<u8> for Layout {
    type Error = VocabularyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Layout::try_from(i64::from(value))
    }
}

impl From<Layout> for u8 {
    fn from(layout: Layout) -> u8 {
        layout.code()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ContentType
// ────────────────────────────────────────────────────────────────────────────

/// Kind of content carried by a content unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
#[repr(u8)]
pub enum ContentType {
    Text = 0,
    Code = 1,
    Image = 2,
}

impl ContentType {
    /// All members in code order.
    pub const ALL: [ContentType; 3] = [ContentType::Text, ContentType::Code, ContentType::Image];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Declared member name, e.g. `"TEXT"`.
    pub fn name(self) -> &'static str {
        match self {
            ContentType::Text => "TEXT",
            ContentType::Code => "CODE",
            ContentType::Image => "IMAGE",
        }
    }
}

impl TryFrom<i64> for ContentType {
    type Error = VocabularyError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ContentType::Text),
            1 => Ok(ContentType::Code),
            2 => Ok(ContentType::Image),
            _ => Err(VocabularyError::InvalidContentType(value)),
        }
    }
}

impl TryFrom<u8> for ContentType {
    type Error = VocabularyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ContentType::try_from(i64::from(value))
    }
}

impl From<ContentType> for u8 {
    fn from(content_type: ContentType) -> u8 {
        content_type.code()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Language
// ────────────────────────────────────────────────────────────────────────────

/// Programming or query language associated with a content unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Language {
    Python,
    Java,
    JavaScript,
    TypeScript,
    Sql,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Python,
        Language::Java,
        Language::JavaScript,
        Language::TypeScript,
        Language::Sql,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Sql => "sql",
        }
    }
}

impl FromStr for Language {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "javascript" => Ok(Language::JavaScript),
            "typescript" => Ok(Language::TypeScript),
            "sql" => Ok(Language::Sql),
            _ => Err(VocabularyError::InvalidLanguageTag(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Language {
    type Error = VocabularyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Language {
    type Error = VocabularyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> &'static str {
        language.as_str()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
