//! Javanese script (Hanacaraka) transliteration
//!
//! Both directions are pure functions over immutable tables. The tables are
//! built once per process; [`Transliterator::global`] hands out the shared
//! instance and every call after the first is lock-free.

mod tables;
mod to_latin;
mod to_script;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use tables::{
    BASE_SIGNS, BaseSign, COMBINING_SIGNS, CombiningSign, INHERENT_VOWEL, ScriptTables, SignKind,
    TableGlyph, is_javanese_char,
};

/// Direction of a transliteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ScriptToLatin,
    LatinToScript,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScriptToLatin => "script_to_latin",
            Self::LatinToScript => "latin_to_script",
        }
    }

    /// Guess the direction from the text: any Javanese character means script→Latin
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_javanese_char) {
            Self::ScriptToLatin
        } else {
            Self::LatinToScript
        }
    }
}

/// A single transliteration call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliterationRequest {
    pub text: String,
    pub direction: Direction,
}

impl TransliterationRequest {
    pub fn new(text: impl Into<String>, direction: Direction) -> Self {
        Self {
            text: text.into(),
            direction,
        }
    }

    /// Run against the shared transliterator
    pub fn run(&self) -> String {
        Transliterator::global().transliterate(&self.text, self.direction)
    }
}

/// Both converters bound to one set of tables
#[derive(Debug, Clone)]
pub struct Transliterator {
    tables: ScriptTables,
}

impl Transliterator {
    /// Build from the built-in tables, surfacing any table inconsistency
    pub fn new() -> Result<Self> {
        Ok(Self::with_tables(ScriptTables::build()?))
    }

    pub fn with_tables(tables: ScriptTables) -> Self {
        Self { tables }
    }

    /// Get or initialize the process-wide instance.
    ///
    /// Panics if the built-in tables are inconsistent; call [`Transliterator::new`]
    /// at startup to report that as an error instead.
    pub fn global() -> &'static Transliterator {
        static INSTANCE: OnceLock<Transliterator> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Transliterator::new().expect("built-in Hanacaraka tables must be consistent")
        })
    }

    pub fn tables(&self) -> &ScriptTables {
        &self.tables
    }

    /// Hanacaraka → capitalised Latin
    pub fn script_to_latin(&self, text: &str) -> String {
        to_latin::convert(&self.tables, text)
    }

    /// Latin → Hanacaraka
    pub fn latin_to_script(&self, text: &str) -> String {
        to_script::convert(&self.tables, text)
    }

    pub fn transliterate(&self, text: &str, direction: Direction) -> String {
        match direction {
            Direction::ScriptToLatin => self.script_to_latin(text),
            Direction::LatinToScript => self.latin_to_script(text),
        }
    }
}

/// Hanacaraka → Latin using the shared tables
pub fn script_to_latin(text: &str) -> String {
    Transliterator::global().script_to_latin(text)
}

/// Latin → Hanacaraka using the shared tables
pub fn latin_to_script(text: &str) -> String {
    Transliterator::global().latin_to_script(text)
}

/// Maximal runs of Javanese-block characters in `text`, in order
pub fn script_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = None;
    for (idx, c) in text.char_indices() {
        match (is_javanese_char(c), start) {
            (true, None) => start = Some(idx),
            (false, Some(begin)) => {
                runs.push(&text[begin..idx]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(begin) = start {
        runs.push(&text[begin..]);
    }
    runs
}
