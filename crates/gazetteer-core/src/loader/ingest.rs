// crates/gazetteer-core/src/loader/ingest.rs

//! Row shape and character-class validation for the tab-separated data files.
//!
//! - `provinces.data`: `code \t name`
//! - `cities.data` / `districts.data`: `parent \t code \t name`
//!
//! Codes are letters/digits, names are Han characters only.

use crate::common::Level;
use crate::error::{GazetteerError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::io::BufRead;

static HAN_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Han}+$").expect("valid regex"));

const FIELD_SEPARATOR: char = '\t';

/// One validated ingestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub level: Level,
    /// `None` only for provinces, whose parent is the country root.
    pub parent: Option<String>,
    pub code: String,
    pub name: String,
}

impl Row {
    pub fn province(code: &str, name: &str) -> Self {
        Self {
            level: Level::Province,
            parent: None,
            code: code.to_owned(),
            name: name.to_owned(),
        }
    }

    pub fn city(parent: &str, code: &str, name: &str) -> Self {
        Self {
            level: Level::City,
            parent: Some(parent.to_owned()),
            code: code.to_owned(),
            name: name.to_owned(),
        }
    }

    pub fn district(parent: &str, code: &str, name: &str) -> Self {
        Self {
            level: Level::District,
            parent: Some(parent.to_owned()),
            code: code.to_owned(),
            name: name.to_owned(),
        }
    }

    /// Checks shape and character classes for the row's level.
    pub fn validate(&self) -> Result<()> {
        let parent_ok = match (self.level, self.parent.as_deref()) {
            (Level::Province, None) => true,
            (Level::City | Level::District, Some(parent)) => is_code(parent),
            _ => false,
        };
        if parent_ok && is_code(&self.code) && is_han_name(&self.name) {
            Ok(())
        } else {
            Err(GazetteerError::DataFormat {
                level: self.level,
                row: self.to_string(),
            })
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = &self.parent {
            write!(f, "{parent}{FIELD_SEPARATOR}")?;
        }
        write!(f, "{}{FIELD_SEPARATOR}{}", self.code, self.name)
    }
}

/// Non-empty and made of letters or digits only.
pub fn is_code(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}

/// Non-empty and made of Han script characters only.
pub fn is_han_name(s: &str) -> bool {
    HAN_NAME.is_match(s)
}

/// Parses one line of a data file of the given level.
pub fn parse_row(level: Level, line: &str) -> Result<Row> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let row = match (level, fields.as_slice()) {
        (Level::Province, [code, name]) => Row::province(code, name),
        (Level::City, [parent, code, name]) => Row::city(parent, code, name),
        (Level::District, [parent, code, name]) => Row::district(parent, code, name),
        _ => {
            return Err(GazetteerError::DataFormat {
                level,
                row: line.to_owned(),
            })
        }
    };
    row.validate().map_err(|_| GazetteerError::DataFormat {
        level,
        row: line.to_owned(),
    })?;
    Ok(row)
}

/// Lazy iterator of rows over a line-oriented reader.
///
/// Blank lines are skipped; a trailing `\r` is stripped. Re-open the source to
/// iterate again.
pub struct RowReader<R> {
    level: Level,
    lines: std::io::Lines<R>,
}

impl<R: BufRead> RowReader<R> {
    pub fn new(level: Level, reader: R) -> Self {
        Self {
            level,
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            return Some(parse_row(self.level, line));
        }
    }
}
