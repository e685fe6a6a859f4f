// crates/gazetteer-core/src/error.rs

//! Error types for building and querying the gazetteer.

use crate::common::Level;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a snapshot or resolving composite queries.
///
/// Build-time variants (`DataFormat`, `DuplicateName`, `SubNamePrefixConflict`,
/// `PrefixTooLong`, `MissingData`, `Io`) abort the build they occur in.
/// Query-time variants (`InvalidCode`, `NotFound`) are only produced by the
/// composite resolvers; single-field lookups return `None` instead.
#[derive(Error, Debug)]
pub enum GazetteerError {
    /// An ingested row does not have the shape or character classes its level needs.
    #[error("wrong data format, level = {level}, row = {row:?}")]
    DataFormat { level: Level, row: String },

    /// Two codes in the same scope share an identical name.
    ///
    /// `existing` is the code holding the contested key, `None` when the key
    /// was already tombstoned; `existing_name` is the name that produced it.
    #[error("duplicate name {name:?} in scope {scope}: {code} collides with {existing_name:?}")]
    DuplicateName {
        scope: String,
        name: String,
        code: String,
        existing: Option<String>,
        existing_name: String,
    },

    /// One name is a literal prefix of a sibling's name in the same scope.
    #[error("name {existing:?} is a prefix of {name:?} in scope {scope}")]
    SubNamePrefixConflict {
        scope: String,
        name: String,
        existing: String,
    },

    /// A prefix longer than the name itself was requested.
    #[error("prefix length {len} is larger than name size, name = {name:?}")]
    PrefixTooLong { name: String, len: usize },

    /// `parse_code` found an ancestor chain of unexpected length.
    #[error("invalid code, code = {0}")]
    InvalidCode(String),

    /// No level of a composite query resolved.
    #[error(
        "address not found, province = {province:?}, city = {city:?}, district = {district:?}"
    )]
    NotFound {
        province: String,
        city: String,
        district: String,
    },

    /// A required data file is absent from the data directory.
    #[error("missing data file: {}", .0.display())]
    MissingData(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GazetteerError>;
