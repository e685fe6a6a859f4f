// crates/gazetteer-core/src/index.rs

//! # Name Index
//!
//! Maps a *scoped name prefix* to a unit code. Every unit is reachable through
//! the shortest prefix of its name (at least [`MIN_PREFIX_LEN`] characters)
//! that no sibling in the same scope shares.
//!
//! Construction resolves collisions by lengthening keys: when two names meet
//! on the same prefix, the key is tombstoned and both entries are re-seated one
//! character further. Tombstones stay in the scratch table until
//! [`NameIndexBuilder::finish`] so that a third name sharing the same prefix
//! still sees the collision and probes past it.
//!
//! Dataset requirement: no name may be a proper prefix of a sibling's name in
//! the same scope. Such input fails with
//! [`GazetteerError::SubNamePrefixConflict`] (or `DuplicateName` when the
//! shorter name arrives second).

use crate::common::Level;
use crate::error::{GazetteerError, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Shortest prefix ever used as a key.
pub const MIN_PREFIX_LEN: usize = 2;

/// Namespace in which prefix keys must be unique.
///
/// Province and city names are unique per level; district names repeat across
/// cities, so districts are scoped by the code of their owning city.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Province,
    City,
    District(String),
}

impl Scope {
    pub fn district(city_code: &str) -> Self {
        Scope::District(city_code.to_owned())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Province => f.write_str(Level::Province.as_str()),
            Scope::City => f.write_str(Level::City.as_str()),
            Scope::District(city_code) => f.write_str(city_code),
        }
    }
}

/// First `len` characters of `name`, or `None` when the name is shorter.
pub fn name_prefix(name: &str, len: usize) -> Option<&str> {
    if len == 0 {
        return Some("");
    }
    name.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .nth(len - 1)
        .map(|end| &name[..end])
}

/// Formats the display form of a key, `scope-prefix`.
pub fn format_key(scope: &Scope, name: &str, len: usize) -> Result<String> {
    let prefix = name_prefix(name, len).ok_or_else(|| GazetteerError::PrefixTooLong {
        name: name.to_owned(),
        len,
    })?;
    Ok(format!("{scope}-{prefix}"))
}

/// One scratch slot. `code == None` marks a tombstone; `name` keeps the name
/// that first produced the key.
#[derive(Debug)]
struct Slot {
    code: Option<String>,
    name: String,
}

/// A pending placement of `code` under a `len`-character prefix of `name`.
struct Placement {
    code: String,
    name: String,
    len: usize,
}

/// Single-writer builder for a [`NameIndex`].
#[derive(Debug, Default)]
pub struct NameIndexBuilder {
    scopes: HashMap<Scope, HashMap<String, Slot>>,
    collisions: usize,
}

impl NameIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collisions resolved so far.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Inserts `(code, name)` into `scope`.
    ///
    /// Recursion is unrolled onto an explicit stack. Placements are processed
    /// depth-first with the displaced entry re-seated before the incoming one,
    /// which matches the recursive formulation step for step. Each push
    /// lengthens a prefix that is bounded by its name length, so the loop
    /// always ends.
    pub fn insert(&mut self, scope: Scope, code: &str, name: &str) -> Result<()> {
        let table = self.scopes.entry(scope.clone()).or_default();
        let mut stack = vec![Placement {
            code: code.to_owned(),
            name: name.to_owned(),
            len: MIN_PREFIX_LEN,
        }];

        while let Some(placement) = stack.pop() {
            let key = name_prefix(&placement.name, placement.len)
                .ok_or_else(|| GazetteerError::PrefixTooLong {
                    name: placement.name.clone(),
                    len: placement.len,
                })?
                .to_owned();

            let Some(slot) = table.get_mut(&key) else {
                table.insert(
                    key,
                    Slot {
                        code: Some(placement.code),
                        name: placement.name,
                    },
                );
                continue;
            };

            if slot.code.as_deref() == Some(placement.code.as_str()) {
                continue;
            }

            let held = key.chars().count();
            let next = held + 1;
            if next > placement.name.chars().count() {
                return Err(GazetteerError::DuplicateName {
                    scope: scope.to_string(),
                    name: placement.name,
                    code: placement.code,
                    existing: slot.code.clone(),
                    existing_name: slot.name.clone(),
                });
            }
            if slot.code.is_some() && slot.name.chars().count() == held {
                return Err(GazetteerError::SubNamePrefixConflict {
                    scope: scope.to_string(),
                    name: placement.name,
                    existing: slot.name.clone(),
                });
            }

            self.collisions += 1;
            debug!(
                %scope,
                key = %key,
                incoming = %placement.name,
                next_len = next,
                "prefix collision"
            );

            stack.push(Placement {
                len: next,
                ..placement
            });
            // only the first collision on a key re-seats its holder
            if let Some(displaced) = slot.code.take() {
                stack.push(Placement {
                    code: displaced,
                    name: slot.name.clone(),
                    len: next,
                });
            }
        }
        Ok(())
    }

    /// Drops every tombstone and freezes the index.
    pub fn finish(self) -> NameIndex {
        let scopes = self
            .scopes
            .into_iter()
            .map(|(scope, table)| {
                let keys = table
                    .into_iter()
                    .filter_map(|(key, slot)| slot.code.map(|code| (key, code)))
                    .collect();
                (scope, keys)
            })
            .collect();
        NameIndex { scopes }
    }
}

/// Immutable prefix → code index, one table per scope.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    scopes: HashMap<Scope, HashMap<String, String>>,
}

impl NameIndex {
    /// Exact lookup of the `len`-character prefix of `name`.
    pub fn get(&self, scope: &Scope, name: &str, len: usize) -> Option<&str> {
        let prefix = name_prefix(name, len)?;
        self.scopes.get(scope)?.get(prefix).map(String::as_str)
    }

    /// Probes prefixes of `name` from [`MIN_PREFIX_LEN`] up to its full length
    /// and returns the first hit.
    pub fn probe(&self, scope: &Scope, name: &str) -> Option<&str> {
        let table = self.scopes.get(scope)?;
        (MIN_PREFIX_LEN..=name.chars().count())
            .filter_map(|len| name_prefix(name, len))
            .find_map(|prefix| table.get(prefix))
            .map(String::as_str)
    }

    /// `(prefix, code)` pairs of one scope, in no particular order.
    pub fn entries<'a>(&'a self, scope: &Scope) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.scopes
            .get(scope)
            .into_iter()
            .flat_map(|table| table.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Total number of keys across all scopes.
    pub fn len(&self) -> usize {
        self.scopes.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
