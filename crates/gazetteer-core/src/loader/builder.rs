// crates/gazetteer-core/src/loader/builder.rs

use super::ingest::Row;
use crate::common::{Level, ROOT_CODE};
use crate::error::{GazetteerError, Result};
use crate::index::{NameIndexBuilder, Scope};
use crate::model::{Gazetteer, HierarchyStore};
use std::collections::HashMap;
use tracing::info;

// -----------------------------------------------------------------------------
// SINGLE-WRITER BUILD PHASE
// -----------------------------------------------------------------------------

/// Accumulates rows into a hierarchy store and a name index.
///
/// Inserts must be serialized (`&mut self`); the finished [`Gazetteer`] is
/// immutable. Any error aborts the build, the partially filled builder is
/// then simply dropped.
#[derive(Debug, Default)]
pub struct GazetteerBuilder {
    store: HierarchyStore,
    index: NameIndexBuilder,
    /// Level of every code that received its own row.
    levels: HashMap<String, Level>,
    /// Level each referenced parent code is expected to have.
    parent_levels: HashMap<String, Level>,
    rows: usize,
}

impl GazetteerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one row into both the store and the index.
    ///
    /// A code may only be defined once; repeating an identical row is a no-op.
    /// Parents must sit exactly one level above their children, which is also
    /// checked against rows that arrive later.
    pub fn insert(&mut self, row: Row) -> Result<()> {
        row.validate()?;
        if row.code == ROOT_CODE || row.parent.as_deref() == Some(ROOT_CODE) {
            return Err(bad_row(&row));
        }

        if let Some(&level) = self.levels.get(&row.code) {
            let same = level == row.level
                && self.store.name_of(&row.code) == Some(row.name.as_str())
                && self.store.parent_of(&row.code) == row.parent.as_deref();
            return if same { Ok(()) } else { Err(bad_row(&row)) };
        }
        if self
            .parent_levels
            .get(&row.code)
            .is_some_and(|&expected| expected != row.level)
        {
            return Err(bad_row(&row));
        }

        let parent = row.parent.as_deref().unwrap_or(ROOT_CODE);
        if let Some(expected) = row.level.parent_level() {
            let known = self
                .levels
                .get(parent)
                .or_else(|| self.parent_levels.get(parent));
            if known.is_some_and(|&level| level != expected) {
                return Err(bad_row(&row));
            }
            self.parent_levels.insert(parent.to_owned(), expected);
        }
        self.levels.insert(row.code.clone(), row.level);
        self.store.upsert_child(parent, &row.code);
        self.store.upsert_self(&row.code, parent, &row.name);

        let scope = match row.level {
            Level::Province => Scope::Province,
            Level::City => Scope::City,
            Level::District => Scope::district(parent),
        };
        self.index.insert(scope, &row.code, &row.name)?;
        self.rows += 1;
        Ok(())
    }

    pub fn extend<I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = Row>,
    {
        rows.into_iter().try_for_each(|row| self.insert(row))
    }

    /// Number of rows accepted so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Drops tombstones, checks that every referenced unit got its own row at
    /// the level its children expect, and freezes the snapshot.
    pub fn finish(self) -> Result<Gazetteer> {
        if let Some(node) = self.store.first_dangling() {
            let level = self
                .parent_levels
                .get(node.code())
                .copied()
                .unwrap_or(Level::Province);
            return Err(GazetteerError::DataFormat {
                level,
                row: format!("{} (referenced but never defined)", node.code()),
            });
        }
        for node in self.store.iter() {
            let (Some(&expected), Some(&level)) = (
                self.parent_levels.get(node.code()),
                self.levels.get(node.code()),
            ) else {
                continue;
            };
            if level != expected {
                return Err(GazetteerError::DataFormat {
                    level,
                    row: format!("{} (referenced as a {expected})", node.code()),
                });
            }
        }

        let collisions = self.index.collisions();
        let gazetteer = Gazetteer::new(self.store, self.index.finish());
        let stats = gazetteer.stats();
        info!(
            rows = self.rows,
            provinces = stats.provinces,
            cities = stats.cities,
            districts = stats.districts,
            index_keys = stats.index_keys,
            collisions,
            "gazetteer built"
        );
        Ok(gazetteer)
    }
}

fn bad_row(row: &Row) -> GazetteerError {
    GazetteerError::DataFormat {
        level: row.level,
        row: row.to_string(),
    }
}

impl Gazetteer {
    /// Builds a snapshot from already-parsed rows in one pass.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Row>,
    {
        let mut builder = GazetteerBuilder::new();
        builder.extend(rows)?;
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_three_levels() {
        let gz = Gazetteer::from_rows([
            Row::province("P1", "浙江省"),
            Row::city("P1", "C1", "杭州市"),
            Row::district("C1", "D1", "西湖区"),
        ])
        .unwrap();
        let stats = gz.stats();
        assert_eq!((stats.provinces, stats.cities, stats.districts), (1, 1, 1));
        assert_eq!(stats.index_keys, 3);
    }

    #[test]
    fn dangling_parent_fails_on_finish() {
        let mut builder = GazetteerBuilder::new();
        builder.insert(Row::city("P404", "C1", "杭州市")).unwrap();
        let err = builder.finish().unwrap_err();
        assert!(matches!(
            err,
            GazetteerError::DataFormat { level: Level::Province, ref row } if row.starts_with("P404")
        ));
    }

    #[test]
    fn root_code_cannot_be_redefined() {
        let mut builder = GazetteerBuilder::new();
        let err = builder.insert(Row::province(ROOT_CODE, "根节点")).unwrap_err();
        assert!(matches!(err, GazetteerError::DataFormat { .. }));
    }

    #[test]
    fn cities_parented_by_each_other_fail() {
        let err = Gazetteer::from_rows([
            Row::province("P1", "浙江省"),
            Row::city("C2", "C1", "杭州市"),
            Row::city("C1", "C2", "宁波市"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            GazetteerError::DataFormat { level: Level::City, ref row } if row.starts_with("C1\tC2")
        ));
    }

    #[test]
    fn self_parented_city_fails_on_finish() {
        let mut builder = GazetteerBuilder::new();
        builder.insert(Row::province("P1", "浙江省")).unwrap();
        builder.insert(Row::city("C1", "C1", "杭州市")).unwrap();
        let err = builder.finish().unwrap_err();
        assert!(matches!(
            err,
            GazetteerError::DataFormat { level: Level::City, ref row } if row.starts_with("C1 ")
        ));
    }

    #[test]
    fn district_under_province_fails() {
        let err = Gazetteer::from_rows([
            Row::province("P1", "浙江省"),
            Row::district("P1", "D1", "西湖区"),
        ])
        .unwrap_err();
        assert!(matches!(err, GazetteerError::DataFormat { level: Level::District, .. }));

        // same shape with the district arriving before its would-be parent
        let err = Gazetteer::from_rows([
            Row::district("P1", "D1", "西湖区"),
            Row::province("P1", "浙江省"),
        ])
        .unwrap_err();
        assert!(matches!(err, GazetteerError::DataFormat { level: Level::Province, .. }));
    }

    #[test]
    fn city_under_root_fails() {
        let mut builder = GazetteerBuilder::new();
        let err = builder
            .insert(Row::city(ROOT_CODE, "C1", "杭州市"))
            .unwrap_err();
        assert!(matches!(err, GazetteerError::DataFormat { .. }));
    }

    #[test]
    fn redefined_code_fails_and_keeps_first_definition() {
        let mut builder = GazetteerBuilder::new();
        builder.insert(Row::province("P1", "浙江省")).unwrap();
        builder.insert(Row::province("P2", "江苏省")).unwrap();
        builder.insert(Row::city("P1", "C1", "杭州市")).unwrap();
        let err = builder
            .insert(Row::city("P2", "C1", "南京市"))
            .unwrap_err();
        assert!(matches!(err, GazetteerError::DataFormat { level: Level::City, .. }));

        let gz = builder.finish().unwrap();
        assert_eq!(gz.store().children_of("P2"), Vec::<&str>::new());
        assert_eq!(gz.store().name_of("C1"), Some("杭州市"));
    }

    #[test]
    fn repeated_identical_row_is_a_no_op() {
        let mut builder = GazetteerBuilder::new();
        builder.insert(Row::province("P1", "浙江省")).unwrap();
        builder.insert(Row::province("P1", "浙江省")).unwrap();
        assert_eq!(builder.rows(), 1);
        assert!(builder.insert(Row::province("P1", "江苏省")).is_err());
    }

    #[test]
    fn invalid_row_is_rejected_before_mutation() {
        let mut builder = GazetteerBuilder::new();
        assert!(builder.insert(Row::province("P1", "Zhejiang")).is_err());
        assert_eq!(builder.rows(), 0);
    }
}
