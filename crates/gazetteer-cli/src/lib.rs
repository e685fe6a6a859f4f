//! gazetteer-cli
//! =============
//!
//! Command-line interface for the `gazetteer-core` administrative gazetteer.
//!
//! This crate primarily provides a binary (`gazetteer-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! gazetteer-cli --help
//! gazetteer-cli stats
//! gazetteer-cli cities 浙江
//! gazetteer-cli parse-address --city 杭州 --district 西湖
//! ```
//!
//! For programmatic access use the [`gazetteer-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
