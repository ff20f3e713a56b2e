//! Pagesmith Core Types and Definitions
//!
//! This crate provides the foundational types for describing a UI page as a
//! tree of layout parts. It includes:
//!
//! - **Metadata**: Field, table-column and event descriptors ([`meta`] module)
//! - **Layout tree**: The closed set of part kinds and the root [`layout::Layout`]
//! - **Builder**: Nested-closure assembly of immutable layouts ([`builder`] module)
//! - **Traversal**: Depth-first walks over a layout ([`traverse`] module)
//!
//! # Example
//!
//! ```
//! use pagesmith_core::{builder::layout, meta::FieldMeta, traverse::flatten_leaves};
//!
//! let page = layout("Search", "Search page", |s| {
//!     s.row(|r| {
//!         r.col(8, |c| {
//!             c.input(FieldMeta::new("OrderNo", "Order No"));
//!         });
//!     });
//! });
//!
//! let leaves = flatten_leaves(&page);
//! assert_eq!(leaves.len(), 1);
//! assert!(leaves[0].group().is_empty());
//! ```

pub mod builder;
pub mod layout;
pub mod meta;
pub mod traverse;
