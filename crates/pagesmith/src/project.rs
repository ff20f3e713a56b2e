//! Per-kind projections of a layout tree.
//!
//! Each projection is one exhaustive `match` over [`LayoutPart`], so adding a
//! part kind fails to compile until every projection handles it.
//!
//! # Pipeline Position
//!
//! ```text
//! Layout tree
//!     ↓ project (this module)
//! render fragment · doc records · reference set · component files
//!     ↓ generate
//! Page aggregates + DocLayout
//! ```
//!
//! - [`render`]: reference tags wrapped in container markup
//! - [`docs`]: documentation records
//! - [`references`]: identifiers an aggregate must import
//! - [`emit`]: one component file per distinct leaf id
//!
//! [`LayoutPart`]: pagesmith_core::layout::LayoutPart

pub mod docs;
pub mod emit;
pub mod references;
pub mod render;
