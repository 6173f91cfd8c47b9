//! # record-merge
//!
//! Merge collections of keyed records into one.
//!
//! Each [`Record`] is an ordered map from field name to [`Value`] and carries
//! an `id` field. Merging walks the inputs in order; the first record seen for
//! an `id` fixes its position in the output, and every later record with the
//! same `id` is overlaid onto it field by field. On a conflict the later value
//! wins, and nested maps are replaced as a whole rather than merged.
//!
//! ## Quick Start
//!
//! ```
//! use record_merge::prelude::*;
//!
//! let first = vec![record! { "id" => "1", "name" => "John", "age" => 20 }];
//! let second = vec![record! { "id" => "1", "marks" => 80 }];
//!
//! let merged = merge(&first, &second)?;
//! assert_eq!(
//!     merged,
//!     [record! { "id" => "1", "name" => "John", "age" => 20, "marks" => 80 }]
//! );
//! # Ok::<(), MergeError>(())
//! ```
//!
//! ## Entry points
//!
//! - [`merge`] - merge two collections
//! - [`merge_all`] - merge any number of collections, left to right
//! - [`Merger`] - incremental accumulator, optionally keyed on another field
//! - [`harness`] - scenario runner with the built-in reference cases
//!
//! ## Errors
//!
//! A record without the key field fails the whole merge with
//! [`MergeError::MissingKey`], naming the record's position and collection.
//!
//! ## Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Value`] and [`Record`], in the
//!   shape of plain JSON objects.

#![warn(missing_docs)]

mod error;
mod merger;
mod records;
mod value;

pub mod harness;
pub mod prelude;

pub use error::{Collection, MergeError};
pub use merger::{merge, merge_all, Merger};
pub use records::{Record, ID_FIELD};
pub use value::Value;
