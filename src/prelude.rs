//! Convenient re-exports for common usage.
//!
//! ```
//! use record_merge::prelude::*;
//! ```

pub use crate::record;
pub use crate::{merge, merge_all};
pub use crate::{Collection, MergeError, Merger, Record, Value, ID_FIELD};
