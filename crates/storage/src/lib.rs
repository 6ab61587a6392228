//! Goal and activity stores.
//!
//! The analytics engine never touches this crate; callers load records here
//! and hand them to the engine as plain data.

#![warn(missing_docs)]

mod trait_;
mod json_storage;

pub use trait_::{Storage, StorageError, Result};
pub use json_storage::JsonStorage;
