//! Directory Service Library
//!
//! Serves the user listing. When the backing store fails the listing
//! degrades to a fixed sample set instead of surfacing the error - a
//! demo-scaffold policy, not a resilience pattern.

pub mod service;

pub use service::{DirectoryLister, DirectoryService};
