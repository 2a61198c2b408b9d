//! Infrastructure for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host` inside the sandbox; these
//! helpers map user-facing paths onto it.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, get_store_path};
