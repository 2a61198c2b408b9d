//! Storage layer for durable picker state.
//!
//! The picker persists its recently-used list through a string-keyed
//! [`KeyValueStore`]. Backends are interchangeable behind the trait.
//!
//! # Modules
//!
//! - `backend`: Key-value store trait
//! - `json`: JSON file-based implementation with atomic writes
//! - `memory`: In-memory implementation for tests and fallback

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
