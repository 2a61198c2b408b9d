//! Domain layer for the zemoji plugin.
//!
//! Core types shared by every other layer, independent of Zellij APIs and of the
//! storage format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`emoji`]: The emoji record model

pub mod emoji;
pub mod error;

pub use emoji::EmojiRecord;
pub use error::{PickerError, Result};
