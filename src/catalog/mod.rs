//! Emoji catalog: the static dataset and its category grouping.
//!
//! # Modules
//!
//! - `dataset`: Loading records from the bundled or a user-supplied dataset
//! - `categorized`: Grouping records into sorted categories

pub mod categorized;
pub mod dataset;

pub use categorized::{categorize, CategorizedCatalog};
pub use dataset::{load, load_from_file, parse_dataset};
