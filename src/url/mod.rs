//! URL handling module for site-grab
//!
//! This module provides link resolution against a page base, visited-set
//! normalization, output folder naming and filename sanitization.

mod domain;
mod normalize;
mod resolve;
mod sanitize;

// Re-export main functions
pub use domain::output_folder_name;
pub use normalize::{normalize_url, visit_key};
pub use resolve::resolve_link;
pub use sanitize::{clean_filename, css_filename, FALLBACK_NAME, MAX_NAME_LEN};
