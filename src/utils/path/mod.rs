//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Lexical normalization (`clean_path`, `absolutize`, `relative_to`, `to_slash`)

pub mod fs;

pub use fs::{absolutize, clean_path, relative_to, to_slash};
