//! Cross-platform logic with no rendering concerns.

pub mod form;
