//! Random password generation from a validated length and a set of
//! character classes.

pub mod charset;
pub mod clipboard;
pub mod errors;
pub mod generators;
pub mod password;
pub mod prompt;
pub mod settings;
pub mod validate;
