//! Service layer module.
//!
//! Contains the password generation logic.

pub mod generator;

pub use generator::{PasswordGenerator, generate, generate_with};
