//! Domain models for the password generator.
//!
//! This module contains the character classes, alphabets, and the form
//! contract of the generate endpoint.

pub mod charset;
pub mod dto;

pub use charset::{Alphabet, CharacterClass, ClassSelection};
pub use dto::{GenerateForm, GenerationRequest};
