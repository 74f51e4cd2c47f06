//! Thank-you letters
//!
//! - `template`: renders the letter text for a donor and amount
//! - `export`: writes one letter file per donor for their latest donation

pub mod export;
pub mod template;

pub use export::{export_all_letters, letter_path, LetterOutcome};
pub use template::{format_thank_you_letter, LetterTemplate};
