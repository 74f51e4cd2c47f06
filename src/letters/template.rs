//! Thank-you letter text
//!
//! The letter is a fixed template: a blank first line, the greeting, the
//! amount with its currency symbol, and a signature. Symbol and signature
//! come from settings; the defaults give the classic "$" and "The Owners".

use crate::config::Settings;
use crate::models::Money;

/// The fixed thank-you letter, parameterised by currency symbol and signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTemplate {
    pub currency_symbol: String,
    pub signature: String,
}

impl Default for LetterTemplate {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            signature: "The Owners".to_string(),
        }
    }
}

impl LetterTemplate {
    /// Build the template from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            signature: settings.signature.clone(),
        }
    }

    /// Render the letter for a donor and the amount being thanked for
    pub fn render(&self, full_name: &str, donation: Money) -> String {
        format!(
            "\nDear {},\n\nThank you for your generous donation of {}!\n\nSincerely,\n\n{}",
            full_name,
            donation.format_with_symbol(&self.currency_symbol),
            self.signature
        )
    }
}

/// Render a letter with the default template
pub fn format_thank_you_letter(full_name: &str, donation: Money) -> String {
    LetterTemplate::default().render(full_name, donation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_text() {
        let letter = format_thank_you_letter("Jane Doe", Money::from_cents(10050));
        assert_eq!(
            letter,
            "\nDear Jane Doe,\n\n\
             Thank you for your generous donation of $100.50!\n\n\
             Sincerely,\n\n\
             The Owners"
        );
    }

    #[test]
    fn test_letter_from_parsed_amount() {
        let amount = Money::parse("100.5").unwrap();
        let letter = format_thank_you_letter("Jane Doe", amount);
        assert!(letter.contains("$100.50"));
        assert!(letter.contains("Dear Jane Doe,"));
    }

    #[test]
    fn test_custom_template() {
        let settings = Settings {
            currency_symbol: "€".to_string(),
            signature: "The Board".to_string(),
            ..Settings::default()
        };
        let letter =
            LetterTemplate::from_settings(&settings).render("Pam Poovey", Money::from_cents(500));
        assert!(letter.contains("€5.00!"));
        assert!(letter.ends_with("The Board"));
    }
}
