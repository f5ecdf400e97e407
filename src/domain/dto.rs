//! Data Transfer Objects for the form submission.

use super::charset::{Alphabet, CharacterClass, ClassSelection};

/// Value a checkbox submits when checked.
const CHECKED: &str = "on";

/// `POST /generate` form body.
///
/// Every field is optional: unchecked boxes are simply absent, and a bad
/// length is normalized rather than rejected. Built from the raw key/value
/// pairs; when a key repeats, the first value wins.
#[derive(Debug, Clone, Default)]
pub struct GenerateForm {
    /// Requested length as typed by the user.
    pub length: Option<String>,

    /// Lowercase checkbox.
    pub lower: Option<String>,

    /// Uppercase checkbox.
    pub upper: Option<String>,

    /// Digits checkbox.
    pub digits: Option<String>,

    /// Symbols checkbox.
    pub symbols: Option<String>,
}

impl GenerateForm {
    fn field(&self, class: CharacterClass) -> Option<&str> {
        match class {
            CharacterClass::Lower => self.lower.as_deref(),
            CharacterClass::Upper => self.upper.as_deref(),
            CharacterClass::Digits => self.digits.as_deref(),
            CharacterClass::Symbols => self.symbols.as_deref(),
        }
    }

    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "length" => Some(&mut self.length),
            "lower" => Some(&mut self.lower),
            "upper" => Some(&mut self.upper),
            "digits" => Some(&mut self.digits),
            "symbols" => Some(&mut self.symbols),
            _ => None,
        }
    }

    /// Classes whose checkbox was submitted as `"on"`.
    #[must_use]
    pub fn selection(&self) -> ClassSelection {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.field(*class) == Some(CHECKED))
            .collect()
    }

    /// Resolve the requested length.
    ///
    /// Missing, unparseable, or non-positive input falls back to
    /// `default_length`. Positive values pass through unchanged.
    #[must_use]
    pub fn length(&self, default_length: usize) -> usize {
        self.length
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|n| *n > 0)
            .map_or(default_length, |n| {
                usize::try_from(n).unwrap_or(usize::MAX)
            })
    }
}

impl<K, V> FromIterator<(K, V)> for GenerateForm
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            if let Some(slot) = form.slot(key.as_ref()) {
                if slot.is_none() {
                    *slot = Some(value.into());
                }
            }
        }
        form
    }
}

/// A single generation request, consumed once.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Number of characters to draw.
    pub length: usize,

    /// Characters eligible for selection.
    pub alphabet: Alphabet,
}

impl GenerationRequest {
    /// Create a new generation request.
    #[must_use]
    pub const fn new(length: usize, alphabet: Alphabet) -> Self {
        Self { length, alphabet }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_length(length: &str) -> GenerateForm {
        GenerateForm {
            length: Some(length.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_length_parsing() {
        assert_eq!(form_with_length("24").length(16), 24);
        assert_eq!(form_with_length("+8").length(16), 8);
        assert_eq!(form_with_length("1").length(16), 1);
        assert_eq!(form_with_length("5000").length(16), 5000);
    }

    #[test]
    fn test_length_fallback() {
        assert_eq!(form_with_length("0").length(16), 16);
        assert_eq!(form_with_length("-5").length(16), 16);
        assert_eq!(form_with_length("abc").length(16), 16);
        assert_eq!(form_with_length("").length(16), 16);
        assert_eq!(form_with_length(" 12").length(16), 16);
        assert_eq!(form_with_length("99999999999999999999999").length(16), 16);
        assert_eq!(GenerateForm::default().length(16), 16);
    }

    #[test]
    fn test_selection_requires_on() {
        let form = GenerateForm {
            lower: Some("on".to_string()),
            upper: Some("off".to_string()),
            digits: Some(String::new()),
            symbols: Some("on".to_string()),
            ..Default::default()
        };
        let selection = form.selection();
        assert!(selection.contains(CharacterClass::Lower));
        assert!(!selection.contains(CharacterClass::Upper));
        assert!(!selection.contains(CharacterClass::Digits));
        assert!(selection.contains(CharacterClass::Symbols));
    }

    #[test]
    fn test_empty_form_selects_nothing() {
        assert!(GenerateForm::default().selection().is_empty());
    }

    #[test]
    fn test_from_pairs_first_value_wins() {
        let form: GenerateForm = [
            ("length", "12"),
            ("lower", "on"),
            ("length", "40"),
            ("lower", "off"),
            ("upper", "off"),
            ("upper", "on"),
        ]
        .into_iter()
        .collect();

        assert_eq!(form.length(16), 12);
        let selection = form.selection();
        assert!(selection.contains(CharacterClass::Lower));
        assert!(!selection.contains(CharacterClass::Upper));
    }

    #[test]
    fn test_from_pairs_ignores_unknown_keys() {
        let form: GenerateForm = vec![
            ("submit".to_string(), "Generate".to_string()),
            ("digits".to_string(), "on".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(form.length.as_deref(), None);
        assert_eq!(form.digits.as_deref(), Some("on"));
    }
}
