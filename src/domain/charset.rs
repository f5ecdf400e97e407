//! Character classes and alphabet assembly.
//!
//! The four classes are fixed static data. An alphabet is the concatenation
//! of the selected classes in class order; characters are never deduplicated.

/// Lowercase ASCII letters.
pub const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGIT_CHARS: &str = "0123456789";

/// Fixed symbol set.
pub const SYMBOL_CHARS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>/?";

/// A fixed character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// Lowercase letters (a-z).
    Lower,
    /// Uppercase letters (A-Z).
    Upper,
    /// Digits (0-9).
    Digits,
    /// Symbols.
    Symbols,
}

impl CharacterClass {
    /// All classes in alphabet order.
    pub const ALL: [Self; 4] = [Self::Lower, Self::Upper, Self::Digits, Self::Symbols];

    /// Characters belonging to this class.
    #[must_use]
    pub const fn chars(self) -> &'static str {
        match self {
            Self::Lower => LOWER_CHARS,
            Self::Upper => UPPER_CHARS,
            Self::Digits => DIGIT_CHARS,
            Self::Symbols => SYMBOL_CHARS,
        }
    }

    /// Name of the form field that toggles this class.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Digits => "digits",
            Self::Symbols => "symbols",
        }
    }

    /// Label shown next to the checkbox.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lower => "Lowercase letters (a-z)",
            Self::Upper => "Uppercase letters (A-Z)",
            Self::Digits => "Digits (0-9)",
            Self::Symbols => "Symbols (!@#$%^&*...)",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Set of selected character classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSelection(u8);

impl ClassSelection {
    /// Selection with no class.
    #[must_use]
    pub const fn none() -> Self {
        Self(0)
    }

    /// Selection with every class; the form's initial state.
    #[must_use]
    pub const fn all() -> Self {
        Self(0b1111)
    }

    /// Return a copy with `class` added.
    #[must_use]
    pub const fn with(self, class: CharacterClass) -> Self {
        Self(self.0 | class.bit())
    }

    /// Whether `class` is selected.
    #[must_use]
    pub const fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate selected classes in alphabet order.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    /// Build the alphabet for this selection.
    #[must_use]
    pub fn alphabet(self) -> Alphabet {
        Alphabet(self.iter().flat_map(|class| class.chars().chars()).collect())
    }
}

impl FromIterator<CharacterClass> for ClassSelection {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

/// Ordered characters eligible for selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Number of characters (positions) in the alphabet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the alphabet has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `c` occurs in the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Characters as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl From<&str> for Alphabet {
    fn from(chars: &str) -> Self {
        Self(chars.chars().collect())
    }
}
