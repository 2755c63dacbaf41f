//! The static alphabets and font lists rules are generated from.

use anyhow::*;
use std::{collections::HashSet, fmt};

/// Whether a symbol is the capital or small form of a letter, or a digit.
///
/// The name of the case is used both in Unicode character names and in the comments of the
/// generated file.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Hash)]
pub enum Case {
    Capital,
    Small,
    Digit,
}
impl Case {
    pub fn name(self) -> &'static str {
        match self {
            Case::Capital => "CAPITAL",
            Case::Small => "SMALL",
            Case::Digit => "DIGIT",
        }
    }
}
impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single letter or digit, and the key used to type it.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct LetterEntry {
    pub name: String,
    pub key: char,
}
impl LetterEntry {
    pub fn new(name: impl Into<String>, key: char) -> Self {
        LetterEntry { name: name.into(), key }
    }
}

const GREEK_LETTERS: &[(&str, char)] = &[
    ("alpha", 'a'),
    ("beta", 'b'),
    ("gamma", 'g'),
    ("delta", 'd'),
    ("epsilon", 'e'),
    ("zeta", 'z'),
    ("eta", 'h'),
    ("theta", 'T'),
    ("iota", 'i'),
    ("kappa", 'k'),
    ("lamda", 'l'),
    ("mu", 'm'),
    ("nu", 'n'),
    ("xi", 'X'),
    ("omicron", 'o'),
    ("pi", 'p'),
    ("rho", 'r'),
    ("sigma", 's'),
    ("tau", 't'),
    ("upsilon", 'u'),
    ("phi", 'f'),
    ("chi", 'x'),
    ("psi", 'P'),
    ("omega", 'O'),
];

const DIGITS: &[(&str, char)] = &[
    ("zero", '0'),
    ("one", '1'),
    ("two", '2'),
    ("three", '3'),
    ("four", '4'),
    ("five", '5'),
    ("six", '6'),
    ("seven", '7'),
    ("eight", '8'),
    ("nine", '9'),
];

/// An ordered list of letters. The order is the order rules are written in.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Alphabet {
    entries: Vec<LetterEntry>,
}
impl Alphabet {
    pub fn new(entries: Vec<LetterEntry>) -> Self {
        Alphabet { entries }
    }

    fn from_pairs(pairs: &[(&str, char)]) -> Self {
        Alphabet::new(pairs.iter().map(|&(name, key)| LetterEntry::new(name, key)).collect())
    }

    /// `A` through `Z`, typed with the capital key.
    pub fn capital_latin() -> Self {
        Alphabet::new(
            ('A'..='Z')
                .map(|ch| LetterEntry::new(ch, ch))
                .collect(),
        )
    }

    /// `A` through `Z`, typed with the lowercase key.
    pub fn small_latin() -> Self {
        Alphabet::new(
            ('A'..='Z')
                .map(|ch| LetterEntry::new(ch, ch.to_ascii_lowercase()))
                .collect(),
        )
    }

    /// The lowercase Greek alphabet, including final sigma.
    pub fn small_greek() -> Self {
        let mut alphabet = Alphabet::from_pairs(GREEK_LETTERS);
        alphabet.entries.push(LetterEntry::new("final sigma", 'S'));
        alphabet
    }

    /// The uppercase Greek alphabet.
    pub fn capital_greek() -> Self {
        Alphabet::from_pairs(GREEK_LETTERS)
    }

    pub fn digits() -> Self {
        Alphabet::from_pairs(DIGITS)
    }

    pub fn entries(&self) -> &[LetterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.entries.is_empty(), "Alphabet contains no letters.");
        let mut keys = HashSet::new();
        for entry in &self.entries {
            if !keys.insert(entry.key) {
                bail!("Duplicate key <{}> in alphabet (for letter '{}').", entry.key, entry.name);
            }
        }
        Ok(())
    }
}

/// A font variant, and the key that selects it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct FontStyle {
    pub name: &'static str,
    pub indicator: char,
}
impl FontStyle {
    pub const fn new(name: &'static str, indicator: char) -> Self {
        FontStyle { name, indicator }
    }

    /// The name of the style as it appears in Unicode character names.
    pub fn style(&self) -> String {
        self.name.to_ascii_uppercase()
    }
}

pub const LATIN_FONTS: &[FontStyle] = &[
    FontStyle::new("bold", 'b'),
    FontStyle::new("italic", 'i'),
    FontStyle::new("bold italic", 'I'),
    FontStyle::new("script", 's'),
    FontStyle::new("bold script", 'S'),
    FontStyle::new("fraktur", 'f'),
    FontStyle::new("double-struck", 'B'),
    FontStyle::new("bold fraktur", 'F'),
    FontStyle::new("monospace", 'm'),
    FontStyle::new("sans-serif", 'a'),
    FontStyle::new("sans-serif bold", 'A'),
    FontStyle::new("sans-serif italic", 'n'),
    FontStyle::new("sans-serif bold italic", 'N'),
];

/// Fonts available for Greek letters. `GREEK` selects the plain letters.
pub const GREEK_FONTS: &[FontStyle] = &[
    FontStyle::new("GREEK", 'g'),
    FontStyle::new("bold", 'b'),
    FontStyle::new("italic", 'i'),
    FontStyle::new("bold italic", 'I'),
    FontStyle::new("sans-serif bold", 'A'),
    FontStyle::new("sans-serif bold italic", 'N'),
];

pub const DIGIT_FONTS: &[FontStyle] = &[
    FontStyle::new("bold", 'b'),
    FontStyle::new("double-struck", 'B'),
    FontStyle::new("monospace", 'm'),
    FontStyle::new("sans-serif", 'a'),
    FontStyle::new("sans-serif bold", 'A'),
];

/// An alphabet, the fonts it is generated in, and the key that selects the alphabet.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct KeyGroup {
    pub indicator: Option<char>,
    pub case: Case,
    pub alphabet: Alphabet,
    pub fonts: Vec<FontStyle>,
}
impl KeyGroup {
    pub fn new(
        indicator: Option<char>,
        case: Case,
        alphabet: Alphabet,
        fonts: &[FontStyle],
    ) -> Self {
        KeyGroup { indicator, case, alphabet, fonts: fonts.to_vec() }
    }

    /// The number of lines generated for this group, including headers.
    pub fn line_count(&self) -> usize {
        self.fonts.len() * (self.alphabet.len() + 1)
    }

    fn validate(&self) -> Result<()> {
        self.alphabet.validate()?;
        ensure!(!self.fonts.is_empty(), "{} group contains no fonts.", self.case);
        let mut indicators = HashSet::new();
        for font in &self.fonts {
            if !indicators.insert(font.indicator) {
                bail!("Duplicate font indicator <{}> (for font '{}').", font.indicator, font.name);
            }
        }
        Ok(())
    }
}

/// Every group rules are generated for, in output order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Tables {
    pub groups: Vec<KeyGroup>,
}
impl Tables {
    pub fn new(groups: Vec<KeyGroup>) -> Result<Self> {
        for group in &groups {
            group.validate()?;
        }
        Ok(Tables { groups })
    }

    /// The tables for the full set of mathematical alphanumeric symbols.
    pub fn standard() -> Result<Self> {
        Tables::new(vec![
            KeyGroup::new(None, Case::Capital, Alphabet::capital_latin(), LATIN_FONTS),
            KeyGroup::new(None, Case::Small, Alphabet::small_latin(), LATIN_FONTS),
            KeyGroup::new(Some('g'), Case::Small, Alphabet::small_greek(), GREEK_FONTS),
            KeyGroup::new(Some('G'), Case::Capital, Alphabet::capital_greek(), GREEK_FONTS),
            KeyGroup::new(None, Case::Digit, Alphabet::digits(), DIGIT_FONTS),
        ])
    }

    pub fn line_count(&self) -> usize {
        self.groups.iter().map(KeyGroup::line_count).sum()
    }
}
