use crate::{
    names::CharacterNames,
    resolve::{resolve, ResolutionRequest},
    sequence::KeySequence,
    tables::{Alphabet, Case, FontStyle},
};
use std::{fmt, iter};

/// A single line of the generated compose file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Line<'a> {
    /// The comment starting the rules for one font.
    Header { font: &'a FontStyle, case: Case },
    /// A rule producing a character.
    Mapping { sequence: KeySequence, character: char },
    /// A commented out rule for a character that could not be found.
    Placeholder { sequence: KeySequence, style: String, case: Case, letter: &'a str },
}
impl<'a> Line<'a> {
    /// The message reported when this line is a placeholder.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Line::Placeholder { style, case, letter, .. } => {
                Some(format!("Error failed to find “{style}” version of {case} {letter}"))
            }
            _ => None,
        }
    }

    pub fn sequence(&self) -> Option<&KeySequence> {
        match self {
            Line::Header { .. } => None,
            Line::Mapping { sequence, .. } | Line::Placeholder { sequence, .. } => Some(sequence),
        }
    }
}
impl<'a> fmt::Display for Line<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Header { font, case } => write!(
                f,
                "\n# {} {} letter ⟨{}⟩:",
                font.name.to_lowercase(),
                case.name().to_lowercase(),
                font.indicator,
            ),
            Line::Mapping { sequence, character } => write!(f, "{sequence} : \"{character}\""),
            Line::Placeholder { sequence, .. } => write!(f, "#{sequence} : TODO"),
        }
    }
}

/// Generates the lines for one font of an alphabet: a header, then one line per letter.
///
/// Plain Greek letters are typed as the group key followed by the letter's key. Everything
/// else is typed as `<f>`, the group key if any, the font's indicator and the letter's key.
/// Placeholders always use the longer form.
pub fn compositions<'a, N: CharacterNames + ?Sized + 'a>(
    names: &'a N,
    font: &'a FontStyle,
    group: Option<char>,
    case: Case,
    alphabet: &'a Alphabet,
) -> impl Iterator<Item = Line<'a>> + 'a {
    let style = font.style();
    let letters = alphabet.entries().iter().map(move |entry| {
        let request = ResolutionRequest::new(&style, case, &entry.name);
        match resolve(names, &request) {
            Some(character) if request.is_greek() => {
                Line::Mapping { sequence: KeySequence::plain(group, entry.key), character }
            }
            Some(character) => Line::Mapping {
                sequence: KeySequence::styled(group, font.indicator, entry.key),
                character,
            },
            None => Line::Placeholder {
                sequence: KeySequence::styled(group, font.indicator, entry.key),
                style: request.style,
                case,
                letter: &entry.name,
            },
        }
    });
    iter::once(Line::Header { font, case }).chain(letters)
}
