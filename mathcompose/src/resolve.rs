//! Finds the Unicode character for a letter in a given font style.
//!
//! Characters are found by name. Most styled letters are named
//! `MATHEMATICAL <STYLE> <CASE> <LETTER>`, but letters encoded before the Mathematical
//! Alphanumeric Symbols block existed keep their older names (`SCRIPT CAPITAL B`,
//! `BLACK-LETTER CAPITAL C`, `PLANCK CONSTANT`). Each naming convention is a candidate, and
//! candidates are tried in order until one names a real character.

use crate::{names::CharacterNames, tables::Case};
use log::debug;

/// The style name that selects the plain Greek letters.
pub const GREEK_STYLE: &str = "GREEK";

/// A letter to look up, in a given style and case.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Hash)]
pub struct ResolutionRequest {
    pub style: String,
    pub case: Case,
    pub letter: String,
}
impl ResolutionRequest {
    pub fn new(style: &str, case: Case, letter: &str) -> Self {
        ResolutionRequest {
            style: style.to_ascii_uppercase(),
            case,
            letter: letter.to_ascii_uppercase(),
        }
    }

    pub fn is_greek(&self) -> bool {
        self.style == GREEK_STYLE
    }

    fn candidates(&self) -> &'static [CandidateName] {
        if self.is_greek() {
            GREEK_CANDIDATES
        } else {
            STYLED_CANDIDATES
        }
    }

    /// The names tried for this request, in order.
    pub fn candidate_names(&self) -> impl Iterator<Item = String> + '_ {
        self.candidates().iter().filter_map(move |candidate| candidate(self))
    }
}

type CandidateName = fn(&ResolutionRequest) -> Option<String>;

// Plain Greek letters have exactly one name; nothing else is attempted for them.
const GREEK_CANDIDATES: &[CandidateName] = &[greek_letter];
const STYLED_CANDIDATES: &[CandidateName] =
    &[planck_constant, mathematical, unprefixed, black_letter];

fn greek_letter(req: &ResolutionRequest) -> Option<String> {
    Some(format!("GREEK {} LETTER {}", req.case, req.letter))
}

// The italic small h is encoded as U+210E, not in the mathematical block.
fn planck_constant(req: &ResolutionRequest) -> Option<String> {
    let is_italic_h = req.style == "ITALIC" && req.case == Case::Small && req.letter == "H";
    is_italic_h.then(|| String::from("PLANCK CONSTANT"))
}

fn mathematical(req: &ResolutionRequest) -> Option<String> {
    Some(format!("MATHEMATICAL {} {} {}", req.style, req.case, req.letter))
}

fn unprefixed(req: &ResolutionRequest) -> Option<String> {
    Some(format!("{} {} {}", req.style, req.case, req.letter))
}

fn black_letter(req: &ResolutionRequest) -> Option<String> {
    (req.style == "FRAKTUR").then(|| format!("BLACK-LETTER {} {}", req.case, req.letter))
}

/// Finds the character for a request, or `None` if no candidate name exists.
pub fn resolve<N: CharacterNames + ?Sized>(names: &N, req: &ResolutionRequest) -> Option<char> {
    let found = req
        .candidate_names()
        .find_map(|name| names.lookup(&name).map(|ch| (name, ch)));
    match found {
        Some((name, ch)) => {
            debug!("Resolved {} {} {} as {name} (U+{:04X})", req.style, req.case, req.letter, ch as u32);
            Some(ch)
        }
        None => {
            debug!("No character found for {} {} {}", req.style, req.case, req.letter);
            None
        }
    }
}
