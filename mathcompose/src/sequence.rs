use anyhow::*;
use std::{collections::BTreeSet, fmt};

/// The key that prefixes every rule for a styled letter.
pub const FONT_KEY: char = 'f';

/// The keys typed after `<Multi_key>` to produce a character.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Hash)]
pub struct KeySequence {
    keys: Vec<char>,
}
impl KeySequence {
    pub fn new(keys: impl IntoIterator<Item = char>) -> Self {
        KeySequence { keys: keys.into_iter().collect() }
    }

    /// `<f>`, then the group key if any, then the font indicator and the letter's key.
    pub fn styled(group: Option<char>, indicator: char, key: char) -> Self {
        KeySequence::new(Some(FONT_KEY).into_iter().chain(group).chain([indicator, key]))
    }

    /// The group key if any, then the letter's key.
    pub fn plain(group: Option<char>, key: char) -> Self {
        KeySequence::new(group.into_iter().chain(Some(key)))
    }

    pub fn keys(&self) -> &[char] {
        &self.keys
    }

    pub fn is_prefix_of(&self, other: &KeySequence) -> bool {
        other.keys.starts_with(&self.keys)
    }
}
impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Multi_key>")?;
        for key in &self.keys {
            write!(f, " <{key}>")?;
        }
        fmt::Result::Ok(())
    }
}

/// Tracks the sequences already written, rejecting any that would collide with them.
///
/// Compose rules collide both when they are identical and when one is a prefix of another,
/// as the input method can't tell when the shorter sequence is finished.
#[derive(Clone, Default, Debug)]
pub struct SequenceSet {
    sequences: BTreeSet<KeySequence>,
}
impl SequenceSet {
    pub fn insert(&mut self, sequence: KeySequence) -> Result<()> {
        if self.sequences.contains(&sequence) {
            bail!("Duplicate key sequence: {sequence}");
        }
        for len in 1..sequence.keys.len() {
            let prefix = KeySequence::new(sequence.keys[..len].iter().copied());
            if self.sequences.contains(&prefix) {
                bail!("Key sequence {sequence} is shadowed by {prefix}");
            }
        }
        // anything the new sequence is a prefix of sorts directly after it
        if let Some(next) = self.sequences.range(&sequence..).next() {
            if sequence.is_prefix_of(next) {
                bail!("Key sequence {sequence} shadows {next}");
            }
        }
        self.sequences.insert(sequence);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
