use anyhow::*;
use log::debug;
use std::collections::HashMap;
use unic_ucd_name::Name;

/// A read-only database mapping Unicode character names to characters.
pub trait CharacterNames {
    /// Finds the character with the given name. Names are matched without regard to case.
    fn lookup(&self, name: &str) -> Option<char>;
}

/// An index of every named character in the Unicode Character Database.
pub struct UcdNames {
    by_name: HashMap<String, char>,
}
impl UcdNames {
    /// Builds the index. This walks every code point, so it should only be done once.
    pub fn load() -> Result<Self> {
        let mut by_name = HashMap::new();
        for ch in (0..=char::MAX as u32).filter_map(char::from_u32) {
            if let Some(name) = Name::of(ch) {
                by_name.insert(name.to_string(), ch);
            }
        }
        ensure!(!by_name.is_empty(), "Unicode character name database is empty.");
        debug!("Loaded {} Unicode character names.", by_name.len());
        Ok(UcdNames { by_name })
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
impl CharacterNames for UcdNames {
    fn lookup(&self, name: &str) -> Option<char> {
        self.by_name.get(&name.to_ascii_uppercase()).copied()
    }
}

/// A hand-built database. Keys must be uppercase.
impl CharacterNames for HashMap<String, char> {
    fn lookup(&self, name: &str) -> Option<char> {
        self.get(&name.to_ascii_uppercase()).copied()
    }
}
