use crate::kedmanee::{KEDMANEE_MAP, KEDMANEE_PAIRS};
use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref KEDMANEE: CharacterMap = CharacterMap {
        pairs: KEDMANEE_PAIRS,
        map: &KEDMANEE_MAP,
    };
}

/// Fixed character-for-character keyboard remapping.
///
/// Characters without an entry map to themselves, so [`CharacterMap::translate`]
/// is total and preserves the char count of its input.
#[derive(Debug)]
pub struct CharacterMap {
    pairs: &'static [(char, char)],
    map: &'static HashMap<char, char>,
}

impl CharacterMap {
    /// The process-wide US-QWERTY to Thai Kedmanee map.
    pub fn kedmanee() -> &'static CharacterMap {
        &KEDMANEE
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    /// Mapped glyph, or `c` itself when the key is not in the table.
    pub fn map_char(&self, c: char) -> char {
        self.get(c).unwrap_or(c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Table entries in keyboard order.
    pub fn entries(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn translate(&self, input: &str) -> String {
        input.chars().map(|c| self.map_char(c)).collect()
    }
}

/// Converts text typed on US keys while the Thai layout was intended.
pub fn translate(input: &str) -> String {
    CharacterMap::kedmanee().translate(input)
}
