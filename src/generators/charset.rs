// src/generators/charset.rs

/// A named, fixed alphabet that every password draws at least one character from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClass {
    pub name: &'static str,
    pub chars: &'static [u8],
}

impl CharacterClass {
    pub fn contains(&self, c: u8) -> bool {
        self.chars.contains(&c)
    }
}

pub const UPPER: CharacterClass = CharacterClass {
    name: "upper",
    chars: b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
};

pub const LOWER: CharacterClass = CharacterClass {
    name: "lower",
    chars: b"abcdefghijklmnopqrstuvwxyz",
};

pub const DIGIT: CharacterClass = CharacterClass {
    name: "digit",
    chars: b"0123456789",
};

pub const SPECIAL: CharacterClass = CharacterClass {
    name: "special",
    chars: b"!@#$%^&*()-_=+[]{}|;:,.<>?",
};

// Order matters: the builder seeds positions 0..3 in this order
pub static CHARACTER_CLASSES: &[CharacterClass] = &[UPPER, LOWER, DIGIT, SPECIAL];

// Find the class a character belongs to
pub fn class_of(c: u8) -> Option<&'static CharacterClass> {
    CHARACTER_CLASSES.iter().find(|class| class.contains(c))
}
