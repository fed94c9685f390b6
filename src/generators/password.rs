// src/generators/password.rs
use crate::models::GenerationOptions;

use super::charset::{class_of, CHARACTER_CLASSES};
use super::random::RandomSource;

pub struct PasswordBuilder {
    source: RandomSource,
}

impl PasswordBuilder {
    pub fn new(source: RandomSource) -> Self {
        PasswordBuilder { source }
    }

    /// Build one password of `length` characters.
    ///
    /// The first pass puts one character of every class at positions
    /// `0..CHARACTER_CLASSES.len()`, the rest are drawn from random classes,
    /// and the shuffle then scatters the guaranteed characters. `length` must
    /// be at least the number of classes; callers get that from argument
    /// validation.
    pub fn build(&mut self, length: usize) -> String {
        let mut buffer = Vec::with_capacity(length);

        for class in CHARACTER_CLASSES {
            buffer.push(self.source.char_from(class));
        }

        while buffer.len() < length {
            let class = &CHARACTER_CLASSES[self.source.index_in(0, CHARACTER_CLASSES.len() - 1)];
            buffer.push(self.source.char_from(class));
        }

        log::trace!("pre-shuffle: {}", String::from_utf8_lossy(&buffer));
        shuffle(&mut buffer, &mut self.source);

        if log::log_enabled!(log::Level::Trace) {
            let placement: Vec<&str> = buffer
                .iter()
                .map(|c| class_of(*c).map_or("?", |class| class.name))
                .collect();
            log::trace!("placement: {}", placement.join(","));
        }

        // Every class is ASCII
        buffer.into_iter().map(char::from).collect()
    }

    // Lazily yields `options.count` passwords from the one generator
    pub fn generate<'a>(&'a mut self, options: &GenerationOptions) -> impl Iterator<Item = String> + 'a {
        let length = options.length;
        (0..options.count).map(move |_| self.build(length))
    }
}

/// Swap every position with one drawn from the whole buffer.
///
/// Unlike Fisher-Yates the swap target is not restricted to the unvisited
/// suffix, so permutations are not equally likely. Output of existing seeds
/// depends on this exact sequence of draws.
pub fn shuffle(buffer: &mut [u8], source: &mut RandomSource) {
    if buffer.is_empty() {
        return;
    }
    let last = buffer.len() - 1;
    for i in 0..buffer.len() {
        let j = source.index_in(0, last);
        buffer.swap(i, j);
    }
}
