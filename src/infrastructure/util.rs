use crate::application::ports::util::{SlugGenerator, SuffixGenerator};
use rand::Rng;

/// Symbols that read as a word and should survive slugification as that word.
const SYMBOL_WORDS: &[(char, &str)] = &[
    ('♥', "love"),
    ('&', "and"),
    ('|', "or"),
    ('<', "less"),
    ('>', "greater"),
    ('$', "dollar"),
    ('%', "percent"),
    ('¢', "cent"),
    ('£', "pound"),
    ('¥', "yen"),
    ('€', "euro"),
    ('₹', "indian rupee"),
    ('₿', "bitcoin"),
    ('∞', "infinity"),
    ('∑', "sum"),
    ('©', "c"),
    ('®', "r"),
    ('™', "tm"),
];

fn word_for(c: char) -> Option<&'static str> {
    SYMBOL_WORDS
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, word)| *word)
}

/// Expands word-like symbols, then lets the `slug` crate transliterate the
/// rest and collapse separators.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut expanded = String::with_capacity(input.len());
        for c in input.chars() {
            match word_for(c) {
                Some(word) => {
                    expanded.push(' ');
                    expanded.push_str(word);
                    expanded.push(' ');
                }
                None => expanded.push(c),
            }
        }
        slug::slugify(expanded)
    }
}

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub const DEFAULT_SUFFIX_LENGTH: usize = 8;

#[derive(Clone)]
pub struct RandomSuffixGenerator {
    length: usize,
}

impl RandomSuffixGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomSuffixGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIX_LENGTH)
    }
}

impl SuffixGenerator for RandomSuffixGenerator {
    fn next_suffix(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| char::from(SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())]))
            .collect()
    }
}
