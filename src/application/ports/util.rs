// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Derives a lowercase, hyphen-joined ASCII slug. May return an empty
    /// string when the input holds nothing sluggable.
    fn slugify(&self, input: &str) -> String;
}

/// Source of the tail appended to a slug that is already taken.
pub trait SuffixGenerator: Send + Sync {
    fn next_suffix(&self) -> String;
}
