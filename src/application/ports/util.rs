// src/application/ports/util.rs

/// Turns a headline into a URL slug fragment. Implementations must
/// transliterate non-ASCII input (Urdu headlines included) so the
/// result is safe in a path segment.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
