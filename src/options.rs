//! Masking configuration.

use std::borrow::Cow;

/// Default placeholder used for key-based wholesale redaction.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Default character used to build mask fillers.
pub const MASK_CHAR: char = '*';

/// Configuration for a masking run.
///
/// Both knobs are optional: [`MaskOptions::default`] uses
/// [`REDACTED_PLACEHOLDER`] and [`MASK_CHAR`].
///
/// ```
/// use hide_pii::MaskOptions;
///
/// let options = MaskOptions::default()
///     .with_placeholder("HIDDEN")
///     .with_mask_char('#');
/// assert_eq!(options.placeholder(), "HIDDEN");
/// assert_eq!(options.mask_char(), '#');
/// ```
// Use `Cow` so callers can provide borrowed or owned placeholders.
#[derive(Clone, Debug)]
pub struct MaskOptions {
    /// Replacement value for entries under sensitive keys.
    placeholder: Cow<'static, str>,
    /// Symbol used to build fillers for pattern-based masking.
    mask_char: char,
}

impl MaskOptions {
    /// Constructs the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a specific placeholder for key-based redaction.
    #[must_use]
    pub fn with_placeholder<P>(mut self, placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.placeholder = placeholder.into();
        self
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// The placeholder substituted for values under sensitive keys.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The character used as the filler unit.
    #[must_use]
    pub fn mask_char(&self) -> char {
        self.mask_char
    }
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            placeholder: Cow::Borrowed(REDACTED_PLACEHOLDER),
            mask_char: MASK_CHAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let options = MaskOptions::default();
        assert_eq!(options.placeholder(), REDACTED_PLACEHOLDER);
        assert_eq!(options.mask_char(), MASK_CHAR);
    }

    #[test]
    fn builders_override_defaults() {
        let options = MaskOptions::new().with_placeholder("***").with_mask_char('x');
        assert_eq!(options.placeholder(), "***");
        assert_eq!(options.mask_char(), 'x');
    }

    #[test]
    fn accepts_owned_placeholder() {
        let options = MaskOptions::new().with_placeholder(String::from("🔒"));
        assert_eq!(options.placeholder(), "🔒");
    }
}
