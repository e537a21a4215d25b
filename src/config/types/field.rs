//! Type-safe config field path.

/// A dotted path to a config field, used to label diagnostics.
///
/// Sections expose their field paths as associated constants:
///
/// ```ignore
/// impl KeysSection {
///     pub const PREFIX: FieldPath = FieldPath::new("keys.prefix");
/// }
///
/// diag.error(KeysSection::PREFIX, "must be relative");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
