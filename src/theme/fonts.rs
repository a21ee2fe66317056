//! Font-family resolution against an explicit registry.
//!
//! The pure-Rust text path used by the plotters adapter does not discover
//! OS fonts; a family renders only after it has been registered (see
//! [`crate::plotters_adapter::register_font_bytes`]). [`FontBook`] is the
//! crate's view of that registry: a list of canonical family names, matched
//! case-insensitively by substring.
//!
//! Theme construction takes the resolver as a trait object, so tests can
//! inject a fake instead of depending on whatever fonts a host machine has.

/// Family every theme can fall back to. Always considered registered.
pub const GENERIC_SANS_FAMILY: &str = "sans-serif";

/// Capability for turning a requested font family into a canonical,
/// renderable one.
pub trait FontResolver {
    /// Canonical registered name for `family`, if it resolves unambiguously.
    fn resolve(&self, family: &str) -> Option<String>;
}

/// Explicit font-family registry.
///
/// Matching is case-insensitive substring: a request of `"arial"` resolves
/// against a registered `"Arial Narrow"`. A request that matches zero or
/// several registered families resolves to nothing, and theme construction
/// falls back to [`GENERIC_SANS_FAMILY`].
#[derive(Debug, Clone, Default)]
pub struct FontBook {
    families: Vec<String>,
}

impl FontBook {
    /// Registry listing only the generic sans-serif family.
    pub fn standard() -> Self {
        Self::with_families([GENERIC_SANS_FAMILY])
    }

    /// Registry over the given canonical family names.
    pub fn with_families<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            families: families.into_iter().map(Into::into).collect(),
        }
    }

    /// Add one canonical family name.
    pub fn add_family(&mut self, family: impl Into<String>) {
        self.families.push(family.into());
    }

    /// Registered canonical names, in insertion order.
    pub fn families(&self) -> &[String] {
        &self.families
    }
}

impl FontResolver for FontBook {
    fn resolve(&self, family: &str) -> Option<String> {
        let needle = family.to_lowercase();
        let mut hits = self
            .families
            .iter()
            .filter(|f| f.to_lowercase().contains(&needle));
        match (hits.next(), hits.next()) {
            // Exactly one hit: that registered name is the canonical answer.
            (Some(hit), None) => Some(hit.clone()),
            // Zero hits or ambiguous: unresolved.
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> FontBook {
        FontBook::with_families(["Arial Narrow", "Courier New", GENERIC_SANS_FAMILY])
    }

    #[test]
    fn exact_name_resolves_to_itself() {
        assert_eq!(
            book().resolve("Courier New"),
            Some("Courier New".to_string())
        );
    }

    #[test]
    fn resolves_case_insensitive_substring_to_canonical_name() {
        assert_eq!(book().resolve("arial"), Some("Arial Narrow".to_string()));
        assert_eq!(book().resolve("COURIER"), Some("Courier New".to_string()));
    }

    #[test]
    fn unknown_family_resolves_to_none() {
        assert_eq!(book().resolve("Comic Sans"), None);
    }

    #[test]
    fn ambiguous_match_resolves_to_none() {
        let book = FontBook::with_families(["Arial", "Arial Narrow"]);
        assert_eq!(book.resolve("arial"), None);
        // A longer request that hits only one of them still resolves.
        assert_eq!(book.resolve("narrow"), Some("Arial Narrow".to_string()));
    }

    #[test]
    fn standard_book_only_knows_the_generic_family() {
        let book = FontBook::standard();
        assert_eq!(book.families(), [GENERIC_SANS_FAMILY.to_string()]);
        assert_eq!(
            book.resolve("sans"),
            Some(GENERIC_SANS_FAMILY.to_string())
        );
    }

    #[test]
    fn add_family_extends_the_registry() {
        let mut book = FontBook::standard();
        book.add_family("DejaVu Sans");
        assert_eq!(book.resolve("dejavu"), Some("DejaVu Sans".to_string()));
    }
}
