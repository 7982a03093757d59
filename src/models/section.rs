//! Section registry for the single-page layout.
//!
//! The page is a fixed, ordered sequence of named regions. Each region has a
//! stable string identifier (used as the DOM element id) and a display label
//! (used for navigation links). The registry order is the vertical order in
//! which sections are rendered, and it is also the tie-break order for
//! scroll-position detection.

use serde::{Deserialize, Serialize};

/// Identifier for one of the page's named regions.
///
/// Variants are declared in registry order, top to bottom. The enum is the
/// single source of truth for section ids: anything holding a `SectionId` is
/// guaranteed to refer to a known region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Landing banner with headline and calls to action.
    Hero,
    /// Professional background and highlights.
    About,
    /// Technical skill groups.
    Skills,
    /// Offered services.
    Services,
    /// Recent projects and engagements.
    Experience,
    /// Certifications and achievements.
    Certifications,
    /// Contact channels and message form.
    Contact,
}

impl SectionId {
    /// All sections in registry (rendering) order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Services,
        SectionId::Experience,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    /// Stable string identifier, used as the DOM element id and anchor.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Services => "services",
            SectionId::Experience => "experience",
            SectionId::Certifications => "certifications",
            SectionId::Contact => "contact",
        }
    }

    /// Human-readable label for navigation links.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Services => "Services",
            SectionId::Experience => "Experience",
            SectionId::Certifications => "Certifications",
            SectionId::Contact => "Contact",
        }
    }

    /// Sections listed in the navigation bar, in registry order.
    ///
    /// The hero is reachable through the brand mark instead of a dedicated
    /// link, so it is excluded here.
    const NAV_ENTRIES: [SectionId; 6] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Services,
        SectionId::Experience,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    /// Sections listed in the navigation bar.
    #[must_use]
    pub fn nav_entries() -> &'static [SectionId] {
        &Self::NAV_ENTRIES
    }

    /// Looks up a section by its string identifier.
    ///
    /// Returns `None` for ids not present in the registry. Callers treat an
    /// unknown id as a silent no-op rather than an error.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_starts_at_hero() {
        assert_eq!(SectionId::ALL[0], SectionId::Hero);
        assert_eq!(SectionId::ALL[SectionId::ALL.len() - 1], SectionId::Contact);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in SectionId::ALL.iter().enumerate() {
            for b in &SectionId::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::parse(section.as_str()), Some(section));
        }
    }

    #[test]
    fn test_parse_unknown_id() {
        assert_eq!(SectionId::parse("blog"), None);
        assert_eq!(SectionId::parse(""), None);
        assert_eq!(SectionId::parse("Hero"), None);
    }

    #[test]
    fn test_nav_entries_exclude_hero() {
        assert!(!SectionId::nav_entries().contains(&SectionId::Hero));
        assert_eq!(SectionId::nav_entries().len(), SectionId::ALL.len() - 1);
    }

    #[test]
    fn test_serde_uses_stable_ids() {
        let json = serde_json::to_string(&SectionId::Certifications).unwrap();
        assert_eq!(json, "\"certifications\"");
        let parsed: SectionId = serde_json::from_str("\"skills\"").unwrap();
        assert_eq!(parsed, SectionId::Skills);
    }
}
