//! Style mapping for navigation and section chrome.
//!
//! Components never compare section ids against class strings directly;
//! the pure functions here map state to style variants so the selection
//! logic stays independently testable.

use crate::models::SectionId;

/// Visual variant of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// The link for the section currently crossing the reference line.
    Active,
    /// Every other link.
    Default,
}

impl LinkStyle {
    /// CSS class for desktop navigation links.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            LinkStyle::Active => "nav-link nav-link-active",
            LinkStyle::Default => "nav-link",
        }
    }
}

/// Style variant for `candidate`'s link given the currently active section.
#[must_use]
pub fn link_style(current: SectionId, candidate: SectionId) -> LinkStyle {
    if current == candidate {
        LinkStyle::Active
    } else {
        LinkStyle::Default
    }
}

/// Surface class for a section block.
///
/// Sections alternate between the two page surfaces, hero excluded (it
/// draws its own full-bleed background).
#[must_use]
pub const fn section_surface(section: SectionId) -> &'static str {
    match section {
        SectionId::Hero => "surface-hero",
        SectionId::About | SectionId::Services | SectionId::Certifications => "surface-raised",
        SectionId::Skills | SectionId::Experience | SectionId::Contact => "surface-base",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_style_matches_only_active() {
        assert_eq!(
            link_style(SectionId::Contact, SectionId::Contact),
            LinkStyle::Active
        );
        assert_eq!(
            link_style(SectionId::Contact, SectionId::About),
            LinkStyle::Default
        );
    }

    #[test]
    fn test_exactly_one_active_link() {
        let current = SectionId::Skills;
        let active = SectionId::ALL
            .into_iter()
            .filter(|s| link_style(current, *s) == LinkStyle::Active)
            .count();
        assert_eq!(active, 1);
    }

    #[test]
    fn test_link_classes() {
        assert_eq!(LinkStyle::Active.class(), "nav-link nav-link-active");
        assert_eq!(LinkStyle::Default.class(), "nav-link");
    }

    #[test]
    fn test_adjacent_sections_alternate_surfaces() {
        let surfaces: Vec<&str> = SectionId::ALL[1..]
            .iter()
            .map(|s| section_surface(*s))
            .collect();
        for pair in surfaces.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
