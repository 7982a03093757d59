//! Scroll-position tracking for active-section detection.
//!
//! The navigation bar highlights the section currently crossing a fixed
//! reference line near the top of the viewport. This module contains the
//! pure selection logic; reading actual element geometry from the DOM lives
//! in the UI layer so the rules here stay testable without a browser.

use crate::models::SectionId;

/// Distance of the reference line from the viewport top, in CSS pixels.
///
/// A section counts as "current" while it straddles this line.
pub const REFERENCE_OFFSET_PX: f64 = 100.0;

/// Scroll range over which the hero parallax effect plays out, in pixels.
const PARALLAX_SCROLL_RANGE: f64 = 300.0;

/// Maximum downward offset applied to the hero content by the parallax.
const PARALLAX_MAX_OFFSET: f64 = 100.0;

/// Viewport-relative bounding box of a rendered section.
///
/// `top` and `bottom` are the distances of the section's edges from the
/// viewport top; both go negative once the section scrolls past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    /// Top edge offset from the viewport top.
    pub top: f64,
    /// Bottom edge offset from the viewport top.
    pub bottom: f64,
}

impl SectionBounds {
    /// Creates bounds from top and bottom edge offsets.
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether this section currently straddles the reference line.
    #[must_use]
    pub fn crosses_reference(&self) -> bool {
        self.top <= REFERENCE_OFFSET_PX && self.bottom >= REFERENCE_OFFSET_PX
    }
}

/// Selects the active section for the current scroll position.
///
/// Scans `bounds` in the order given (callers pass registry order) and
/// returns the first section crossing the reference line. Adjacent sections
/// cannot both match unless they overlap; if they do, the earlier entry
/// wins. When no section crosses the line — possible while the page is
/// between layouts or mid-bounce on overscroll — the previous selection is
/// kept so the highlight never goes blank.
#[must_use]
pub fn active_section(
    previous: SectionId,
    bounds: &[(SectionId, SectionBounds)],
) -> SectionId {
    bounds
        .iter()
        .find(|(_, b)| b.crosses_reference())
        .map_or(previous, |(id, _)| *id)
}

/// Vertical parallax offset for the hero content.
///
/// Maps scroll positions in `0..=300` linearly onto `0..=100` and clamps
/// outside that range, mirroring the original banner effect.
#[must_use]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    (scroll_y.clamp(0.0, PARALLAX_SCROLL_RANGE) / PARALLAX_SCROLL_RANGE) * PARALLAX_MAX_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Synthetic full-page layout: seven adjacent 600px sections with the
    /// viewport scrolled by `scroll_y`.
    fn stacked_bounds(scroll_y: f64) -> Vec<(SectionId, SectionBounds)> {
        const SECTION_HEIGHT: f64 = 600.0;
        SectionId::ALL
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let top = (i as f64) * SECTION_HEIGHT - scroll_y;
                (id, SectionBounds::new(top, top + SECTION_HEIGHT))
            })
            .collect()
    }

    #[test]
    fn test_crosses_reference_straddling() {
        assert!(SectionBounds::new(50.0, 500.0).crosses_reference());
        assert!(SectionBounds::new(100.0, 100.0).crosses_reference());
        assert!(SectionBounds::new(-400.0, 120.0).crosses_reference());
    }

    #[test]
    fn test_crosses_reference_outside() {
        // Entirely above the line
        assert!(!SectionBounds::new(-500.0, 40.0).crosses_reference());
        // Entirely below the line
        assert!(!SectionBounds::new(150.0, 700.0).crosses_reference());
    }

    #[test]
    fn test_active_section_selects_straddling_section() {
        // Skills occupies rows 50..500; the 100px line falls inside it.
        let bounds = vec![
            (SectionId::About, SectionBounds::new(-400.0, 50.0)),
            (SectionId::Skills, SectionBounds::new(50.0, 500.0)),
            (SectionId::Services, SectionBounds::new(500.0, 1000.0)),
        ];
        assert_eq!(active_section(SectionId::Hero, &bounds), SectionId::Skills);
    }

    #[test]
    fn test_active_section_keeps_previous_when_nothing_matches() {
        let bounds = vec![
            (SectionId::Hero, SectionBounds::new(-900.0, -300.0)),
            (SectionId::About, SectionBounds::new(300.0, 900.0)),
        ];
        assert_eq!(active_section(SectionId::About, &bounds), SectionId::About);
        assert_eq!(active_section(SectionId::Hero, &bounds), SectionId::Hero);
    }

    #[test]
    fn test_active_section_first_match_wins_on_overlap() {
        // Overlapping sections both straddle the line; registry order decides.
        let bounds = vec![
            (SectionId::Skills, SectionBounds::new(0.0, 300.0)),
            (SectionId::Services, SectionBounds::new(50.0, 400.0)),
        ];
        assert_eq!(active_section(SectionId::Hero, &bounds), SectionId::Skills);
    }

    #[test]
    fn test_active_section_walks_the_full_page() {
        // At load the hero is active; scrolling moves the highlight through
        // the registry in order until contact is reached.
        assert_eq!(
            active_section(SectionId::Hero, &stacked_bounds(0.0)),
            SectionId::Hero
        );
        assert_eq!(
            active_section(SectionId::Hero, &stacked_bounds(650.0)),
            SectionId::About
        );
        assert_eq!(
            active_section(SectionId::About, &stacked_bounds(3_650.0)),
            SectionId::Contact
        );
    }

    #[test]
    fn test_active_section_boundary_is_inclusive() {
        // Section top exactly on the line
        let bounds = vec![(SectionId::About, SectionBounds::new(100.0, 700.0))];
        assert_eq!(active_section(SectionId::Hero, &bounds), SectionId::About);

        // Section bottom exactly on the line
        let bounds = vec![(SectionId::About, SectionBounds::new(-500.0, 100.0))];
        assert_eq!(active_section(SectionId::Hero, &bounds), SectionId::About);
    }

    #[test]
    fn test_parallax_offset_mapping() {
        assert!((parallax_offset(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((parallax_offset(150.0) - 50.0).abs() < f64::EPSILON);
        assert!((parallax_offset(300.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parallax_offset_clamps() {
        assert!((parallax_offset(-50.0) - 0.0).abs() < f64::EPSILON);
        assert!((parallax_offset(10_000.0) - 100.0).abs() < f64::EPSILON);
    }
}
