//! Browser DOM access for scroll tracking and navigation.
//!
//! All geometry reads and scrolling side effects are funneled through this
//! module so the selection rules in [`crate::tracker`] stay free of
//! `web_sys` types. Lookups for elements that are not (or not yet) in the
//! document return `None` and the corresponding action is skipped.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

use crate::models::SectionId;
use crate::tracker::SectionBounds;

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Viewport-relative bounds of one section's DOM element.
#[must_use]
pub fn section_bounds(section: SectionId) -> Option<SectionBounds> {
    let element = document()?.get_element_by_id(section.as_str())?;
    let rect = element.get_bounding_client_rect();
    Some(SectionBounds::new(rect.top(), rect.bottom()))
}

/// Measures every rendered section, in registry order.
///
/// Sections missing from the document are skipped, so the result is safe to
/// feed straight into [`crate::state::PageState::record_scroll`].
#[must_use]
pub fn measure_sections() -> Vec<(SectionId, SectionBounds)> {
    SectionId::ALL
        .into_iter()
        .filter_map(|section| section_bounds(section).map(|bounds| (section, bounds)))
        .collect()
}

/// Smooth-scrolls the viewport so the section's top aligns with the
/// viewport top. A missing element is silently ignored.
pub fn scroll_to(section: SectionId) {
    let Some(doc) = document() else { return };
    let Some(element) = doc.get_element_by_id(section.as_str()) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Current vertical scroll offset of the window.
#[must_use]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
