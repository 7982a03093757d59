//! Hero banner with parallax and scroll indicator.

use leptos::prelude::*;

use crate::models::{HeroContent, SectionId};
use crate::theme;
use crate::tracker;

use super::icons;

/// Full-height landing banner.
///
/// The inner content drifts downward as the page scrolls (parallax over the
/// first 300px), and a bouncing chevron hints that the page continues. Both
/// call-to-action buttons are plain navigation requests.
#[component]
pub fn Hero(
    /// Hero copy.
    content: HeroContent,
    /// Window scroll offset, for the parallax drift.
    scroll_y: ReadSignal<f64>,
    /// Navigation action, taking the target section id.
    on_navigate: Callback<&'static str>,
) -> impl IntoView {
    let section = SectionId::Hero;

    view! {
        <section id=section.as_str() class=format!("hero {}", theme::section_surface(section))>
            <div class="hero-backdrop"></div>
            <div
                class="hero-content"
                style:transform=move || {
                    format!("translateY({}px)", tracker::parallax_offset(scroll_y.get()))
                }
            >
                <h1 class="hero-headline">
                    <span class="accent">{content.headline_accent}</span>
                    {content.headline_rest}
                    <br />
                    <span class="hero-headline-sub">{content.headline_sub}</span>
                </h1>
                <p class="hero-tagline">{content.tagline}</p>
                <div class="hero-actions">
                    <button
                        class="button-primary"
                        on:click=move |_| on_navigate.run(SectionId::Contact.as_str())
                    >
                        "Get In Touch"
                    </button>
                    <button
                        class="button-outline"
                        on:click=move |_| on_navigate.run(SectionId::Services.as_str())
                    >
                        "View Services"
                    </button>
                </div>
            </div>
            <div class="scroll-indicator">{icons::chevron_down()}</div>
        </section>
    }
}
