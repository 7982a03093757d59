//! About section.

use leptos::prelude::*;

use crate::models::{AboutContent, SectionId};
use crate::theme;

use super::icons;
use super::reveal::Reveal;

/// About section: professional background, highlights, and portrait.
#[component]
pub fn About(
    /// About copy, highlights, and portrait image.
    content: AboutContent,
) -> impl IntoView {
    let section = SectionId::About;

    let paragraphs = content
        .paragraphs
        .into_iter()
        .map(|text| view! { <p class="section-copy">{text}</p> })
        .collect_view();

    let highlights = content
        .highlights
        .into_iter()
        .map(|highlight| {
            view! {
                <div class="highlight-badge">
                    {icons::icon(&highlight.icon)}
                    <span>{highlight.text}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=section.as_str() class=format!("section {}", theme::section_surface(section))>
            <div class="section-inner two-column">
                <Reveal>
                    <h2 class="section-title">"About " <span class="accent">"Me"</span></h2>
                    {paragraphs}
                    <div class="highlight-row">{highlights}</div>
                </Reveal>
                <Reveal delay_ms=150>
                    <figure class="portrait">
                        <img src=content.image_url alt="Professional workspace" />
                    </figure>
                </Reveal>
            </div>
        </section>
    }
}
