//! Technical skills section.

use leptos::prelude::*;

use crate::models::{SectionId, SkillGroup};
use crate::theme;

use super::icons;
use super::reveal::Reveal;

/// Skill groups rendered as a staggered card grid.
#[component]
pub fn Skills(
    /// Skill groups rendered as a card grid.
    groups: Vec<SkillGroup>,
) -> impl IntoView {
    let section = SectionId::Skills;

    let cards = groups
        .into_iter()
        .enumerate()
        .map(|(i, group)| {
            let tags = group
                .skills
                .into_iter()
                .map(|skill| view! { <span class="tag">{skill}</span> })
                .collect_view();
            view! {
                <Reveal delay_ms={(i as u32) * 100}>
                    <div class="card">
                        <div class="card-icon">{icons::icon(&group.icon)}</div>
                        <h3 class="card-title">{group.title}</h3>
                        <div class="tag-row">{tags}</div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id=section.as_str() class=format!("section {}", theme::section_surface(section))>
            <div class="section-inner">
                <Reveal>
                    <div class="section-heading">
                        <h2 class="section-title">
                            "Technical " <span class="accent">"Skills"</span>
                        </h2>
                        <p class="section-lede">
                            "Expertise across cloud platforms, infrastructure as code, \
                             and modern DevOps practices."
                        </p>
                    </div>
                </Reveal>
                <div class="card-grid three-wide">{cards}</div>
            </div>
        </section>
    }
}
