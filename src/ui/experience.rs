//! Recent projects section.

use leptos::prelude::*;

use crate::models::{Project, SectionId};
use crate::theme;

use super::reveal::Reveal;

/// Recent projects rendered as a two-column card grid.
#[component]
pub fn Experience(
    /// Recent projects rendered as a two-column grid.
    projects: Vec<Project>,
) -> impl IntoView {
    let section = SectionId::Experience;

    let cards = projects
        .into_iter()
        .enumerate()
        .map(|(i, project)| {
            let technologies = project
                .technologies
                .into_iter()
                .map(|tech| view! { <span class="tag">{tech}</span> })
                .collect_view();
            view! {
                <Reveal delay_ms={(i as u32) * 100}>
                    <div class="card">
                        <div class="project-header">
                            <div>
                                <h3 class="card-title">{project.title}</h3>
                                <p class="project-company accent">{project.company}</p>
                            </div>
                            <span class="project-duration">{project.duration}</span>
                        </div>
                        <p class="card-copy">{project.description}</p>
                        <div class="tag-row">{technologies}</div>
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
                            "Recent " <span class="accent">"Projects"</span>
                        </h2>
                        <p class="section-lede">
                            "Successful cloud transformations and infrastructure \
                             implementations."
                        </p>
                    </div>
                </Reveal>
                <div class="card-grid two-wide">{cards}</div>
            </div>
        </section>
    }
}
