//! Services section.

use leptos::prelude::*;

use crate::models::{SectionId, Service};
use crate::theme;

use super::icons;
use super::reveal::Reveal;

/// Service offerings rendered as a staggered card grid.
#[component]
pub fn Services(
    /// Service offerings rendered as a card grid.
    services: Vec<Service>,
) -> impl IntoView {
    let section = SectionId::Services;

    let cards = services
        .into_iter()
        .enumerate()
        .map(|(i, service)| {
            view! {
                <Reveal delay_ms={(i as u32) * 100}>
                    <div class="card">
                        <div class="card-icon card-icon-large">{icons::icon(&service.icon)}</div>
                        <h3 class="card-title">{service.title}</h3>
                        <p class="card-copy">{service.description}</p>
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
                        <h2 class="section-title">"My " <span class="accent">"Services"</span></h2>
                        <p class="section-lede">
                            "Comprehensive cloud solutions tailored to your business needs."
                        </p>
                    </div>
                </Reveal>
                <div class="card-grid three-wide">{cards}</div>
            </div>
        </section>
    }
}
