//! Certifications section.

use leptos::prelude::*;

use crate::models::{Certification, SectionId};
use crate::theme;

use super::icons;
use super::reveal::Reveal;

/// Certifications rendered as a staggered card grid.
#[component]
pub fn Certifications(
    /// Certifications rendered as a card grid.
    certifications: Vec<Certification>,
) -> impl IntoView {
    let section = SectionId::Certifications;

    let cards = certifications
        .into_iter()
        .enumerate()
        .map(|(i, cert)| {
            view! {
                <Reveal delay_ms={(i as u32) * 100}>
                    <div class="card">
                        <div class=format!("cert-badge {}", cert.accent_class)>
                            {icons::icon("award")}
                        </div>
                        <h3 class="card-title">{cert.title}</h3>
                        <p class="cert-level accent">{cert.level}</p>
                        <p class="cert-provider">{cert.provider}</p>
                        <p class="cert-year">{cert.year}</p>
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
                            <span class="accent">"Certifications"</span>
                            " & Achievements"
                        </h2>
                        <p class="section-lede">
                            "Industry-recognized certifications and professional \
                             achievements."
                        </p>
                    </div>
                </Reveal>
                <div class="card-grid three-wide">{cards}</div>
            </div>
        </section>
    }
}
