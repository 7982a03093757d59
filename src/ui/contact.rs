//! Contact section: channels, social links, and a static form.
//!
//! The form is presentational only. There is no submission endpoint and no
//! validation beyond the native input types.

use leptos::prelude::*;

use crate::models::{ContactChannel, SectionId, SocialLink};
use crate::theme;

use super::icons;
use super::reveal::Reveal;

/// Contact channels, social links, and the static message form.
#[component]
pub fn Contact(
    /// Direct contact channels.
    channels: Vec<ContactChannel>,
    /// External profile links.
    socials: Vec<SocialLink>,
) -> impl IntoView {
    let section = SectionId::Contact;

    let channel_rows = channels
        .into_iter()
        .map(|channel| {
            view! {
                <div class="contact-channel">
                    <div class="contact-channel-icon">{icons::icon(&channel.icon)}</div>
                    <div>
                        <h3 class="contact-channel-label">{channel.label}</h3>
                        <p class="contact-channel-value">{channel.value}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let social_buttons = socials
        .into_iter()
        .map(|link| {
            view! {
                <a
                    class="social-link"
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.label
                >
                    {icons::icon(&link.icon)}
                </a>
            }
        })
        .collect_view();

    view! {
        <section id=section.as_str() class=format!("section {}", theme::section_surface(section))>
            <div class="section-inner">
                <Reveal>
                    <div class="section-heading">
                        <h2 class="section-title">"Let's " <span class="accent">"Connect"</span></h2>
                        <p class="section-lede">
                            "Ready to transform your business with cloud solutions? \
                             Let's discuss your project and explore how I can help."
                        </p>
                    </div>
                </Reveal>
                <div class="two-column">
                    <Reveal>
                        <div class="contact-channels">
                            {channel_rows}
                            <div class="social-row">{social_buttons}</div>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=150>
                        <form class="contact-form">
                            <div class="form-field">
                                <label for="contact-name">"Name"</label>
                                <input id="contact-name" type="text" placeholder="Your name" />
                            </div>
                            <div class="form-field">
                                <label for="contact-email">"Email"</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    placeholder="your@email.com"
                                />
                            </div>
                            <div class="form-field">
                                <label for="contact-subject">"Subject"</label>
                                <input
                                    id="contact-subject"
                                    type="text"
                                    placeholder="Project discussion"
                                />
                            </div>
                            <div class="form-field">
                                <label for="contact-message">"Message"</label>
                                <textarea
                                    id="contact-message"
                                    rows="5"
                                    placeholder="Tell me about your project..."
                                ></textarea>
                            </div>
                            <button type="submit" class="button-primary button-full">
                                "Send Message"
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
