//! Fixed navigation bar with scroll-linked highlighting.

use leptos::prelude::*;

use crate::models::SectionId;
use crate::state::PageState;
use crate::theme;

use super::icons;

/// Top navigation bar.
///
/// Renders the brand mark, the desktop link row, and — on narrow viewports —
/// a menu button with a collapsible link panel. The link matching the active
/// section gets the active style; everything else renders the default style.
#[component]
pub fn NavBar(
    /// Shared page state (active section + menu visibility).
    state: RwSignal<PageState>,
    /// Accent part of the brand mark.
    brand_accent: String,
    /// Remainder of the brand mark.
    brand_rest: String,
    /// Navigation action, taking the target section id.
    on_navigate: Callback<&'static str>,
) -> impl IntoView {
    let menu_open = move || state.with(|page| page.menu_open());

    let desktop_links = SectionId::nav_entries()
        .iter()
        .map(|section| {
            let section = *section;
            view! {
                <button
                    class=move || {
                        theme::link_style(state.with(|page| page.active_section()), section)
                            .class()
                    }
                    on:click=move |_| on_navigate.run(section.as_str())
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="site-nav">
            <div class="nav-inner">
                <button class="brand" on:click=move |_| on_navigate.run(SectionId::Hero.as_str())>
                    <span class="accent">{brand_accent}</span>
                    {brand_rest}
                </button>

                <div class="nav-links-desktop">{desktop_links}</div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| state.update(PageState::toggle_menu)
                >
                    <Show when=menu_open fallback=icons::menu>
                        {icons::close()}
                    </Show>
                </button>
            </div>

            <Show when=menu_open>
                <div class="nav-links-mobile">
                    {SectionId::nav_entries()
                        .iter()
                        .map(|section| {
                            let section = *section;
                            view! {
                                <button
                                    class="nav-link-mobile"
                                    on:click=move |_| on_navigate.run(section.as_str())
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
