//! Root component: page state ownership and event wiring.

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use crate::content;
use crate::state::PageState;

use super::about::About;
use super::certifications::Certifications;
use super::contact::Contact;
use super::dom;
use super::experience::Experience;
use super::footer::Footer;
use super::hero::Hero;
use super::navbar::NavBar;
use super::services::Services;
use super::skills::Skills;

/// The portfolio page.
///
/// Owns the two pieces of interactive state — the active section and the
/// mobile menu flag — inside a single [`PageState`] signal, plus the raw
/// scroll offset used by the hero parallax. Children receive the signal and
/// a navigation callback as props; none of them hold state of their own.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let profile = content::profile();
    let state = RwSignal::new(PageState::new());
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    // One window-level scroll subscription for the whole page. The handle
    // is removed on teardown so remounts never stack listeners.
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        set_scroll_y.set(dom::scroll_y());
        let bounds = dom::measure_sections();
        state.update(|page| page.record_scroll(&bounds));
    });
    on_cleanup(move || scroll_handle.remove());

    // Navigation action shared by the nav bar and the hero buttons. The
    // menu closes on every request; unknown ids resolve to no target and
    // the scroll is skipped.
    let navigate_to = Callback::new(move |raw_id: &'static str| {
        let target = state.try_update(|page| page.navigate(raw_id)).flatten();
        if let Some(section) = target {
            dom::scroll_to(section);
        }
    });

    view! {
        <Title text="Cloud Solutions Architect" />
        <div class="page">
            <NavBar
                state=state
                brand_accent=profile.brand_accent.clone()
                brand_rest=profile.brand_rest.clone()
                on_navigate=navigate_to
            />
            <main>
                <Hero content=profile.hero.clone() scroll_y=scroll_y on_navigate=navigate_to />
                <About content=profile.about.clone() />
                <Skills groups=profile.skill_groups.clone() />
                <Services services=profile.services.clone() />
                <Experience projects=profile.projects.clone() />
                <Certifications certifications=profile.certifications.clone() />
                <Contact
                    channels=profile.contact_channels.clone()
                    socials=profile.social_links.clone()
                />
            </main>
            <Footer line=profile.footer_line.clone() />
        </div>
    }
}
