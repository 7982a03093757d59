//! Entrance animation wrapper.
//!
//! Wraps a block of content and keeps it in its pre-entrance style until it
//! first enters the viewport, observed through an `IntersectionObserver`.
//! The observer fires once and is disconnected; the CSS transition does the
//! actual animation.

use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

/// Reveals its children the first time they scroll into view.
#[component]
pub fn Reveal(
    /// Extra transition delay in milliseconds, used to stagger card grids.
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visible = RwSignal::new(false);

    Effect::new(move |_| {
        let Some(element) = node.get() else { return };
        if visible.get_untracked() {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .is_ok_and(|entry| entry.is_intersecting())
                });
                if entered {
                    visible.set(true);
                    observer.disconnect();
                }
            },
        );

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&element);
                // The closure must outlive the observer; both go away when
                // the component is torn down.
                let held = SendWrapper::new((observer, callback));
                on_cleanup(move || {
                    let (observer, callback) = held.take();
                    observer.disconnect();
                    drop(callback);
                });
            }
            Err(_) => {
                // No observer support: show the content immediately.
                visible.set(true);
            }
        }
    });

    view! {
        <div
            node_ref=node
            class="reveal"
            class:reveal-visible=move || visible.get()
            style:transition-delay=move || format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}
