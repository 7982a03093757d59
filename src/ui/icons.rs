//! Inline SVG icon set.
//!
//! Small stroke icons rendered inline so the page carries no icon font or
//! external sprite. Content structs refer to icons by name; [`icon`] maps
//! the name to its drawing, falling back to a neutral dot for names not in
//! the set.

use leptos::prelude::*;

macro_rules! svg_icon {
    ($($body:tt)*) => {
        view! {
            <svg
                class="icon"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                $($body)*
            </svg>
        }
    };
}

/// Looks up an icon drawing by name.
#[must_use]
pub fn icon(name: &str) -> AnyView {
    match name {
        "award" => award().into_any(),
        "chevron-down" => chevron_down().into_any(),
        "close" => close().into_any(),
        "cloud" => cloud().into_any(),
        "code" => code().into_any(),
        "database" => database().into_any(),
        "external-link" => external_link().into_any(),
        "github" => github().into_any(),
        "linkedin" => linkedin().into_any(),
        "mail" => mail().into_any(),
        "map-pin" => map_pin().into_any(),
        "menu" => menu().into_any(),
        "phone" => phone().into_any(),
        "server" => server().into_any(),
        "shield" => shield().into_any(),
        "users" => users().into_any(),
        "zap" => zap().into_any(),
        _ => fallback().into_any(),
    }
}

fn fallback() -> impl IntoView {
    svg_icon! { <circle cx="12" cy="12" r="2"/> }
}

pub(crate) fn menu() -> impl IntoView {
    svg_icon! {
        <line x1="4" x2="20" y1="6" y2="6"/>
        <line x1="4" x2="20" y1="12" y2="12"/>
        <line x1="4" x2="20" y1="18" y2="18"/>
    }
}

pub(crate) fn close() -> impl IntoView {
    svg_icon! {
        <path d="M18 6 6 18"/>
        <path d="m6 6 12 12"/>
    }
}

pub(crate) fn chevron_down() -> impl IntoView {
    svg_icon! { <path d="m6 9 6 6 6-6"/> }
}

fn cloud() -> impl IntoView {
    svg_icon! { <path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/> }
}

fn code() -> impl IntoView {
    svg_icon! {
        <polyline points="16 18 22 12 16 6"/>
        <polyline points="8 6 2 12 8 18"/>
    }
}

fn server() -> impl IntoView {
    svg_icon! {
        <rect width="20" height="8" x="2" y="2" rx="2" ry="2"/>
        <rect width="20" height="8" x="2" y="14" rx="2" ry="2"/>
        <line x1="6" x2="6.01" y1="6" y2="6"/>
        <line x1="6" x2="6.01" y1="18" y2="18"/>
    }
}

fn database() -> impl IntoView {
    svg_icon! {
        <ellipse cx="12" cy="5" rx="9" ry="3"/>
        <path d="M3 5V19A9 3 0 0 0 21 19V5"/>
        <path d="M3 12A9 3 0 0 0 21 12"/>
    }
}

fn shield() -> impl IntoView {
    svg_icon! {
        <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1 1 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>
    }
}

fn zap() -> impl IntoView {
    svg_icon! {
        <path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>
    }
}

fn users() -> impl IntoView {
    svg_icon! {
        <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
        <circle cx="9" cy="7" r="4"/>
        <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
        <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
    }
}

fn award() -> impl IntoView {
    svg_icon! {
        <circle cx="12" cy="8" r="6"/>
        <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>
    }
}

fn mail() -> impl IntoView {
    svg_icon! {
        <rect width="20" height="16" x="2" y="4" rx="2"/>
        <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>
    }
}

fn phone() -> impl IntoView {
    svg_icon! {
        <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>
    }
}

fn map_pin() -> impl IntoView {
    svg_icon! {
        <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>
        <circle cx="12" cy="10" r="3"/>
    }
}

fn linkedin() -> impl IntoView {
    svg_icon! {
        <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>
        <rect width="4" height="12" x="2" y="9"/>
        <circle cx="4" cy="4" r="2"/>
    }
}

fn github() -> impl IntoView {
    svg_icon! {
        <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>
        <path d="M9 18c-4.51 2-5-2-7-2"/>
    }
}

fn external_link() -> impl IntoView {
    svg_icon! {
        <path d="M15 3h6v6"/>
        <path d="M10 14 21 3"/>
        <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
    }
}
