//! Leptos view layer for the portfolio page.
//!
//! [`App`] is the root component: it owns the page state, wires up the
//! window scroll listener, and lays out the navigation bar, the section
//! stack, and the footer. Section components are pure renderers over the
//! content model; the only DOM access outside event wiring lives in
//! [`dom`].

mod about;
mod app;
mod certifications;
mod contact;
pub mod dom;
mod experience;
mod footer;
mod hero;
pub mod icons;
mod navbar;
mod reveal;
mod services;
mod skills;

pub use app::App;
