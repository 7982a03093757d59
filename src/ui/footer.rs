//! Page footer.

use leptos::prelude::*;

/// Footer with the copyright line.
#[component]
pub fn Footer(
    /// Copyright line.
    line: String,
) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{line}</p>
        </footer>
    }
}
