//! Cloudfolio - single-page portfolio site
//!
//! WASM entry point built by Trunk. Mounts the Leptos application onto the
//! document body.

use cloudfolio::ui::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(App);
}
