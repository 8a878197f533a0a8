//! CSR entry point: installs the panic hook and console logger, then mounts
//! the root [`App`](portal_ui::app::App) component onto the document body.

use leptos::prelude::*;

use portal_ui::app::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }

    leptos::mount::mount_to_body(|| view! { <App/> });
}
