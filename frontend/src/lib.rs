pub mod app;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use crate::app::*;
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
