pub mod app;
pub mod domain;
pub mod shared;

use domain::a001_raw_material_txn::ui::admin_enhancer;
use wasm_bindgen::prelude::wasm_bindgen;

pub fn hydrate() {
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // На странице серверной формы только декорируем её, иначе монтируем приложение
    shared::dom::on_document_ready(|| {
        if admin_enhancer::host_form_present() {
            admin_enhancer::enhance_raw_material_form();
        } else {
            hydrate();
        }
    });
}
