use crate::domain::a001_raw_material_txn::ui::details::RawMaterialTxnDetails;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-main">
            <RawMaterialTxnDetails />
        </main>
    }
}
