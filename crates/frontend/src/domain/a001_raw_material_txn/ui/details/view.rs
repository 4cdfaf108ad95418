use super::view_model::RawMaterialTxnDetailsViewModel;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_raw_material_txn::form::FormField;
use leptos::prelude::*;

#[component]
pub fn RawMaterialTxnDetails() -> impl IntoView {
    let vm = RawMaterialTxnDetailsViewModel::new();
    let is_purchase = vm.is_purchase();

    let text_field = move |field: FormField, input_type: &'static str| {
        let f = vm.field(field);
        view! {
            <Input
                id=format!("rmt-{}", field.name())
                label=field.label().to_string()
                input_type=input_type.to_string()
                value=f.value
                hidden=f.hidden()
                readonly=f.readonly()
                on_input=Callback::new(move |v: String| vm.set_value(field, v))
            />
        }
    };

    let material = vm.field(FormField::MaterialType);

    view! {
        <div class="details-container raw-material-txn-details">
            <div class="details-header">
                {icon("inventory")}
                <h3>{"Raw Material Transaction"}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <Select
                    id="rmt-kind".to_string()
                    label="Kind".to_string()
                    value=vm.kind
                    options=RawMaterialTxnDetailsViewModel::kind_options()
                    on_change=Callback::new(move |v: String| vm.set_kind(v))
                />
                <Input
                    id="rmt-when".to_string()
                    label="Date".to_string()
                    input_type="date".to_string()
                    value=vm.when
                    on_input=Callback::new(move |v: String| vm.when.set(v))
                />

                {text_field(FormField::SupplierName, "text")}
                {text_field(FormField::FromCustomer, "text")}
                {text_field(FormField::ToCustomer, "text")}
                {text_field(FormField::BagsCount, "number")}
                {text_field(FormField::QtyKg, "number")}
                {text_field(FormField::RatePkr, "number")}
                {text_field(FormField::AmountPkr, "number")}

                <Select
                    id=format!("rmt-{}", FormField::MaterialType.name())
                    label=FormField::MaterialType.label().to_string()
                    value=material.value
                    options=RawMaterialTxnDetailsViewModel::material_options()
                    hidden=material.hidden()
                    on_change=Callback::new(move |v: String| vm.set_value(FormField::MaterialType, v))
                />

                {text_field(FormField::DcNumber, "text")}
                {text_field(FormField::Memo, "text")}

                <Show when=is_purchase>
                    <div class="form__hint">
                        {move || format!(
                            "Quantity: {} kg · Amount: {} PKR (recalculated on save)",
                            vm.field(FormField::QtyKg).value.get(),
                            vm.field(FormField::AmountPkr).value.get(),
                        )}
                    </div>
                </Show>
            </div>

            {move || vm.saved.get().map(|txn| view! {
                <div class="details-summary">
                    <strong>{"Accepted: "}</strong>
                    {txn.display_line()}
                    {format!(" · {} PKR", txn.amount_pkr)}
                </div>
            })}

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command()
                    disabled=move || vm.is_saving.get()
                >
                    {icon("save")}
                    {"Save"}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| vm.reset_command()
                >
                    {icon("cancel")}
                    {"Reset"}
                </button>
            </div>
        </div>
    }
}
