use super::model;
use super::signal_field::SignalField;
use contracts::domain::a001_raw_material_txn::aggregate::{
    MaterialKind, RawMaterialTxn, RawMaterialTxnDto, TxnKind,
};
use contracts::domain::a001_raw_material_txn::form::{FieldRegistry, FormField, TxnFormPresenter};
use leptos::prelude::*;

/// ViewModel for the raw material transaction form
#[derive(Clone, Copy)]
pub struct RawMaterialTxnDetailsViewModel {
    pub kind: RwSignal<String>,
    pub when: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saved: RwSignal<Option<RawMaterialTxn>>,
    pub is_saving: RwSignal<bool>,
    fields: [SignalField; FormField::COUNT],
    presenter: StoredValue<TxnFormPresenter<SignalField>>,
}

impl RawMaterialTxnDetailsViewModel {
    pub fn new() -> Self {
        let fields: [SignalField; FormField::COUNT] = std::array::from_fn(|_| SignalField::new());
        let registry = FieldRegistry::from_lookup(|f| Some(fields[f.index()]));

        let vm = Self {
            kind: RwSignal::new(String::new()),
            when: RwSignal::new(chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()),
            error: RwSignal::new(None),
            saved: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            fields,
            presenter: StoredValue::new(TxnFormPresenter::new(registry)),
        };
        vm.field(FormField::MaterialType)
            .value
            .set(MaterialKind::default().code().to_string());
        // первичное применение политики, как при загрузке страницы
        vm.set_kind(TxnKind::Purchase.code().to_string());
        vm
    }

    pub fn field(&self, field: FormField) -> SignalField {
        self.fields[field.index()]
    }

    pub fn kind_options() -> Vec<(String, String)> {
        TxnKind::ALL
            .into_iter()
            .map(|k| (k.code().to_string(), k.label().to_string()))
            .collect()
    }

    pub fn material_options() -> Vec<(String, String)> {
        MaterialKind::ALL
            .into_iter()
            .map(|m| (m.code().to_string(), m.label().to_string()))
            .collect()
    }

    pub fn set_kind(&self, code: String) {
        self.kind.set(code.clone());
        self.saved.set(None);
        self.presenter.update_value(|p| p.on_kind_change(&code));
    }

    /// User input into one of the form fields
    pub fn set_value(&self, field: FormField, value: String) {
        self.field(field).value.set(value);
        match field {
            FormField::BagsCount => self.presenter.with_value(|p| p.on_bags_input()),
            FormField::RatePkr => self.presenter.with_value(|p| p.on_rate_input()),
            _ => {}
        }
    }

    pub fn is_purchase(&self) -> impl Fn() -> bool + Copy + 'static {
        let kind = self.kind;
        move || TxnKind::from_code(&kind.get()) == Some(TxnKind::Purchase)
    }

    fn optional(&self, field: FormField) -> Option<String> {
        let v = self.field(field).value.get_untracked();
        if v.trim().is_empty() {
            None
        } else {
            Some(v)
        }
    }

    /// Collect the form into a DTO; hidden fields are sent too
    pub fn to_dto(&self) -> RawMaterialTxnDto {
        let value = |f: FormField| self.field(f).value.get_untracked();
        RawMaterialTxnDto {
            id: None,
            kind: self.kind.get_untracked(),
            when: chrono::NaiveDate::parse_from_str(&self.when.get_untracked(), "%Y-%m-%d").ok(),
            supplier_name: value(FormField::SupplierName),
            from_customer: self.optional(FormField::FromCustomer),
            to_customer: self.optional(FormField::ToCustomer),
            qty_kg: value(FormField::QtyKg),
            rate_pkr: value(FormField::RatePkr),
            amount_pkr: value(FormField::AmountPkr),
            material_type: value(FormField::MaterialType),
            bags_count: value(FormField::BagsCount),
            dc_number: value(FormField::DcNumber),
            memo: value(FormField::Memo),
        }
    }

    /// Send the form to the server for validation and recalculation
    pub fn save_command(&self) {
        if self.is_saving.get_untracked() {
            return;
        }
        let dto = self.to_dto();
        let vm = *self;

        vm.is_saving.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match model::normalize(&dto).await {
                Ok(txn) => {
                    // сервер — источник истины для количества и суммы
                    vm.field(FormField::QtyKg)
                        .value
                        .set(format!("{:.3}", txn.qty_kg));
                    vm.field(FormField::AmountPkr)
                        .value
                        .set(txn.amount_pkr.to_string());
                    log::info!("raw material txn accepted: {}", txn.display_line());
                    vm.saved.set(Some(txn));
                }
                Err(e) => vm.error.set(Some(e)),
            }
            vm.is_saving.set(false);
        });
    }

    pub fn reset_command(&self) {
        for field in FormField::ALL {
            self.field(field).value.set(String::new());
        }
        self.field(FormField::MaterialType)
            .value
            .set(MaterialKind::default().code().to_string());
        self.error.set(None);
        self.set_kind(TxnKind::Purchase.code().to_string());
    }
}

impl Default for RawMaterialTxnDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_raw_material_txn::form::FieldState;

    #[test]
    fn test_hidden_derived_fields_are_submitted() {
        Owner::new().with(|| {
            let vm = RawMaterialTxnDetailsViewModel::new();
            vm.set_value(FormField::SupplierName, "Lucky Polymers".into());
            vm.set_value(FormField::BagsCount, "10".into());
            vm.set_value(FormField::RatePkr, "150".into());

            for field in [FormField::QtyKg, FormField::AmountPkr] {
                let f = vm.field(field);
                assert_eq!(f.state.get_untracked(), FieldState::Hidden);
                assert!(f.hidden().get_untracked());
                assert!(f.readonly().get_untracked());
            }

            let dto = vm.to_dto();
            assert_eq!(dto.kind, "PURCHASE");
            assert_eq!(dto.qty_kg, "250.000");
            assert_eq!(dto.amount_pkr, "37500");
            assert_eq!(dto.bags_count, "10");
            assert_eq!(dto.rate_pkr, "150");
        });
    }

    #[test]
    fn test_switching_kind_keeps_last_computed_values() {
        Owner::new().with(|| {
            let vm = RawMaterialTxnDetailsViewModel::new();
            vm.set_value(FormField::BagsCount, "4".into());
            vm.set_value(FormField::RatePkr, "52.75".into());

            vm.set_kind(TxnKind::Transfer.code().to_string());
            let qty = vm.field(FormField::QtyKg);
            assert!(!qty.hidden().get_untracked());
            assert!(!qty.readonly().get_untracked());
            assert!(vm.field(FormField::BagsCount).hidden().get_untracked());

            let dto = vm.to_dto();
            assert_eq!(dto.kind, "TRANSFER");
            assert_eq!(dto.qty_kg, "100.000");
            assert_eq!(dto.amount_pkr, "5275");
            assert_eq!(dto.bags_count, "4");
        });
    }
}
