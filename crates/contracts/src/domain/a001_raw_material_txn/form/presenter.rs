use super::derived::{purchase_derived, PurchaseDerived};
use super::fields::{FieldState, FormField};
use super::policy::kind_policy;
use super::registry::{FieldHandle, FieldRegistry};
use crate::domain::a001_raw_material_txn::aggregate::TxnKind;

/// Презентер формы операции с сырьём.
///
/// Единственный писатель состояния полей. Каждый обработчик пересчитывает
/// состояние с нуля, поэтому повторный вызов ничего не меняет.
pub struct TxnFormPresenter<H: FieldHandle> {
    registry: FieldRegistry<H>,
    kind: Option<TxnKind>,
}

impl<H: FieldHandle> TxnFormPresenter<H> {
    pub fn new(registry: FieldRegistry<H>) -> Self {
        Self {
            registry,
            kind: None,
        }
    }

    pub fn kind(&self) -> Option<TxnKind> {
        self.kind
    }

    pub fn registry(&self) -> &FieldRegistry<H> {
        &self.registry
    }

    /// Смена вида операции по значению селектора
    pub fn on_kind_change(&mut self, raw: &str) {
        self.apply_kind(TxnKind::from_code(raw));
    }

    pub fn on_bags_input(&self) {
        self.recalculate();
    }

    pub fn on_rate_input(&self) {
        self.recalculate();
    }

    /// Сброс формы и применение политики вида операции
    pub fn apply_kind(&mut self, kind: Option<TxnKind>) {
        if self.kind != kind {
            log::debug!(
                "raw material form: kind {:?} -> {:?}",
                self.kind.map(|k| k.code()),
                kind.map(|k| k.code())
            );
        }
        self.kind = kind;

        for (_, handle) in self.registry.iter() {
            handle.apply_state(FieldState::Editable);
        }

        let policy = kind_policy(kind);
        for (field, handle) in self.registry.iter() {
            handle.apply_state(policy[field.index()]);
        }

        self.recalculate();
    }

    /// Пересчёт количества и суммы для закупки.
    ///
    /// Для остальных видов ничего не делает. Значения лишь подсказка:
    /// сервер пересчитывает их при сохранении.
    pub fn recalculate(&self) -> Option<PurchaseDerived> {
        if self.kind != Some(TxnKind::Purchase) {
            return None;
        }

        let derived = purchase_derived(
            &self.registry.value_of(FormField::BagsCount),
            &self.registry.value_of(FormField::RatePkr),
        );

        self.registry
            .set_value_of(FormField::QtyKg, &derived.qty_text());
        self.registry
            .set_value_of(FormField::AmountPkr, &derived.amount_text());

        Some(derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct FakeControl {
        state: Cell<FieldState>,
        value: RefCell<String>,
        writes: Cell<usize>,
    }

    #[derive(Clone, Default)]
    struct FakeHandle(Rc<FakeControl>);

    impl FieldHandle for FakeHandle {
        fn apply_state(&self, state: FieldState) {
            self.0.state.set(state);
        }

        fn value(&self) -> String {
            self.0.value.borrow().clone()
        }

        fn set_value(&self, value: &str) {
            self.0.writes.set(self.0.writes.get() + 1);
            *self.0.value.borrow_mut() = value.to_string();
        }
    }

    struct Form {
        controls: Vec<(FormField, FakeHandle)>,
    }

    impl Form {
        fn full() -> (Self, TxnFormPresenter<FakeHandle>) {
            Self::with_fields(&FormField::ALL)
        }

        fn with_fields(fields: &[FormField]) -> (Self, TxnFormPresenter<FakeHandle>) {
            let controls: Vec<_> = fields
                .iter()
                .map(|f| (*f, FakeHandle::default()))
                .collect();
            let mut registry = FieldRegistry::new();
            for (f, h) in &controls {
                registry.insert(*f, h.clone());
            }
            (Self { controls }, TxnFormPresenter::new(registry))
        }

        fn control(&self, field: FormField) -> &FakeControl {
            let (_, handle) = self
                .controls
                .iter()
                .find(|(f, _)| *f == field)
                .expect("field registered");
            &handle.0
        }

        fn type_into(&self, field: FormField, value: &str) {
            *self.control(field).value.borrow_mut() = value.to_string();
        }

        fn state(&self, field: FormField) -> FieldState {
            self.control(field).state.get()
        }

        fn value(&self, field: FormField) -> String {
            self.control(field).value.borrow().clone()
        }

        fn snapshot(&self) -> Vec<(FormField, FieldState)> {
            self.controls
                .iter()
                .map(|(f, h)| (*f, h.0.state.get()))
                .collect()
        }
    }

    #[test]
    fn test_purchase_derives_hidden_read_only_values() {
        let (form, mut presenter) = Form::full();
        form.type_into(FormField::BagsCount, "10");
        form.type_into(FormField::RatePkr, "150");

        presenter.on_kind_change("PURCHASE");

        assert_eq!(form.value(FormField::QtyKg), "250.000");
        assert_eq!(form.value(FormField::AmountPkr), "37500");
        for f in [FormField::QtyKg, FormField::AmountPkr] {
            assert!(!form.state(f).is_visible());
            assert!(!form.state(f).is_editable());
        }
    }

    #[test]
    fn test_purchase_input_events_recalculate() {
        let (form, mut presenter) = Form::full();
        presenter.on_kind_change("PURCHASE");
        assert_eq!(form.value(FormField::QtyKg), "0.000");
        assert_eq!(form.value(FormField::AmountPkr), "0");

        form.type_into(FormField::BagsCount, "4");
        presenter.on_bags_input();
        assert_eq!(form.value(FormField::QtyKg), "100.000");
        assert_eq!(form.value(FormField::AmountPkr), "0");

        form.type_into(FormField::RatePkr, "52.75");
        presenter.on_rate_input();
        assert_eq!(form.value(FormField::AmountPkr), "5275");

        form.type_into(FormField::BagsCount, "");
        presenter.on_bags_input();
        assert_eq!(form.value(FormField::QtyKg), "0.000");
        assert_eq!(form.value(FormField::AmountPkr), "0");
    }

    #[test]
    fn test_recalculate_outside_purchase_leaves_values_untouched() {
        for kind in ["SALE", "TRANSFER", "", "BOGUS"] {
            let (form, mut presenter) = Form::full();
            form.type_into(FormField::QtyKg, "12.5");
            form.type_into(FormField::AmountPkr, "999");
            form.type_into(FormField::BagsCount, "10");
            form.type_into(FormField::RatePkr, "150");

            presenter.on_kind_change(kind);
            assert!(presenter.recalculate().is_none());
            presenter.on_bags_input();
            presenter.on_rate_input();

            assert_eq!(form.value(FormField::QtyKg), "12.5");
            assert_eq!(form.value(FormField::AmountPkr), "999");
            assert_eq!(form.control(FormField::QtyKg).writes.get(), 0);
            assert_eq!(form.control(FormField::AmountPkr).writes.get(), 0);
        }
    }

    #[test]
    fn test_sale_shows_editable_pricing() {
        let (form, mut presenter) = Form::full();
        presenter.on_kind_change("SALE");

        for f in [FormField::SupplierName, FormField::BagsCount] {
            assert_eq!(form.state(f), FieldState::Hidden);
        }
        for f in [
            FormField::ToCustomer,
            FormField::QtyKg,
            FormField::RatePkr,
            FormField::AmountPkr,
        ] {
            assert_eq!(form.state(f), FieldState::Editable);
        }
    }

    #[test]
    fn test_transfer_hides_pricing() {
        let (form, mut presenter) = Form::full();
        presenter.on_kind_change("TRANSFER");

        for f in [
            FormField::RatePkr,
            FormField::AmountPkr,
            FormField::DcNumber,
            FormField::SupplierName,
            FormField::BagsCount,
        ] {
            assert_eq!(form.state(f), FieldState::Hidden);
        }
        for f in [FormField::FromCustomer, FormField::ToCustomer, FormField::QtyKg] {
            assert_eq!(form.state(f), FieldState::Editable);
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        for kind in TxnKind::ALL {
            let (form, mut presenter) = Form::full();
            form.type_into(FormField::BagsCount, "3");
            form.type_into(FormField::RatePkr, "10");

            presenter.apply_kind(Some(kind));
            let once = (form.snapshot(), form.value(FormField::QtyKg));
            presenter.apply_kind(Some(kind));
            let twice = (form.snapshot(), form.value(FormField::QtyKg));

            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_round_trip_of_kinds_leaves_no_residue() {
        let (form, mut presenter) = Form::full();
        presenter.on_kind_change("PURCHASE");
        let purchase = form.snapshot();

        for _ in 0..2 {
            presenter.on_kind_change("SALE");
            presenter.on_kind_change("TRANSFER");
            presenter.on_kind_change("PURCHASE");
            assert_eq!(form.snapshot(), purchase);
        }
    }

    #[test]
    fn test_unset_kind_resets_to_editable() {
        let (form, mut presenter) = Form::full();
        presenter.on_kind_change("TRANSFER");
        presenter.on_kind_change("");

        assert_eq!(presenter.kind(), None);
        assert!(form
            .snapshot()
            .iter()
            .all(|(_, s)| *s == FieldState::Editable));
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let (form, mut presenter) =
            Form::with_fields(&[FormField::BagsCount, FormField::AmountPkr]);
        form.type_into(FormField::BagsCount, "2");

        presenter.on_kind_change("PURCHASE");
        presenter.on_rate_input();

        // нет поля ставки -> ставка 0; нет поля количества -> запись пропущена
        assert_eq!(form.value(FormField::AmountPkr), "0");
        assert_eq!(form.state(FormField::AmountPkr), FieldState::Hidden);
        assert_eq!(form.state(FormField::BagsCount), FieldState::Editable);
    }

    #[test]
    fn test_empty_registry_never_panics() {
        let mut presenter: TxnFormPresenter<FakeHandle> = TxnFormPresenter::new(FieldRegistry::new());
        presenter.on_kind_change("PURCHASE");
        presenter.on_bags_input();
        presenter.on_kind_change("SALE");
        assert_eq!(presenter.kind(), Some(TxnKind::Sale));
    }
}
