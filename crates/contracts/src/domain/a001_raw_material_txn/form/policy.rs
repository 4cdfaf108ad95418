use super::fields::{FieldState, FormField};
use crate::domain::a001_raw_material_txn::aggregate::TxnKind;
use serde::{Deserialize, Serialize};

use super::fields::FieldState::{Editable as E, Hidden as H};

/// Состояния всех полей формы, индекс = порядок в `FormField::ALL`
pub type KindPolicy = [FieldState; FormField::COUNT];

// supplier, from_cust, to_cust, qty, rate, amount, material, bags, dc, memo
const RESET: KindPolicy = [E, E, E, E, E, E, E, E, E, E];
const PURCHASE: KindPolicy = [E, H, H, H, E, H, E, E, E, E];
const SALE: KindPolicy = [H, H, E, E, E, E, E, H, E, E];
const TRANSFER: KindPolicy = [H, E, E, E, H, H, E, H, H, E];

/// Политика отображения для вида операции.
///
/// `None` (пустой или неизвестный вид) оставляет форму в исходном
/// состоянии: всё видно и редактируемо.
pub fn kind_policy(kind: Option<TxnKind>) -> KindPolicy {
    match kind {
        Some(TxnKind::Purchase) => PURCHASE,
        Some(TxnKind::Sale) => SALE,
        Some(TxnKind::Transfer) => TRANSFER,
        None => RESET,
    }
}

pub fn field_state(kind: Option<TxnKind>, field: FormField) -> FieldState {
    kind_policy(kind)[field.index()]
}

/// Политика в виде, пригодном для отдачи через API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KindPolicyView {
    pub kind: TxnKind,
    pub fields: Vec<FieldPolicyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldPolicyEntry {
    pub field: FormField,
    pub state: FieldState,
}

impl KindPolicyView {
    pub fn for_kind(kind: TxnKind) -> Self {
        let policy = kind_policy(Some(kind));
        let fields = FormField::ALL
            .into_iter()
            .map(|field| FieldPolicyEntry {
                field,
                state: policy[field.index()],
            })
            .collect();
        Self { kind, fields }
    }

    pub fn all() -> Vec<Self> {
        TxnKind::ALL.into_iter().map(Self::for_kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden(kind: TxnKind) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| !field_state(Some(kind), *f).is_visible())
            .collect()
    }

    #[test]
    fn test_purchase_hides_customers_and_derived_fields() {
        assert_eq!(
            hidden(TxnKind::Purchase),
            vec![
                FormField::FromCustomer,
                FormField::ToCustomer,
                FormField::QtyKg,
                FormField::AmountPkr,
            ]
        );
        assert!(!field_state(Some(TxnKind::Purchase), FormField::QtyKg).is_editable());
        assert!(!field_state(Some(TxnKind::Purchase), FormField::AmountPkr).is_editable());
    }

    #[test]
    fn test_sale_policy() {
        assert_eq!(
            hidden(TxnKind::Sale),
            vec![
                FormField::SupplierName,
                FormField::FromCustomer,
                FormField::BagsCount,
            ]
        );
        for f in [
            FormField::ToCustomer,
            FormField::QtyKg,
            FormField::RatePkr,
            FormField::AmountPkr,
        ] {
            assert_eq!(field_state(Some(TxnKind::Sale), f), FieldState::Editable);
        }
    }

    #[test]
    fn test_transfer_policy() {
        assert_eq!(
            hidden(TxnKind::Transfer),
            vec![
                FormField::SupplierName,
                FormField::RatePkr,
                FormField::AmountPkr,
                FormField::BagsCount,
                FormField::DcNumber,
            ]
        );
        for f in [FormField::FromCustomer, FormField::ToCustomer, FormField::QtyKg] {
            assert_eq!(field_state(Some(TxnKind::Transfer), f), FieldState::Editable);
        }
    }

    #[test]
    fn test_unset_kind_keeps_everything_editable() {
        assert!(kind_policy(None).iter().all(|s| *s == FieldState::Editable));
    }

    #[test]
    fn test_policy_view_lists_every_field() {
        let views = KindPolicyView::all();
        assert_eq!(views.len(), 3);
        assert!(views.iter().all(|v| v.fields.len() == FormField::COUNT));
    }
}
