use serde::{Deserialize, Serialize};

/// Поля формы операции с сырьём, участвующие в политике отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    SupplierName,
    FromCustomer,
    ToCustomer,
    QtyKg,
    RatePkr,
    AmountPkr,
    MaterialType,
    BagsCount,
    DcNumber,
    Memo,
}

impl FormField {
    pub const COUNT: usize = 10;

    pub const ALL: [FormField; FormField::COUNT] = [
        FormField::SupplierName,
        FormField::FromCustomer,
        FormField::ToCustomer,
        FormField::QtyKg,
        FormField::RatePkr,
        FormField::AmountPkr,
        FormField::MaterialType,
        FormField::BagsCount,
        FormField::DcNumber,
        FormField::Memo,
    ];

    /// Стабильный идентификатор поля (имя поля записи)
    pub fn name(&self) -> &'static str {
        match self {
            FormField::SupplierName => "supplier_name",
            FormField::FromCustomer => "from_customer",
            FormField::ToCustomer => "to_customer",
            FormField::QtyKg => "qty_kg",
            FormField::RatePkr => "rate_pkr",
            FormField::AmountPkr => "amount_pkr",
            FormField::MaterialType => "material_type",
            FormField::BagsCount => "bags_count",
            FormField::DcNumber => "dc_number",
            FormField::Memo => "memo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::SupplierName => "Supplier",
            FormField::FromCustomer => "From customer",
            FormField::ToCustomer => "To customer",
            FormField::QtyKg => "Quantity (kg)",
            FormField::RatePkr => "Rate (PKR/kg)",
            FormField::AmountPkr => "Amount (PKR)",
            FormField::MaterialType => "Material type",
            FormField::BagsCount => "Bags",
            FormField::DcNumber => "Delivery challan #",
            FormField::Memo => "Memo",
        }
    }

    /// Позиция поля в `FormField::ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Состояние поля на экране.
///
/// Поле в любом состоянии остаётся enabled: его значение уходит вместе с
/// формой, даже если поле скрыто.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    /// Скрыто; пользователь не может его изменить
    Hidden,
    /// Видно, ввод пользователя отклоняется
    ReadOnly,
    /// Видно и доступно для ввода
    #[default]
    Editable,
}

impl FieldState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, FieldState::Hidden)
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, FieldState::Editable)
    }
}
