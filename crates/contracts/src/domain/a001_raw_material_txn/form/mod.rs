//! Презентер формы операции с сырьём
//!
//! - fields.rs: закрытый набор полей формы и трёхпозиционный флаг состояния
//! - policy.rs: статическая таблица видимости/редактируемости по виду операции
//! - derived.rs: расчёт производных значений для закупки
//! - registry.rs: типизированный реестр дескрипторов полей
//! - presenter.rs: обработчики событий формы

pub mod derived;
pub mod fields;
pub mod policy;
pub mod presenter;
pub mod registry;

pub use derived::{purchase_derived, PurchaseDerived};
pub use fields::{FieldState, FormField};
pub use policy::{field_state, kind_policy, FieldPolicyEntry, KindPolicy, KindPolicyView};
pub use presenter::TxnFormPresenter;
pub use registry::{FieldHandle, FieldRegistry};
