//! Raw Material Transaction Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (normalize)
//! - signal_field.rs: signal-backed field handles for the form presenter
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod signal_field;
mod view;
mod view_model;

pub use signal_field::SignalField;
pub use view::RawMaterialTxnDetails;
pub use view_model::RawMaterialTxnDetailsViewModel;
