//! Enhancement of the server-rendered raw material transaction form.
//!
//! Controls are looked up by the admin naming convention: `id_<field>` for
//! the control, `.field-<field>` for its row, `id_kind` for the kind selector.
//! Anything missing on the page is skipped.

mod dom_field;

pub use dom_field::DomField;

use crate::shared::dom::{control_value, listen};
use contracts::domain::a001_raw_material_txn::form::{FieldRegistry, FormField, TxnFormPresenter};
use std::cell::RefCell;
use std::rc::Rc;

pub const KIND_SELECTOR_ID: &str = "id_kind";

/// Page carries the admin form (detected by its kind selector)
pub fn host_form_present() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(KIND_SELECTOR_ID))
        .is_some()
}

/// Wire the presenter to the form and apply the current kind once.
pub fn enhance_raw_material_form() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let registry = FieldRegistry::from_lookup(|field| DomField::lookup(&document, field));
    log::debug!(
        "raw material form: {} of {} fields found",
        registry.len(),
        FormField::COUNT
    );

    let presenter = Rc::new(RefCell::new(TxnFormPresenter::new(registry)));
    let kind_select = document.get_element_by_id(KIND_SELECTOR_ID);

    let initial_kind = kind_select.as_ref().map(control_value).unwrap_or_default();
    presenter.borrow_mut().on_kind_change(&initial_kind);

    if let Some(select) = kind_select {
        let p = presenter.clone();
        let source = select.clone();
        listen(&select, "change", move |_| {
            p.borrow_mut().on_kind_change(&control_value(&source));
        });
    }

    let bags = presenter
        .borrow()
        .registry()
        .get(FormField::BagsCount)
        .map(|f| f.element().clone());
    if let Some(bags) = bags {
        let p = presenter.clone();
        listen(&bags, "input", move |_| p.borrow().on_bags_input());
    }

    let rate = presenter
        .borrow()
        .registry()
        .get(FormField::RatePkr)
        .map(|f| f.element().clone());
    if let Some(rate) = rate {
        for event in ["input", "change"] {
            let p = presenter.clone();
            listen(&rate, event, move |_| p.borrow().on_rate_input());
        }
    }
}
