use crate::shared::dom::{control_value, set_control_value};
use contracts::domain::a001_raw_material_txn::form::{FieldHandle, FieldState, FormField};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// Handle over one control of the admin form and its row
pub struct DomField {
    control: Element,
    row: Option<HtmlElement>,
}

impl DomField {
    pub fn lookup(document: &Document, field: FormField) -> Option<Self> {
        let control = document.get_element_by_id(&format!("id_{}", field.name()))?;
        let row = control
            .closest(&format!(".field-{}", field.name()))
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        Some(Self { control, row })
    }

    pub fn element(&self) -> &Element {
        &self.control
    }

    fn visibility_target(&self) -> Option<&HtmlElement> {
        self.row
            .as_ref()
            .or_else(|| self.control.dyn_ref::<HtmlElement>())
    }
}

impl FieldHandle for DomField {
    fn apply_state(&self, state: FieldState) {
        if let Some(target) = self.visibility_target() {
            let display = if state.is_visible() { "" } else { "none" };
            _ = target.style().set_property("display", display);
        }

        // readOnly, not disabled: the value must still be submitted
        let read_only = !state.is_editable();
        if let Some(input) = self.control.dyn_ref::<HtmlInputElement>() {
            input.set_read_only(read_only);
        } else if let Some(area) = self.control.dyn_ref::<HtmlTextAreaElement>() {
            area.set_read_only(read_only);
        }
    }

    fn value(&self) -> String {
        control_value(&self.control)
    }

    fn set_value(&self, value: &str) {
        set_control_value(&self.control, value);
    }
}
