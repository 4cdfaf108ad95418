use contracts::domain::a001_raw_material_txn::form::{FieldHandle, FieldState};
use leptos::prelude::*;

/// Field of the Leptos form: state and value live in signals, the view reads them
#[derive(Clone, Copy)]
pub struct SignalField {
    pub state: RwSignal<FieldState>,
    pub value: RwSignal<String>,
}

impl SignalField {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FieldState::Editable),
            value: RwSignal::new(String::new()),
        }
    }

    pub fn hidden(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || !state.get().is_visible())
    }

    pub fn readonly(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || !state.get().is_editable())
    }
}

impl Default for SignalField {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldHandle for SignalField {
    fn apply_state(&self, state: FieldState) {
        // не дёргаем подписчиков, если состояние не изменилось
        if self.state.get_untracked() != state {
            self.state.set(state);
        }
    }

    fn value(&self) -> String {
        self.value.get_untracked()
    }

    fn set_value(&self, value: &str) {
        self.value.set(value.to_string());
    }
}
