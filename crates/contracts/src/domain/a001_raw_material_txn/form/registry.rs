use super::fields::{FieldState, FormField};

/// Дескриптор одного элемента формы на экране
pub trait FieldHandle {
    /// Применить видимость/редактируемость
    fn apply_state(&self, state: FieldState);

    /// Текущее значение как строка (как его ввёл пользователь)
    fn value(&self) -> String;

    /// Записать значение
    fn set_value(&self, value: &str);
}

/// Реестр дескрипторов полей формы.
///
/// Строится один раз при инициализации. Отсутствующие на странице поля просто
/// не регистрируются, и любые операции над ними пропускаются.
pub struct FieldRegistry<H> {
    handles: [Option<H>; FormField::COUNT],
}

impl<H> FieldRegistry<H> {
    pub fn new() -> Self {
        Self {
            handles: std::array::from_fn(|_| None),
        }
    }

    /// Построить реестр, запрашивая дескриптор для каждого поля
    pub fn from_lookup(mut lookup: impl FnMut(FormField) -> Option<H>) -> Self {
        Self {
            handles: std::array::from_fn(|i| lookup(FormField::ALL[i])),
        }
    }

    pub fn insert(&mut self, field: FormField, handle: H) {
        self.handles[field.index()] = Some(handle);
    }

    pub fn get(&self, field: FormField) -> Option<&H> {
        self.handles[field.index()].as_ref()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.get(field).is_some()
    }

    /// Зарегистрированные поля в порядке `FormField::ALL`
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &H)> {
        FormField::ALL
            .into_iter()
            .zip(self.handles.iter())
            .filter_map(|(field, handle)| handle.as_ref().map(|h| (field, h)))
    }

    pub fn len(&self) -> usize {
        self.handles.iter().filter(|h| h.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H> Default for FieldRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: FieldHandle> FieldRegistry<H> {
    pub fn value_of(&self, field: FormField) -> String {
        self.get(field).map(|h| h.value()).unwrap_or_default()
    }

    pub fn set_value_of(&self, field: FormField, value: &str) {
        if let Some(h) = self.get(field) {
            h.set_value(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lookup_skips_missing_fields() {
        let registry: FieldRegistry<&'static str> = FieldRegistry::from_lookup(|f| match f {
            FormField::QtyKg => Some("qty"),
            FormField::Memo => Some("memo"),
            _ => None,
        });

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(FormField::QtyKg));
        assert!(!registry.contains(FormField::RatePkr));
        let fields: Vec<_> = registry.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![FormField::QtyKg, FormField::Memo]);
    }

    #[test]
    fn test_empty_registry() {
        let registry: FieldRegistry<()> = FieldRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get(FormField::SupplierName).is_none());
    }
}
