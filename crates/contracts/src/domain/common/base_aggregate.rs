use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех агрегатов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Бизнес-код записи
    pub code: String,
    /// Описание записи
    pub description: String,
    /// Комментарий
    pub comment: Option<String>,
    /// Момент нормализации/обновления записи
    pub updated_at: DateTime<Utc>,
}

impl<Id> BaseAggregate<Id> {
    /// Создать новый агрегат
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            updated_at: Utc::now(),
        }
    }
}
