use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Вес одного мешка сырья, кг
pub const BAG_WEIGHT_KG: f64 = 25.0;

/// Служебный «контрагент», обозначающий склад компании
pub const COMPANY_STOCK: &str = "__COMPANY_STOCK__";

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор операции с сырьём
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawMaterialTxnId(pub Uuid);

impl RawMaterialTxnId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for RawMaterialTxnId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RawMaterialTxnId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Вид операции с сырьём
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxnKind {
    /// Закупка на склад компании
    Purchase,
    /// Продажа со склада компании клиенту
    Sale,
    /// Передача сырья между клиентами
    Transfer,
}

impl TxnKind {
    pub const ALL: [TxnKind; 3] = [TxnKind::Purchase, TxnKind::Sale, TxnKind::Transfer];

    pub fn code(&self) -> &'static str {
        match self {
            TxnKind::Purchase => "PURCHASE",
            TxnKind::Sale => "SALE",
            TxnKind::Transfer => "TRANSFER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TxnKind::Purchase => "Purchase (into Company Stock)",
            TxnKind::Sale => "Sell from Company Stock to Customer",
            TxnKind::Transfer => "Customer → Customer transfer",
        }
    }

    /// Значение селектора вида операции. Пустое или неизвестное значение -> None
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PURCHASE" => Some(TxnKind::Purchase),
            "SALE" => Some(TxnKind::Sale),
            "TRANSFER" => Some(TxnKind::Transfer),
            _ => None,
        }
    }
}

impl std::fmt::Display for TxnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Тип сырья
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialKind {
    #[default]
    Film,
    Tape,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 2] = [MaterialKind::Film, MaterialKind::Tape];

    pub fn code(&self) -> &'static str {
        match self {
            MaterialKind::Film => "FILM",
            MaterialKind::Tape => "TAPE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialKind::Film => "Film",
            MaterialKind::Tape => "Tape",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FILM" => Some(MaterialKind::Film),
            "TAPE" => Some(MaterialKind::Tape),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Операция с сырьём после серверной нормализации.
///
/// Количество в кг (3 знака), деньги в целых PKR, ставка PKR/кг (2 знака).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMaterialTxn {
    #[serde(flatten)]
    pub base: BaseAggregate<RawMaterialTxnId>,

    pub kind: TxnKind,
    pub when: NaiveDate,

    pub supplier_name: String,
    pub from_customer: Option<String>,
    pub to_customer: Option<String>,

    pub qty_kg: f64,
    pub rate_pkr: f64,
    pub amount_pkr: i64,

    pub material_type: MaterialKind,
    pub bags_count: u32,
    pub dc_number: String,
    pub memo: String,
}

impl RawMaterialTxn {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Строка для списков: "<вид> · <кол-во> kg @ <ставка> PKR/kg"
    pub fn display_line(&self) -> String {
        format!(
            "{} · {:.3} kg @ {:.2} PKR/kg",
            self.kind.label(),
            self.qty_kg,
            self.rate_pkr
        )
    }
}

impl AggregateRoot for RawMaterialTxn {
    type Id = RawMaterialTxnId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "raw_material_txn"
    }

    fn element_name() -> &'static str {
        "Raw Material Transaction"
    }

    fn list_name() -> &'static str {
        "Raw Material Transactions"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы операции с сырьём, как его отправляет клиент.
///
/// Числовые поля приходят строками: клиентские значения не считаются
/// окончательными и пересчитываются на сервере.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RawMaterialTxnDto {
    pub id: Option<String>,
    pub kind: String,
    pub when: Option<NaiveDate>,
    pub supplier_name: String,
    pub from_customer: Option<String>,
    pub to_customer: Option<String>,
    pub qty_kg: String,
    pub rate_pkr: String,
    pub amount_pkr: String,
    pub material_type: String,
    pub bags_count: String,
    pub dc_number: String,
    pub memo: String,
}

impl RawMaterialTxnDto {
    /// Пустая форма с видом операции по умолчанию (закупка)
    pub fn new_purchase() -> Self {
        Self {
            kind: TxnKind::Purchase.code().to_string(),
            material_type: MaterialKind::Film.code().to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_code() {
        assert_eq!(TxnKind::from_code("PURCHASE"), Some(TxnKind::Purchase));
        assert_eq!(TxnKind::from_code("SALE"), Some(TxnKind::Sale));
        assert_eq!(TxnKind::from_code("TRANSFER"), Some(TxnKind::Transfer));
        assert_eq!(TxnKind::from_code(""), None);
        assert_eq!(TxnKind::from_code("purchase"), None);
        assert_eq!(TxnKind::from_code("REFUND"), None);
    }

    #[test]
    fn test_kind_serde_uses_codes() {
        let json = serde_json::to_string(&TxnKind::Transfer).unwrap();
        assert_eq!(json, "\"TRANSFER\"");
        let kind: TxnKind = serde_json::from_str("\"SALE\"").unwrap();
        assert_eq!(kind, TxnKind::Sale);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(RawMaterialTxn::full_name(), "a001_raw_material_txn");
    }
}
