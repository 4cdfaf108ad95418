//! Серверная нормализация операции с сырьём
//!
//! Значения, посчитанные в браузере, не считаются окончательными: количество
//! и сумма пересчитываются здесь, стороны операции выставляются по её виду.

use super::aggregate::{
    MaterialKind, RawMaterialTxn, RawMaterialTxnDto, RawMaterialTxnId, TxnKind, BAG_WEIGHT_KG,
    COMPANY_STOCK,
};
use super::form::derived::{round_kg, round_pkr};
use crate::domain::common::{AggregateId, BaseAggregate};
use chrono::NaiveDate;
use thiserror::Error;

pub const SUPPLIER_NAME_MAX: usize = 200;
pub const DC_NUMBER_MAX: usize = 50;
pub const MEMO_MAX: usize = 255;
/// Ставка хранится в PKR/кг с точностью до пайсы
pub const RATE_DECIMAL_PLACES: i32 = 2;

/// Ошибки валидации операции с сырьём
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TxnValidationError {
    #[error("Unknown transaction kind: '{0}'")]
    UnknownKind(String),

    #[error("Unknown material type: '{0}'")]
    UnknownMaterial(String),

    #[error("Invalid number in {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Bags count must be > 0 for a purchase.")]
    BagsRequired,

    #[error("Quantity must be > 0 (bags or kg).")]
    QuantityRequired,

    #[error("Rate cannot be negative.")]
    NegativeRate,

    #[error("Rate allows at most 2 decimal places: '{0}'")]
    RatePrecision(String),

    #[error("Supplier name is required for a purchase.")]
    SupplierRequired,

    #[error("Target customer is required for a sale.")]
    SaleCustomerRequired,

    #[error("Both from_customer and to_customer are required for a transfer.")]
    TransferCustomersRequired,

    #[error("From/To customers must be different.")]
    SameCustomers,

    #[error("{field} is too long (max {max} characters).")]
    TooLong { field: &'static str, max: usize },
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, TxnValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TxnValidationError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Ставка с не более чем двумя знаками после точки
fn parse_rate(raw: &str) -> Result<f64, TxnValidationError> {
    let rate = parse_decimal("rate_pkr", raw)?;
    if rate < 0.0 {
        return Err(TxnValidationError::NegativeRate);
    }
    let scale = 10f64.powi(RATE_DECIMAL_PLACES);
    let rounded = (rate * scale).round() / scale;
    if (rounded - rate).abs() > 1e-9 {
        return Err(TxnValidationError::RatePrecision(raw.trim().to_string()));
    }
    Ok(rounded)
}

fn parse_bags(raw: &str) -> Result<u32, TxnValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| TxnValidationError::InvalidNumber {
            field: "bags_count",
            value: raw.to_string(),
        })
}

fn clean_text(
    field: &'static str,
    raw: &str,
    max: usize,
) -> Result<String, TxnValidationError> {
    let value = raw.trim().to_string();
    if value.chars().count() > max {
        return Err(TxnValidationError::TooLong { field, max });
    }
    Ok(value)
}

fn clean_party(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Проверить и нормализовать операцию.
///
/// `today` подставляется, если дата операции не указана.
pub fn normalize(
    dto: &RawMaterialTxnDto,
    today: NaiveDate,
) -> Result<RawMaterialTxn, TxnValidationError> {
    let kind = TxnKind::from_code(dto.kind.trim())
        .ok_or_else(|| TxnValidationError::UnknownKind(dto.kind.clone()))?;

    let material_type = if dto.material_type.trim().is_empty() {
        MaterialKind::default()
    } else {
        MaterialKind::from_code(dto.material_type.trim())
            .ok_or_else(|| TxnValidationError::UnknownMaterial(dto.material_type.clone()))?
    };

    let id = match dto.id.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => RawMaterialTxnId::from_string(s).map_err(TxnValidationError::InvalidId)?,
        None => RawMaterialTxnId::new_v4(),
    };

    let bags_count = parse_bags(&dto.bags_count)?;
    let mut rate_pkr = parse_rate(&dto.rate_pkr)?;
    let explicit_qty = parse_decimal("qty_kg", &dto.qty_kg)?;

    // Мешки имеют приоритет над явно введёнными килограммами
    if kind == TxnKind::Purchase && bags_count == 0 {
        return Err(TxnValidationError::BagsRequired);
    }
    let qty_kg = if bags_count > 0 {
        round_kg(f64::from(bags_count) * BAG_WEIGHT_KG)
    } else {
        round_kg(explicit_qty)
    };
    if qty_kg <= 0.0 {
        return Err(TxnValidationError::QuantityRequired);
    }

    let supplier_name = clean_text("supplier_name", &dto.supplier_name, SUPPLIER_NAME_MAX)?;
    let dc_number = clean_text("dc_number", &dto.dc_number, DC_NUMBER_MAX)?;
    let memo = clean_text("memo", &dto.memo, MEMO_MAX)?;

    let mut from_customer = clean_party(&dto.from_customer);
    let mut to_customer = clean_party(&dto.to_customer);

    match kind {
        TxnKind::Purchase => {
            if supplier_name.is_empty() {
                return Err(TxnValidationError::SupplierRequired);
            }
            from_customer = None;
            to_customer = Some(COMPANY_STOCK.to_string());
        }
        TxnKind::Sale => {
            if to_customer.is_none() {
                return Err(TxnValidationError::SaleCustomerRequired);
            }
            from_customer = Some(COMPANY_STOCK.to_string());
        }
        TxnKind::Transfer => match (&from_customer, &to_customer) {
            (Some(from), Some(to)) if from == to => {
                return Err(TxnValidationError::SameCustomers)
            }
            (Some(_), Some(_)) => {}
            _ => return Err(TxnValidationError::TransferCustomersRequired),
        },
    }

    let amount_pkr = match kind {
        TxnKind::Purchase | TxnKind::Sale => round_pkr(qty_kg * rate_pkr) as i64,
        TxnKind::Transfer => {
            rate_pkr = 0.0;
            0
        }
    };

    let description = format!("{} · {:.3} kg @ {:.2} PKR/kg", kind.label(), qty_kg, rate_pkr);
    let mut base = BaseAggregate::new(id, dc_number.clone(), description);
    base.comment = if memo.is_empty() { None } else { Some(memo.clone()) };

    Ok(RawMaterialTxn {
        base,
        kind,
        when: dto.when.unwrap_or(today),
        supplier_name,
        from_customer,
        to_customer,
        qty_kg,
        rate_pkr,
        amount_pkr,
        material_type,
        bags_count,
        dc_number,
        memo,
    })
}
