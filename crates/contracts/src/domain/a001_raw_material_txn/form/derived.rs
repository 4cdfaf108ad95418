use crate::domain::a001_raw_material_txn::aggregate::BAG_WEIGHT_KG;

/// Производные значения закупки: количество из мешков и сумма из ставки
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseDerived {
    pub qty_kg: f64,
    pub amount_pkr: f64,
}

impl PurchaseDerived {
    /// Количество с ровно тремя знаками после точки
    pub fn qty_text(&self) -> String {
        format!("{:.3}", self.qty_kg)
    }

    /// Сумма целым числом
    pub fn amount_text(&self) -> String {
        format!("{:.0}", self.amount_pkr)
    }
}

/// Разбор числового ввода: пустое, нечисловое или бесконечное значение = 0
pub fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Округление до целых PKR, половина — от нуля
pub fn round_pkr(value: f64) -> f64 {
    let rounded = value.round();
    // избегаем "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Округление количества до граммов (3 знака)
pub fn round_kg(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Расчёт для закупки по сырому вводу полей «мешки» и «ставка»
pub fn purchase_derived(bags_raw: &str, rate_raw: &str) -> PurchaseDerived {
    let bags = parse_number(bags_raw);
    let rate = parse_number(rate_raw);

    let qty_kg = round_kg(bags * BAG_WEIGHT_KG);
    let amount_pkr = round_pkr(qty_kg * rate);

    PurchaseDerived { qty_kg, amount_pkr }
}
