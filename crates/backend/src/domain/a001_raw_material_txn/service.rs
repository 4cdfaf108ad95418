use contracts::domain::a001_raw_material_txn::aggregate::{RawMaterialTxn, RawMaterialTxnDto, TxnKind};
use contracts::domain::a001_raw_material_txn::form::KindPolicyView;
use contracts::domain::a001_raw_material_txn::normalize::{normalize, TxnValidationError};

/// Проверка и пересчёт операции на сервере.
///
/// Количество и сумма, присланные браузером, игнорируются.
pub fn normalize_txn(dto: &RawMaterialTxnDto) -> Result<RawMaterialTxn, TxnValidationError> {
    let today = chrono::Local::now().date_naive();
    match normalize(dto, today) {
        Ok(txn) => {
            if txn.kind != TxnKind::Transfer
                && dto.amount_pkr.trim() != txn.amount_pkr.to_string()
            {
                tracing::debug!(
                    "client amount '{}' replaced with {} for {}",
                    dto.amount_pkr,
                    txn.amount_pkr,
                    txn.to_string_id()
                );
            }
            Ok(txn)
        }
        Err(e) => {
            tracing::warn!("raw material txn rejected: {}", e);
            Err(e)
        }
    }
}

/// Политика отображения полей формы для всех видов операций
pub fn form_policy() -> Vec<KindPolicyView> {
    KindPolicyView::all()
}
