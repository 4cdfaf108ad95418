use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::domain::a001_raw_material_txn;
use contracts::domain::a001_raw_material_txn::aggregate::{RawMaterialTxn, RawMaterialTxnDto};
use contracts::domain::a001_raw_material_txn::form::KindPolicyView;

/// GET /api/a001/raw-material-txn/form-policy
pub async fn form_policy() -> Json<Vec<KindPolicyView>> {
    Json(a001_raw_material_txn::service::form_policy())
}

/// POST /api/a001/raw-material-txn/normalize
pub async fn normalize(
    Json(dto): Json<RawMaterialTxnDto>,
) -> Result<Json<RawMaterialTxn>, (StatusCode, Json<serde_json::Value>)> {
    a001_raw_material_txn::service::normalize_txn(&dto)
        .map(Json)
        .map_err(|e| {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": e.to_string() })),
            )
        })
}
