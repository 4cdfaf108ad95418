pub mod a001_raw_material_txn;
pub mod common;
