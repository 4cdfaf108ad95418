pub mod a001_raw_material_txn;
