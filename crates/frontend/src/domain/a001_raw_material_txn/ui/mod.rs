pub mod admin_enhancer;
pub mod details;
