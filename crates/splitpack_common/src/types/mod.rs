pub mod build_meta;
pub mod debug_id;
pub mod dependency;
pub mod import_kind;
pub mod module_id;
pub mod module_type;
pub mod raw_idx;
pub mod reason;
pub mod used_exports;
