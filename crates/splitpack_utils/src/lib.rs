pub mod ident;
pub mod indexmap;
pub mod sortable_set;
pub mod xxhash;
