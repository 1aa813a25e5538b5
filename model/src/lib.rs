pub mod capacity;
pub mod operation;
pub mod table_keys;
