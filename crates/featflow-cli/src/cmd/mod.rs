pub mod fork;
pub mod structure;
