pub mod catalog;
pub mod probe;
pub mod translation;
