pub mod drill;
pub mod words;
