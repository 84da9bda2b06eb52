pub mod ease;
pub mod style;
