pub mod style;
pub mod views;
