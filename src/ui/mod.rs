pub mod highlight;
pub mod style;
