pub mod tell;
pub mod trinket;
