pub mod convert;
pub mod encoding;
pub mod foretell;
pub mod output;
pub mod qa;
