//! # foretell-data
//!
//! Converters for the fortune-teller data files.
//!
//! - `tells`: alternating English/Chinese lines become `{"tells": [{"en", "ch"}, ...]}`.
//! - `trinkets`: lines of three quoted fields (id, name, description) become a
//!   fixed-size `{"trinkets": [...]}` array indexed by id, `null` where no line
//!   provided an id.
//!
//! Output is pretty JSON with 4-space indentation and unescaped non-ASCII text.
//!
//! ```no_run
//! use foretell_data::services::convert::{convert_trinkets, TrinketsJob};
//!
//! let report = convert_trinkets(&TrinketsJob::new("trinkets.txt", "trinkets.json"))?;
//! println!("{} trinkets", report.records);
//! # Ok::<(), foretell_data::Error>(())
//! ```
#[macro_use]
extern crate log;

pub mod error;
pub mod model;
pub mod parsers;
pub mod services;

pub use error::Error;
