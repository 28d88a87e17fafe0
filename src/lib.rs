//! Reader for the FAA NASR `APT.txt` landing facility file.
//!
//! ```no_run
//! use apt_parser::Scanner;
//!
//! # fn main() -> apt_parser::Result<()> {
//! for airport in Scanner::open("APT.txt")?.airports() {
//!     let airport = airport?;
//!     println!("{} has {} runways", airport.identifier(), airport.runways().len());
//! }
//! # Ok(())
//! # }
//! ```
#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod decoder;
pub mod error;
pub mod geo;
pub mod scanner;
pub mod txt_data;
pub mod types;
pub mod zip_util;

pub use error::{Error, Result};
pub use scanner::{ScanStats, Scanner, SharedAirport};
pub use types::{AirportRecord, AirportType, Ownership, RunwayRecord};
