//! rdwgs — Dutch RD to WGS84 coordinate conversion.
//!
//! Re-exports the pure conversion core and adds the plain-text report the
//! command line tool prints.

pub use rdwgs_core::*;

pub mod report;
