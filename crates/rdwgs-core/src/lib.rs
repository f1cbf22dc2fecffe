//! rdwgs-core: Dutch RD (Rijksdriehoeksstelsel) to WGS84 conversion.
//!
//! A fixed low-order polynomial approximation anchored at Amersfoort, valid
//! inside the RD box `-7000 <= x <= 300000`, `289000 <= y <= 629000`.
//! Conversions are pure functions: they never fail, always compute a
//! coordinate and report out-of-range input through a composite error code
//! (`0`, `-1`, `-2`, `-3`).
pub mod batch;
pub mod code;
pub mod constants;
pub mod error;
pub mod format;
pub mod point;
pub mod rd;
pub mod samples;
pub mod traits;
pub mod wgs;

pub use error::RdwgsError;
pub use point::{Geographic, GeographicPoint, Rd, RdPoint};
pub use traits::CoordinateTransform;
