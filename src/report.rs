//! Plain-text reporting of a conversion.

use rdwgs_core::format::Style;
use rdwgs_core::{Geographic, Rd};

/// Lines printed for an RD to WGS84 conversion: the inputs, the error code
/// message, then latitude and longitude, one value per line.
pub fn rd_lines(x: f64, y: f64, g: &Geographic) -> Vec<String> {
    vec![
        x.to_string(),
        y.to_string(),
        format!("Error code {}", g.error_code),
        g.phi.to_string(),
        g.labda.to_string(),
    ]
}

/// Same as [`rd_lines`] with the geographic coordinate rendered in `style`
/// on a single line.
pub fn rd_lines_styled(x: f64, y: f64, g: &Geographic, style: Style) -> Vec<String> {
    vec![
        rdwgs_core::format::xy(x, y),
        format!("Error code {}", g.error_code),
        style.format(g.phi, g.labda),
    ]
}

/// Lines printed for a WGS84 to RD conversion.
pub fn wgs_lines(phi: f64, labda: f64, r: &Rd) -> Vec<String> {
    vec![
        phi.to_string(),
        labda.to_string(),
        format!("Error code {}", r.error_code),
        r.x.to_string(),
        r.y.to_string(),
    ]
}
