//! Human-readable coordinate strings.
//!
//! Latitudes are prefixed `N`/`S`, longitudes `E`/`W`, and printed as
//! absolute values with two (latitude) or three (longitude) degree digits.
//! Rounding of the last printed unit carries upward, so minutes never read
//! `60` and thousandths never read `1000`.

const MILLI_MINUTES_PER_DEGREE: f64 = 60_000.0;
const CENTI_SECONDS_PER_DEGREE: f64 = 360_000.0;

fn lat_hemisphere(phi: f64) -> char {
    if phi >= 0.0 {
        'N'
    } else {
        'S'
    }
}

fn lon_hemisphere(labda: f64) -> char {
    if labda >= 0.0 {
        'E'
    } else {
        'W'
    }
}

/// Split |deg| into (degrees, minutes, thousandths of a minute).
fn split_dmm(deg: f64) -> (u64, u64, u64) {
    let total = (deg.abs() * MILLI_MINUTES_PER_DEGREE).round() as u64;
    let d = total / 60_000;
    let rem = total % 60_000;
    (d, rem / 1000, rem % 1000)
}

/// Split |deg| into (degrees, minutes, seconds, hundredths of a second).
fn split_dms(deg: f64) -> (u64, u64, u64, u64) {
    let total = (deg.abs() * CENTI_SECONDS_PER_DEGREE).round() as u64;
    let d = total / 360_000;
    let rem = total % 360_000;
    let m = rem / 6000;
    let rem = rem % 6000;
    (d, m, rem / 100, rem % 100)
}

/// `Ndd.ddddd`
pub fn lat_ddd(phi: f64) -> String {
    format!("{}{:08.5}", lat_hemisphere(phi), phi.abs())
}

/// `Eddd.ddddd`
pub fn lon_ddd(labda: f64) -> String {
    format!("{}{:09.5}", lon_hemisphere(labda), labda.abs())
}

/// `Ndd.ddddd Eddd.ddddd`
pub fn ddd(phi: f64, labda: f64) -> String {
    format!("{} {}", lat_ddd(phi), lon_ddd(labda))
}

/// `Ndd mm.mmm`
pub fn lat_dmm(phi: f64) -> String {
    let (d, m, mm) = split_dmm(phi);
    format!("{}{:02} {:02}.{:03}", lat_hemisphere(phi), d, m, mm)
}

/// `Eddd mm.mmm`
pub fn lon_dmm(labda: f64) -> String {
    let (d, m, mm) = split_dmm(labda);
    format!("{}{:03} {:02}.{:03}", lon_hemisphere(labda), d, m, mm)
}

/// `Ndd mm.mmm Eddd mm.mmm`
pub fn dmm(phi: f64, labda: f64) -> String {
    format!("{} {}", lat_dmm(phi), lon_dmm(labda))
}

/// `Ndd mm'ss.ss"`
pub fn lat_dms(phi: f64) -> String {
    let (d, m, s, cs) = split_dms(phi);
    format!("{}{:02} {:02}'{:02}.{:02}\"", lat_hemisphere(phi), d, m, s, cs)
}

/// `Eddd mm'ss.ss"`
pub fn lon_dms(labda: f64) -> String {
    let (d, m, s, cs) = split_dms(labda);
    format!("{}{:03} {:02}'{:02}.{:02}\"", lon_hemisphere(labda), d, m, s, cs)
}

/// `Ndd mm'ss.ss" Eddd mm'ss.ss"`
pub fn dms(phi: f64, labda: f64) -> String {
    format!("{} {}", lat_dms(phi), lon_dms(labda))
}

/// `X:xxxxxxm`, rounded to whole metres.
pub fn x_str(x: f64) -> String {
    format!("X:{:06.0}m", x.round())
}

/// `Y:yyyyyym`, rounded to whole metres.
pub fn y_str(y: f64) -> String {
    format!("Y:{:06.0}m", y.round())
}

/// `X:xxxxxxm Y:yyyyyym`
pub fn xy(x: f64, y: f64) -> String {
    format!("{} {}", x_str(x), y_str(y))
}

/// Output style for a geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Decimal degrees.
    #[default]
    Ddd,
    /// Degrees and decimal minutes.
    Dmm,
    /// Degrees, minutes and decimal seconds.
    Dms,
}

impl Style {
    pub fn format(self, phi: f64, labda: f64) -> String {
        match self {
            Style::Ddd => ddd(phi, labda),
            Style::Dmm => dmm(phi, labda),
            Style::Dms => dms(phi, labda),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: f64 = 52.123456789;
    const E: f64 = 6.23456789;

    #[test]
    fn decimal_degrees() {
        assert_eq!(ddd(N, E), "N52.12346 E006.23457");
        assert_eq!(ddd(-N, -E), "S52.12346 W006.23457");
    }

    #[test]
    fn degrees_decimal_minutes() {
        assert_eq!(dmm(N, E), "N52 07.407 E006 14.074");
        assert_eq!(dmm(-N, -E), "S52 07.407 W006 14.074");
    }

    #[test]
    fn degrees_minutes_seconds() {
        assert_eq!(dms(N, E), "N52 07'24.44\" E006 14'04.44\"");
        assert_eq!(dms(-N, -E), "S52 07'24.44\" W006 14'04.44\"");
    }

    #[test]
    fn rounding_carries_into_next_unit() {
        // 52 degrees 59.9999 minutes
        let phi = 52.0 + 59.9999 / 60.0;
        assert_eq!(lat_dmm(phi), "N53 00.000");
        // 4 degrees 59 minutes 59.999 seconds
        let labda = 4.0 + 59.0 / 60.0 + 59.999 / 3600.0;
        assert_eq!(lon_dms(labda), "E005 00'00.00\"");
    }

    #[test]
    fn rd_strings() {
        assert_eq!(xy(195994.4, 447683.6), "X:195994m Y:447684m");
        assert_eq!(x_str(1000.0), "X:001000m");
        assert_eq!(x_str(-7000.0), "X:-07000m");
    }

    #[test]
    fn style_dispatch() {
        assert_eq!(Style::default().format(N, E), ddd(N, E));
        assert_eq!(Style::Dmm.format(N, E), dmm(N, E));
        assert_eq!(Style::Dms.format(N, E), dms(N, E));
    }
}
