//! Reference table of RD points along the edges of the validity box.

use crate::format;
use crate::point::RdPoint;
use crate::rd;

const fn p(x: f64, y: f64) -> RdPoint {
    RdPoint { x, y }
}

/// RD sample points on and near the validity box edges, including the four
/// corners and a fine sweep near the north-east corner.
pub const BOUNDARY_SAMPLES: [RdPoint; 52] = [
    p(141000.00, 629000.00),
    p(100000.00, 600000.00),
    p(80000.00, 500000.00),
    p(-7000.00, 392000.00),
    p(0.00, 392000.00),
    p(-7000.00, 336000.00),
    p(0.00, 336000.00),
    p(101000.00, 336000.00),
    p(161000.00, 289000.00),
    p(161000.00, 289000.00),
    p(219000.00, 289000.00),
    p(219000.00, 290000.00),
    p(300000.00, 451000.00),
    p(289999.00, 451000.00),
    p(300000.00, 614000.00),
    p(289999.00, 614000.00),
    p(259000.00, 629000.00),
    p(289985.00, 628000.00),
    p(289986.00, 628000.00),
    p(289987.00, 628000.00),
    p(289988.00, 628000.00),
    p(289989.00, 628000.00),
    p(289990.00, 628000.00),
    p(289991.00, 628000.00),
    p(289992.00, 628000.00),
    p(289993.00, 628000.00),
    p(289994.00, 628000.00),
    p(289995.00, 628000.00),
    p(289996.00, 628000.00),
    p(289997.00, 628000.00),
    p(289998.00, 628000.00),
    p(289999.00, 628000.00),
    p(289999.00, 627999.00),
    p(289999.00, 627998.00),
    p(289999.00, 627997.00),
    p(289999.00, 627996.00),
    p(289999.00, 627995.00),
    p(289999.00, 627994.00),
    p(289999.00, 627993.00),
    p(289999.00, 627992.00),
    p(289999.00, 627991.00),
    p(289999.00, 627990.00),
    p(289999.00, 627989.00),
    p(289999.00, 627988.00),
    p(289999.00, 627987.00),
    p(289999.00, 627986.00),
    p(289999.00, 627985.00),
    p(289999.00, 627984.00),
    p(-7000.00, 629000.00),
    p(-7000.00, 289000.00),
    p(300000.00, 289000.00),
    p(300000.00, 629000.00),
];

/// One `X:xxxxxxm Y:yyyyyym = <geographic>` line per sample.
pub fn table_lines(style: format::Style) -> Vec<String> {
    BOUNDARY_SAMPLES
        .iter()
        .map(|pt| {
            let g = rd::convert(pt.x, pt.y);
            format!("{} = {}", format::xy(pt.x, pt.y), style.format(g.phi, g.labda))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_lie_inside_the_box() {
        for pt in &BOUNDARY_SAMPLES {
            assert_eq!(rd::range_code(pt.x, pt.y), 0, "{pt:?}");
        }
    }

    #[test]
    fn one_line_per_sample() {
        let lines = table_lines(format::Style::Dmm);
        assert_eq!(lines.len(), BOUNDARY_SAMPLES.len());
        assert!(lines[0].starts_with("X:141000m Y:629000m = N53 "));
        assert!(lines[49].starts_with("X:-07000m Y:289000m = N50 34.108 E003 "));
    }
}
