use rdwgs_macros::ConversionBatch;

#[derive(Debug, Clone, Copy, PartialEq, ConversionBatch)]
pub struct Nap {
    pub error_code: i32,
    pub x: f64,
    pub y: f64,
    pub h: f64,
}

fn main() {
    let mut batch = NapBatch::default();
    batch.extend([Nap { error_code: -3, x: 1.0, y: 2.0, h: 3.0 }]);
    assert_eq!(batch.h(), &[3.0]);
    assert_eq!(batch.get(0).map(|n| n.error_code), Some(-3));
    assert_eq!(batch.out_of_range_count(), 1);
}
