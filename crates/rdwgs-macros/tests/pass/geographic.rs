use rdwgs_macros::ConversionBatch;

#[derive(Debug, Clone, Copy, PartialEq, ConversionBatch)]
pub struct Geographic {
    pub phi: f64,
    pub labda: f64,
    pub error_code: i32,
}

fn main() {
    let ok = Geographic { phi: 52.37, labda: 4.89, error_code: 0 };
    let off = Geographic { phi: 57.0, labda: 6.06, error_code: -2 };

    let mut batch = GeographicBatch::with_capacity(2);
    assert!(batch.is_empty());
    batch.push(&ok);
    batch.push(&off);

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.phi(), &[52.37, 57.0]);
    assert_eq!(batch.labda(), &[4.89, 6.06]);
    assert_eq!(batch.error_codes(), &[0, -2]);
    assert_eq!(batch.out_of_range_count(), 1);
    assert_eq!(batch.get(1), Some(off));
    assert_eq!(batch.get(2), None);

    let collected: GeographicBatch = vec![ok, off].into_iter().collect();
    assert_eq!(collected, batch);
}
