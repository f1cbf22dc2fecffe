use rdwgs_macros::ConversionBatch;

#[derive(ConversionBatch)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

fn main() {}
