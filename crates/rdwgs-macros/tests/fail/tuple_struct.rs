use rdwgs_macros::ConversionBatch;

#[derive(ConversionBatch)]
pub struct Sample(f64, i32);

fn main() {}
