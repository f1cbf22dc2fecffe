use rdwgs_macros::ConversionBatch;

#[derive(ConversionBatch)]
pub struct Sample {
    pub x: f32,
    pub error_code: i32,
}

fn main() {}
