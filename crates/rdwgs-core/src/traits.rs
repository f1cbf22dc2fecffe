/// Core trait for point-wise coordinate transforms.
///
/// Both directions of the RD/WGS84 approximation implement it: a pure
/// per-point `apply`, plus a default loop over a slice of inputs.
pub trait CoordinateTransform {
    type Input: Copy;
    type Output: Copy;

    /// Transform a single point. Never fails.
    fn apply(input: &Self::Input) -> Self::Output;

    /// Transform every point of a slice, preserving order.
    fn apply_all(inputs: &[Self::Input]) -> Vec<Self::Output> {
        let mut outputs = Vec::with_capacity(inputs.len());
        for input in inputs {
            outputs.push(Self::apply(input));
        }
        outputs
    }
}
