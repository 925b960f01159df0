// Numeric helpers shared by the scoring layers.

/// Normalize a score into [0, 1] against a batch extent. A degenerate batch
/// (max == min) maps everything to the midpoint rather than dividing by zero.
pub fn normalize_score(score: f32, min: f32, max: f32) -> f32 {
    if max - min < f32::EPSILON {
        0.5
    } else {
        ((score - min) / (max - min)).clamp(0.0, 1.0)
    }
}

/// Min and max of a batch of scores. `(0.0, 0.0)` for an empty batch.
pub fn extent<I>(values: I) -> (f32, f32)
where
    I: IntoIterator<Item = f32>,
{
    let mut iter = values.into_iter();
    let first = match iter.next() {
        Some(v) => v,
        None => return (0.0, 0.0),
    };
    iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
}
