/// Arithmetic mean of `values`, or `None` when there is nothing to average.
///
/// Summed in `f32`, so long runs of large readings lose precision.
pub fn mean(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    let sum: f32 = values.iter().sum();
    Some(sum / values.len() as f32)
}

/// Index of the largest value in `values`, or `None` when it is empty.
///
/// Ties resolve to the earliest index. NaN never wins a comparison, so a NaN
/// only comes back when it sits at index 0.
pub fn index_of_max(values: &[f32]) -> Option<usize> {
    let (first, rest) = values.split_first()?;
    let mut max_val = *first;
    let mut max_index = 0;

    for (i, &value) in rest.iter().enumerate() {
        if max_val < value {
            max_val = value;
            max_index = i + 1;
        }
    }

    Some(max_index)
}
