/// Index of the first element that is not strictly greater than its predecessor.
/// None when the whole slice is strictly increasing.
pub fn first_unordered_index<T: PartialOrd>(vector: &[T]) -> Option<usize> {
    vector
        .windows(2)
        .position(|pair| pair[0] >= pair[1])
        .map(|pos| pos + 1)
}

/// evaluates whether all elements in a slice are the same. Empty counts as constant.
pub fn are_all_elements_same<T: PartialEq>(vector: &[T]) -> bool {
    match vector.first() {
        Some(first) => vector.iter().all(|element| element == first),
        None => true,
    }
}

/// Keeps only the positions where both values are finite.
/// The zip would silently truncate to the shorter slice, so lengths must match.
pub fn paired_finite(a: &[f64], b: &[f64]) -> (Vec<f64>, Vec<f64>) {
    debug_assert_eq!(a.len(), b.len());

    a.iter()
        .zip(b.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .unzip()
}
