/// Wraps `value` into the range `[0, modulus)`.
///
/// Negative values wrap from the top, so `normalize_value(-1, 12)` is 11.
pub fn normalize_value(value: i32, modulus: i32) -> i32 {
    value.rem_euclid(modulus)
}

/// Returns a copy of `values` with repeated entries removed, keeping the
/// first occurrence of each.
pub fn remove_duplicates<T: PartialEq + Clone>(values: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(value) {
            unique.push(value.clone());
        }
    }
    unique
}
