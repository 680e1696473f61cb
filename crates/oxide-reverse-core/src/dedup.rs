use std::collections::HashSet;

/// Removes repeated strings, keeping the first occurrence of each.
#[must_use]
pub fn distinct<S: AsRef<str>>(input: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(input.len());
    let mut unique = Vec::with_capacity(input.len());
    for value in input {
        let value = value.as_ref();
        if seen.insert(value) {
            unique.push(value.to_string());
        }
    }
    unique
}
