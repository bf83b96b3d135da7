use std::collections::HashSet;

/// Record carrying a unique identifier
pub trait HasId {
    fn id(&self) -> &str;
}

/// Drop records whose id was already seen, keeping the first occurrence
/// and the original relative order of everything kept
pub fn remove_duplicates<T: HasId>(records: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(records.len());

    for record in records {
        if seen.insert(record.id().to_string()) {
            result.push(record);
        }
    }

    result
}
