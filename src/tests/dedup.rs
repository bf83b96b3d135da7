use crate::dedup::{HasId, remove_duplicates};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    id: &'static str,
    value: u32
}

impl HasId for Record {
    fn id(&self) -> &str {
        self.id
    }
}

#[test]
fn test_first_seen_wins() {
    let records = vec![
        Record { id: "a", value: 1 },
        Record { id: "b", value: 2 },
        Record { id: "a", value: 3 },
        Record { id: "c", value: 4 },
        Record { id: "b", value: 5 }
    ];

    let result = remove_duplicates(records);

    assert_eq!(result, vec![
        Record { id: "a", value: 1 },
        Record { id: "b", value: 2 },
        Record { id: "c", value: 4 }
    ]);
}

#[test]
fn test_no_duplicates_unchanged() {
    let records = vec![
        Record { id: "x", value: 1 },
        Record { id: "y", value: 2 }
    ];

    assert_eq!(remove_duplicates(records.clone()), records);
}

#[test]
fn test_empty_input() {
    assert_eq!(remove_duplicates(Vec::<Record>::new()), vec![]);
}
