use diffTable::{
    apply, diff, partition, ApplyError, EditOp, PartitionError, PartitionStrategy, Person,
    SectionKey, Snapshot, Team,
};

fn people() -> Vec<Person> {
    vec![
        Person::new("Amy", Team::Blue),
        Person::new("Bob", Team::Red),
        Person::new("Al", Team::Green),
    ]
}

fn keys(ks: &[&str]) -> Vec<SectionKey> {
    ks.iter().map(|k| SectionKey::from(*k)).collect()
}

#[test]
fn partition_by_first_letter() {
    let snap = partition(&people(), PartitionStrategy::ByNameFirstLetter, &keys(&["A", "B"])).unwrap();
    let expected = Snapshot::from_sections(vec![
        ("A", vec![Person::new("Amy", Team::Blue), Person::new("Al", Team::Green)]),
        ("B", vec![Person::new("Bob", Team::Red)]),
    ])
    .unwrap();
    assert_eq!(snap, expected);
    assert_eq!(snap.section_titles(), vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn partition_by_team() {
    let snap = partition(&people(), PartitionStrategy::ByCategory, &keys(&["blue", "green", "red"])).unwrap();
    let expected = Snapshot::from_sections(vec![
        ("blue", vec![Person::new("Amy", Team::Blue)]),
        ("green", vec![Person::new("Al", Team::Green)]),
        ("red", vec![Person::new("Bob", Team::Red)]),
    ])
    .unwrap();
    assert_eq!(snap, expected);
}

#[test]
fn partition_rejects_duplicate_keys() {
    let err = partition(&people(), PartitionStrategy::ByNameFirstLetter, &keys(&["A", "B", "A"])).unwrap_err();
    assert_eq!(err, PartitionError::DuplicateKey { key: SectionKey::from("A") });
}

#[test]
fn partition_of_nothing_is_empty() {
    let snap = partition(&[], PartitionStrategy::ByCategory, &keys(&["blue"])).unwrap();
    assert!(snap.is_empty());
    let snap = partition(&people(), PartitionStrategy::ByCategory, &[]).unwrap();
    assert!(snap.is_empty());
}

#[test]
fn swapping_two_rows_is_one_move() {
    let a = Snapshot::from_sections(vec![(
        "A",
        vec![Person::new("Amy", Team::Blue), Person::new("Al", Team::Green)],
    )])
    .unwrap();
    let b = Snapshot::from_sections(vec![(
        "A",
        vec![Person::new("Al", Team::Green), Person::new("Amy", Team::Blue)],
    )])
    .unwrap();

    let ops = diff(&a, &b);
    assert_eq!(ops.len(), 1, "{ops:?}");
    assert!(matches!(ops[0], EditOp::MoveItem { .. }));
    assert_eq!(apply(&a, &ops).unwrap(), b);
}

#[test]
fn emptying_the_list_deletes_the_section() {
    let a = Snapshot::from_sections(vec![("A", vec![Person::new("Amy", Team::Blue)])]).unwrap();
    let b = Snapshot::new();
    let ops = diff(&a, &b);
    assert_eq!(
        ops,
        vec![EditOp::DeleteSection {
            index: 0,
            key: SectionKey::from("A")
        }]
    );
    assert_eq!(apply(&a, &ops).unwrap(), b);
}

#[test]
fn empty_to_empty_is_nothing() {
    let e: Snapshot<Person> = Snapshot::new();
    assert!(diff(&e, &e).is_empty());
}

#[test]
fn new_section_carries_its_rows() {
    let a: Snapshot<Person> = Snapshot::new();
    let b = Snapshot::from_sections(vec![("B", vec![Person::new("Bob", Team::Red)])]).unwrap();
    assert_eq!(
        diff(&a, &b),
        vec![EditOp::InsertSection {
            index: 0,
            key: SectionKey::from("B"),
            items: vec![Person::new("Bob", Team::Red)]
        }]
    );
}

#[test]
fn apply_checks_the_item_it_deletes() {
    let a = Snapshot::from_sections(vec![("A", vec![Person::new("Amy", Team::Blue)])]).unwrap();
    let ops = vec![EditOp::DeleteItem {
        section: SectionKey::from("A"),
        index: 0,
        item: Person::new("Al", Team::Green),
    }];
    let err = apply(&a, &ops).unwrap_err();
    assert!(matches!(err, ApplyError::ItemMismatch { op: 0, .. }), "{err:?}");

    let mut s = a.clone();
    assert!(s.apply_in_place(&ops).is_err());
    assert_eq!(s, a);
}

#[test]
fn apply_rejects_unknown_section() {
    let a = Snapshot::from_sections(vec![("A", vec![1u8])]).unwrap();
    let ops = vec![EditOp::InsertItem {
        section: SectionKey::from("Z"),
        index: 0,
        item: 2u8,
    }];
    assert!(matches!(apply(&a, &ops), Err(ApplyError::SectionNotFound { .. })));
}
