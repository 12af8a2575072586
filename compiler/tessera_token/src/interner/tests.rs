use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    let empty = interner.intern("");
    assert_eq!(empty, Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert!(interner.is_empty());
}

#[test]
fn test_len_counts_distinct_strings() {
    let interner = StringInterner::new();
    assert_eq!(interner.len(), 1);

    interner.intern("+");
    interner.intern("+");
    interner.intern("<<=");
    assert_eq!(interner.len(), 3);
    assert!(!interner.is_empty());
}

#[test]
fn test_empty_string_is_shard_zero_slot_zero() {
    let interner = StringInterner::new();
    let name = interner.intern("");
    assert_eq!((name.shard(), name.slot()), (0, 0));
}

#[test]
fn test_names_spread_over_shards() {
    let interner = StringInterner::new();
    let shards: std::collections::BTreeSet<usize> = (0..256)
        .map(|i| interner.intern(&format!("t{i}")).shard())
        .collect();
    assert!(shards.len() > 1);
}

#[test]
fn test_operator_and_literal_text() {
    let interner = StringInterner::new();
    let texts = ["0x1F", "1_000", "3.14e-2", "&&&", "\"\"\"", "`foo`"];
    let names: Vec<_> = texts.iter().map(|t| interner.intern(t)).collect();
    for (text, name) in texts.iter().zip(&names) {
        assert_eq!(interner.lookup(*name), *text);
    }
}

#[test]
fn test_concurrent_intern_agrees() {
    let interner = StringInterner::new();
    let words: Vec<String> = (0..64).map(|i| format!("ident_{i}")).collect();

    let per_thread: Vec<Vec<Name>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| words.iter().map(|w| interner.intern(w)).collect()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect()
    });

    for names in &per_thread[1..] {
        assert_eq!(names, &per_thread[0]);
    }
    assert_eq!(interner.len(), 65);
}

#[test]
fn test_overflow_error_message() {
    let err = InternError::ShardOverflow {
        shard: 3,
        len: 1 << 28,
    };
    assert_eq!(
        err.to_string(),
        "text shard 3 is full (268435456 entries, limit 268435456)"
    );
}

#[test]
fn test_names_resolve_through_the_global_interner() {
    let name = Name::intern("Sendable");
    assert_eq!(global().lookup(name), "Sendable");
    assert_eq!(global().intern("Sendable"), name);
    assert_eq!(name.as_str(), "Sendable");
    assert_eq!(name.to_string(), "Sendable");
}
