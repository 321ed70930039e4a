use concordance_core::table::{horner_hash, ProbeSequence, ProbingHashTable, HASHED_PREFIX_LEN};

#[test]
fn golden_horner_values() {
    assert_eq!(horner_hash("a", 191), 97);
    assert_eq!(horner_hash("ab", 191), 49);
    assert_eq!(horner_hash("quick", 191), 31);
    // code point, not byte: 'é' is U+00E9
    assert_eq!(horner_hash("é", 191), 42);
    assert_eq!(horner_hash("", 191), 0);
}

#[test]
fn invariant_hash_in_range() {
    for capacity in [1, 2, 7, 191, 383, 767, 1000] {
        for key in ["", "a", "zzzzzzzzzzzz", "Ünïcödé", "the quick brown fox"] {
            assert!(horner_hash(key, capacity) < capacity);
        }
    }
}

#[test]
fn invariant_only_prefix_participates() {
    assert_eq!(HASHED_PREFIX_LEN, 8);

    for capacity in [191, 383, 4099] {
        assert_eq!(
            horner_hash("abcdefgh", capacity),
            horner_hash("abcdefghijk", capacity)
        );
        assert_eq!(
            horner_hash("concordance", capacity),
            horner_hash("concordant", capacity)
        );
    }
}

#[test]
fn table_hash_matches_free_function() {
    let mut table: ProbingHashTable<()> = ProbingHashTable::new(191).unwrap();
    assert_eq!(table.hash("word"), horner_hash("word", 191));

    table.grow();
    assert_eq!(table.hash("word"), horner_hash("word", 383));
}

#[test]
fn probe_sequence_is_quadratic() {
    let capacity = 10;
    let home = horner_hash("key", capacity);
    let probes: Vec<usize> = ProbeSequence::for_key("key", capacity).collect();

    let expected: Vec<usize> = (0..capacity).map(|i| (home + i * i) % capacity).collect();
    assert_eq!(probes, expected);
    assert_eq!(probes[0], home);
}

#[test]
fn probe_sequence_on_prime_reaches_half_the_slots() {
    let mut reached: Vec<usize> = ProbeSequence::new(0, 191).collect();
    assert_eq!(reached.len(), 191);

    reached.sort();
    reached.dedup();
    assert_eq!(reached.len(), 96);
}

#[test]
fn probe_sequence_is_lazy_and_sized() {
    let mut probes = ProbeSequence::new(3, 5);
    assert_eq!(probes.len(), 5);
    assert_eq!(probes.next(), Some(3));
    assert_eq!(probes.next(), Some(4));
    assert_eq!(probes.len(), 3);
    assert_eq!(probes.next(), Some(2)); // 3 + 4
    assert_eq!(probes.next(), Some(2)); // 3 + 9
    assert_eq!(probes.next(), Some(4)); // 3 + 16
    assert_eq!(probes.next(), None);
}
