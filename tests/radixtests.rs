use RadixQueueMini::core::demo::{random_int_list, random_string_list};
use RadixQueueMini::core::log::{PassRecord, SortKind, write_ndjson};
use RadixQueueMini::core::radix::{
    NUM_CHARS, NUM_DIGITS, alphabetical_radix_sort, alphabetical_radix_sort_traced, int_radix_sort,
    int_radix_sort_traced,
};

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn int_sort_orders_the_textbook_example() {
    let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
    int_radix_sort(&mut data);
    assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
}

#[test]
fn int_sort_matches_std_sort_on_random_input() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..20 {
        let len = rng.usize(0..200);
        let mut data: Vec<u64> = (0..len).map(|_| rng.u64(0..1_000_000)).collect();
        let mut expected = data.clone();
        expected.sort();
        int_radix_sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn int_sort_handles_edges() {
    let mut empty: Vec<u64> = Vec::new();
    int_radix_sort(&mut empty);
    assert!(empty.is_empty());

    let mut zeros = vec![0, 0, 0];
    int_radix_sort(&mut zeros);
    assert_eq!(zeros, vec![0, 0, 0]);

    let mut wide = vec![u64::MAX, 0, 10_000_000_000_000_000_000, 1];
    int_radix_sort(&mut wide);
    assert_eq!(wide, vec![0, 1, 10_000_000_000_000_000_000, u64::MAX]);
}

#[test]
fn int_sort_is_idempotent() {
    let mut data = vec![5, 3, 9, 3, 100];
    int_radix_sort(&mut data);
    let once = data.clone();
    int_radix_sort(&mut data);
    assert_eq!(data, once);
}

#[test]
fn int_sort_trace_records_one_pass_per_digit() {
    let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
    let log = int_radix_sort_traced(&mut data);
    assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    assert_eq!(log.len(), 3);

    let keys: Vec<u64> = log.entries().iter().map(|entry| entry.key).collect();
    assert_eq!(keys, vec![1, 10, 100]);
    for (i, entry) in log.entries().iter().enumerate() {
        assert_eq!(entry.sort, SortKind::Integer);
        assert_eq!(entry.pass, i);
        assert_eq!(entry.bucket_sizes.len(), NUM_DIGITS);
        assert_eq!(entry.bucket_sizes.iter().sum::<usize>(), 8);
    }
    // ones digits: 0,5,5,0,2,4,2,6
    assert_eq!(log.entries()[0].bucket_sizes, vec![2, 0, 2, 0, 1, 2, 1, 0, 0, 0]);
}

#[test]
fn alphabetical_sort_orders_the_example() {
    let mut data = words(&["banana", "Apple", "cherry"]);
    alphabetical_radix_sort(&mut data);
    assert_eq!(data, words(&["Apple", "banana", "cherry"]));
}

#[test]
fn alphabetical_sort_is_case_insensitive_and_stable() {
    let mut data = words(&["b", "apple", "Apple", "a", "APPLE"]);
    alphabetical_radix_sort(&mut data);
    assert_eq!(data, words(&["a", "apple", "Apple", "APPLE", "b"]));
}

#[test]
fn alphabetical_sort_puts_prefixes_first() {
    let mut data = words(&["abc", "ab", "abcd", "a"]);
    alphabetical_radix_sort(&mut data);
    assert_eq!(data, words(&["a", "ab", "abc", "abcd"]));
}

#[test]
fn alphabetical_sort_matches_std_sort_on_random_input() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..20 {
        let mut data = random_string_list(&mut rng, 40, 8);
        let mut expected = data.clone();
        expected.sort_by_key(|word| word.to_ascii_lowercase());
        alphabetical_radix_sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn alphabetical_sort_is_idempotent() {
    let mut data = words(&["delta", "Alpha", "charlie", "bravo"]);
    alphabetical_radix_sort(&mut data);
    let once = data.clone();
    alphabetical_radix_sort(&mut data);
    assert_eq!(data, once);
}

#[test]
fn alphabetical_sort_keeps_padding_symbol_in_input() {
    let mut data = words(&["b`", "a", "`x"]);
    alphabetical_radix_sort(&mut data);
    assert_eq!(data, words(&["`x", "a", "b`"]));
}

#[test]
fn alphabetical_sort_buckets_non_letters_with_padding() {
    let mut data = words(&["zé", "a1", "b", "é", "ab"]);
    alphabetical_radix_sort(&mut data);
    assert_eq!(data, words(&["é", "a1", "ab", "b", "zé"]));

    let mut digits = words(&["9", "x", "42"]);
    alphabetical_radix_sort(&mut digits);
    assert_eq!(digits, words(&["9", "42", "x"]));
}

#[test]
fn alphabetical_sort_counts_length_in_chars() {
    // "éé" is four bytes but two chars, so only two passes run
    let mut data = words(&["éé", "b"]);
    let log = alphabetical_radix_sort_traced(&mut data);
    assert_eq!(log.len(), 2);
    assert_eq!(data, words(&["éé", "b"]));
}

#[test]
fn alphabetical_sort_handles_empty_words() {
    let mut empty: Vec<String> = Vec::new();
    alphabetical_radix_sort(&mut empty);
    assert!(empty.is_empty());

    let mut data = words(&["b", "", "a"]);
    alphabetical_radix_sort(&mut data);
    assert_eq!(data, words(&["", "a", "b"]));
}

#[test]
fn alphabetical_trace_walks_positions_right_to_left() {
    let mut data = words(&["cab", "ab", "b"]);
    let log = alphabetical_radix_sort_traced(&mut data);
    assert_eq!(data, words(&["ab", "b", "cab"]));
    assert_eq!(log.len(), 3);
    for (i, entry) in log.entries().iter().enumerate() {
        assert_eq!(entry.sort, SortKind::Alphabetical);
        assert_eq!(entry.key, i as u64);
        assert_eq!(entry.bucket_sizes.len(), NUM_CHARS);
    }
    // last position: "cab" -> b, "ab`" -> pad, "b``" -> pad
    assert_eq!(log.entries()[0].bucket_sizes[0], 2);
    assert_eq!(log.entries()[0].bucket_sizes[2], 1);
}

#[test]
fn pass_log_writes_one_json_object_per_line() {
    let mut data = vec![31, 4, 159];
    let log = int_radix_sort_traced(&mut data);

    let mut out = Vec::new();
    write_ndjson(&log, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), log.len());

    let parsed: Vec<PassRecord> = lines
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, log.entries());
    assert!(lines[0].contains("\"sort\":\"integer\""));
}

#[test]
fn random_lists_respect_their_bounds() {
    let mut rng = fastrand::Rng::with_seed(3);
    let nums = random_int_list(&mut rng, 100, 200);
    assert_eq!(nums.len(), 100);
    assert!(nums.iter().all(|&n| (1..=200).contains(&n)));

    let list = random_string_list(&mut rng, 50, 10);
    assert_eq!(list.len(), 50);
    assert!(list.iter().all(|w| (1..=10).contains(&w.len())));
    assert!(list.iter().all(|w| w.chars().all(|c| c.is_ascii_alphabetic())));
}

#[test]
fn seeded_lists_are_reproducible() {
    let first = random_int_list(&mut fastrand::Rng::with_seed(11), 10, 50);
    let second = random_int_list(&mut fastrand::Rng::with_seed(11), 10, 50);
    assert_eq!(first, second);
}
