//! Radix sorts that use the queue containers as bucket storage.
//!
//! Both sorts are stable bucket sorts: every pass drains the working queue
//! into buckets keyed on one digit (or character) and then drains the buckets,
//! lowest key first, back into the working queue.

use tracing::debug;

use crate::core::arrayqueue::ArrayQueue;
use crate::core::log::{SortKind, SortLog};
use crate::core::manualqueue::ManualLinkedQueue;
use crate::core::queue::Queue;

/// The number of possible digits. Uses base 10.
pub const NUM_DIGITS: usize = 10;

/// Buckets for the alphabetical sort: the padding bucket plus 26 letters.
pub const NUM_CHARS: usize = 27;

/// Right-padding symbol for the alphabetical sort. Sits just below `a` in ASCII.
pub const PAD: char = '`';

/// Sort non-negative integers in place, least-significant digit first.
pub fn int_radix_sort(data: &mut [u64]) {
    int_sort(data, None);
}

/// Same as [`int_radix_sort`], also returning a record of every pass.
pub fn int_radix_sort_traced(data: &mut [u64]) -> SortLog {
    let mut log = SortLog::new();
    int_sort(data, Some(&mut log));
    log
}

/// Sort words in place, case-insensitively.
///
/// Shorter words sort before longer words sharing their prefix. Characters
/// other than ASCII letters share the lowest bucket with the padding.
pub fn alphabetical_radix_sort(data: &mut [String]) {
    alphabetical_sort(data, None);
}

/// Same as [`alphabetical_radix_sort`], also returning a record of every pass.
pub fn alphabetical_radix_sort_traced(data: &mut [String]) -> SortLog {
    let mut log = SortLog::new();
    alphabetical_sort(data, Some(&mut log));
    log
}

fn int_sort(data: &mut [u64], mut log: Option<&mut SortLog>) {
    let mut result: ManualLinkedQueue<u64> = data.iter().copied().collect();
    let mut buckets: Vec<ManualLinkedQueue<u64>> =
        (0..NUM_DIGITS).map(|_| ManualLinkedQueue::new()).collect();

    let most_digits = most_digits(data);
    let mut place: u64 = 1;
    for pass in 0..most_digits {
        while let Ok(item) = result.dequeue() {
            let digit = (item / place % 10) as usize;
            buckets[digit].enqueue(item);
        }
        let sizes = buckets.iter().map(|bucket| bucket.size()).collect();
        record(&mut log, SortKind::Integer, pass, place, sizes);
        for bucket in buckets.iter_mut() {
            while let Ok(item) = bucket.dequeue() {
                result.enqueue(item);
            }
        }
        place = place.saturating_mul(10);
    }

    debug_assert_eq!(result.size(), data.len(), "Sorting must not lose values");
    for (slot, item) in data.iter_mut().zip(result) {
        *slot = item;
    }
}

fn alphabetical_sort(data: &mut [String], mut log: Option<&mut SortLog>) {
    let most_chars = most_characters(data);
    let mut result: ArrayQueue<Padded> = ArrayQueue::with_capacity(data.len());
    for word in data.iter() {
        result.enqueue(Padded::new(word, most_chars));
    }
    let mut buckets: Vec<ArrayQueue<Padded>> = (0..NUM_CHARS).map(|_| ArrayQueue::new()).collect();

    for i in 0..most_chars {
        while let Ok(word) = result.dequeue() {
            let bucket = bucket_for(word.chars[most_chars - 1 - i]);
            buckets[bucket].enqueue(word);
        }
        let sizes = buckets.iter().map(|bucket| bucket.size()).collect();
        record(&mut log, SortKind::Alphabetical, i, i as u64, sizes);
        for bucket in buckets.iter_mut() {
            while let Ok(item) = bucket.dequeue() {
                result.enqueue(item);
            }
        }
    }

    debug_assert_eq!(result.size(), data.len(), "Sorting must not lose words");
    for (slot, word) in data.iter_mut().zip(result) {
        *slot = word.unpad();
    }
}

fn record(log: &mut Option<&mut SortLog>, sort: SortKind, pass: usize, key: u64, bucket_sizes: Vec<usize>) {
    debug!(?sort, pass, key, ?bucket_sizes, "radix pass distributed");
    if let Some(log) = log.as_deref_mut() {
        log.log(sort, key, bucket_sizes);
    }
}

/// Number of decimal digits in the largest value
fn most_digits(nums: &[u64]) -> usize {
    nums.iter()
        .max()
        .map_or(0, |&largest| largest.checked_ilog10().map_or(1, |d| d as usize + 1))
}

/// Number of chars in the longest word
fn most_characters(words: &[String]) -> usize {
    words.iter().map(|word| word.chars().count()).max().unwrap_or(0)
}

/// 0 for the padding symbol and any other non-letter, 1..=26 for `a`..=`z`
fn bucket_for(c: char) -> usize {
    if c.is_ascii_alphabetic() {
        (c.to_ascii_lowercase() as u8 - b'a') as usize + 1
    } else {
        0
    }
}

/// A word right-padded with [`PAD`], remembering how long it really was
struct Padded {
    chars: Vec<char>,
    original_len: usize,
}

impl Padded {
    fn new(word: &str, length: usize) -> Self {
        let mut chars: Vec<char> = word.chars().collect();
        let original_len = chars.len();
        chars.resize(length.max(original_len), PAD);
        Self { chars, original_len }
    }

    /// Drop exactly the padding added by `new`, so a word that itself contains
    /// `PAD` comes back unchanged.
    fn unpad(mut self) -> String {
        self.chars.truncate(self.original_len);
        self.chars.into_iter().collect()
    }
}
