use fastrand::Rng;

/// `length` random integers, each in `1..=max_num`
pub fn random_int_list(rng: &mut Rng, length: usize, max_num: u64) -> Vec<u64> {
    let max_num = max_num.max(1);
    (0..length).map(|_| rng.u64(1..=max_num)).collect()
}

/// `length` random words of mixed-case ASCII letters, each `1..=max_size` long
pub fn random_string_list(rng: &mut Rng, length: usize, max_size: usize) -> Vec<String> {
    let max_size = max_size.max(1);
    (0..length)
        .map(|_| {
            let word_len = rng.usize(1..=max_size);
            (0..word_len).map(|_| rng.alphabetic()).collect()
        })
        .collect()
}
