#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linefold::{FoldOptions, fold_slice};

#[derive(Debug, Arbitrary)]
struct Case {
    width: u8,
    data: Vec<u8>,
}

fn words(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes
        .split(|&b| matches!(b, b' ' | b'\t' | b'\n'))
        .filter(|w| !w.is_empty())
}

fuzz_target!(|case: Case| {
    let options = FoldOptions {
        width: usize::from(case.width),
        word_capacity: case.data.len() + 1,
    };
    let folded = fold_slice(&case.data, &options);

    // Folding reorders nothing: the word sequence survives every pass.
    assert!(words(&case.data).eq(words(&folded)));

    // Separators coalesce: no tab and no doubled space ever reaches the
    // output.
    assert!(!folded.contains(&b'\t'));
    assert!(!folded.windows(2).any(|w| w[0] == b' ' && w[1] == b' '));
});
