use alloc::{string::String, vec::Vec};

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use crate::{DEFAULT_WIDTH, FoldOptions, fold_slice};

/// Word sequence of `bytes`: maximal runs of non-separator, non-newline
/// bytes.
fn words(bytes: &[u8]) -> Vec<&[u8]> {
    bytes
        .split(|&b| matches!(b, b' ' | b'\t' | b'\n'))
        .filter(|w| !w.is_empty())
        .collect()
}

#[quickcheck]
fn separator_runs_fold_to_nothing(tabs: Vec<bool>) -> bool {
    let input: Vec<u8> = tabs.iter().map(|&t| if t { b'\t' } else { b' ' }).collect();
    fold_slice(&input, &FoldOptions::default()).is_empty()
}

#[quickcheck]
fn short_word_passes_through(raw: Vec<u8>) -> TestResult {
    let word: Vec<u8> = raw
        .into_iter()
        .filter(|b| !matches!(b, b' ' | b'\t' | b'\n'))
        .collect();
    if word.is_empty() || word.len() + 1 > DEFAULT_WIDTH {
        return TestResult::discard();
    }

    let mut expected = word.clone();
    expected.push(b' ');
    TestResult::from_bool(fold_slice(&word, &FoldOptions::default()) == expected)
}

#[quickcheck]
fn explicit_newlines_all_survive(input: String) -> bool {
    let newlines_in = input.bytes().filter(|&b| b == b'\n').count();
    let folded = fold_slice(input.as_bytes(), &FoldOptions::default());
    folded.iter().filter(|&&b| b == b'\n').count() >= newlines_in
}

#[test]
fn folding_never_splits_or_merges_words() {
    fn prop(input: String, width: usize) -> bool {
        let width = 1 + width % 120;
        let bytes = input.as_bytes();
        let options = FoldOptions {
            width,
            word_capacity: bytes.len() + 1,
        };
        let folded = fold_slice(bytes, &options);
        words(bytes) == words(&folded)
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(String, usize) -> bool);
}

#[test]
fn refolding_keeps_the_word_sequence() {
    fn prop(input: String, width: usize) -> bool {
        let width = 1 + width % 120;
        let options = FoldOptions {
            width,
            word_capacity: input.len() + 1,
        };
        let once = fold_slice(input.as_bytes(), &options);
        let twice = fold_slice(&once, &options);
        words(&once) == words(&twice)
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(String, usize) -> bool);
}

#[test]
fn short_words_overflow_a_line_by_at_most_the_separator() {
    fn prop(raw: Vec<Vec<u8>>, w: usize) -> TestResult {
        let width = 2 + w % 40;
        let input_words: Vec<Vec<u8>> = raw
            .into_iter()
            .map(|v| {
                v.into_iter()
                    .filter(|b| !matches!(b, b' ' | b'\t' | b'\n'))
                    .take(width - 1)
                    .collect::<Vec<u8>>()
            })
            .filter(|v| !v.is_empty())
            .collect();
        if input_words.is_empty() {
            return TestResult::discard();
        }

        let input = input_words.join(&b' ');
        let folded = fold_slice(&input, &FoldOptions::new(width));
        TestResult::from_bool(
            folded
                .split(|&b| b == b'\n')
                .all(|line| line.len() <= width + 1),
        )
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Vec<Vec<u8>>, usize) -> TestResult);
}
