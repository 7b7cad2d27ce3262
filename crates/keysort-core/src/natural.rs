//! # Natural String Order
//!
//! Compares text the way a person reads it: embedded runs of decimal digits
//! compare by magnitude, so `"file2"` sorts before `"file10"`.
//!
//! ## Rules
//!
//! Both strings are scanned in lock-step, one code point at a time:
//!
//! 1. Where both sides start a digit run, each run is consumed in full.
//!    Smaller magnitude sorts first; on equal magnitude, fewer leading zeros
//!    sorts first (`"2" < "02"`); otherwise the scan resumes after the runs.
//! 2. Equal code points are skipped.
//! 3. At the first differing code point, two letters compare by code point,
//!    a non-letter sorts before a letter, and two non-letters compare by
//!    code point.
//! 4. If one string runs out first, the shorter one sorts first.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use unicode_general_category::{get_general_category, GeneralCategory};

/// A maximal run of ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DigitRun {
    /// Base-10 value of the run. Wraps on overflow.
    value: u64,
    /// Zeros consumed before the first non-zero digit.
    leading_zeros: usize,
}

/// Consume the digit run at the head of `chars`.
fn digit_run(chars: &mut Peekable<Chars<'_>>) -> DigitRun {
    let mut run = DigitRun {
        value: 0,
        leading_zeros: 0,
    };
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        if run.value == 0 && d == 0 {
            run.leading_zeros += 1;
        }
        run.value = run.value.wrapping_mul(10).wrapping_add(u64::from(d));
        chars.next();
    }
    run
}

/// True for code points in a Unicode letter category (`Lu`, `Ll`, `Lt`,
/// `Lm`, `Lo`). Marks and letter numbers are not letters.
fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Natural-order `a < b`.
pub fn natural_less(a: &str, b: &str) -> bool {
    let mut ac = a.chars().peekable();
    let mut bc = b.chars().peekable();

    while let (Some(&ca), Some(&cb)) = (ac.peek(), bc.peek()) {
        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let ar = digit_run(&mut ac);
            let br = digit_run(&mut bc);
            if ar.value != br.value {
                return ar.value < br.value;
            }
            if ar.leading_zeros != br.leading_zeros {
                return ar.leading_zeros < br.leading_zeros;
            }
            continue;
        }

        ac.next();
        bc.next();
        if ca == cb {
            continue;
        }

        let a_letter = is_letter(ca);
        let b_letter = is_letter(cb);
        if a_letter != b_letter {
            return b_letter;
        }
        return ca < cb;
    }

    ac.peek().is_none() && bc.peek().is_some()
}

/// Natural-order comparison as an [`Ordering`].
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    if natural_less(a, b) {
        Ordering::Less
    } else if natural_less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
