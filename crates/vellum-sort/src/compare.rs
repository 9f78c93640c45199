use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use crate::options::SortOptions;

/// Compare two strings under the given options.
///
/// With `numeric` set, maximal runs of ASCII digits are compared by value,
/// ignoring leading zeros. With `case_insensitive` set, letters are compared
/// by their lowercase mapping. Strings that differ only in ignored aspects
/// compare `Equal`; callers needing a total order should break ties with
/// `str::cmp`.
pub fn compare_with(a: &str, b: &str, options: SortOptions) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        let (x, y) = match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => (x, y),
        };

        let ordering = if options.numeric && x.is_ascii_digit() && y.is_ascii_digit() {
            let left = take_digits(&mut a);
            let right = take_digits(&mut b);
            compare_digit_runs(&left, &right)
        } else {
            a.next();
            b.next();
            if options.case_insensitive {
                x.to_lowercase().cmp(y.to_lowercase())
            } else {
                x.cmp(&y)
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
