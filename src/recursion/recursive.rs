//! Self-calling renditions. Signatures and results match [`iterative`](super::iterative) on
//! every input, overflow included; only the evaluation strategy differs.
//!
//! None of these recurse deeper than their argument, but that is caveat enough: a call like
//! `triangular(100_000)` runs out of stack long before it runs out of `u32`. The loops in
//! [`iterative`](super::iterative) have no such ceiling.

use super::ValueOverflow;

/// The nth triangular number, the sum of `1..=n`.
pub fn triangular(n: u32) -> Result<u32, ValueOverflow> {
    match n {
        0 => Ok(0),
        _ => triangular(n - 1)?.checked_add(n).ok_or(ValueOverflow),
    }
}

/// The product of the integers from 1 to `n`, with `factorial(0) == 1`.
pub fn factorial(n: u32) -> Result<u32, ValueOverflow> {
    match n {
        0 => Ok(1),
        _ => factorial(n - 1)?.checked_mul(n).ok_or(ValueOverflow),
    }
}

/// The nth Fibonacci number by the naive two-branch recurrence.
///
/// Every call fans out into two more, so the running time doubles roughly every second step of
/// `n`. The point of the exercise is to feel that; reach for the iterative form when the answer
/// actually matters.
pub fn fibonacci(n: u32) -> Result<u32, ValueOverflow> {
    match n {
        0 => Ok(0),
        1 => Ok(1),
        _ => {
            let a = fibonacci(n - 1)?;
            let b = fibonacci(n - 2)?;
            a.checked_add(b).ok_or(ValueOverflow)
        },
    }
}

/// The characters of `s` in reverse order: the first character moves to the back of the
/// reversed remainder.
pub fn reverse(s: &str) -> String {
    match s.chars().next() {
        None => String::new(),
        Some(first) => {
            let mut reversed = reverse(&s[first.len_utf8()..]);
            reversed.push(first);
            reversed
        },
    }
}

/// Whether any character of `s` equals `c`.
pub fn contains_char(s: &str, c: char) -> bool {
    match s.chars().next() {
        None => false,
        Some(first) => first == c || contains_char(&s[first.len_utf8()..], c),
    }
}

/// The greatest common divisor of `a` and `b` by Euclid's algorithm, with
/// `gcd(x, 0) == gcd(0, x) == x`.
pub const fn gcd(a: u32, b: u32) -> u32 {
    match b {
        0 => a,
        _ => gcd(b, a % b),
    }
}

/// The number of monotone lattice paths through a `rows` by `cols` grid of cells, moving only
/// right or down, by the two-branch recurrence: every path enters the last cell from above or
/// from the left.
///
/// Exponential like [`fibonacci`], and worse: the call count equals the answer it is computing.
pub fn grid_paths(rows: u32, cols: u32) -> Result<u64, ValueOverflow> {
    if rows == 0 || cols == 0 {
        return Ok(0);
    }
    if rows == 1 || cols == 1 {
        return Ok(1);
    }
    let above = grid_paths(rows - 1, cols)?;
    let left = grid_paths(rows, cols - 1)?;
    above.checked_add(left).ok_or(ValueOverflow)
}
