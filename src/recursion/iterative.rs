//! Loop-based renditions. Each function here is the flattened form of its namesake in
//! [`recursive`](super::recursive): the recursion's accumulator becomes a local, the base case
//! becomes the loop's starting state.

use super::ValueOverflow;

/// The nth triangular number, the sum of `1..=n`.
///
/// # Examples
/// ```
/// # use textbook_lib::recursion::iterative::triangular;
/// assert_eq!(triangular(4), Ok(10));
/// assert_eq!(triangular(0), Ok(0));
/// ```
pub fn triangular(n: u32) -> Result<u32, ValueOverflow> {
    let mut total: u32 = 0;
    for step in 1..=n {
        total = total.checked_add(step).ok_or(ValueOverflow)?;
    }
    Ok(total)
}

/// The product of the integers from 1 to `n`, with `factorial(0) == 1`.
///
/// Grows brutally fast: the result leaves `u32` at `n == 13`.
///
/// # Examples
/// ```
/// # use textbook_lib::recursion::iterative::factorial;
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(13).is_err());
/// ```
pub fn factorial(n: u32) -> Result<u32, ValueOverflow> {
    let mut product: u32 = 1;
    for step in 2..=n {
        product = product.checked_mul(step).ok_or(ValueOverflow)?;
    }
    Ok(product)
}

/// The nth Fibonacci number, counting from `fibonacci(0) == 0` and `fibonacci(1) == 1`.
///
/// The two-variable loop never computes past the requested term, so the largest representable
/// term (`n == 47`) still succeeds.
pub fn fibonacci(n: u32) -> Result<u32, ValueOverflow> {
    if n == 0 {
        return Ok(0);
    }
    let (mut previous, mut current) = (0_u32, 1_u32);
    for _ in 1..n {
        let next = previous.checked_add(current).ok_or(ValueOverflow)?;
        previous = current;
        current = next;
    }
    Ok(current)
}

/// The characters of `s` in reverse order.
pub fn reverse(s: &str) -> String {
    let mut reversed = String::with_capacity(s.len());
    for c in s.chars().rev() {
        reversed.push(c);
    }
    reversed
}

/// Whether any character of `s` equals `c`.
pub fn contains_char(s: &str, c: char) -> bool {
    for candidate in s.chars() {
        if candidate == c {
            return true;
        }
    }
    false
}

/// The greatest common divisor of `a` and `b` by Euclid's algorithm, with
/// `gcd(x, 0) == gcd(0, x) == x`.
pub const fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// The number of monotone lattice paths through a `rows` by `cols` grid of cells, moving only
/// right or down; 0 if the grid has no cells, 1 if it is a single row or column.
///
/// Evaluates the binomial coefficient `C(rows + cols - 2, min(rows, cols) - 1)` with the
/// multiplicative recurrence rather than walking the grid.
///
/// # Examples
/// ```
/// # use textbook_lib::recursion::iterative::grid_paths;
/// assert_eq!(grid_paths(3, 3), Ok(6));
/// assert_eq!(grid_paths(1, 7), Ok(1));
/// assert_eq!(grid_paths(0, 7), Ok(0));
/// ```
pub fn grid_paths(rows: u32, cols: u32) -> Result<u64, ValueOverflow> {
    if rows == 0 || cols == 0 {
        return Ok(0);
    }
    let total = u64::from(rows - 1) + u64::from(cols - 1);
    let k = u64::from(rows.min(cols) - 1);

    let mut paths: u64 = 1;
    for step in 1..=k {
        // The product can pass u64::MAX before the exact division brings it back under, so the
        // step is widened; every intermediate quotient is itself a binomial coefficient.
        let product = u128::from(paths) * u128::from(total - k + step) / u128::from(step);
        paths = u64::try_from(product).map_err(|_| ValueOverflow)?;
    }
    Ok(paths)
}
