use crate::utils::error::{Result, WarmupError};

/// Largest index whose Fibonacci number fits in a `u128`.
pub const MAX_FIBONACCI_INDEX: i64 = 186;

/// The `n`-th Fibonacci number, 1-indexed with F(1) = F(2) = 1.
pub fn fibonacci(n: i64) -> Result<u128> {
    if n <= 0 {
        return Err(WarmupError::range_error("n", n, "position must be greater than zero"));
    }
    if n > MAX_FIBONACCI_INDEX {
        return Err(WarmupError::range_error(
            "n",
            n,
            format!("position must not exceed {}", MAX_FIBONACCI_INDEX),
        ));
    }

    let (mut previous, mut current): (u128, u128) = (1, 1);
    for _ in 3..=n {
        let next = previous + current;
        previous = current;
        current = next;
    }

    Ok(current)
}
