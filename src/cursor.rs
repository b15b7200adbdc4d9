//! Index arithmetic shared by the eager and lazy engines.
//!
//! Everything here is a pure function of the cursor, the window spec and
//! (when known) the source length.

/// Source position of the `offset`-th element of a window starting at
/// `cursor`, wrapped into `0..modulus`.
pub fn wrap_index(cursor: usize, offset: usize, modulus: usize) -> usize {
    debug_assert!(modulus > 0);
    (cursor % modulus + offset % modulus) % modulus
}

/// Start of the next window.
///
/// `modulus` is the source length when the cursor wraps, `None` while it
/// still grows unbounded.
pub fn advance(cursor: usize, step_size: usize, modulus: Option<usize>) -> usize {
    match modulus {
        Some(len) if len > 0 => wrap_index(cursor, step_size, len),
        _ => cursor + step_size,
    }
}

/// Length of a non-wrapping window starting at `cursor` over `len` elements.
pub fn clipped_len(len: usize, cursor: usize, window_size: usize) -> usize {
    len.saturating_sub(cursor).min(window_size)
}

/// Number of non-wrapping windows over `len` elements.
///
/// A window starts at every multiple of `step_size` below `len`; the ones
/// near the end are partial.
pub fn window_count(len: usize, step_size: usize) -> usize {
    len.div_ceil(step_size)
}

/// Number of emissions after which a wrapping engine over `len` elements
/// repeats itself.
pub fn wrap_period(len: usize, step_size: usize) -> usize {
    if len == 0 {
        return 0;
    }
    len / gcd(len, step_size)
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
