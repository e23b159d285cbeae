/// Maps a signed rotation amount onto `[0, len)`.
///
/// Negative amounts rotate left, so `-1` on a slice of length 3 becomes `2`.
/// Returns `None` for an empty slice, where every rotation is a no-op and
/// the modulo is undefined.
pub fn normalize_rotation(rot: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    // Euclidean remainder keeps i64::MIN in range
    let rot = i128::from(rot).rem_euclid(len as i128);

    Some(rot as usize)
}

/// Reverses `s[start..end]` in place by swapping from both ends inward.
pub fn reverse_slice<T>(s: &mut [T], start: usize, end: usize) {
    if end <= start {
        return;
    }

    let (mut i, mut j) = (start, end - 1);
    while i < j {
        s.swap(i, j);
        i += 1;
        j -= 1;
    }
}
