use crate::slice_utils::{normalize_rotation, reverse_slice};

/// Rotates `s` right by `rot` with three in-place reversals.
pub fn rotate<T>(s: &mut [T], rot: i64) {
    let l = s.len();
    let rot = match normalize_rotation(rot, l) {
        Some(0) | None => return,
        Some(rot) => rot,
    };

    // Reverse the whole slice first
    reverse_slice(s, 0, l);

    // Then reverse the first part (which was the end of the original slice)
    reverse_slice(s, 0, rot);

    // Finally, reverse the second part (which was the beginning of the original slice)
    reverse_slice(s, rot, l);
}
