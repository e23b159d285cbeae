use std::mem;

use crate::math::gcd;
use crate::slice_utils::normalize_rotation;

/// Rotates `s` right by `rot` by walking the cycles of `i -> (i + rot) % len`.
///
/// The index space splits into exactly `gcd(rot, len)` disjoint cycles, and
/// cycle `j` starts at index `j`. Each element is written once, carrying a
/// single value along its cycle. A rotation of zero is not special-cased: it
/// degenerates into `len` cycles of length one.
pub fn rotate<T>(s: &mut [T], rot: i64)
where
    T: Clone,
{
    let l = s.len();
    let Some(rot) = normalize_rotation(rot, l) else {
        return;
    };

    let cycles = gcd(rot, l);
    tracing::trace!(len = l, rot, cycles, "Rotating by cyclic replacement");

    for start in 0..cycles {
        let mut cur = start;
        let mut carried = s[start].clone();

        // Shift the carried value forward until the cycle closes on `start`
        loop {
            cur = (cur + rot) % l;
            carried = mem::replace(&mut s[cur], carried);

            if cur == start {
                break;
            }
        }
    }
}
