use crate::slice_utils::normalize_rotation;

/// Rotates `s` right by `rot` through an auxiliary buffer of the same length.
pub fn rotate<T>(s: &mut [T], rot: i64)
where
    T: Clone,
{
    let l = s.len();
    let rot = match normalize_rotation(rot, l) {
        Some(0) | None => return,
        Some(rot) => rot,
    };

    // Index i of the result holds s[(i + l - rot) % l]
    let mut buffer = Vec::with_capacity(l);
    buffer.extend(s[l - rot..].iter().chain(&s[..l - rot]).cloned());

    for (dst, v) in s.iter_mut().zip(buffer) {
        *dst = v;
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(&[1, 2, 3, 4, 5, 6, 7], 3 => vec![5, 6, 7, 1, 2, 3, 4] ; "Rotate right three")]
    #[test_case(&[-1, -100, 3, 99], 2 => vec![3, 99, -1, -100] ; "Negative values")]
    #[test_case(&[1, 2], 0 => vec![1, 2] ; "No rotation")]
    #[test_case(&[1], 5 => vec![1] ; "Single element")]
    #[test_case(&[1, 2, 3, 4, 5, 6], 6 => vec![1, 2, 3, 4, 5, 6] ; "Full rotation")]
    #[test_case(&[1, 2, 3], -1 => vec![2, 3, 1] ; "Rotate left once")]
    #[test_case(&[], 3 => Vec::<i32>::new() ; "Empty")]
    fn rotation(s: &[i32], rot: i64) -> Vec<i32> {
        let mut s = s.to_vec();

        rotate(&mut s, rot);

        s
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Counted(i32, usize);

    impl Clone for Counted {
        fn clone(&self) -> Self {
            Counted(self.0, self.1 + 1)
        }
    }

    #[test]
    fn clones_each_element_once() {
        let mut s: Vec<_> = (0..5).map(|v| Counted(v, 0)).collect();

        rotate(&mut s, 2);

        let values: Vec<_> = s.iter().map(|c| c.0).collect();
        assert_eq!(values, vec![3, 4, 0, 1, 2]);
        assert!(s.iter().all(|c| c.1 == 1));
    }
}
