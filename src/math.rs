/// Greatest common divisor by Euclid's repeated remainder.
///
/// `gcd(0, n) == n`, and `gcd(0, 0) == 0`.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while a != 0 {
        (a, b) = (b % a, a);
    }
    b
}
