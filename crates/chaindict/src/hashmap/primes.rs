use log::trace;

/// Trial division over `6i ± 1`.
pub fn is_prime(n: i128) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Returns the next table capacity together with the advanced growth exponent.
///
/// With exponent `k` the range `2^k..2^(k+1)` is searched starting from its
/// middle: for every step `i` in `mid..hi - 1` the probe `mid - i` is tried
/// before `mid + i`, and the first prime wins. An exhausted range moves on to
/// `k + 1`. The exponent always advances by at least one.
///
/// Nothing is mutated here so a failed allocation can leave the table as it was.
pub fn next_capacity(mut exponent: u32) -> (usize, u32) {
    loop {
        let lo = 1i128 << exponent;
        let hi = 1i128 << (exponent + 1);
        let mid = (lo + hi) / 2;

        for i in mid..hi - 1 {
            for probe in [mid - i, mid + i] {
                if is_prime(probe) {
                    // a prime this large could never be allocated as a bucket array anyway
                    let cap = usize::try_from(probe).unwrap_or(usize::MAX);
                    return (cap, exponent + 1);
                }
            }
        }

        trace!(target: "next_capacity", "no prime probed in 2^{exponent}..2^{}", exponent + 1);
        exponent += 1;
    }
}

#[cfg(test)]
mod test {
    use super::{is_prime, next_capacity};
    use crate::INITIAL_GROWTH_EXPONENT;

    #[test]
    fn primality() {
        let primes: Vec<i128> = (-5..60).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
    }

    #[test]
    fn first_range_is_exhausted() {
        // 8..16 only ever probes 0, 24, -1, 25, -2, 26
        assert_eq!(next_capacity(INITIAL_GROWTH_EXPONENT), (53, 5));
    }

    #[test]
    fn growth_sequence() {
        let mut exponent = INITIAL_GROWTH_EXPONENT;
        let mut caps = Vec::new();
        for _ in 0..4 {
            let (cap, next) = next_capacity(exponent);
            caps.push(cap);
            exponent = next;
        }

        assert_eq!(caps, vec![53, 97, 193, 389]);
        assert_eq!(exponent, 8);
    }

    #[test]
    fn capacities_are_increasing_primes() {
        let mut exponent = INITIAL_GROWTH_EXPONENT;
        let mut last = crate::INITIAL_CAPACITY;
        for _ in 0..20 {
            let (cap, next) = next_capacity(exponent);
            assert!(cap > last, "{cap} should be larger than {last}");
            assert!(is_prime(cap as i128));
            assert!(next > exponent);
            last = cap;
            exponent = next;
        }
    }
}
