//! Number theory utilities used to classify rational intervals.

/// Determines whether `number` is a prime number.
///
/// # Examples
///
/// ```
/// # use tune_ruler::math;
/// assert!(!math::is_prime(0));
/// assert!(!math::is_prime(1));
/// assert!(math::is_prime(2));
/// assert!(math::is_prime(3));
/// assert!(!math::is_prime(25));
/// assert!(math::is_prime(29));
/// assert!(!math::is_prime(49));
/// ```
pub fn is_prime(number: u32) -> bool {
    if number <= 1 {
        return false;
    }
    if number <= 3 {
        return true;
    }
    if number % 2 == 0 || number % 3 == 0 {
        return false;
    }

    let number = u64::from(number);
    let mut candidate = 5u64;
    while candidate * candidate <= number {
        if number % candidate == 0 || number % (candidate + 2) == 0 {
            return false;
        }
        candidate += 6;
    }
    true
}

/// Returns the prime factors of `number` with multiplicity, smallest first.
///
/// # Examples
///
/// ```
/// # use tune_ruler::math;
/// assert!(math::prime_factors(0).is_empty());
/// assert!(math::prime_factors(1).is_empty());
/// assert_eq!(math::prime_factors(2), [2]);
/// assert_eq!(math::prime_factors(12), [2, 2, 3]);
/// assert_eq!(math::prime_factors(2 * 7 * 7 * 13), [2, 7, 7, 13]);
/// ```
pub fn prime_factors(mut number: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    let mut divisor = 2;
    while number >= 2 {
        if number % divisor == 0 {
            factors.push(divisor);
            number /= divisor;
        } else if u64::from(divisor) * u64::from(divisor) > u64::from(number) {
            // The remainder has no divisor up to its square root
            factors.push(number);
            break;
        } else {
            divisor += 1;
        }
    }
    factors
}

/// Calculates the greatest common divisor using the Euclidean algorithm.
///
/// # Examples
///
/// ```
/// # use tune_ruler::math;
/// assert_eq!(math::gcd(12, 18), 6);
/// assert_eq!(math::gcd(18, 12), 6);
/// assert_eq!(math::gcd(7, 5), 1);
/// assert_eq!(math::gcd(7, 0), 7);
/// assert_eq!(math::gcd(0, 7), 7);
/// assert_eq!(math::gcd(0, 0), 0);
/// ```
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Removes all factors of 2 from `number`.
///
/// # Examples
///
/// ```
/// # use tune_ruler::math;
/// assert_eq!(math::odd_part(1), 1);
/// assert_eq!(math::odd_part(2), 1);
/// assert_eq!(math::odd_part(12), 3);
/// assert_eq!(math::odd_part(11), 11);
/// assert_eq!(math::odd_part(80), 5);
/// ```
pub fn odd_part(mut number: u32) -> u32 {
    while number % 2 == 0 && number > 1 {
        number /= 2;
    }
    number
}

/// Returns the largest prime factor found in either `numer` or `denom`.
///
/// [`None`] is returned if neither number contains any prime factor, e.g. for the unison 1/1.
///
/// # Examples
///
/// ```
/// # use tune_ruler::math;
/// assert_eq!(math::dominant_prime(3, 2), Some(3));
/// assert_eq!(math::dominant_prime(8, 5), Some(5));
/// assert_eq!(math::dominant_prime(7, 6), Some(7));
/// assert_eq!(math::dominant_prime(2, 1), Some(2));
/// assert_eq!(math::dominant_prime(1, 1), None);
/// ```
pub fn dominant_prime(numer: u32, denom: u32) -> Option<u32> {
    prime_factors(numer)
        .into_iter()
        .chain(prime_factors(denom))
        .max()
}

/// Returns all primes in the range `2..=limit` in ascending order.
///
/// # Examples
///
/// ```
/// # use tune_ruler::math;
/// assert!(math::primes_up_to(1).is_empty());
/// assert_eq!(math::primes_up_to(2), [2]);
/// assert_eq!(math::primes_up_to(13), [2, 3, 5, 7, 11, 13]);
/// ```
pub fn primes_up_to(limit: u32) -> Vec<u32> {
    (2..=limit).filter(|&number| is_prime(number)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn is_prime_matches_trial_division() {
        fn ground_truth(number: u32) -> bool {
            number >= 2 && (2..number).all(|divisor| number % divisor != 0)
        }

        for number in 0..=10000 {
            assert_eq!(is_prime(number), ground_truth(number), "number = {number}");
        }
    }

    #[test]
    fn is_prime_at_the_upper_end() {
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(u32::MAX));
    }

    #[test]
    fn prime_factors_reconstruct_number() {
        for number in 2..=5000 {
            let factors = prime_factors(number);

            assert_eq!(factors.iter().product::<u32>(), number);
            assert!(factors.iter().all(|&factor| is_prime(factor)));
            assert!(factors.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn prime_factors_of_large_prime() {
        assert_eq!(prime_factors(4_294_967_291), [4_294_967_291]);
        assert_eq!(prime_factors(2 * 65_521), [2, 65_521]);
    }

    #[test]
    fn gcd_divides_both_numbers() {
        for a in 0..100 {
            for b in 1..100 {
                let gcd = gcd(a, b);
                assert_eq!(a % gcd, 0);
                assert_eq!(b % gcd, 0);
                assert!((gcd + 1..=b).all(|larger| a % larger != 0 || b % larger != 0));
            }
        }
    }

    #[test]
    fn odd_part_is_largest_odd_divisor() {
        for number in 1..=1000 {
            let odd_part = odd_part(number);

            assert_eq!(odd_part % 2, 1);
            assert_eq!(number % odd_part, 0);
            assert!((number / odd_part).is_power_of_two());
        }
    }

    #[test]
    fn dominant_prime_of_coprime_pairs() {
        assert_eq!(dominant_prime(9, 8), Some(3));
        assert_eq!(dominant_prime(16, 15), Some(5));
        assert_eq!(dominant_prime(11, 8), Some(11));
        assert_eq!(dominant_prime(14, 13), Some(13));
        assert_eq!(dominant_prime(1, 17), Some(17));
    }
}
