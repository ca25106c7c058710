#[cfg(test)]
mod tests {
    use crate::math::big_math::*;

    #[test]
    fn test_big_multiply_basic() {
        assert_eq!(big_multiply(0, 0), 0);
        assert_eq!(big_multiply(1, 1), 1);
        assert_eq!(big_multiply(3, 7), 21);

        // Full 128-bit product, no truncation
        let max = i64::MAX;
        assert_eq!(big_multiply(max, max), (max as u128) * (max as u128));
        assert_eq!(big_multiply(max, 0), 0);
        assert_eq!(big_multiply(max, 1), max as u128);
    }

    #[test]
    #[should_panic]
    fn test_big_multiply_rejects_negative() {
        big_multiply(-1, 1);
    }

    #[test]
    fn test_checked_big_divide_floor() {
        assert_eq!(checked_big_divide(7, 3, 2, Rounding::Down), Some(10));
        assert_eq!(checked_big_divide(100, 4, 2, Rounding::Down), Some(200));
        assert_eq!(checked_big_divide(0, 5, 3, Rounding::Down), Some(0));

        // Quotient exactly at the signed 64-bit boundary
        assert_eq!(
            checked_big_divide(i64::MAX, 1, 1, Rounding::Down),
            Some(i64::MAX)
        );
        assert_eq!(
            checked_big_divide(i64::MAX, 2, 2, Rounding::Down),
            Some(i64::MAX)
        );
    }

    #[test]
    fn test_checked_big_divide_ceil() {
        assert_eq!(checked_big_divide(7, 3, 2, Rounding::Up), Some(11));
        assert_eq!(checked_big_divide(100, 4, 2, Rounding::Up), Some(200));
        assert_eq!(checked_big_divide(0, 5, 3, Rounding::Up), Some(0));
        assert_eq!(checked_big_divide(1, 1, i64::MAX, Rounding::Up), Some(1));
    }

    #[test]
    fn test_checked_big_divide_overflow() {
        // The product needs all 126 bits; the quotient does not fit
        assert_eq!(checked_big_divide(i64::MAX, i64::MAX, 1, Rounding::Down), None);
        assert_eq!(checked_big_divide(i64::MAX, i64::MAX, 1, Rounding::Up), None);
        assert_eq!(checked_big_divide(i64::MAX, 2, 1, Rounding::Down), None);

        // One less than the boundary still fits after division
        assert_eq!(
            checked_big_divide(i64::MAX, i64::MAX, i64::MAX, Rounding::Down),
            Some(i64::MAX)
        );
    }

    #[test]
    #[should_panic]
    fn test_checked_big_divide_rejects_zero_divisor() {
        checked_big_divide(1, 1, 0, Rounding::Down);
    }

    #[test]
    fn test_checked_big_divide_128_basic() {
        assert_eq!(checked_big_divide_128(10, 3, Rounding::Down), Some(3));
        assert_eq!(checked_big_divide_128(10, 3, Rounding::Up), Some(4));
        assert_eq!(checked_big_divide_128(9, 3, Rounding::Down), Some(3));
        assert_eq!(checked_big_divide_128(9, 3, Rounding::Up), Some(3));
        assert_eq!(checked_big_divide_128(0, 7, Rounding::Up), Some(0));
    }

    #[test]
    fn test_checked_big_divide_128_overflow() {
        // A full-range dividend over a unit divisor cannot narrow
        assert_eq!(checked_big_divide_128(u128::MAX, 1, Rounding::Down), None);

        // The ceiling adjustment on a maximal dividend must report
        // overflow, not wrap
        assert_eq!(
            checked_big_divide_128(u128::MAX, i64::MAX, Rounding::Up),
            None
        );

        // Largest dividend whose floored quotient still fits
        let a = (i64::MAX as u128) * (i64::MAX as u128);
        assert_eq!(
            checked_big_divide_128(a, i64::MAX, Rounding::Down),
            Some(i64::MAX)
        );
        assert_eq!(checked_big_divide_128(a + 1, i64::MAX, Rounding::Up), None);
    }

    #[test]
    fn test_big_divide_maps_overflow_to_error() {
        assert!(big_divide(i64::MAX, i64::MAX, 1, Rounding::Down).is_err());
        assert_eq!(big_divide(6, 4, 3, Rounding::Down).unwrap(), 8);

        assert!(big_divide_128(u128::MAX, 1, Rounding::Down).is_err());
        assert_eq!(big_divide_128(22, 7, Rounding::Up).unwrap(), 4);
    }

    #[test]
    fn test_floor_ceil_adjacency() {
        // Ceiling exceeds floor exactly when the division has a remainder
        for (a, b, c) in [(7i64, 3i64, 2i64), (10, 10, 4), (1, 1, 7), (5, 4, 2)] {
            let down = checked_big_divide(a, b, c, Rounding::Down).unwrap();
            let up = checked_big_divide(a, b, c, Rounding::Up).unwrap();
            let exact = (a as u128) * (b as u128) % (c as u128) == 0;
            assert_eq!(up - down, if exact { 0 } else { 1 });
        }
    }
}
