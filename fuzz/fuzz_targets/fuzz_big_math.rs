use arbitrary::Arbitrary;
use exchange_core::math::big_math::{
    big_multiply, checked_big_divide, checked_big_divide_128, Rounding,
};
use honggfuzz::fuzz;

#[derive(Debug, Clone, Arbitrary)]
struct BigMathInput {
    a: u64,
    b: u64,
    c: u64,
    wide: u128,
}

fn fuzz_big_math_operations(input: BigMathInput) {
    // Mask raw bytes into the primitives' domain: nonnegative operands,
    // positive divisors.
    let a = (input.a >> 1) as i64;
    let b = (input.b >> 1) as i64;
    let c = ((input.c >> 1) as i64).max(1);

    let product = big_multiply(a, b);
    assert_eq!(product, (a as u128) * (b as u128));

    // The 128-bit product is exact, so the quotient has an exact oracle.
    let true_floor = product / (c as u128);
    let true_ceil = true_floor + u128::from(product % (c as u128) != 0);

    let down = checked_big_divide(a, b, c, Rounding::Down);
    let up = checked_big_divide(a, b, c, Rounding::Up);

    match down {
        Some(q) => assert_eq!(q as u128, true_floor),
        None => assert!(true_floor > i64::MAX as u128),
    }
    match up {
        Some(q) => assert_eq!(q as u128, true_ceil),
        None => assert!(true_ceil > i64::MAX as u128),
    }
    if let (Some(down), Some(up)) = (down, up) {
        assert!(up >= down && up - down <= 1);
    }

    // Same oracle for the wide-dividend form, including dividends whose
    // ceiling adjustment needs more than 128 bits.
    let wide_floor = input.wide / (c as u128);
    let wide_ceil = wide_floor + u128::from(input.wide % (c as u128) != 0);

    match checked_big_divide_128(input.wide, c, Rounding::Down) {
        Some(q) => assert_eq!(q as u128, wide_floor),
        None => assert!(wide_floor > i64::MAX as u128),
    }
    match checked_big_divide_128(input.wide, c, Rounding::Up) {
        Some(q) => assert_eq!(q as u128, wide_ceil),
        None => assert!(wide_ceil > i64::MAX as u128),
    }
}

fn main() {
    loop {
        fuzz!(|data: BigMathInput| {
            fuzz_big_math_operations(data);
        });
    }
}
