use arbitrary::Arbitrary;
use exchange_core::math::big_math::big_multiply;
use exchange_core::math::exchange::{exchange_v10, Price, RoundingType};
use honggfuzz::fuzz;

#[derive(Debug, Clone, Arbitrary)]
enum FuzzRounding {
    Normal,
    StrictSend,
    StrictReceive,
}

#[derive(Debug, Clone, Arbitrary)]
struct CrossingInput {
    n: u32,
    d: u32,
    max_wheat_send: u64,
    max_wheat_receive: u64,
    max_sheep_send: u64,
    max_sheep_receive: u64,
    round: FuzzRounding,
}

fn fuzz_crossing(input: CrossingInput) {
    let price = Price {
        n: ((input.n >> 1) as i32).max(1),
        d: ((input.d >> 1) as i32).max(1),
    };
    let mws = (input.max_wheat_send >> 1) as i64;
    let mwr = (input.max_wheat_receive >> 1) as i64;
    let mss = (input.max_sheep_send >> 1) as i64;
    let msr = (input.max_sheep_receive >> 1) as i64;
    let round = match input.round {
        FuzzRounding::Normal => RoundingType::Normal,
        FuzzRounding::StrictSend => RoundingType::PathPaymentStrictSend,
        FuzzRounding::StrictReceive => RoundingType::PathPaymentStrictReceive,
    };

    match exchange_v10(price, mws, mwr, mss, msr, round) {
        Ok(res) => {
            // Limits hold in every regime
            assert!(res.wheat_received >= 0 && res.wheat_received <= mws.min(mwr));
            assert!(res.sheep_sent >= 0 && res.sheep_sent <= mss.min(msr));

            if round != RoundingType::PathPaymentStrictSend {
                // Zero symmetry and side favoring
                assert_eq!(res.wheat_received == 0, res.sheep_sent == 0);
                let wheat_value = big_multiply(res.wheat_received, price.n as i64);
                let sheep_value = big_multiply(res.sheep_sent, price.d as i64);
                if res.wheat_stays {
                    assert!(sheep_value >= wheat_value);
                } else {
                    assert!(sheep_value <= wheat_value);
                }
            }

            if round == RoundingType::Normal
                && (res.wheat_received != 0 || res.sheep_sent != 0)
            {
                let lhs = big_multiply(100 * price.n as i64, res.wheat_received);
                let rhs = big_multiply(100 * price.d as i64, res.sheep_sent);
                let abs_diff = if lhs > rhs { lhs - rhs } else { rhs - lhs };
                assert!(abs_diff <= big_multiply(price.n as i64, res.wheat_received));
            }
        }
        Err(_) => {
            // Only the path-payment regimes may fail on valid inputs
            assert!(round != RoundingType::Normal);
        }
    }
}

fn main() {
    loop {
        fuzz!(|data: CrossingInput| {
            fuzz_crossing(data);
        });
    }
}
