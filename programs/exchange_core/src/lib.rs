#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod error;
pub mod math;


declare_id!("11111111111111111111111111111112");

#[program]
pub mod exchange_core {
    #[cfg(feature = "cu_testing")]
    use super::*;

    #[cfg(feature = "cu_testing")]
    pub fn test_big_math(ctx: Context<TestBigMath>) -> Result<()> {
        crate::cu_tests::exchange_cu_tests::test_big_math(ctx)
    }

    #[cfg(feature = "cu_testing")]
    pub fn test_crossing(ctx: Context<TestCrossing>) -> Result<()> {
        crate::cu_tests::exchange_cu_tests::test_crossing(ctx)
    }
}

// Account contexts need to be at the crate root for Anchor to find them
#[cfg(feature = "cu_testing")]
#[derive(Accounts)]
pub struct TestBigMath {}

#[cfg(feature = "cu_testing")]
#[derive(Accounts)]
pub struct TestCrossing {}
