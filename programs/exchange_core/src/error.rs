use anchor_lang::prelude::*;

#[error_code]
pub enum ExchangeError {
    #[msg("Arithmetic overflow in extended-precision division")]
    Overflow = 6000,

    #[msg("Wheat received exceeds its send/receive limits")]
    WheatReceiveOutOfBounds = 6001,

    #[msg("Sheep sent exceeds its send/receive limits")]
    SheepSendOutOfBounds = 6002,

    #[msg("Rounding favored the sheep seller while the wheat offer stays")]
    FavoredSheepWhenWheatStays = 6003,

    #[msg("Rounding favored the wheat seller while the sheep offer stays")]
    FavoredWheatWhenSheepStays = 6004,

    #[msg("Effective price outside the tolerated error bound")]
    PriceErrorBoundExceeded = 6005,

    #[msg("Strict-send crossing sent no sheep")]
    NoSheepSent = 6006,
}
