use crate::{constants::*, error::BetMeError};
use anchor_lang::prelude::*;

/// Arbiter fee in lamports: `bet * fee_bps / 10_000`, truncated.
pub fn calculate_arbiter_fee(bet_amount: u64, arbiter_fee_bps: u16) -> Result<u64> {
    require!(
        arbiter_fee_bps < HUNDRED_PERCENT_BPS,
        BetMeError::InvalidArbiterFee
    );

    let fee = (bet_amount as u128)
        .checked_mul(arbiter_fee_bps as u128)
        .ok_or(BetMeError::Overflow)?
        .checked_div(HUNDRED_PERCENT_BPS as u128)
        .ok_or(BetMeError::Underflow)?;

    u64::try_from(fee).map_err(|_| BetMeError::Overflow.into())
}

/// What the winning side takes home: both stakes minus the arbiter fee.
pub fn calculate_winner_payout(bet_amount: u64, arbiter_fee_bps: u16) -> Result<u64> {
    let fee = calculate_arbiter_fee(bet_amount, arbiter_fee_bps)?;

    bet_amount
        .checked_mul(2)
        .ok_or(BetMeError::Overflow)?
        .checked_sub(fee)
        .ok_or(BetMeError::Underflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_ten_percent() {
        // 0.001 SOL at 10% -> 0.0001 SOL
        assert_eq!(calculate_arbiter_fee(1_000_000, 1_000).unwrap(), 100_000);
    }

    #[test]
    fn test_fee_zero() {
        assert_eq!(calculate_arbiter_fee(1_000_000, 0).unwrap(), 0);
        assert_eq!(calculate_arbiter_fee(0, 5_000).unwrap(), 0);
    }

    #[test]
    fn test_fee_truncates() {
        // 999 * 1 / 10000 = 0.0999 -> 0
        assert_eq!(calculate_arbiter_fee(999, 1).unwrap(), 0);
        // 12345 * 3333 / 10000 = 4114.5885 -> 4114
        assert_eq!(calculate_arbiter_fee(12_345, 3_333).unwrap(), 4_114);
    }

    #[test]
    fn test_fee_large_bet_does_not_overflow() {
        let fee = calculate_arbiter_fee(u64::MAX, HUNDRED_PERCENT_BPS - 1).unwrap();
        assert!(fee < u64::MAX);
    }

    #[test]
    fn test_fee_rejects_hundred_percent() {
        assert!(calculate_arbiter_fee(1_000, HUNDRED_PERCENT_BPS).is_err());
    }

    #[test]
    fn test_winner_payout() {
        // 2 * 0.001 - 0.0001 = 0.0019 SOL
        assert_eq!(calculate_winner_payout(1_000_000, 1_000).unwrap(), 1_900_000);
        assert_eq!(calculate_winner_payout(1_000_000, 0).unwrap(), 2_000_000);
    }

    #[test]
    fn test_winner_payout_overflow() {
        assert!(calculate_winner_payout(u64::MAX, 0).is_err());
    }
}
