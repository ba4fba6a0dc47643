use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const BET_ME_SEED: &str = "bet_me";

/// Anchor account discriminator prefix.
pub const DISCRIMINATOR_SIZE: u8 = 8;

/// Basis points scale; the arbiter fee must stay strictly below it.
#[constant]
pub const HUNDRED_PERCENT_BPS: u16 = 10_000;

/// Longest assertion text accepted, in bytes.
pub const MAX_ASSERTION_LEN: usize = 400;

/// Deadline applied when the owner creates a bet without one (7 days).
#[constant]
pub const DEFAULT_DEADLINE_SECS: i64 = 86_400 * 7;

/// Enum for the arbiter's ruling on the assertion
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Decision {
    #[default]
    Unset,          // No ruling yet
    AssertionTrue,  // Owner wins
    AssertionFalse, // Opponent wins
    Unresolvable,   // Nobody wins, stakes are refunded
}

/// Enum for the parties that can hold a claim on custodied value
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Owner,
    Arbiter,
    Opponent,
}

/// Enum naming the owner-settable terms, reported in `TermsUpdated`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermsField {
    AssertionText,
    Deadline,
    ArbiterFee,
    ArbiterAddress,
    ArbiterPenaltyAmount,
    OpponentAddress,
}
