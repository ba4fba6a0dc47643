use super::BetMe;
use crate::{constants::*, error::BetMeError, utils::*};
use anchor_lang::prelude::*;

/// What each party could withdraw at a given moment.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Payouts {
    pub owner: u64,
    pub arbiter: u64,
    pub opponent: u64,
}

// Payouts are recomputed from the current fields on every call and never
// stored. None of these methods write.
impl BetMe {
    pub fn arbiter_fee_amount(&self) -> Result<u64> {
        calculate_arbiter_fee(self.current_bet, self.arbiter_fee_bps)
    }

    fn winner_payout(&self) -> Result<u64> {
        calculate_winner_payout(self.current_bet, self.arbiter_fee_bps)
    }

    /// Bond currently held for the arbiter.
    pub fn bonded_penalty(&self) -> u64 {
        if self.is_arbiter_confirmed {
            self.arbiter_penalty_amount
        } else {
            0
        }
    }

    pub fn owner_payout(&self) -> Result<u64> {
        if !self.is_owner_stake_committed() {
            return Ok(0);
        }

        match self.decision {
            Decision::AssertionTrue => self.winner_payout(),
            Decision::AssertionFalse => Ok(0),
            // refund, also when the deadline passes without a ruling
            Decision::Unresolvable | Decision::Unset => Ok(self.current_bet),
        }
    }

    pub fn arbiter_payout(&self, now: i64) -> Result<u64> {
        if !self.is_arbiter_confirmed || self.is_arbiter_lazy(now) {
            return Ok(0);
        }

        let bond = self.arbiter_penalty_amount;
        if self.is_decision_made() {
            bond.checked_add(self.arbiter_fee_amount()?)
                .ok_or(BetMeError::Overflow.into())
        } else {
            Ok(bond)
        }
    }

    /// The complement of the owner and arbiter shares. A lazy arbiter's bond
    /// lands here.
    pub fn opponent_payout(&self, now: i64) -> Result<u64> {
        if !self.is_opponent_confirmed {
            return Ok(0);
        }

        match self.decision {
            Decision::AssertionTrue => Ok(0),
            Decision::AssertionFalse => self.winner_payout(),
            Decision::Unresolvable => Ok(self.current_bet),
            Decision::Unset if self.is_arbiter_lazy(now) => self
                .current_bet
                .checked_add(self.arbiter_penalty_amount)
                .ok_or(BetMeError::Overflow.into()),
            Decision::Unset => Ok(self.current_bet),
        }
    }

    pub fn payouts(&self, now: i64) -> Result<Payouts> {
        Ok(Payouts {
            owner: self.owner_payout()?,
            arbiter: self.arbiter_payout(now)?,
            opponent: self.opponent_payout(now)?,
        })
    }

    pub fn payout_for(&self, role: Role, now: i64) -> Result<u64> {
        match role {
            Role::Owner => self.owner_payout(),
            Role::Arbiter => self.arbiter_payout(now),
            Role::Opponent => self.opponent_payout(now),
        }
    }

    /// Everything deposited into the bet and not yet refunded by a retreat:
    /// both stakes plus the arbiter's bond.
    pub fn custodied_total(&self) -> Result<u64> {
        let opponent_stake = if self.is_opponent_confirmed {
            self.current_bet
        } else {
            0
        };

        self.current_bet
            .checked_add(opponent_stake)
            .and_then(|total| total.checked_add(self.bonded_penalty()))
            .ok_or(BetMeError::Overflow.into())
    }
}
