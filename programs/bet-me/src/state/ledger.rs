use super::BetMe;
use crate::{constants::*, error::BetMeError, utils::*};
use anchor_lang::prelude::*;

impl BetMe {
    fn is_withdrawn(&self, role: Role) -> bool {
        match role {
            Role::Owner => self.is_owner_withdrawn,
            Role::Arbiter => self.is_arbiter_withdrawn,
            Role::Opponent => self.is_opponent_withdrawn,
        }
    }

    fn mark_withdrawn(&mut self, role: Role) {
        match role {
            Role::Owner => self.is_owner_withdrawn = true,
            Role::Arbiter => self.is_arbiter_withdrawn = true,
            Role::Opponent => self.is_opponent_withdrawn = true,
        }
    }

    /// Pull payment for the caller's role. The transfer runs before any flag
    /// is written, so a failed transfer leaves the payout claimable.
    pub fn withdraw<C: TimeSource, V: ValueTransfer>(
        &mut self,
        caller: &Pubkey,
        clock: &C,
        vault: &mut V,
    ) -> Result<(Role, u64)> {
        let now = clock.unix_timestamp()?;
        require!(self.is_withdrawal_open(now), BetMeError::WithdrawalNotOpen);

        let role = self.role_of(caller).ok_or(BetMeError::UnknownParty)?;
        require!(!self.is_withdrawn(role), BetMeError::AlreadyWithdrawn);

        let amount = self.payout_for(role, now)?;
        require!(amount > 0, BetMeError::NothingToWithdraw);

        let version = next_version(self.state_version)?;
        vault.transfer_out(caller, amount)?;

        self.mark_withdrawn(role);
        self.state_version = version;
        Ok((role, amount))
    }

    /// Settles what the arbiter is still owed before the owner tears the bet
    /// down. Returns the amount paid to the arbiter; whatever remains in the
    /// account belongs to the owner.
    pub fn settle_for_close<C: TimeSource, V: ValueTransfer>(
        &mut self,
        caller: &Pubkey,
        clock: &C,
        vault: &mut V,
    ) -> Result<u64> {
        self.require_owner(caller)?;

        let now = clock.unix_timestamp()?;
        require!(
            !self.is_voting_in_progress(now),
            BetMeError::VotingInProgress
        );
        if self.is_opponent_confirmed && !self.is_opponent_withdrawn {
            require!(
                self.opponent_payout(now)? == 0,
                BetMeError::OpponentPayoutPending
            );
        }

        let version = next_version(self.state_version)?;
        let mut arbiter_paid = 0;
        if self.is_arbiter_confirmed && !self.is_arbiter_withdrawn {
            let amount = self.arbiter_payout(now)?;
            if amount > 0 {
                let arbiter = self.arbiter.ok_or(BetMeError::ArbiterNotSet)?;
                vault.transfer_out(&arbiter, amount)?;
                arbiter_paid = amount;
            }
            self.is_arbiter_withdrawn = true;
        }

        self.is_owner_withdrawn = true;
        self.state_version = version;
        Ok(arbiter_paid)
    }
}
