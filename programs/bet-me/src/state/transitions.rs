//! Guarded state transitions of a [`BetMe`].
//!
//! Every operation checks the caller's role, the current lifecycle stage and
//! its arguments before touching any field, then bumps `state_version` as its
//! last write. A failed check returns early and leaves the bet untouched.

use super::{BetMe, BetTerms};
use crate::{constants::*, error::BetMeError, utils::*};
use anchor_lang::prelude::*;

fn validate_assertion(text: &str) -> Result<()> {
    require!(!text.is_empty(), BetMeError::EmptyAssertion);
    require!(
        text.len() <= MAX_ASSERTION_LEN,
        BetMeError::AssertionTooLong
    );
    Ok(())
}

fn validate_arbiter_fee(arbiter_fee_bps: u16) -> Result<()> {
    require!(
        arbiter_fee_bps < HUNDRED_PERCENT_BPS,
        BetMeError::InvalidArbiterFee
    );
    Ok(())
}

impl BetMe {
    pub fn initialize<C: TimeSource>(
        &mut self,
        id: u64,
        owner: Pubkey,
        terms: BetTerms,
        bump: u8,
        clock: &C,
    ) -> Result<()> {
        let now = clock.unix_timestamp()?;
        let deadline = match terms.deadline {
            Some(deadline) => deadline,
            None => now
                .checked_add(DEFAULT_DEADLINE_SECS)
                .ok_or(BetMeError::Overflow)?,
        };

        validate_assertion(&terms.assertion)?;
        require!(deadline > now, BetMeError::DeadlineNotInFuture);
        validate_arbiter_fee(terms.arbiter_fee_bps)?;
        require!(
            terms.arbiter != Some(owner),
            BetMeError::ArbiterIsOwner
        );
        require!(
            terms.opponent != Some(owner),
            BetMeError::OpponentIsOwner
        );
        if terms.arbiter.is_some() {
            require!(
                terms.arbiter != terms.opponent,
                BetMeError::ArbiterIsOpponent
            );
        }

        // set fields
        self.id = id;
        self.owner = owner;
        self.assertion = terms.assertion;
        self.deadline = deadline;
        self.arbiter_fee_bps = terms.arbiter_fee_bps;
        self.arbiter = terms.arbiter;
        self.arbiter_penalty_amount = terms.arbiter_penalty_amount;
        self.opponent = terms.opponent;
        self.state_version = 0;
        self.current_bet = 0;
        self.is_arbiter_confirmed = false;
        self.is_opponent_confirmed = false;
        self.decision = Decision::Unset;
        self.is_owner_withdrawn = false;
        self.is_arbiter_withdrawn = false;
        self.is_opponent_withdrawn = false;
        self.bump = bump;

        Ok(())
    }

    pub(crate) fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, BetMeError::NotOwner);
        Ok(())
    }

    fn require_confirmed_arbiter(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_arbiter(caller), BetMeError::NotArbiter);
        require!(self.is_arbiter_confirmed, BetMeError::ArbiterNotConfirmed);
        Ok(())
    }

    /// Arbiter terms freeze once the arbiter bonds or the opponent stakes,
    /// whichever comes first.
    fn require_arbiter_terms_open(&self) -> Result<()> {
        require!(
            !self.is_arbiter_confirmed,
            BetMeError::ArbiterAlreadyConfirmed
        );
        require!(
            !self.is_opponent_confirmed,
            BetMeError::OpponentStakeAlreadyCommitted
        );
        Ok(())
    }

    fn require_before_deadline(&self, now: i64) -> Result<()> {
        require!(!self.is_expired(now), BetMeError::DeadlinePassed);
        Ok(())
    }

    // --- Owner terms ---

    pub fn set_assertion_text(&mut self, caller: &Pubkey, text: String) -> Result<()> {
        self.require_owner(caller)?;
        require!(
            !self.is_owner_stake_committed(),
            BetMeError::OwnerStakeAlreadyCommitted
        );
        validate_assertion(&text)?;
        require!(text != self.assertion, BetMeError::UnchangedValue);

        let version = next_version(self.state_version)?;
        self.assertion = text;
        self.state_version = version;
        Ok(())
    }

    pub fn set_deadline<C: TimeSource>(
        &mut self,
        caller: &Pubkey,
        deadline: i64,
        clock: &C,
    ) -> Result<()> {
        self.require_owner(caller)?;
        require!(
            !self.is_owner_stake_committed(),
            BetMeError::OwnerStakeAlreadyCommitted
        );
        require!(
            deadline > clock.unix_timestamp()?,
            BetMeError::DeadlineNotInFuture
        );
        require!(deadline != self.deadline, BetMeError::UnchangedValue);

        let version = next_version(self.state_version)?;
        self.deadline = deadline;
        self.state_version = version;
        Ok(())
    }

    pub fn set_arbiter_fee(&mut self, caller: &Pubkey, arbiter_fee_bps: u16) -> Result<()> {
        self.require_owner(caller)?;
        self.require_arbiter_terms_open()?;
        validate_arbiter_fee(arbiter_fee_bps)?;
        require!(
            arbiter_fee_bps != self.arbiter_fee_bps,
            BetMeError::UnchangedValue
        );

        let version = next_version(self.state_version)?;
        self.arbiter_fee_bps = arbiter_fee_bps;
        self.state_version = version;
        Ok(())
    }

    pub fn set_arbiter_address(&mut self, caller: &Pubkey, arbiter: Option<Pubkey>) -> Result<()> {
        self.require_owner(caller)?;
        self.require_arbiter_terms_open()?;
        require!(arbiter != self.arbiter, BetMeError::UnchangedValue);
        require!(arbiter != Some(self.owner), BetMeError::ArbiterIsOwner);
        if arbiter.is_some() {
            require!(arbiter != self.opponent, BetMeError::ArbiterIsOpponent);
        }

        let version = next_version(self.state_version)?;
        self.arbiter = arbiter;
        self.state_version = version;
        Ok(())
    }

    pub fn set_arbiter_penalty_amount(&mut self, caller: &Pubkey, amount: u64) -> Result<()> {
        self.require_owner(caller)?;
        self.require_arbiter_terms_open()?;
        require!(
            amount != self.arbiter_penalty_amount,
            BetMeError::UnchangedValue
        );

        let version = next_version(self.state_version)?;
        self.arbiter_penalty_amount = amount;
        self.state_version = version;
        Ok(())
    }

    pub fn set_opponent_address(&mut self, caller: &Pubkey, opponent: Option<Pubkey>) -> Result<()> {
        self.require_owner(caller)?;
        require!(
            !self.is_opponent_confirmed,
            BetMeError::OpponentStakeAlreadyCommitted
        );
        require!(opponent != self.opponent, BetMeError::UnchangedValue);
        require!(opponent != Some(self.owner), BetMeError::OpponentIsOwner);
        if opponent.is_some() {
            require!(opponent != self.arbiter, BetMeError::OpponentIsArbiter);
        }

        let version = next_version(self.state_version)?;
        self.opponent = opponent;
        self.state_version = version;
        Ok(())
    }

    // --- Commitments ---

    pub fn commit_owner_stake<C: TimeSource>(
        &mut self,
        caller: &Pubkey,
        amount: u64,
        clock: &C,
    ) -> Result<()> {
        self.require_owner(caller)?;
        require!(
            !self.is_owner_stake_committed(),
            BetMeError::OwnerStakeAlreadyCommitted
        );
        require!(amount > 0, BetMeError::ZeroStake);
        self.require_before_deadline(clock.unix_timestamp()?)?;

        let version = next_version(self.state_version)?;
        self.current_bet = amount;
        self.state_version = version;
        Ok(())
    }

    pub fn bond_as_arbiter<C: TimeSource>(
        &mut self,
        caller: &Pubkey,
        expected_version: u64,
        amount: u64,
        clock: &C,
    ) -> Result<()> {
        require!(self.arbiter.is_some(), BetMeError::ArbiterNotSet);
        require!(self.is_arbiter(caller), BetMeError::NotArbiter);
        self.require_arbiter_terms_open()?;
        require!(!self.is_arbiter_withdrawn, BetMeError::AlreadyWithdrawn);
        require!(
            self.is_owner_stake_committed(),
            BetMeError::OwnerStakeNotCommitted
        );
        self.require_before_deadline(clock.unix_timestamp()?)?;
        ensure_version_matches(expected_version, self.state_version)?;
        require!(
            amount == self.arbiter_penalty_amount,
            BetMeError::PenaltyMismatch
        );

        let version = next_version(self.state_version)?;
        self.is_arbiter_confirmed = true;
        self.state_version = version;
        Ok(())
    }

    /// Un-bonds the arbiter before the opponent has committed, refunding the
    /// bond in full. Terms become editable again.
    pub fn arbiter_self_retreat<V: ValueTransfer>(
        &mut self,
        caller: &Pubkey,
        vault: &mut V,
    ) -> Result<u64> {
        self.require_confirmed_arbiter(caller)?;
        require!(
            !self.is_opponent_confirmed,
            BetMeError::OpponentStakeAlreadyCommitted
        );
        require!(!self.is_arbiter_withdrawn, BetMeError::AlreadyWithdrawn);

        let version = next_version(self.state_version)?;
        let refund = self.arbiter_penalty_amount;
        if refund > 0 {
            vault.transfer_out(caller, refund)?;
        }

        self.is_arbiter_confirmed = false;
        self.state_version = version;
        Ok(refund)
    }

    pub fn commit_opponent_stake<C: TimeSource>(
        &mut self,
        caller: &Pubkey,
        expected_version: u64,
        amount: u64,
        clock: &C,
    ) -> Result<()> {
        require!(
            self.is_owner_stake_committed(),
            BetMeError::OwnerStakeNotCommitted
        );
        require!(
            !self.is_opponent_confirmed,
            BetMeError::OpponentStakeAlreadyCommitted
        );
        require!(*caller != self.owner, BetMeError::OwnerCannotOppose);
        require!(!self.is_arbiter(caller), BetMeError::ArbiterCannotOppose);
        if let Some(opponent) = self.opponent {
            require_keys_eq!(*caller, opponent, BetMeError::NotDesignatedOpponent);
        }
        if self.arbiter.is_some() {
            require!(self.is_arbiter_confirmed, BetMeError::ArbiterNotConfirmed);
        }
        self.require_before_deadline(clock.unix_timestamp()?)?;
        ensure_version_matches(expected_version, self.state_version)?;
        require!(amount == self.current_bet, BetMeError::StakeMismatch);

        let version = next_version(self.state_version)?;
        self.opponent = Some(*caller);
        self.is_opponent_confirmed = true;
        self.state_version = version;
        Ok(())
    }

    // --- Ruling ---

    pub fn decide<C: TimeSource>(
        &mut self,
        caller: &Pubkey,
        decision: Decision,
        clock: &C,
    ) -> Result<()> {
        require!(decision != Decision::Unset, BetMeError::InvalidDecision);
        self.require_confirmed_arbiter(caller)?;
        require!(
            self.is_opponent_confirmed,
            BetMeError::OpponentStakeNotCommitted
        );
        require!(
            !self.arbiter_has_voted(),
            BetMeError::DecisionAlreadyRecorded
        );
        self.require_before_deadline(clock.unix_timestamp()?)?;

        let version = next_version(self.state_version)?;
        self.decision = decision;
        self.state_version = version;
        Ok(())
    }
}
