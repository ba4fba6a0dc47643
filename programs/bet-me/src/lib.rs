#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("3QG6X62xXiGh7yLw8KjpcjumtB5MV2ZWB5BFxmYbSyBX");

#[program]
pub mod bet_me {
    use super::*;

    pub fn initialize_bet(ctx: Context<InitializeBet>, id: u64, terms: BetTerms) -> Result<()> {
        initialize_bet::handler(ctx, id, terms)
    }

    // Terms, owner only and frozen once the arbiter bonds.

    pub fn set_assertion_text(ctx: Context<UpdateTerms>, text: String) -> Result<()> {
        update_terms::set_assertion_text_handler(ctx, text)
    }

    pub fn set_deadline(ctx: Context<UpdateTerms>, deadline: i64) -> Result<()> {
        update_terms::set_deadline_handler(ctx, deadline)
    }

    pub fn set_arbiter_fee(ctx: Context<UpdateTerms>, arbiter_fee_bps: u16) -> Result<()> {
        update_terms::set_arbiter_fee_handler(ctx, arbiter_fee_bps)
    }

    pub fn set_arbiter_address(ctx: Context<UpdateTerms>, arbiter: Option<Pubkey>) -> Result<()> {
        update_terms::set_arbiter_address_handler(ctx, arbiter)
    }

    pub fn set_arbiter_penalty_amount(ctx: Context<UpdateTerms>, amount: u64) -> Result<()> {
        update_terms::set_arbiter_penalty_amount_handler(ctx, amount)
    }

    pub fn set_opponent_address(ctx: Context<UpdateTerms>, opponent: Option<Pubkey>) -> Result<()> {
        update_terms::set_opponent_address_handler(ctx, opponent)
    }

    // Commitments.

    pub fn commit_owner_stake(ctx: Context<CommitOwnerStake>, amount: u64) -> Result<()> {
        commit_owner_stake::handler(ctx, amount)
    }

    pub fn bond_as_arbiter(
        ctx: Context<BondAsArbiter>,
        expected_version: u64,
        amount: u64,
    ) -> Result<()> {
        bond_as_arbiter::handler(ctx, expected_version, amount)
    }

    pub fn arbiter_self_retreat(ctx: Context<ArbiterSelfRetreat>) -> Result<()> {
        arbiter_self_retreat::handler(ctx)
    }

    pub fn commit_opponent_stake(
        ctx: Context<CommitOpponentStake>,
        expected_version: u64,
        amount: u64,
    ) -> Result<()> {
        commit_opponent_stake::handler(ctx, expected_version, amount)
    }

    // Ruling.

    pub fn decide_assertion_true(ctx: Context<Decide>) -> Result<()> {
        decide::handler(ctx, Decision::AssertionTrue)
    }

    pub fn decide_assertion_false(ctx: Context<Decide>) -> Result<()> {
        decide::handler(ctx, Decision::AssertionFalse)
    }

    pub fn decide_assertion_unresolvable(ctx: Context<Decide>) -> Result<()> {
        decide::handler(ctx, Decision::Unresolvable)
    }

    // Settlement.

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        withdraw::handler(ctx)
    }

    pub fn close_bet(ctx: Context<CloseBet>) -> Result<()> {
        close_bet::handler(ctx)
    }

    pub fn quote_payouts(ctx: Context<QuotePayouts>) -> Result<Payouts> {
        quote_payouts::handler(ctx)
    }
}
