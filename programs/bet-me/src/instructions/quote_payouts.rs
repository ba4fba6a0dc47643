use crate::{constants::*, state::*, utils::*};
use anchor_lang::prelude::*;

/// Read-only; anyone may ask.
#[derive(Accounts)]
pub struct QuotePayouts<'info> {
    #[account(
        seeds = [BET_ME_SEED.as_bytes(), bet.owner.as_ref(), &bet.id.to_le_bytes()],
        bump = bet.bump
    )]
    pub bet: Account<'info, BetMe>,
}

pub fn handler(ctx: Context<QuotePayouts>) -> Result<Payouts> {
    let now = SysvarClock.unix_timestamp()?;
    ctx.accounts.bet.payouts(now)
}
