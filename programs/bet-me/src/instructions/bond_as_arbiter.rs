use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct BondAsArbiter<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [BET_ME_SEED.as_bytes(), bet.owner.as_ref(), &bet.id.to_le_bytes()],
        bump = bet.bump
    )]
    pub bet: Account<'info, BetMe>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<BondAsArbiter>, expected_version: u64, amount: u64) -> Result<()> {
    let signer = ctx.accounts.signer.key();

    // validate against the observed version and set fields
    ctx.accounts
        .bet
        .bond_as_arbiter(&signer, expected_version, amount, &SysvarClock)?;

    // transfer bond from signer to bet account
    deposit(
        &ctx.accounts.system_program,
        &ctx.accounts.signer,
        ctx.accounts.bet.to_account_info(),
        amount,
    )?;

    // emit event
    emit!(ArbiterBonded {
        bet: ctx.accounts.bet.key(),
        arbiter: signer,
        penalty_amount: amount,
        state_version: ctx.accounts.bet.state_version,
    });

    Ok(())
}
