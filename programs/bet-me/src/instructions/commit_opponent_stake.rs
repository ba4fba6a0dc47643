use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CommitOpponentStake<'info> {
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

pub fn handler(
    ctx: Context<CommitOpponentStake>,
    expected_version: u64,
    amount: u64,
) -> Result<()> {
    let signer = ctx.accounts.signer.key();

    // validate against the observed version and set fields
    ctx.accounts
        .bet
        .commit_opponent_stake(&signer, expected_version, amount, &SysvarClock)?;

    // transfer from signer to bet account
    deposit(
        &ctx.accounts.system_program,
        &ctx.accounts.signer,
        ctx.accounts.bet.to_account_info(),
        amount,
    )?;

    // emit event
    emit!(OpponentStakeCommitted {
        bet: ctx.accounts.bet.key(),
        opponent: signer,
        amount,
        state_version: ctx.accounts.bet.state_version,
    });

    Ok(())
}
