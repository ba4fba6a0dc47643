use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CommitOwnerStake<'info> {
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

pub fn handler(ctx: Context<CommitOwnerStake>, amount: u64) -> Result<()> {
    let signer = ctx.accounts.signer.key();

    // validate and set fields
    ctx.accounts
        .bet
        .commit_owner_stake(&signer, amount, &SysvarClock)?;

    // transfer from signer to bet account
    deposit(
        &ctx.accounts.system_program,
        &ctx.accounts.signer,
        ctx.accounts.bet.to_account_info(),
        amount,
    )?;

    // emit event
    emit!(OwnerStakeCommitted {
        bet: ctx.accounts.bet.key(),
        owner: signer,
        amount,
        state_version: ctx.accounts.bet.state_version,
    });

    Ok(())
}
