use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Decide<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [BET_ME_SEED.as_bytes(), bet.owner.as_ref(), &bet.id.to_le_bytes()],
        bump = bet.bump
    )]
    pub bet: Account<'info, BetMe>,
}

pub fn handler(ctx: Context<Decide>, decision: Decision) -> Result<()> {
    let signer = ctx.accounts.signer.key();

    // validate and record
    ctx.accounts.bet.decide(&signer, decision, &SysvarClock)?;

    // emit event
    emit!(DecisionRecorded {
        bet: ctx.accounts.bet.key(),
        arbiter: signer,
        decision,
        state_version: ctx.accounts.bet.state_version,
    });

    Ok(())
}
