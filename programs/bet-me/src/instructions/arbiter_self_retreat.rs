use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ArbiterSelfRetreat<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [BET_ME_SEED.as_bytes(), bet.owner.as_ref(), &bet.id.to_le_bytes()],
        bump = bet.bump
    )]
    pub bet: Account<'info, BetMe>,
}

pub fn handler(ctx: Context<ArbiterSelfRetreat>) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    let mut vault = LamportVault::new(
        ctx.accounts.bet.to_account_info(),
        vec![ctx.accounts.signer.to_account_info()],
    )?;

    // validate, refund bond and set fields
    let refund = ctx.accounts.bet.arbiter_self_retreat(&signer, &mut vault)?;

    // emit event
    emit!(ArbiterRetreated {
        bet: ctx.accounts.bet.key(),
        arbiter: signer,
        refund,
        state_version: ctx.accounts.bet.state_version,
    });

    Ok(())
}
