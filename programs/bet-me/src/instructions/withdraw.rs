use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [BET_ME_SEED.as_bytes(), bet.owner.as_ref(), &bet.id.to_le_bytes()],
        bump = bet.bump
    )]
    pub bet: Account<'info, BetMe>,
}

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    let clock = SysvarClock;
    let mut vault = LamportVault::new(
        ctx.accounts.bet.to_account_info(),
        vec![ctx.accounts.signer.to_account_info()],
    )?;

    let bet = &mut ctx.accounts.bet;
    let (role, amount) = bet.withdraw(&signer, &clock, &mut vault)?;

    if role == Role::Opponent && bet.is_arbiter_lazy(clock.unix_timestamp()?) {
        msg!("Arbiter missed the deadline, bond forfeited to the opponent");
    }

    // emit event
    emit!(Withdrawn {
        bet: bet.key(),
        recipient: signer,
        role,
        amount,
        state_version: bet.state_version,
    });

    Ok(())
}
