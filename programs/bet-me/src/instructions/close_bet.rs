use crate::{constants::*, error::BetMeError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CloseBet<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [BET_ME_SEED.as_bytes(), bet.owner.as_ref(), &bet.id.to_le_bytes()],
        bump = bet.bump,
        close = signer
    )]
    pub bet: Account<'info, BetMe>,

    /// CHECK: only credited, and only when it is the bet's arbiter
    #[account(mut)]
    pub arbiter: Option<UncheckedAccount<'info>>,
}

impl<'info> CloseBet<'info> {
    pub fn validate(&self) -> Result<()> {
        if let Some(arbiter) = &self.arbiter {
            require!(self.bet.is_arbiter(arbiter.key), BetMeError::NotArbiter);
        }

        Ok(())
    }
}

pub fn handler(ctx: Context<CloseBet>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let signer = ctx.accounts.signer.key();
    let recipients = ctx
        .accounts
        .arbiter
        .iter()
        .map(|arbiter| arbiter.to_account_info())
        .collect();
    let mut vault = LamportVault::new(ctx.accounts.bet.to_account_info(), recipients)?;

    // settle the arbiter, the remainder goes to the owner on close
    let arbiter_paid = ctx
        .accounts
        .bet
        .settle_for_close(&signer, &SysvarClock, &mut vault)?;
    if arbiter_paid > 0 {
        msg!("Arbiter paid {} lamports on close", arbiter_paid);
    }

    // emit event
    emit!(BetClosed {
        bet: ctx.accounts.bet.key(),
        owner: signer,
        arbiter_paid,
        owner_received: ctx.accounts.bet.to_account_info().lamports(),
    });

    Ok(())
}
