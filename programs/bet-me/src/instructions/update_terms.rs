use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

/// Accounts shared by every owner-only terms setter.
#[derive(Accounts)]
pub struct UpdateTerms<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [BET_ME_SEED.as_bytes(), bet.owner.as_ref(), &bet.id.to_le_bytes()],
        bump = bet.bump
    )]
    pub bet: Account<'info, BetMe>,
}

impl<'info> UpdateTerms<'info> {
    fn emit_updated(&self, field: TermsField) {
        emit!(TermsUpdated {
            bet: self.bet.key(),
            field,
            state_version: self.bet.state_version,
        });
    }
}

pub fn set_assertion_text_handler(ctx: Context<UpdateTerms>, text: String) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ctx.accounts.bet.set_assertion_text(&signer, text)?;
    ctx.accounts.emit_updated(TermsField::AssertionText);
    Ok(())
}

pub fn set_deadline_handler(ctx: Context<UpdateTerms>, deadline: i64) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ctx.accounts
        .bet
        .set_deadline(&signer, deadline, &SysvarClock)?;
    ctx.accounts.emit_updated(TermsField::Deadline);
    Ok(())
}

pub fn set_arbiter_fee_handler(ctx: Context<UpdateTerms>, arbiter_fee_bps: u16) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ctx.accounts.bet.set_arbiter_fee(&signer, arbiter_fee_bps)?;
    ctx.accounts.emit_updated(TermsField::ArbiterFee);
    Ok(())
}

pub fn set_arbiter_address_handler(
    ctx: Context<UpdateTerms>,
    arbiter: Option<Pubkey>,
) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ctx.accounts.bet.set_arbiter_address(&signer, arbiter)?;
    ctx.accounts.emit_updated(TermsField::ArbiterAddress);
    Ok(())
}

pub fn set_arbiter_penalty_amount_handler(ctx: Context<UpdateTerms>, amount: u64) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ctx.accounts
        .bet
        .set_arbiter_penalty_amount(&signer, amount)?;
    ctx.accounts.emit_updated(TermsField::ArbiterPenaltyAmount);
    Ok(())
}

pub fn set_opponent_address_handler(
    ctx: Context<UpdateTerms>,
    opponent: Option<Pubkey>,
) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ctx.accounts.bet.set_opponent_address(&signer, opponent)?;
    ctx.accounts.emit_updated(TermsField::OpponentAddress);
    Ok(())
}
