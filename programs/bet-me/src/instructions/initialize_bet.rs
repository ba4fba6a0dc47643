use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct InitializeBet<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE as usize + BetMe::INIT_SPACE,
        seeds = [BET_ME_SEED.as_bytes(), signer.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    pub bet: Account<'info, BetMe>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeBet>, id: u64, terms: BetTerms) -> Result<()> {
    let owner = ctx.accounts.signer.key();
    let bet_key = ctx.accounts.bet.key();
    let bet = &mut ctx.accounts.bet;

    // validate and set fields
    bet.initialize(id, owner, terms, ctx.bumps.bet, &SysvarClock)?;

    // emit event
    emit!(BetCreated {
        bet: bet_key,
        owner,
        id,
        deadline: bet.deadline,
        arbiter_fee_bps: bet.arbiter_fee_bps,
        arbiter: bet.arbiter,
        opponent: bet.opponent,
        arbiter_penalty_amount: bet.arbiter_penalty_amount,
    });

    Ok(())
}
