use anchor_lang::prelude::*;

#[event]
pub struct BetCreated {
    pub bet: Pubkey,
    pub owner: Pubkey,
    pub id: u64,
    pub deadline: i64,
    pub arbiter_fee_bps: u16,
    pub arbiter: Option<Pubkey>,
    pub opponent: Option<Pubkey>,
    pub arbiter_penalty_amount: u64,
}
