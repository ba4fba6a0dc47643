use crate::constants::Role;
use anchor_lang::prelude::*;

#[event]
pub struct Withdrawn {
    pub bet: Pubkey,
    pub recipient: Pubkey,
    pub role: Role,
    pub amount: u64,
    pub state_version: u64,
}

#[event]
pub struct BetClosed {
    pub bet: Pubkey,
    pub owner: Pubkey,
    pub arbiter_paid: u64,
    pub owner_received: u64,
}
