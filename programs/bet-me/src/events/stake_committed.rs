use anchor_lang::prelude::*;

#[event]
pub struct OwnerStakeCommitted {
    pub bet: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub state_version: u64,
}

#[event]
pub struct OpponentStakeCommitted {
    pub bet: Pubkey,
    pub opponent: Pubkey,
    pub amount: u64,
    pub state_version: u64,
}
