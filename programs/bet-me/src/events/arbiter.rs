use crate::constants::Decision;
use anchor_lang::prelude::*;

#[event]
pub struct ArbiterBonded {
    pub bet: Pubkey,
    pub arbiter: Pubkey,
    pub penalty_amount: u64,
    pub state_version: u64,
}

#[event]
pub struct ArbiterRetreated {
    pub bet: Pubkey,
    pub arbiter: Pubkey,
    pub refund: u64,
    pub state_version: u64,
}

#[event]
pub struct DecisionRecorded {
    pub bet: Pubkey,
    pub arbiter: Pubkey,
    pub decision: Decision,
    pub state_version: u64,
}
