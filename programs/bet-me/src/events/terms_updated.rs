use crate::constants::TermsField;
use anchor_lang::prelude::*;

#[event]
pub struct TermsUpdated {
    pub bet: Pubkey,
    pub field: TermsField,
    pub state_version: u64,
}
