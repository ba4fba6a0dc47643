#![allow(ambiguous_glob_reexports)]

pub mod arbiter_self_retreat;
pub mod bond_as_arbiter;
pub mod close_bet;
pub mod commit_opponent_stake;
pub mod commit_owner_stake;
pub mod decide;
pub mod initialize_bet;
pub mod quote_payouts;
pub mod update_terms;
pub mod withdraw;

pub use arbiter_self_retreat::*;
pub use bond_as_arbiter::*;
pub use close_bet::*;
pub use commit_opponent_stake::*;
pub use commit_owner_stake::*;
pub use decide::*;
pub use initialize_bet::*;
pub use quote_payouts::*;
pub use update_terms::*;
pub use withdraw::*;
