pub mod bet;
pub mod ledger;
pub mod payout;
pub mod transitions;

pub use bet::*;
pub use payout::*;
