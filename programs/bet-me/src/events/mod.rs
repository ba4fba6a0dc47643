pub mod arbiter;
pub mod bet_created;
pub mod settlement;
pub mod stake_committed;
pub mod terms_updated;

pub use arbiter::*;
pub use bet_created::*;
pub use settlement::*;
pub use stake_committed::*;
pub use terms_updated::*;
