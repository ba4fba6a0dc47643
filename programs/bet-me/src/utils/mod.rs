pub mod fee;
pub mod time;
pub mod vault;
pub mod version;

pub use fee::*;
pub use time::*;
pub use vault::*;
pub use version::*;
