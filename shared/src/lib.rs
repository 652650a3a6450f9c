mod messages;
mod reward;
mod streak;

pub use messages::*;
pub use reward::*;
pub use streak::*;

/// XP granted for every successful check-in, before milestone bonuses.
pub const BASE_XP: u32 = 10;
