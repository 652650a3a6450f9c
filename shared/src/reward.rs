use crate::BASE_XP;

/// Bonus XP for milestone streaks.
///
/// Divisibility checks run in a fixed priority order, 100 before 30 before 7,
/// so a streak of 300 earns the 500 bonus rather than the 200 one.
pub const fn milestone_bonus(streak: u32) -> u32 {
    if streak % 100 == 0 {
        500
    } else if streak % 30 == 0 {
        200
    } else if streak % 7 == 0 {
        50
    } else {
        0
    }
}

/// Total XP earned by a check-in that results in the given streak.
pub const fn xp_for_streak(streak: u32) -> u32 {
    BASE_XP + milestone_bonus(streak)
}
