pub const XP_PER_LEVEL: u32 = 100;

/// Perfect 30, >= 80% 25, >= 60% 20, anything else 10. `total` must be non-zero.
pub fn xp_for_accuracy(correct: u32, total: u32) -> u32 {
    debug_assert!(total > 0 && correct <= total);

    // compare percentages without floats: correct/total >= p/100
    let at_least = |percent: u64| u64::from(correct) * 100 >= percent * u64::from(total);

    if correct == total {
        30
    } else if at_least(80) {
        25
    } else if at_least(60) {
        20
    } else {
        10
    }
}

pub fn level_for_xp(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accuracy_tiers() {
        assert_eq!(xp_for_accuracy(5, 5), 30);
        assert_eq!(xp_for_accuracy(4, 5), 25);
        assert_eq!(xp_for_accuracy(3, 5), 20);
        assert_eq!(xp_for_accuracy(2, 5), 10);
        assert_eq!(xp_for_accuracy(1, 5), 10);
        assert_eq!(xp_for_accuracy(0, 5), 10);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(xp_for_accuracy(8, 10), 25);
        assert_eq!(xp_for_accuracy(79, 100), 20);
        assert_eq!(xp_for_accuracy(6, 10), 20);
        assert_eq!(xp_for_accuracy(59, 100), 10);
        assert_eq!(xp_for_accuracy(99, 100), 25);
    }

    #[test]
    fn level_curve() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(250), 3);
    }
}
