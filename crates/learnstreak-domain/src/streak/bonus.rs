/// Shortest streak that earns any bonus.
pub const BONUS_THRESHOLD_DAYS: u32 = 7;

/// Extra points for holding a streak, added on top of the activity's own award.
pub fn bonus_points(current_streak: u32) -> u32 {
    match current_streak {
        0..=6 => 0,
        7..=13 => 10,
        14..=29 => 20,
        30..=99 => 30,
        _ => 50,
    }
}

pub fn qualifies_for_bonus(current_streak: u32) -> bool {
    current_streak >= BONUS_THRESHOLD_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_points_steps() {
        assert_eq!(bonus_points(0), 0);
        assert_eq!(bonus_points(6), 0);
        assert_eq!(bonus_points(7), 10);
        assert_eq!(bonus_points(13), 10);
        assert_eq!(bonus_points(14), 20);
        assert_eq!(bonus_points(29), 20);
        assert_eq!(bonus_points(30), 30);
        assert_eq!(bonus_points(99), 30);
        assert_eq!(bonus_points(100), 50);
        assert_eq!(bonus_points(150), 50);
    }

    #[test]
    fn test_bonus_points_never_decrease() {
        let mut previous = 0;
        for streak in 0..=200 {
            let bonus = bonus_points(streak);
            assert!(bonus >= previous, "bonus dropped at streak {}", streak);
            previous = bonus;
        }
    }

    #[test]
    fn test_qualifies_for_bonus_matches_points() {
        for streak in 0..=120 {
            assert_eq!(qualifies_for_bonus(streak), bonus_points(streak) > 0);
        }
    }
}
