//! Vesting clock. A vesting month is a fixed 30-day unit, so boundaries never
//! drift with calendar length:
//! - timelock = start_time + cliff
//! - months_since = largest k such that now >= timelock + k * 30 days
//! - boundaries are inclusive

use crate::constants::SECONDS_PER_MONTH;
use crate::error::AllocationError;

/// Instant at which a category's cliff ends.
pub fn timelock(start_time: i64, cliff: i64) -> Result<i64, AllocationError> {
    start_time
        .checked_add(cliff)
        .ok_or(AllocationError::MathOverflow)
}

/// Whole vesting months elapsed since `timelock`, or `None` while still locked.
pub fn months_since(now: i64, timelock: i64) -> Option<u64> {
    if now < timelock {
        return None;
    }
    // now >= timelock, so the difference is non-negative.
    let elapsed = (now as i128 - timelock as i128) as u128;
    Some((elapsed / SECONDS_PER_MONTH as u128) as u64)
}

/// Instant of the `k`-th monthly boundary after `timelock`.
pub fn month_boundary(timelock: i64, k: u32) -> Result<i64, AllocationError> {
    SECONDS_PER_MONTH
        .checked_mul(i64::from(k))
        .and_then(|offset| timelock.checked_add(offset))
        .ok_or(AllocationError::MathOverflow)
}

/// True once every tranche of a `vesting_months` schedule has unlocked.
pub fn is_after_vesting_end(now: i64, timelock: i64, vesting_months: u32) -> bool {
    match months_since(now, timelock) {
        Some(months) => months >= u64::from(vesting_months),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const START: i64 = 1_767_225_600; // 2026-01-01 00:00:00 UTC

    #[test]
    fn month_boundary_inclusive() {
        let lock = timelock(START, 0).unwrap();
        assert_eq!(months_since(lock, lock), Some(0));

        let b1 = month_boundary(lock, 1).unwrap();
        assert_eq!(b1, START + 30 * SECONDS_PER_DAY);
        assert_eq!(months_since(b1, lock), Some(1));
        // one second before boundary_1 is still month 0
        assert_eq!(months_since(b1 - 1, lock), Some(0));
    }

    #[test]
    fn locked_before_cliff() {
        let lock = timelock(START, 365 * SECONDS_PER_DAY).unwrap();
        assert_eq!(months_since(lock - 1, lock), None);
        assert_eq!(months_since(START, lock), None);
        assert!(!is_after_vesting_end(START, lock, 0));
        assert!(is_after_vesting_end(lock, lock, 0));
    }

    #[test]
    fn vesting_end_after_last_tranche() {
        let lock = timelock(START, 0).unwrap();
        let end = month_boundary(lock, 17).unwrap();
        assert!(!is_after_vesting_end(end - 1, lock, 17));
        assert!(is_after_vesting_end(end, lock, 17));
        assert_eq!(months_since(end + 10 * SECONDS_PER_MONTH, lock), Some(27));
    }

    #[test]
    fn timelock_overflow_is_reported() {
        assert!(matches!(
            timelock(i64::MAX, 1),
            Err(AllocationError::MathOverflow)
        ));
    }
}
