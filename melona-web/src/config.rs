//! Startup configuration for the deployed experience.

use melona_core::UnlockConfig;

/// Set to `true` to unlock every ticket immediately (testing escape hatch).
/// Set to `false` for the real experience starting February 14.
pub const FORCE_UNLOCKED: bool = false;

/// Unlock configuration injected into the calendar at startup.
#[must_use]
pub const fn unlock_config() -> UnlockConfig {
    UnlockConfig {
        force_unlocked: FORCE_UNLOCKED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_config_respects_the_schedule() {
        assert!(!unlock_config().force_unlocked);
    }
}
