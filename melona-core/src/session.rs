//! Passphrase check and sliding session window
//!
//! The gate is a shared secret, not security: a case-insensitive match
//! against a fixed passphrase, with a second phrase that triggers an easter
//! egg instead of granting access. There is no lockout and no rate limiting.

/// Session validity window: one hour from the last successful entry.
pub const SESSION_DURATION_MS: u64 = 60 * 60 * 1000;

/// Result of checking an entered phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassphraseOutcome {
    /// Correct passphrase; start a new session.
    Granted,
    /// The easter-egg phrase; show its response, access stays closed.
    EasterEgg,
    /// Anything else. No state change.
    Denied,
}

/// Gate configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub passphrase: String,
    pub easter_egg: String,
    pub duration_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            passphrase: String::from("viento"),
            easter_egg: String::from("pichi"),
            duration_ms: SESSION_DURATION_MS,
        }
    }
}

impl SessionConfig {
    /// Compare an entered phrase against the configured secrets,
    /// case-insensitively.
    #[must_use]
    pub fn check(&self, input: &str) -> PassphraseOutcome {
        let entered = input.to_lowercase();
        if entered == self.passphrase.to_lowercase() {
            PassphraseOutcome::Granted
        } else if entered == self.easter_egg.to_lowercase() {
            PassphraseOutcome::EasterEgg
        } else {
            PassphraseOutcome::Denied
        }
    }

    /// Whether a session started at `last_auth_ms` is still valid at
    /// `now_ms` (both milliseconds since the Unix epoch). A clock that moved
    /// backwards counts as still valid; the window simply restarts on the
    /// next successful entry.
    #[must_use]
    pub const fn session_active(&self, last_auth_ms: u64, now_ms: u64) -> bool {
        now_ms.saturating_sub(last_auth_ms) < self.duration_ms
    }

    /// Number of input slots the entry screen shows.
    #[must_use]
    pub fn max_input_len(&self) -> usize {
        self.passphrase.chars().count()
    }
}
