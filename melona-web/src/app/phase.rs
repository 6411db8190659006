use melona_core::SessionConfig;

/// Top-level screens of the experience.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Passphrase screen; nothing else is reachable.
    Gate,
    /// The card deck.
    Deck,
}

/// Whether a persisted session is still inside its validity window.
#[must_use]
pub fn stored_session_active(config: &SessionConfig) -> bool {
    crate::storage::load_last_auth()
        .is_some_and(|last| config.session_active(last, crate::time::now_ms()))
}

/// Phase to boot into: straight to the deck when the stored session is
/// still valid, otherwise back to the gate.
#[must_use]
pub fn initial_phase(config: &SessionConfig) -> Phase {
    if stored_session_active(config) {
        Phase::Deck
    } else {
        Phase::Gate
    }
}

/// Whether entering `phase` should open the welcome modal. Keyed on the
/// stored flag, so a reload with a live session still shows the welcome
/// until it has been dismissed once.
#[must_use]
pub fn welcome_due(phase: Phase) -> bool {
    phase == Phase::Deck && !crate::storage::welcome_seen()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Native tests have no browser storage, so no session can ever be
    // restored: the app must boot at the gate.
    #[test]
    fn without_stored_session_boot_lands_on_the_gate() {
        let config = SessionConfig::default();
        assert!(!stored_session_active(&config));
        assert_eq!(initial_phase(&config), Phase::Gate);
    }

    // The welcome follows the dismissal flag, not how the deck was
    // reached: any deck entry while the flag is unset owes a welcome.
    #[test]
    fn undismissed_welcome_is_due_on_any_deck_entry() {
        assert!(welcome_due(Phase::Deck));
        assert!(!welcome_due(Phase::Gate));
    }
}
