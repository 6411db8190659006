//! Persistent browser state: the session timestamp and the one-time
//! welcome flag. Everything else is transient and resets on reload.
//!
//! Reads are best-effort: blocked storage or a corrupt value degrades
//! to "not set".

const AUTH_TS_KEY: &str = "melona.auth_ts";
const WELCOME_KEY: &str = "melona.welcome_seen";

/// Timestamp of the last successful passphrase entry, if one is stored.
#[must_use]
pub fn load_last_auth() -> Option<u64> {
    let raw = read_item(AUTH_TS_KEY)?;
    match raw.parse() {
        Ok(ms) => Some(ms),
        Err(_) => {
            log::warn!("Discarding corrupt auth timestamp: {raw:?}");
            None
        }
    }
}

/// Persist a successful authentication at `now_ms`.
pub fn store_last_auth(now_ms: u64) {
    write_item(AUTH_TS_KEY, &now_ms.to_string());
}

#[must_use]
pub fn welcome_seen() -> bool {
    read_item(WELCOME_KEY).is_some_and(|v| v == "1")
}

pub fn mark_welcome_seen() {
    write_item(WELCOME_KEY, "1");
}

fn read_item(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

fn write_item(key: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Without a browser window every read degrades to "not set", which is
    // exactly the unauthenticated default the app expects.
    #[test]
    fn absent_storage_means_unauthenticated() {
        assert_eq!(load_last_auth(), None);
        assert!(!welcome_seen());
    }

    #[test]
    fn writes_without_storage_are_silent() {
        store_last_auth(42);
        mark_welcome_seen();
    }
}
