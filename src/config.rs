//! Tab limit setting.
//!
//! Exactly one field is persisted: an integer under [`MAX_TABS_KEY`].
//! Reads never fail: anything absent or unusable degrades to
//! [`DEFAULT_MAX_TABS`]. Writes clamp to the [`MIN_LIMIT`]..=[`MAX_LIMIT`]
//! range the settings surface advertises; the enforcement core itself
//! tolerates any positive limit.

use serde_json::Value;

use crate::error::TabWardenResult;
use crate::host::SettingsStore;

/// Limit applied when the setting is absent or unusable.
pub const DEFAULT_MAX_TABS: u32 = 10;

/// Storage key for the limit.
pub const MAX_TABS_KEY: &str = "maxTabs";

/// Smallest limit the write path will persist.
pub const MIN_LIMIT: u32 = 1;

/// Largest limit the write path will persist.
pub const MAX_LIMIT: u32 = 999;

/// Read the configured limit.
///
/// A stored zero is treated as "unset" and yields the default, not a limit
/// of zero. Longstanding behaviour the rest of the system assumes; keep it.
pub async fn get_limit(store: &dyn SettingsStore) -> u32 {
    match store.get(MAX_TABS_KEY).await.and_then(|v| v.as_u64()) {
        Some(0) | None => DEFAULT_MAX_TABS,
        Some(n) => u32::try_from(n).unwrap_or(MAX_LIMIT),
    }
}

/// Persist a new limit, clamped to the advertised range. Returns the value
/// actually stored.
pub async fn set_limit(store: &dyn SettingsStore, value: u32) -> TabWardenResult<u32> {
    let clamped = value.clamp(MIN_LIMIT, MAX_LIMIT);
    store.set(MAX_TABS_KEY, Value::from(clamped)).await?;
    Ok(clamped)
}

/// Restore the default limit. Returns the stored value.
pub async fn reset_limit(store: &dyn SettingsStore) -> TabWardenResult<u32> {
    set_limit(store, DEFAULT_MAX_TABS).await
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::host::fakes::{fake_host, FakeState};

    #[tokio::test]
    async fn test_get_limit_default_when_absent() {
        let state = Arc::new(Mutex::new(FakeState::default()));
        let host = fake_host(&state);

        assert_eq!(get_limit(host.settings.as_ref()).await, DEFAULT_MAX_TABS);
    }

    #[tokio::test]
    async fn test_get_limit_zero_is_unset() {
        let state = Arc::new(Mutex::new(FakeState::default()));
        state
            .lock()
            .unwrap()
            .settings
            .insert(MAX_TABS_KEY.to_string(), json!(0));
        let host = fake_host(&state);

        // Falsy-default quirk: stored 0 reads back as the default.
        assert_eq!(get_limit(host.settings.as_ref()).await, DEFAULT_MAX_TABS);
    }

    #[tokio::test]
    async fn test_get_limit_non_integer_degrades_to_default() {
        let state = Arc::new(Mutex::new(FakeState::default()));
        state
            .lock()
            .unwrap()
            .settings
            .insert(MAX_TABS_KEY.to_string(), json!("twelve"));
        let host = fake_host(&state);

        assert_eq!(get_limit(host.settings.as_ref()).await, DEFAULT_MAX_TABS);
    }

    #[tokio::test]
    async fn test_get_limit_stored_value() {
        let state = Arc::new(Mutex::new(FakeState::default()));
        state
            .lock()
            .unwrap()
            .settings
            .insert(MAX_TABS_KEY.to_string(), json!(25));
        let host = fake_host(&state);

        assert_eq!(get_limit(host.settings.as_ref()).await, 25);
    }

    #[tokio::test]
    async fn test_set_limit_clamps_to_range() {
        let state = Arc::new(Mutex::new(FakeState::default()));
        let host = fake_host(&state);

        assert_eq!(set_limit(host.settings.as_ref(), 0).await.unwrap(), 1);
        assert_eq!(get_limit(host.settings.as_ref()).await, 1);

        assert_eq!(set_limit(host.settings.as_ref(), 5000).await.unwrap(), 999);
        assert_eq!(get_limit(host.settings.as_ref()).await, 999);

        assert_eq!(set_limit(host.settings.as_ref(), 42).await.unwrap(), 42);
        assert_eq!(get_limit(host.settings.as_ref()).await, 42);
    }

    #[tokio::test]
    async fn test_reset_limit() {
        let state = Arc::new(Mutex::new(FakeState::default()));
        let host = fake_host(&state);

        set_limit(host.settings.as_ref(), 3).await.unwrap();
        assert_eq!(
            reset_limit(host.settings.as_ref()).await.unwrap(),
            DEFAULT_MAX_TABS
        );
        assert_eq!(get_limit(host.settings.as_ref()).await, DEFAULT_MAX_TABS);
    }
}
