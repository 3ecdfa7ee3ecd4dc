//! Host capability boundary.
//!
//! The enforcement core never talks to a browser directly. Everything it
//! needs from the outside world (tab enumeration and removal, badge
//! rendering, notification display, persistent settings) comes in through
//! the traits below. Embedders implement them against the host platform;
//! tests implement them in memory.
//!
//! Every capability call is an await point: between issuing a call and
//! receiving its result, other events may be dispatched. The core copes by
//! re-querying live state before any action that depends on freshness.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TabWardenResult;

/// Stable identifier for an open tab.
///
/// Issued by the host in increasing order for the lifetime of the browser
/// session and never reused while the tab is open.
pub type TabId = u32;

/// An open tab as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRecord {
    pub id: TabId,

    /// Absent or empty for transient pages with no committed URL yet.
    #[serde(default)]
    pub url: Option<String>,
}

impl TabRecord {
    pub fn new(id: TabId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: Some(url.into()),
        }
    }
}

/// Enumerate and close tabs.
#[async_trait]
pub trait TabHost: Send + Sync {
    /// Return the full live set of open tabs.
    async fn query_tabs(&self) -> TabWardenResult<Vec<TabRecord>>;

    /// Close a tab. Errors when the host refuses, e.g. for privileged
    /// system pages.
    async fn remove_tab(&self, id: TabId) -> TabWardenResult<()>;
}

/// Render the occupancy badge.
#[async_trait]
pub trait BadgeDisplay: Send + Sync {
    async fn set_text(&self, text: &str) -> TabWardenResult<()>;
    async fn set_background_color(&self, rgba: [u8; 4]) -> TabWardenResult<()>;
}

/// Show user-facing notifications. Fire-and-forget from the caller's
/// perspective; failures are logged, never acted on.
#[async_trait]
pub trait NotificationDisplay: Send + Sync {
    async fn show(&self, title: &str, message: &str) -> TabWardenResult<()>;
}

/// Persistent key-value settings store.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a value. `None` when the key is absent or the store is
    /// unreadable; callers fall back to defaults.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Write a value through to persistent storage.
    async fn set(&self, key: &str, value: Value) -> TabWardenResult<()>;
}

/// Aggregate struct holding all host capability implementations.
pub struct Host {
    pub tabs: Box<dyn TabHost>,
    pub badge: Box<dyn BadgeDisplay>,
    pub notifications: Box<dyn NotificationDisplay>,
    pub settings: Box<dyn SettingsStore>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_record_url_optional_in_json() {
        let tab: TabRecord = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(tab.id, 4);
        assert_eq!(tab.url, None);

        let tab: TabRecord = serde_json::from_str(r#"{"id": 9, "url": "https://a"}"#).unwrap();
        assert_eq!(tab, TabRecord::new(9, "https://a"));
    }
}
