//! Enforcement orchestration.
//!
//! One entry point per host event. Handlers are short decision sequences
//! interleaved with host calls; any decision that depends on live tab state
//! re-queries it instead of reusing an earlier snapshot, because other
//! events may run between await points.
//!
//! Nothing here is fatal: host failures in badge or notification paths are
//! logged and swallowed, and a failed removal at most leaves the limit
//! transiently exceeded until a later tab-removed event restores it.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{self, MAX_TABS_KEY};
use crate::filter::is_protected;
use crate::host::{Host, TabRecord};
use crate::status;
use crate::throttle::NotificationThrottle;
use crate::victim::select_victim;

const NOTIFY_TITLE: &str = "Tab limit reached";

/// Event-driven tab limit enforcer.
///
/// Owns the notification throttle exclusively; independent instances never
/// share throttle state.
pub struct EnforcementCore {
    host: Arc<Host>,
    throttle: NotificationThrottle,
}

impl EnforcementCore {
    pub fn new(host: Arc<Host>) -> Self {
        Self {
            host,
            throttle: NotificationThrottle::new(),
        }
    }

    /// Handle a newly created tab.
    ///
    /// The badge is refreshed unconditionally; any creation changes the
    /// displayed count whether or not enforcement triggers.
    pub async fn on_tab_created(&mut self, tab: TabRecord) {
        let limit = config::get_limit(self.host.settings.as_ref()).await;

        let snapshot = match self.host.tabs.query_tabs().await {
            Ok(tabs) => tabs,
            Err(e) => {
                eprintln!("[tabwarden] Tab query failed: {}", e);
                return;
            }
        };
        let count = snapshot.len();

        self.set_badge(count, limit).await;

        if count <= limit as usize {
            return;
        }

        if self.throttle.should_notify(Instant::now()) {
            let message = limit_message(limit);
            if let Err(e) = self.host.notifications.show(NOTIFY_TITLE, &message).await {
                eprintln!("[tabwarden] Notification failed: {}", e);
            }
        }

        // Close the triggering tab first; some tabs (system pages) refuse,
        // in which case the oldest closable tab goes instead.
        match self.host.tabs.remove_tab(tab.id).await {
            Ok(()) => self.refresh_badge().await,
            Err(_) => self.close_fallback_victim(limit).await,
        }
    }

    /// Handle a removed tab. Removal never triggers enforcement; only the
    /// displayed count changes.
    pub async fn on_tab_removed(&mut self) {
        self.refresh_badge().await;
    }

    /// Handle a settings-store change notification.
    pub async fn on_settings_changed(&mut self, changed_keys: &[String]) {
        if changed_keys.iter().any(|key| key == MAX_TABS_KEY) {
            self.refresh_badge().await;
        }
    }

    /// Establish the initial badge state on startup or install.
    pub async fn on_startup(&mut self) {
        self.refresh_badge().await;
    }

    /// Close the oldest closable tab after a direct removal was rejected.
    ///
    /// The rejected removal was an await point, so the creation-time
    /// snapshot may be stale; the candidate set is re-queried before acting.
    async fn close_fallback_victim(&mut self, limit: u32) {
        let snapshot = match self.host.tabs.query_tabs().await {
            Ok(tabs) => tabs,
            Err(e) => {
                eprintln!("[tabwarden] Tab query failed: {}", e);
                return;
            }
        };

        // Another handler may already have brought us back under.
        if snapshot.len() <= limit as usize {
            return;
        }

        let Some(victim) = select_victim(&snapshot, is_protected) else {
            // Every tab is protected. Stay over limit rather than loop.
            return;
        };
        let victim_id = victim.id;

        match self.host.tabs.remove_tab(victim_id).await {
            Ok(()) => self.refresh_badge().await,
            Err(e) => {
                // Not retried; a later tab-removed event restores compliance.
                eprintln!(
                    "[tabwarden] Fallback removal of tab {} failed: {}",
                    victim_id, e
                );
            }
        }
    }

    /// Re-query occupancy and push text + color to the host badge.
    async fn refresh_badge(&self) {
        let limit = config::get_limit(self.host.settings.as_ref()).await;
        match self.host.tabs.query_tabs().await {
            Ok(tabs) => self.set_badge(tabs.len(), limit).await,
            Err(e) => eprintln!("[tabwarden] Tab query failed: {}", e),
        }
    }

    async fn set_badge(&self, count: usize, limit: u32) {
        let status = status::project(count, limit);
        if let Err(e) = self.host.badge.set_text(&status.text).await {
            eprintln!("[tabwarden] Badge update failed: {}", e);
        }
        if let Err(e) = self
            .host
            .badge
            .set_background_color(status.tier.badge_color())
            .await
        {
            eprintln!("[tabwarden] Badge update failed: {}", e);
        }
    }
}

/// Limit alert body, singular/plural aware.
fn limit_message(limit: u32) -> String {
    if limit == 1 {
        "Only 1 tab may stay open; the newest tab was closed.".to_string()
    } else {
        format!("Only {} tabs may stay open; the newest tab was closed.", limit)
    }
}
