//! TabWarden: browser tab limit enforcement core.
//!
//! Enforces a user-configured maximum number of open tabs: when a creation
//! pushes occupancy past the limit, the newest tab is closed (or, when the
//! host refuses, the oldest closable tab) with badge and notification
//! feedback.
//!
//! # Architecture
//!
//! ```text
//! EventDispatcher (tokio task)
//! └── EnforcementCore
//!     ├── config   - limit read/write over the settings store
//!     ├── filter   - protected-tab classification
//!     ├── victim   - fallback victim selection
//!     ├── throttle - notification rate limiting
//!     └── status   - badge text/tier projection
//!
//! host - capability traits the embedder implements
//! settings - JSON-file SettingsStore backend
//! ```
//!
//! The core never talks to a browser directly; embedders implement the
//! [`host`] traits and translate native callbacks into [`TabEvent`]s:
//!
//! ```ignore
//! use std::sync::Arc;
//! use tabwarden::{EventDispatcher, Host, JsonSettingsStore, TabEvent};
//!
//! let host = Arc::new(Host {
//!     tabs: Box::new(my_tab_host),
//!     badge: Box::new(my_badge),
//!     notifications: Box::new(my_notifier),
//!     settings: Box::new(JsonSettingsStore::new(JsonSettingsStore::default_path())),
//! });
//!
//! let dispatcher = EventDispatcher::new(host);
//! dispatcher.dispatch(TabEvent::Startup).await?;
//! ```

pub mod config;
pub mod core;
pub mod dispatch;
pub mod filter;
pub mod host;
pub mod settings;
pub mod status;
pub mod throttle;
pub mod victim;

mod error;

pub use config::{DEFAULT_MAX_TABS, MAX_LIMIT, MAX_TABS_KEY, MIN_LIMIT};
pub use self::core::EnforcementCore;
pub use dispatch::{EventDispatcher, TabEvent};
pub use error::{TabWardenError, TabWardenResult};
pub use host::{
    BadgeDisplay, Host, NotificationDisplay, SettingsStore, TabHost, TabId, TabRecord,
};
pub use settings::JsonSettingsStore;
pub use status::{project, Status, StatusTier};
pub use throttle::{NotificationThrottle, NOTIFY_COOLDOWN};
