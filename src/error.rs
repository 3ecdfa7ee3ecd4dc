use thiserror::Error;

use crate::host::TabId;

/// Errors that can occur while enforcing the tab limit.
#[derive(Debug, Error)]
pub enum TabWardenError {
    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Tab query failed: {0}")]
    TabQuery(String),

    #[error("Tab {0} could not be removed")]
    TabNotRemovable(TabId),

    #[error("Badge error: {0}")]
    Badge(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Event dispatch error: {0}")]
    Dispatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tabwarden operations.
pub type TabWardenResult<T> = Result<T, TabWardenError>;
