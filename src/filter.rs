//! Protected-tab classification.
//!
//! Internal and system pages frequently reject programmatic closure, and
//! closing them can break browser chrome. They are never picked as closure
//! victims.

use crate::host::TabRecord;

/// URL prefixes that mark a tab as protected: the browser's native page
/// scheme, the extension page scheme, and the alternate-brand native scheme
/// seen on cross-browser installs.
pub const PROTECTED_PREFIXES: [&str; 3] = ["chrome://", "edge://", "chrome-extension://"];

/// Whether a tab must never be force-closed.
///
/// Tabs without a committed URL count as protected too; a missing URL
/// usually means a transient page whose fate is undecided.
pub fn is_protected(tab: &TabRecord) -> bool {
    match tab.url.as_deref() {
        None | Some("") => true,
        Some(url) => PROTECTED_PREFIXES.iter().any(|prefix| url.starts_with(prefix)),
    }
}
