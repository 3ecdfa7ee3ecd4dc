//! Fallback victim selection.

use crate::host::TabRecord;

/// Pick the tab to close when the triggering tab could not be removed.
///
/// Filters out protected tabs, then selects the lowest id. Host ids are
/// issued in increasing order, so the minimum id approximates the oldest
/// open tab; good enough without a true creation timestamp. Returns `None`
/// when every tab is protected; the limit stays exceeded and nothing is
/// closed.
pub fn select_victim<F>(tabs: &[TabRecord], is_protected: F) -> Option<&TabRecord>
where
    F: Fn(&TabRecord) -> bool,
{
    tabs.iter()
        .filter(|tab| !is_protected(tab))
        .min_by_key(|tab| tab.id)
}
