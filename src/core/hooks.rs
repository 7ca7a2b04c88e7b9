//! Hooks fired once per emitted entry, before formatting

use super::{entry::Entry, error::Result, log_level::LogLevel};
use std::collections::HashMap;
use std::sync::Arc;

/// Side effect attached to one or more levels.
///
/// `fire` receives the entry being emitted and may add fields to it; those
/// fields are visible to the formatter. An error is reported on the
/// diagnostic stream and does not stop the emission.
pub trait Hook: Send + Sync {
    fn levels(&self) -> Vec<LogLevel>;
    fn fire(&self, entry: &mut Entry) -> Result<()>;
}

/// Per-level hook registry
#[derive(Clone, Default)]
pub struct LevelHooks {
    hooks: HashMap<LogLevel, Vec<Arc<dyn Hook>>>,
}

impl LevelHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, hook: Arc<dyn Hook>) {
        for level in hook.levels() {
            self.hooks.entry(level).or_default().push(Arc::clone(&hook));
        }
    }

    /// Hooks registered for `level`, in registration order
    pub fn for_level(&self, level: LogLevel) -> Vec<Arc<dyn Hook>> {
        self.hooks.get(&level).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.values().all(Vec::is_empty)
    }

    /// Fire every hook registered for `level`, stopping at the first error.
    pub fn fire(&self, level: LogLevel, entry: &mut Entry) -> Result<()> {
        fire_all(&self.for_level(level), entry)
    }
}

pub(crate) fn fire_all(hooks: &[Arc<dyn Hook>], entry: &mut Entry) -> Result<()> {
    for hook in hooks {
        hook.fire(entry)?;
    }
    Ok(())
}
