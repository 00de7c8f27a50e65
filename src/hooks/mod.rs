//! Extension points fired around the save of a duplicate.
//!
//! Observers are registered once at startup and run synchronously, in
//! registration order. `BeforeSave` observers receive the candidate mutably
//! (it has no id yet); `AfterSave` observers see the persisted record.

use tracing::debug;

use crate::record::Record;

pub type BeforeSaveHook = Box<dyn Fn(&mut Record) + Send + Sync>;
pub type AfterSaveHook = Box<dyn Fn(&Record) + Send + Sync>;

/// Phase of hook execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    BeforeSave,
    AfterSave,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BeforeSave => "duplicate:before-save",
            Self::AfterSave => "duplicate:after-save",
        }
    }
}

#[derive(Default)]
pub struct DuplicateHooks {
    before_save: Vec<BeforeSaveHook>,
    after_save: Vec<AfterSaveHook>,
}

impl std::fmt::Debug for DuplicateHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DuplicateHooks")
            .field("before_save", &self.before_save.len())
            .field("after_save", &self.after_save.len())
            .finish()
    }
}

impl DuplicateHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_before_save(mut self, hook: impl Fn(&mut Record) + Send + Sync + 'static) -> Self {
        self.before_save.push(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_after_save(mut self, hook: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.after_save.push(Box::new(hook));
        self
    }

    #[must_use]
    pub fn count(&self, phase: Phase) -> usize {
        match phase {
            Phase::BeforeSave => self.before_save.len(),
            Phase::AfterSave => self.after_save.len(),
        }
    }

    pub fn run_before_save(&self, candidate: &mut Record) {
        if self.before_save.is_empty() {
            return;
        }
        debug!(
            "Running {} hooks for {}",
            self.before_save.len(),
            Phase::BeforeSave.as_str()
        );
        for hook in &self.before_save {
            hook(candidate);
        }
    }

    pub fn run_after_save(&self, record: &Record) {
        if self.after_save.is_empty() {
            return;
        }
        debug!(
            "Running {} hooks for {}",
            self.after_save.len(),
            Phase::AfterSave.as_str()
        );
        for hook in &self.after_save {
            hook(record);
        }
    }
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
