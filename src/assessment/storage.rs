//! Session-scoped persistence of in-progress assessments.
//!
//! The engine sees persistence only through [`ProgressStore`], so it can be
//! exercised without a browser. The real implementation keeps the two
//! string entries the rest of the product expects (`assessmentData`,
//! `assessmentStep`) in `sessionStorage`: progress survives a reopen within
//! the tab session and disappears with it.

use log::warn;
use web_sys::window;

use super::engine::AnswerRecord;

const DATA_KEY: &str = "assessmentData";
const STEP_KEY: &str = "assessmentStep";

/// An in-progress (position, answers) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedProgress {
    pub position: usize,
    pub answers: AnswerRecord,
}

/// Load/save/clear capability injected into the wizard engine.
///
/// `save` is fire-and-forget: failures are logged and swallowed, never
/// surfaced through the mutation path. `load` treats absent and malformed
/// data the same way: there is nothing to resume.
pub trait ProgressStore {
    fn load(&self) -> Option<SavedProgress>;
    fn save(&self, progress: &SavedProgress);
    fn clear(&self);
}

/// Browser `sessionStorage` backing.
#[derive(Clone, Default)]
pub struct SessionProgressStore;

impl SessionProgressStore {
    pub fn new() -> Self {
        Self
    }

    fn backing(&self) -> Option<web_sys::Storage> {
        window()?.session_storage().ok().flatten()
    }
}

impl ProgressStore for SessionProgressStore {
    fn load(&self) -> Option<SavedProgress> {
        let storage = self.backing()?;
        let data = storage.get_item(DATA_KEY).ok().flatten()?;
        let step = storage.get_item(STEP_KEY).ok().flatten()?;

        let answers: AnswerRecord = match serde_json::from_str(&data) {
            Ok(answers) => answers,
            Err(err) => {
                warn!("discarding unparseable saved assessment data: {err}");
                return None;
            }
        };
        let position: usize = match step.parse() {
            Ok(position) => position,
            Err(_) => {
                warn!("discarding unparseable saved assessment step {step:?}");
                return None;
            }
        };
        Some(SavedProgress { position, answers })
    }

    fn save(&self, progress: &SavedProgress) {
        let Some(storage) = self.backing() else {
            return;
        };
        let data = match serde_json::to_string(&progress.answers) {
            Ok(data) => data,
            Err(err) => {
                warn!("failed to serialize assessment progress: {err}");
                return;
            }
        };
        if storage.set_item(DATA_KEY, &data).is_err()
            || storage.set_item(STEP_KEY, &progress.position.to_string()).is_err()
        {
            warn!("failed to persist assessment progress");
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.backing() {
            let _ = storage.remove_item(DATA_KEY);
            let _ = storage.remove_item(STEP_KEY);
        }
    }
}

/// Shared in-memory store for engine tests; clones see the same slot, which
/// is how a "reopen" is simulated.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryProgressStore {
    slot: std::rc::Rc<std::cell::RefCell<Option<SavedProgress>>>,
}

#[cfg(test)]
impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Option<SavedProgress> {
        self.slot.borrow().clone()
    }
}

#[cfg(test)]
impl ProgressStore for MemoryProgressStore {
    fn load(&self) -> Option<SavedProgress> {
        self.slot.borrow().clone()
    }

    fn save(&self, progress: &SavedProgress) {
        *self.slot.borrow_mut() = Some(progress.clone());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
