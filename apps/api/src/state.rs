use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::llm_client::TextGenerator;
use crate::models::form::GenerationForm;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Production: `LlmClient` against Gemini.
    pub llm: Arc<dyn TextGenerator>,
    /// The single generation slot shared by all handlers.
    pub generation: Arc<GenerationState>,
}

/// Single-slot generation state.
///
/// The busy flag is claimed with compare-and-set, so at most one generation
/// is in flight. Transitions always happen in the same order: claim the
/// flag and clear the prior result, await the service, store the new
/// result, release the flag. Readers therefore see either a loading state
/// or a fully resolved result, never a partial one.
#[derive(Debug, Default)]
pub struct GenerationState {
    busy: AtomicBool,
    slot: RwLock<Slot>,
}

#[derive(Debug, Default, Clone)]
struct Slot {
    form: GenerationForm,
    raw: String,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the generation slot. On success the prior result is cleared
    /// and the submitted form is stored; returns false when another
    /// generation already holds the slot.
    pub fn try_begin(&self, form: GenerationForm) -> bool {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        let mut slot = self.slot.write().expect("generation slot lock poisoned");
        slot.form = form;
        slot.raw.clear();
        true
    }

    /// Stores the settled result and releases the slot, in that order.
    pub fn finish(&self, raw: String) {
        {
            let mut slot = self.slot.write().expect("generation slot lock poisoned");
            slot.raw = raw;
        }
        self.busy.store(false, Ordering::Release);
    }

    pub fn is_generating(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// The current raw generation result (empty while cleared or never set).
    pub fn raw(&self) -> String {
        self.slot
            .read()
            .expect("generation slot lock poisoned")
            .raw
            .clone()
    }

    /// A consistent view of the slot for the resume endpoint.
    pub fn snapshot(&self) -> (bool, GenerationForm, String) {
        let is_generating = self.is_generating();
        let slot = self.slot.read().expect("generation slot lock poisoned");
        (is_generating, slot.form.clone(), slot.raw.clone())
    }
}
