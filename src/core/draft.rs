use crate::domain::model::{DietStatus, Draft, DraftField};
use crate::domain::ports::ChangeListener;

/// Owns the questionnaire draft and exposes its mutation operations.
///
/// Subscribed listeners are invoked after every mutation; this replaces the
/// change-triggers-rerender coupling of a UI framework with an explicit
/// observer seam. The controller itself performs no I/O.
pub struct FormController {
    draft: Draft,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            listeners: Vec::new(),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    /// Overwrite a scalar field with the given raw value. No coercion or
    /// range checking happens here; that is validation's job.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::BreedName => self.draft.breed_name = value,
            DraftField::AgeYears => self.draft.age_years = value,
        }
        self.emit_changed();
    }

    /// Add or remove a status tag. Adding a tag already present, or removing
    /// one already absent, leaves the set untouched, so repeated toggles
    /// with the same flag are no-ops after the first.
    pub fn toggle_diet_status(&mut self, tag: DietStatus, selected: bool) {
        if selected {
            if !self.draft.diet_statuses.contains(&tag) {
                self.draft.diet_statuses.push(tag);
            }
        } else {
            self.draft.diet_statuses.retain(|s| *s != tag);
        }
        self.emit_changed();
    }

    /// Restore the draft to its empty initial shape.
    pub fn reset_draft(&mut self) {
        self.draft = Draft::default();
        self.emit_changed();
    }

    fn emit_changed(&self) {
        for listener in &self.listeners {
            listener.draft_changed(&self.draft);
        }
    }
}
