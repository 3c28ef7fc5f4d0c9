//! Configuration staging.
//!
//! Edits land in the draft only. [`StagingController::commit`] validates the
//! draft and swaps the committed configuration in one assignment; a rejected
//! commit leaves the committed configuration as it was.

use crate::config::{Configuration, DraftField, DraftSettings, FieldValue};
use crate::error::ValidationError;

#[derive(Debug, Clone)]
pub struct StagingController {
    draft: DraftSettings,
    committed: Configuration,
}

impl Default for StagingController {
    fn default() -> Self {
        Self {
            draft: DraftSettings::default(),
            committed: Configuration::default(),
        }
    }
}

impl StagingController {
    /// Starts with `draft` committed as-is.
    pub fn new(draft: DraftSettings) -> Result<Self, ValidationError> {
        let committed = draft.to_configuration()?;
        Ok(Self { draft, committed })
    }

    #[inline]
    pub fn draft(&self) -> &DraftSettings {
        &self.draft
    }

    #[inline]
    pub fn committed(&self) -> &Configuration {
        &self.committed
    }

    /// Applies one field edit to the draft. Never affects the committed
    /// configuration.
    pub fn apply_draft_edit(
        &mut self,
        field: DraftField,
        value: FieldValue,
    ) -> Result<(), ValidationError> {
        self.draft = self.draft.with_edit(field, value)?;
        log::debug!("draft {field} = {}", self.draft.get(field));
        Ok(())
    }

    /// Promotes the draft to the committed configuration.
    pub fn commit(&mut self) -> Result<&Configuration, ValidationError> {
        let next = self.draft.to_configuration().inspect_err(|e| {
            log::warn!("commit rejected: {e}");
        })?;
        self.committed = next;
        Ok(&self.committed)
    }
}
