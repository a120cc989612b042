use crate::core::projector::ResumeData;
use crate::domain::model::ResumeField;
use crate::domain::ports::{Clipboard, CopyEvents};
use crate::utils::error::{ResumeError, Result};

/// Reports copies through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEvents;

impl CopyEvents for TracingEvents {
    fn copied(&self, field: ResumeField, company: &str, value: &str) {
        tracing::info!("Copying {} for: {}", field.label(), company);
        tracing::debug!("{} = {}", field.label(), value);
    }
}

/// Copies single fields of a loaded resume to a clipboard, keyed by entry index.
pub struct FieldCopier<C: Clipboard, E: CopyEvents> {
    data: ResumeData,
    clipboard: C,
    events: E,
}

impl<C: Clipboard> FieldCopier<C, TracingEvents> {
    pub fn with_tracing(data: ResumeData, clipboard: C) -> Self {
        Self::new(data, clipboard, TracingEvents)
    }
}

impl<C: Clipboard, E: CopyEvents> FieldCopier<C, E> {
    pub fn new(data: ResumeData, clipboard: C, events: E) -> Self {
        Self {
            data,
            clipboard,
            events,
        }
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Copies the value and returns it.
    pub fn copy(&mut self, index: usize, field: ResumeField) -> Result<String> {
        let len = self.data.len();
        let (company, value) = match (
            self.data.value(index, ResumeField::Name),
            self.data.value(index, field),
        ) {
            (Some(company), Some(value)) => (company, value),
            _ => return Err(ResumeError::EntryOutOfRangeError { index, len }),
        };

        self.clipboard.copy(value)?;
        self.events.copied(field, company, value);

        Ok(value.to_string())
    }

    pub fn into_clipboard(self) -> C {
        self.clipboard
    }
}
