use crate::domain::model::ResumeField;
use crate::utils::error::Result;

/// Destination for copied field values (the system clipboard in a GUI).
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Observer told about every successful copy.
pub trait CopyEvents {
    fn copied(&self, field: ResumeField, company: &str, value: &str);
}
