pub mod copier;
pub mod dates;
pub mod export;
pub mod projector;

pub use crate::domain::model::{ExperienceEntry, ResumeDocument, ResumeField};
pub use crate::domain::ports::{Clipboard, CopyEvents};
pub use crate::utils::error::Result;
