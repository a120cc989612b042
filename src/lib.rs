pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::clipboard::{MemoryClipboard, WriterClipboard};
pub use config::load;
pub use crate::core::copier::{FieldCopier, TracingEvents};
pub use crate::core::dates::{reformat_date, DateFormat};
pub use crate::core::export::{write_document_json, write_lists, OutputFormat};
pub use crate::core::projector::{add_one, list_field, list_field_str, ResumeData};
pub use domain::model::{ExperienceEntry, ResumeDocument, ResumeField};
pub use utils::error::{ResumeError, Result};
