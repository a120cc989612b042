use crate::domain::model::{ResumeDocument, ResumeField};
use crate::utils::error::{ResumeError, Result};
use crate::utils::validation::{
    validate_date_order, validate_non_empty_string, validate_stored_date, Validate,
};
use std::path::{Path, PathBuf};

/// 從 TOML 檔案載入履歷設定
pub fn load<P: AsRef<Path>>(path: P) -> Result<ResumeDocument> {
    let path = path.as_ref();
    tracing::debug!("Loading resume configuration from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| {
        ResumeError::ConfigNotFoundError {
            path: path.to_path_buf(),
            source,
        }
    })?;

    parse(&content, path.to_path_buf())
}

impl ResumeDocument {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load(path)
    }

    /// 從 TOML 字串解析履歷設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse(content, PathBuf::from("<string>"))
    }
}

fn parse(content: &str, path: PathBuf) -> Result<ResumeDocument> {
    let table: toml::Table = toml::from_str(content)
        .map_err(|source| ResumeError::ConfigParseError { path, source })?;
    Ok(ResumeDocument::new(table))
}

impl Validate for ResumeDocument {
    /// Stricter than projection: every field must be a non-empty string and
    /// both dates must be real `MM/dd/yyyy` dates in order.
    fn validate(&self) -> Result<()> {
        for (index, entry) in self.experiences()?.iter().enumerate() {
            let (mut start, mut end) = (None, None);
            for field in ResumeField::ALL {
                let value = entry
                    .get(field.key())
                    .ok_or_else(|| ResumeError::MissingFieldError {
                        index,
                        field: field.key().to_string(),
                    })?
                    .as_str()
                    .ok_or_else(|| ResumeError::InvalidFieldTypeError {
                        index,
                        field: field.key().to_string(),
                    })?;
                let name = entry_field(index, field);
                validate_non_empty_string(&name, value)?;
                match field {
                    ResumeField::StartDate => start = Some(validate_stored_date(&name, value)?),
                    ResumeField::EndDate => end = Some(validate_stored_date(&name, value)?),
                    _ => {}
                }
            }

            if let (Some(start), Some(end)) = (start, end) {
                validate_date_order(&entry_field(index, ResumeField::EndDate), start, end)?;
            }
        }
        Ok(())
    }
}

fn entry_field(index: usize, field: ResumeField) -> String {
    format!("experience[{}].{}", index, field.key())
}
