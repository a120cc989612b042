use crate::config::resume_config;
use crate::core::dates::DateFormat;
use crate::domain::model::{ExperienceEntry, ResumeDocument, ResumeField};
use crate::utils::error::{ResumeError, Result};
use std::path::Path;

/// Extracts `field` from every experience entry of profile 0, in file order.
pub fn list_field(document: &ResumeDocument, field: ResumeField) -> Result<Vec<String>> {
    document
        .experiences()?
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let value = entry
                .get(field.key())
                .ok_or_else(|| ResumeError::MissingFieldError {
                    index,
                    field: field.key().to_string(),
                })?;
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| ResumeError::InvalidFieldTypeError {
                    index,
                    field: field.key().to_string(),
                })
        })
        .collect()
}

/// [`list_field`] keyed by the field's name in the resume file.
pub fn list_field_str(document: &ResumeDocument, field_name: &str) -> Result<Vec<String>> {
    list_field(document, field_name.parse()?)
}

/// Projects a date field and rewrites every value with `format`.
pub fn list_dates(
    document: &ResumeDocument,
    field: ResumeField,
    format: DateFormat,
) -> Result<Vec<String>> {
    list_field(document, field)?
        .iter()
        .map(|date| format.apply(date))
        .collect()
}

pub fn add_one(number: i64) -> i64 {
    tracing::debug!("Running add_one");
    number + 1
}

/// Index-aligned projections of every field: entry `i` of each list describes
/// the same job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeData {
    company_list: Vec<String>,
    location_list: Vec<String>,
    startdate_list: Vec<String>,
    enddate_list: Vec<String>,
    jobtitle_list: Vec<String>,
    description_list: Vec<String>,
    date_format: DateFormat,
}

impl ResumeData {
    pub fn from_file<P: AsRef<Path>>(path: P, date_format: Option<&str>) -> Result<Self> {
        let document = resume_config::load(path)?;
        Self::from_document(&document, date_format)
    }

    pub fn from_document(document: &ResumeDocument, date_format: Option<&str>) -> Result<Self> {
        let date_format = DateFormat::from_spec(date_format);

        let data = Self {
            company_list: list_field(document, ResumeField::Name)?,
            location_list: list_field(document, ResumeField::Location)?,
            startdate_list: list_dates(document, ResumeField::StartDate, date_format)?,
            enddate_list: list_dates(document, ResumeField::EndDate, date_format)?,
            jobtitle_list: list_field(document, ResumeField::JobTitle)?,
            description_list: list_field(document, ResumeField::Description)?,
            date_format,
        };

        tracing::debug!(
            "Projected {} experience entries (dates as {})",
            data.len(),
            date_format.spec()
        );
        Ok(data)
    }

    pub fn company_list(&self) -> &[String] {
        &self.company_list
    }

    pub fn location_list(&self) -> &[String] {
        &self.location_list
    }

    pub fn startdate_list(&self) -> &[String] {
        &self.startdate_list
    }

    pub fn enddate_list(&self) -> &[String] {
        &self.enddate_list
    }

    pub fn jobtitle_list(&self) -> &[String] {
        &self.jobtitle_list
    }

    pub fn description_list(&self) -> &[String] {
        &self.description_list
    }

    pub fn date_format(&self) -> DateFormat {
        self.date_format
    }

    pub fn list(&self, field: ResumeField) -> &[String] {
        match field {
            ResumeField::Name => &self.company_list,
            ResumeField::Location => &self.location_list,
            ResumeField::StartDate => &self.startdate_list,
            ResumeField::EndDate => &self.enddate_list,
            ResumeField::JobTitle => &self.jobtitle_list,
            ResumeField::Description => &self.description_list,
        }
    }

    pub fn len(&self) -> usize {
        self.company_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.company_list.is_empty()
    }

    pub fn value(&self, index: usize, field: ResumeField) -> Option<&str> {
        self.list(field).get(index).map(String::as_str)
    }

    pub fn entry(&self, index: usize) -> Option<ExperienceEntry> {
        if index >= self.len() {
            return None;
        }
        Some(ExperienceEntry {
            name: self.company_list[index].clone(),
            location: self.location_list[index].clone(),
            startdate: self.startdate_list[index].clone(),
            enddate: self.enddate_list[index].clone(),
            jobtitle: self.jobtitle_list[index].clone(),
            description: self.description_list[index].clone(),
        })
    }

    pub fn entries(&self) -> Vec<ExperienceEntry> {
        (0..self.len()).filter_map(|index| self.entry(index)).collect()
    }
}
