use crate::utils::error::{ResumeError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Top-level key holding the profile array.
pub const PROFILE_KEY: &str = "default";
/// Key inside the profile holding the ordered experience entries.
pub const EXPERIENCE_KEY: &str = "experience";

/// Raw parsed resume configuration.
///
/// Read-only snapshot of the TOML file; every projection is recomputed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    table: toml::Table,
}

impl ResumeDocument {
    pub fn new(table: toml::Table) -> Self {
        Self { table }
    }

    pub fn as_table(&self) -> &toml::Table {
        &self.table
    }

    /// The profile at index 0 of `[[default]]`. Later profiles are ignored.
    pub fn profile(&self) -> Result<&toml::Table> {
        self.table
            .get(PROFILE_KEY)
            .and_then(|value| value.as_array())
            .and_then(|profiles| profiles.first())
            .and_then(|profile| profile.as_table())
            .ok_or(ResumeError::MissingProfileError)
    }

    /// JSON view of the whole document. TOML datetimes become plain strings.
    pub fn to_json(&self) -> Value {
        table_to_json(&self.table)
    }

    pub fn experiences(&self) -> Result<&[toml::Value]> {
        self.profile()?
            .get(EXPERIENCE_KEY)
            .and_then(|value| value.as_array())
            .map(|entries| entries.as_slice())
            .ok_or(ResumeError::MissingExperienceError)
    }
}

fn table_to_json(table: &toml::Table) -> Value {
    Value::Object(
        table
            .iter()
            .map(|(key, value)| (key.clone(), toml_to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

fn toml_to_json(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::from(*i),
        toml::Value::Float(f) => Value::from(*f),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(d) => Value::String(d.to_string()),
        toml::Value::Array(items) => Value::Array(items.iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => table_to_json(table),
    }
}

/// The six fields every experience entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeField {
    Name,
    Location,
    StartDate,
    EndDate,
    JobTitle,
    Description,
}

impl ResumeField {
    pub const ALL: [ResumeField; 6] = [
        ResumeField::Name,
        ResumeField::Location,
        ResumeField::StartDate,
        ResumeField::EndDate,
        ResumeField::JobTitle,
        ResumeField::Description,
    ];

    /// Key used in the resume file.
    pub fn key(self) -> &'static str {
        match self {
            ResumeField::Name => "name",
            ResumeField::Location => "location",
            ResumeField::StartDate => "startdate",
            ResumeField::EndDate => "enddate",
            ResumeField::JobTitle => "jobtitle",
            ResumeField::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResumeField::Name => "Company",
            ResumeField::Location => "Location",
            ResumeField::StartDate => "Start Date",
            ResumeField::EndDate => "End Date",
            ResumeField::JobTitle => "Job Title",
            ResumeField::Description => "Description",
        }
    }
}

impl fmt::Display for ResumeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ResumeField {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        ResumeField::ALL
            .into_iter()
            .find(|field| field.key() == wanted)
            .ok_or_else(|| ResumeError::UnknownFieldError(s.to_string()))
    }
}

/// One job record, as projected from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub name: String,
    pub location: String,
    pub startdate: String,
    pub enddate: String,
    pub jobtitle: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn get(&self, field: ResumeField) -> &str {
        match field {
            ResumeField::Name => &self.name,
            ResumeField::Location => &self.location,
            ResumeField::StartDate => &self.startdate,
            ResumeField::EndDate => &self.enddate,
            ResumeField::JobTitle => &self.jobtitle,
            ResumeField::Description => &self.description,
        }
    }
}
