use crate::utils::error::{ResumeError, Result};
use chrono::NaiveDate;

/// Date layout resume files store dates in (`MM/dd/yyyy`).
pub const STORED_DATE_FORMAT: &str = "%m/%d/%Y";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ResumeError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks that `value` is a real calendar date written as `MM/dd/yyyy`.
pub fn validate_stored_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), STORED_DATE_FORMAT).map_err(|e| {
        ResumeError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected a MM/dd/yyyy date: {}", e),
        }
    })
}

pub fn validate_date_order(field_name: &str, start: NaiveDate, end: NaiveDate) -> Result<()> {
    if end < start {
        return Err(ResumeError::InvalidValueError {
            field: field_name.to_string(),
            value: end.format(STORED_DATE_FORMAT).to_string(),
            reason: format!(
                "End date is before start date {}",
                start.format(STORED_DATE_FORMAT)
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "American Express").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_stored_date() {
        let date = validate_stored_date("startdate", "09/01/2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());

        assert!(validate_stored_date("startdate", "2023-09-01").is_err());
        assert!(validate_stored_date("startdate", "13/01/2023").is_err());
        assert!(validate_stored_date("startdate", "02/30/2023").is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let start = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
        assert!(validate_date_order("enddate", start, end).is_ok());
        assert!(validate_date_order("enddate", start, start).is_ok());
        assert!(validate_date_order("enddate", end, start).is_err());
    }
}
