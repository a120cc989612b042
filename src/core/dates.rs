use crate::utils::error::{ResumeError, Result};

/// Layouts a stored `MM/dd/yyyy` date can be rewritten into.
///
/// Reformatting is positional text slicing, not calendar arithmetic: the year
/// is the last four characters, the month the first two, and the day whatever
/// sits between the first two `/` delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `MM/dd/yyyy`, returned unchanged.
    #[default]
    AsStored,
    /// `yyyy/MM`
    YearMonth,
    /// `MM/yyyy`
    MonthYear,
    /// `yyyy/MM/dd`
    YearMonthDay,
}

const YEAR_LEN: usize = 4;
const MONTH_LEN: usize = 2;

impl DateFormat {
    /// Resolves a user supplied format spec. Unrecognized specs fall back to
    /// [`DateFormat::AsStored`].
    pub fn from_spec(spec: Option<&str>) -> Self {
        match spec {
            Some("yyyy/MM") => DateFormat::YearMonth,
            Some("MM/yyyy") => DateFormat::MonthYear,
            Some("yyyy/MM/dd") => DateFormat::YearMonthDay,
            Some("MM/dd/yyyy") | None => DateFormat::AsStored,
            Some(other) => {
                tracing::debug!("Unrecognized date format '{}', keeping dates as stored", other);
                DateFormat::AsStored
            }
        }
    }

    pub fn spec(self) -> &'static str {
        match self {
            DateFormat::AsStored => "MM/dd/yyyy",
            DateFormat::YearMonth => "yyyy/MM",
            DateFormat::MonthYear => "MM/yyyy",
            DateFormat::YearMonthDay => "yyyy/MM/dd",
        }
    }

    pub fn apply(self, date: &str) -> Result<String> {
        match self {
            DateFormat::AsStored => Ok(date.to_string()),
            DateFormat::YearMonth => {
                let (month, year) = self.month_and_year(date)?;
                Ok(format!("{}/{}", year, month))
            }
            DateFormat::MonthYear => {
                let (month, year) = self.month_and_year(date)?;
                Ok(format!("{}/{}", month, year))
            }
            DateFormat::YearMonthDay => {
                let (month, year) = self.month_and_year(date)?;
                let mut parts = date.split('/');
                let day = match (parts.next(), parts.next(), parts.next()) {
                    (Some(_), Some(day), Some(_)) => day,
                    _ => return Err(self.error(date, "expected two '/' delimiters")),
                };
                Ok(format!("{}/{}/{}", year, month, day))
            }
        }
    }

    fn month_and_year<'a>(self, date: &'a str) -> Result<(&'a str, &'a str)> {
        let char_count = date.chars().count();
        if char_count < YEAR_LEN {
            return Err(self.error(
                date,
                &format!("expected at least {} characters", YEAR_LEN),
            ));
        }

        // Slice on char boundaries so multi-byte input cannot panic.
        let month_end = date
            .char_indices()
            .nth(MONTH_LEN)
            .map(|(i, _)| i)
            .unwrap_or(date.len());
        let year_start = date
            .char_indices()
            .nth(char_count - YEAR_LEN)
            .map(|(i, _)| i)
            .unwrap_or(0);

        Ok((&date[..month_end], &date[year_start..]))
    }

    fn error(self, date: &str, reason: &str) -> ResumeError {
        ResumeError::DateFormatError {
            date: date.to_string(),
            format: self.spec().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Rewrites a stored `MM/dd/yyyy` date according to `format_spec`.
///
/// `None`, `"MM/dd/yyyy"` and any unrecognized spec return the input as is.
pub fn reformat_date(date: &str, format_spec: Option<&str>) -> Result<String> {
    DateFormat::from_spec(format_spec).apply(date)
}
