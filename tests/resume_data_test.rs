mod common;

use anyhow::Result;
use common::{write_resume, RESUME_CONFIG};
use jobappfiller::{list_field, load, reformat_date, ResumeData, ResumeError, ResumeField};

#[test]
fn test_company_list() -> Result<()> {
    let (_dir, path) = write_resume(RESUME_CONFIG)?;
    let resume_data = ResumeData::from_file(&path, Some("yyyy-MM"))?;

    assert_eq!(
        resume_data.company_list()[0],
        "TAKKION (TP&L Management Solutions)"
    );
    assert_eq!(resume_data.company_list()[1], "American Express");
    Ok(())
}

#[test]
fn test_projections_stay_aligned_with_file_order() -> Result<()> {
    let (_dir, path) = write_resume(RESUME_CONFIG)?;
    let document = load(&path)?;

    let lists: Vec<Vec<String>> = ResumeField::ALL
        .iter()
        .map(|field| list_field(&document, *field))
        .collect::<std::result::Result<_, _>>()?;

    assert!(lists.iter().all(|list| list.len() == 2));
    assert_eq!(lists[0][1], "American Express");
    assert_eq!(lists[1][1], "Phoenix, AZ");
    assert_eq!(lists[2][1], "07/01/2022");
    assert_eq!(lists[3][1], "09/01/2023");
    assert_eq!(lists[4][1], "Python & SQL Developer");
    assert!(lists[5][1].starts_with("Migrate massive dataset from Teradata"));
    assert!(lists[5][0].ends_with("functions and webhooks."));
    Ok(())
}

#[test]
fn test_date_formats_end_to_end() -> Result<()> {
    let (_dir, path) = write_resume(RESUME_CONFIG)?;

    let year_month_day = ResumeData::from_file(&path, Some("yyyy/MM/dd"))?;
    assert_eq!(year_month_day.startdate_list(), ["2023/09/01", "2022/07/01"]);
    assert_eq!(year_month_day.enddate_list(), ["2025/03/01", "2023/09/01"]);

    let month_year = ResumeData::from_file(&path, Some("MM/yyyy"))?;
    assert_eq!(month_year.startdate_list(), ["09/2023", "07/2022"]);

    let stored = ResumeData::from_file(&path, Some("MM/dd/yyyy"))?;
    assert_eq!(stored.startdate_list(), ["09/01/2023", "07/01/2022"]);
    Ok(())
}

#[test]
fn test_reformat_date_examples() -> Result<()> {
    assert_eq!(reformat_date("09/01/2023", Some("yyyy/MM"))?, "2023/09");
    assert_eq!(reformat_date("09/01/2023", Some("MM/yyyy"))?, "09/2023");
    assert_eq!(reformat_date("09/01/2023", Some("yyyy/MM/dd"))?, "2023/09/01");
    assert_eq!(reformat_date("09/01/2023", None)?, "09/01/2023");
    assert_eq!(reformat_date("09/01/2023", Some("MM/dd/yyyy"))?, "09/01/2023");
    assert_eq!(
        reformat_date("09/01/2023", Some("unrecognized-spec"))?,
        "09/01/2023"
    );
    Ok(())
}

#[test]
fn test_missing_default_profile() -> Result<()> {
    let content = RESUME_CONFIG.replace("[[default]]", "[[profile]]").replace(
        "[[default.experience]]",
        "[[profile.experience]]",
    );
    let (_dir, path) = write_resume(&content)?;

    assert!(matches!(
        ResumeData::from_file(&path, None),
        Err(ResumeError::MissingProfileError)
    ));
    Ok(())
}

#[test]
fn test_entry_without_description() -> Result<()> {
    let content = format!(
        "{}\n[[default.experience]]\nname = \"Acme\"\nlocation = \"Denver, CO\"\nstartdate = \"01/01/2020\"\nenddate = \"06/01/2022\"\njobtitle = \"Intern\"\n",
        RESUME_CONFIG
    );
    let (_dir, path) = write_resume(&content)?;

    match ResumeData::from_file(&path, None) {
        Err(ResumeError::MissingFieldError { index, field }) => {
            assert_eq!(index, 2);
            assert_eq!(field, "description");
        }
        other => panic!("expected MissingFieldError, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_and_malformed_files() -> Result<()> {
    let (dir, _path) = write_resume(RESUME_CONFIG)?;

    assert!(matches!(
        load(dir.path().join("nope.toml")),
        Err(ResumeError::ConfigNotFoundError { .. })
    ));

    let (_bad_dir, bad_path) = write_resume("[[default]]\nname = \n")?;
    assert!(matches!(
        load(&bad_path),
        Err(ResumeError::ConfigParseError { .. })
    ));
    Ok(())
}

#[test]
fn test_reloading_gives_fresh_identical_data() -> Result<()> {
    let (_dir, path) = write_resume(RESUME_CONFIG)?;

    let first = ResumeData::from_file(&path, None)?;
    let second = ResumeData::from_file(&path, None)?;
    assert_eq!(first, second);
    Ok(())
}
