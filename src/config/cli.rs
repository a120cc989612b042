use crate::core::export::OutputFormat;
use crate::domain::model::ResumeField;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "jobappfiller")]
#[command(about = "Copy fields of your resume experience into job application forms")]
pub struct CliConfig {
    /// Path to the resume TOML file
    #[arg(short, long, global = true, default_value = "resume.toml")]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the parsed resume file as JSON
    Parse,

    /// Print the company of every experience entry with its index
    Companies,

    /// Print field projections for every experience entry
    List {
        /// Fields to print (all when omitted)
        #[arg(long = "field", value_name = "FIELD")]
        fields: Vec<ResumeField>,

        /// Date layout: MM/dd/yyyy, yyyy/MM, MM/yyyy or yyyy/MM/dd
        #[arg(long)]
        date_format: Option<String>,

        /// Output mode: text, json or csv
        #[arg(short, long, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Copy one field of one entry to stdout
    Copy {
        /// Entry index as shown by `companies`
        #[arg(short, long)]
        index: usize,

        #[arg(long)]
        field: ResumeField,

        #[arg(long)]
        date_format: Option<String>,
    },

    /// Check that every entry has all fields and valid dates
    Check,

    /// Print the given number plus one
    AddOne {
        #[arg(short, long)]
        num: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_command() {
        let config = CliConfig::try_parse_from([
            "jobappfiller",
            "--file",
            "me.toml",
            "list",
            "--field",
            "name",
            "--field",
            "startdate",
            "--date-format",
            "yyyy/MM",
            "-o",
            "csv",
        ])
        .unwrap();

        assert_eq!(config.file, PathBuf::from("me.toml"));
        match config.command {
            Command::List {
                fields,
                date_format,
                output,
            } => {
                assert_eq!(fields, vec![ResumeField::Name, ResumeField::StartDate]);
                assert_eq!(date_format.as_deref(), Some("yyyy/MM"));
                assert_eq!(output, OutputFormat::Csv);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["jobappfiller", "companies"]).unwrap();
        assert_eq!(config.file, PathBuf::from("resume.toml"));
        assert!(!config.verbose);
        assert!(matches!(config.command, Command::Companies));
    }

    #[test]
    fn test_copy_rejects_unknown_field() {
        assert!(CliConfig::try_parse_from([
            "jobappfiller",
            "copy",
            "--index",
            "0",
            "--field",
            "salary"
        ])
        .is_err());
    }

    #[test]
    fn test_add_one_command() {
        let config = CliConfig::try_parse_from(["jobappfiller", "add-one", "-n", "41"]).unwrap();
        assert!(matches!(config.command, Command::AddOne { num: 41 }));
    }
}
