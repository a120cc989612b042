use clap::Parser;
use jobappfiller::utils::error::ResumeError;
use jobappfiller::utils::{logger, validation::Validate};
use jobappfiller::{
    add_one, load, write_document_json, write_lists, CliConfig, Command, FieldCopier,
    ResumeData, WriterClipboard,
};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<(), ResumeError> {
    let stdout = io::stdout();

    match &config.command {
        Command::Parse => {
            let document = load(&config.file)?;
            write_document_json(&document, stdout.lock())?;
        }
        Command::Companies => {
            let data = ResumeData::from_file(&config.file, None)?;
            let mut out = stdout.lock();
            for (index, company) in data.company_list().iter().enumerate() {
                writeln!(out, "{}\t{}", index, company)?;
            }
        }
        Command::List {
            fields,
            date_format,
            output,
        } => {
            let data = ResumeData::from_file(&config.file, date_format.as_deref())?;
            tracing::info!("📋 Listing {} experience entries as {}", data.len(), output);
            write_lists(&data, fields, *output, stdout.lock())?;
        }
        Command::Copy {
            index,
            field,
            date_format,
        } => {
            let data = ResumeData::from_file(&config.file, date_format.as_deref())?;
            let mut copier = FieldCopier::with_tracing(data, WriterClipboard::new(stdout.lock()));
            copier.copy(*index, *field)?;
        }
        Command::Check => {
            let document = load(&config.file)?;
            document.validate()?;
            let data = ResumeData::from_document(&document, None)?;
            tracing::info!("✅ Resume file is valid");
            println!(
                "✅ {} is valid ({} experience entries)",
                config.file.display(),
                data.len()
            );
        }
        Command::AddOne { num } => {
            println!("{}", add_one(*num));
        }
    }

    Ok(())
}
