use bratsmeta_core::aggregate::{write_csv, write_json};
use bratsmeta_core::cli::{Cli, Command, RecordFormat, TableFormat};
use bratsmeta_core::extraction::classify_file;
use bratsmeta_core::{
    format_patient_id, format_patient_id_padded, log_datadir_as_artifact, LocalRun,
    MetadataExtractor, PatientRecord, Result, TableReport, TextReport,
};
use clap::Parser;
use log::{error, info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Metadata {
            file,
            fields,
            format,
        } => {
            let extractor = extractor_for(&fields);
            let record = extractor.extract_file(&file)?;
            match format {
                RecordFormat::Text => print!("{}", TextReport::new(&record)),
                RecordFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
            }
        }
        Command::Aggregate {
            labels,
            data_root,
            fields,
            limit,
            output,
            format,
        } => {
            let mut records = PatientRecord::load_labels(&labels, &data_root)?;
            if let Some(limit) = limit {
                records.truncate(limit);
            }

            let table = extractor_for(&fields).aggregate(&records)?;

            let mut writer = open_output(output.as_deref())?;
            match format {
                TableFormat::Text => write!(writer, "{}", TableReport::new(&table))?,
                TableFormat::Json => write_json(&table, &mut writer)?,
                TableFormat::Csv => write_csv(&table, &mut writer)?,
            }
            writer.flush()?;
        }
        Command::Plane { file } => match classify_file(&file)? {
            Some(plane) => println!("{}", plane),
            None => println!("unknown"),
        },
        Command::PatientId { id, padded } => {
            if padded {
                println!("{}", format_patient_id_padded(id));
            } else {
                println!("{}", format_patient_id(id));
            }
        }
        Command::LogArtifact {
            dir,
            name,
            artifact_type,
            tracking_dir,
            run,
        } => {
            let mut tracking_run = LocalRun::new(&tracking_dir, &run)?;
            let version =
                log_datadir_as_artifact(&mut tracking_run, &dir, &name, Some(&artifact_type))?;
            info!(
                "Stored under {}",
                tracking_run.version_dir(&version.name, version.version).display()
            );
            println!("{}", version);
        }
    }

    Ok(())
}

fn extractor_for(fields: &[String]) -> MetadataExtractor {
    let extractor = MetadataExtractor::or_default(fields);
    for name in extractor.unknown_fields() {
        warn!("{} is not a standard DICOM keyword, it will extract as NaN", name);
    }
    extractor
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}
