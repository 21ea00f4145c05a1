use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use sheet_nest::io::ext_repr::ExtInstance;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!(
        "[IO] svg written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

/// Logs to stdout and, if given, appends to `log_file`.
/// Every line is prefixed with its level, the time since [`EPOCH`] and the thread name.
pub fn init_logger(level_filter: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed().as_secs();
            let (hours, min, sec) = (elapsed / 3600, (elapsed / 60) % 60, elapsed % 60);
            let handle = std::thread::current();
            let prefix = format!(
                "[{}] [{hours:0>2}:{min:0>2}:{sec:0>2}] <{}>",
                record.level(),
                handle.name().unwrap_or("-"),
            );
            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout());
    if let Some(path) = log_file {
        let file = fern::log_file(path)
            .with_context(|| format!("could not open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }
    dispatch.apply()?;

    info!(
        "[EPOCH]: {}",
        jiff::Zoned::now().strftime("%Y-%m-%d %H:%M:%S %Z")
    );
    Ok(())
}
