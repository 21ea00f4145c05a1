use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use sheet_nest::io::svg::result_to_svg;
use sheet_nest_cli::config::NestCliConfig;
use sheet_nest_cli::io::cli::Cli;
use sheet_nest_cli::io::output::NestOutput;
use sheet_nest_cli::{EPOCH, io, nest_instance};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level, args.log_file.as_deref())?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            NestCliConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    config.sheet = args.sheet_choice(config.sheet);
    info!("[MAIN] Successfully parsed NestCliConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = sheet_nest::io::import(&ext_instance)?;
    info!(
        "[MAIN] {:?}: {} parts, {} mm² of material to nest",
        instance.name,
        instance.parts.len(),
        (instance.total_part_area().round() as u64).separate_with_commas()
    );

    let start = Instant::now();
    let layout = nest_instance(&instance, &config)?;
    let run_time = start.elapsed();

    info!(
        "[MAIN] nested on {} in {}ms: {}/{} mm² used ({:.3}%), total runtime: {}ms",
        layout.sheet_name,
        run_time.as_millis(),
        (layout.result.used_area.round() as u64).separate_with_commas(),
        (layout.result.total_area.round() as u64).separate_with_commas(),
        layout.result.efficiency,
        EPOCH.elapsed().as_millis()
    );

    {
        let output = NestOutput {
            solution: sheet_nest::io::export(&layout.result, &instance.parts, run_time)?,
            instance: ext_instance,
            sheet: layout.sheet_name.clone(),
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    {
        let svg_path = args.solution_folder.join(format!("sol_{input_stem}.svg"));
        let svg = result_to_svg(
            &layout.result,
            layout.bin,
            config.svg_draw_options,
            &layout.sheet_name,
        );
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
