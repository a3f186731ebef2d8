//! Command dispatch for the aockit binary.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::{Coordinate, Grid};
use crate::infrastructure::InputReader;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let reader = InputReader::default();
    let config_dir = cli.config_dir.as_deref();

    match &cli.command {
        Some(Commands::Lines { file }) => cmd_lines(&reader, file),
        Some(Commands::Line { file }) => cmd_line(&reader, file),
        Some(Commands::Grid {
            file,
            delim,
            numbers,
        }) => {
            let settings = resolve_settings(config_dir, delim)?;
            cmd_grid(&reader, &settings, file, *numbers).map(|_| ())
        }
        Some(Commands::Bounds { file, x, y, delim }) => {
            let settings = resolve_settings(config_dir, delim)?;
            cmd_bounds(&reader, &settings, file, Coordinate::new(*x, *y)).map(|_| ())
        }
        Some(Commands::Config) => {
            let settings = resolve_settings(config_dir, &None)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs(
            "no command given, see --help".to_string(),
        )),
    }
}

/// Layered settings from `config_dir` (default: cwd), with a `--delim` override on top.
fn resolve_settings(config_dir: Option<&Path>, delim: &Option<String>) -> CliResult<Settings> {
    let mut settings = Settings::load(Some(config_dir.unwrap_or(Path::new("."))))?;
    if let Some(d) = delim {
        settings.delimiter = d.clone();
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

#[instrument(skip(reader))]
fn cmd_lines(reader: &InputReader, file: &Path) -> CliResult<()> {
    let lines = reader.read_lines(file)?;
    output::header(&format!("{} lines", lines.len()));
    for line in &lines {
        output::info(line);
    }
    Ok(())
}

#[instrument(skip(reader))]
fn cmd_line(reader: &InputReader, file: &Path) -> CliResult<()> {
    output::info(&reader.read_single_line(file)?);
    Ok(())
}

#[instrument(skip(reader))]
fn cmd_grid(
    reader: &InputReader,
    settings: &Settings,
    file: &Path,
    numbers: bool,
) -> CliResult<(usize, usize)> {
    let options = settings.split_options();
    if numbers {
        let grid = reader.read_number_grid(file, &options)?;
        print_grid(&grid, &settings.delimiter);
        Ok((grid.row_count(), grid.column_count()))
    } else {
        let grid = reader.read_grid(file, &options)?;
        print_grid(&grid, &settings.delimiter);
        Ok((grid.row_count(), grid.column_count()))
    }
}

#[instrument(skip(reader))]
fn cmd_bounds(
    reader: &InputReader,
    settings: &Settings,
    file: &Path,
    coord: Coordinate,
) -> CliResult<bool> {
    let grid = reader.read_grid(file, &settings.split_options())?;
    if !grid.is_rectangular() {
        output::warning("grid is not rectangular, bounds use row 0's width");
    }
    let inside = grid.in_bounds(coord);
    if inside {
        match grid.get(coord) {
            Some(cell) => output::success(&format!("{coord} in bounds: {cell}")),
            None => output::success(&format!("{coord} in bounds (short row)")),
        }
    } else {
        output::failure(&format!(
            "{coord} out of bounds ({} rows x {} columns)",
            grid.row_count(),
            grid.column_count()
        ));
    }
    Ok(inside)
}

fn print_grid<T: std::fmt::Display>(grid: &Grid<T>, delimiter: &str) {
    output::header(&format!(
        "{} rows x {} columns",
        grid.row_count(),
        grid.column_count()
    ));
    if !grid.is_rectangular() {
        output::warning("grid is not rectangular");
    }
    output::info(&grid.render(delimiter));
}
