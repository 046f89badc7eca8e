use std::io::Write;

use serde_jsonlines::WriteExt;
use shakedown_catalog::{Registry, Selector, TestSummary};
use shakedown_config::{NewForConfig, Overrides, RunConfig};
use shakedown_errors::InternalError;

use crate::cli::WithConfig;

#[derive(clap::Args, Debug, Clone)]
pub(crate) struct ListArgs {
    #[clap(flatten)]
    config: WithConfig,

    #[clap(
        short = 'p',
        long,
        help = "the platform to select tests for, e.g. 'aws' or 'qemu'."
    )]
    platform: Option<String>,

    #[clap(
        short = 'V',
        long = "version",
        help = "the version of the software under test."
    )]
    target_version: Option<String>,

    #[clap(long, help = "print one JSON object per test instead of a table.")]
    json: bool,

    #[clap(help = "a glob over test names; an exact name skips version checks.")]
    pattern: Option<String>,
}

impl ListArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            platform: self.platform.clone(),
            version: self.target_version.clone(),
            pattern: self.pattern.clone(),
        }
    }
}

pub(crate) fn run(
    args: ListArgs,
    out: &mut impl Write,
) -> shakedown_errors::Result<()> {
    let config = RunConfig::new(args.config.config_dir.as_deref())?.with_overrides(args.overrides())?;
    let registry = Registry::collect()?;

    let selected = select(&registry, &config)?;

    tracing::info!(
        platform = %config.platform,
        pattern = %config.pattern,
        "{} of {} tests eligible",
        selected.len(),
        registry.len()
    );

    if args.json {
        write_json(&selected, out)
    } else {
        write_table(&selected, out)
    }
}

fn select(
    registry: &Registry,
    config: &RunConfig,
) -> shakedown_errors::Result<Vec<TestSummary>> {
    let selector = Selector::new(
        &config.pattern,
        config.platform.clone(),
        config.version()?.clone(),
    )?;

    Ok(registry
        .select(&selector)
        .into_iter()
        .map(TestSummary::from)
        .collect())
}

fn write_json(
    tests: &[TestSummary],
    out: &mut impl Write,
) -> shakedown_errors::Result<()> {
    out.write_json_lines(tests)
        .map_err(internal)
}

fn write_table(
    tests: &[TestSummary],
    out: &mut impl Write,
) -> shakedown_errors::Result<()> {
    let rows: Vec<[String; 5]> = tests
        .iter()
        .map(|test| {
            [
                test.name.clone(),
                if test.platforms.is_empty() {
                    "any".into()
                } else {
                    test.platforms.join(",")
                },
                version_cell(test.min_version.as_ref()),
                version_cell(test.end_version.as_ref()),
                test.cluster_size.to_string(),
            ]
        })
        .collect();

    let header = ["NAME", "PLATFORMS", "MIN", "END", "MACHINES"].map(String::from);

    let mut widths = header.each_ref().map(String::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    for row in std::iter::once(&header).chain(&rows) {
        let last = row.len() - 1;
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i == last {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{cell:<width$}  ", width = widths[i]));
            }
        }
        writeln!(out, "{line}").map_err(internal)?;
    }

    Ok(())
}

fn version_cell(version: Option<&semver::Version>) -> String {
    version.map_or_else(|| "-".into(), ToString::to_string)
}

fn internal(err: impl std::fmt::Display) -> shakedown_errors::HarnessError {
    InternalError::internal(err.to_string()).into()
}
