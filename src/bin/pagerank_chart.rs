use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use pagerank_chart::dataset;
use pagerank_chart::viz::{self, FileSurface, LegendMode, RenderOptions, Surface, WindowSurface};

#[derive(Parser, Debug)]
#[command(
    name = "pagerank-chart",
    version,
    about = "Plot PageRank scores of core Debian packages by year"
)]
struct Cli {
    /// Write the chart to this file (.svg or .png) instead of opening a window.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Width of the chart in pixels.
    #[arg(long, default_value_t = viz::DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(64..=8192))]
    width: u32,
    /// Height of the chart in pixels.
    #[arg(long, default_value_t = viz::DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(64..=8192))]
    height: u32,
    /// Legend placement.
    #[arg(long, value_enum, default_value_t = LegendArg::Inside)]
    legend: LegendArg,
    /// Chart title (none by default).
    #[arg(long)]
    title: Option<String>,
    /// Locale for tick labels (e.g. en, de).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Print the chart data as JSON and exit without drawing.
    #[arg(long, default_value_t = false)]
    describe: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LegendArg {
    Inside,
    Right,
}

impl From<LegendArg> for LegendMode {
    fn from(arg: LegendArg) -> Self {
        match arg {
            LegendArg::Inside => LegendMode::Inside,
            LegendArg::Right => LegendMode::Right,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut chart = dataset::pagerank_chart();
    if let Some(title) = cli.title.as_deref() {
        chart = chart.with_title(title);
    }

    if cli.describe {
        println!("{}", serde_json::to_string_pretty(&chart)?);
        return Ok(());
    }

    let opts = RenderOptions {
        width: cli.width,
        height: cli.height,
        legend: cli.legend.into(),
        locale: cli.locale,
    };

    let mut surface: Box<dyn Surface> = match cli.out {
        Some(path) => Box::new(FileSurface::new(path)),
        None => Box::new(WindowSurface::new(
            chart.title.clone().unwrap_or_else(|| "PageRank".to_string()),
        )),
    };

    viz::render_chart(&chart, &opts, surface.as_mut()).context("failed to render chart")?;
    Ok(())
}
