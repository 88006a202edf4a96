//! Round-robin league schedule CLI.
//!
//! Builds a schedule, prints the per-team report and week table to
//! stdout, and writes the CSV to the output path (overwritten).
//!
//! # Usage
//!
//! ```bash
//! roundrobin 10 schedule.csv
//! RUST_LOG=debug roundrobin 8 --seed 7 --keep-week-order
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_roundrobin::config::{ScheduleConfig, DEFAULT_SHEET_CAP};
use u_roundrobin::error::ScheduleError;
use u_roundrobin::render;
use u_roundrobin::scheduler::LeagueScheduler;

#[derive(Parser)]
#[command(name = "roundrobin")]
#[command(about = "Round-robin league schedule with balanced colours and sheets", long_about = None)]
struct Cli {
    /// Number of teams (even up to 12, odd up to 13)
    #[arg(default_value_t = 10)]
    teams: usize,

    /// CSV output path
    #[arg(default_value = "schedule.csv")]
    output: PathBuf,

    /// Seed for reproducible schedules
    #[arg(long)]
    seed: Option<u64>,

    /// Keep generated week order (long same-colour streaks)
    #[arg(long)]
    keep_week_order: bool,

    /// Keep generated matchup order inside weeks before sheet assignment
    #[arg(long)]
    keep_sheet_order: bool,

    /// Maximum games per team on one sheet
    #[arg(long, default_value_t = DEFAULT_SHEET_CAP)]
    cap: u32,
}

impl Cli {
    fn config(&self) -> ScheduleConfig {
        let mut config = ScheduleConfig::new(self.teams)
            .with_shuffle_weeks(!self.keep_week_order)
            .with_shuffle_sheets(!self.keep_sheet_order)
            .with_sheet_cap(self.cap);
        config.seed = self.seed;
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let scheduler = LeagueScheduler::new(cli.config());

    let league = match scheduler.run() {
        Ok(league) => league,
        Err(e @ ScheduleError::UnsupportedTeamCount(_)) => {
            println!("Sorry, {e}.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", render::team_report(&league));
    print!("{}", render::week_table(&league));

    let file = File::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    render::write_csv(&league, BufWriter::new(file))
        .with_context(|| format!("writing {}", cli.output.display()))?;

    info!(
        path = %cli.output.display(),
        weeks = league.schedule.week_count(),
        degraded = league.degraded_cells,
        "schedule written"
    );
    Ok(())
}
