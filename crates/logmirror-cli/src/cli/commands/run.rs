//! `logmirror run` – mirror every listing into the download root.

use anyhow::Result;
use console::style;
use logmirror_core::config::MirrorConfig;
use logmirror_core::human;
use logmirror_core::mirror::{self, MirrorPlan};
use logmirror_core::report::{MirrorReport, Outcome};

use crate::cli::render::ConsoleSink;

pub fn run_mirror(cfg: &MirrorConfig) -> Result<()> {
    let plan = MirrorPlan::default();
    tracing::info!(root = %cfg.download_root.display(), "starting mirror run");

    let mut sink = ConsoleSink::default();
    let report = mirror::run(&plan, &cfg.download_root, &cfg.transfer_options(), &mut sink)?;
    print_summary(&report);

    match report.outcome() {
        Outcome::Success => Ok(()),
        Outcome::PartialSuccess | Outcome::Failed => {
            anyhow::bail!("{} item(s) failed", report.failures.len())
        }
    }
}

fn print_summary(report: &MirrorReport) {
    println!();
    match report.outcome() {
        Outcome::Success => println!("{}", style("All files downloaded successfully!").green()),
        Outcome::PartialSuccess => println!("{}", style("Mirror partially completed").yellow()),
        Outcome::Failed => println!("{}", style("Mirror failed").red()),
    }
    println!(
        "{} file(s), {} from {} listing(s)",
        report.downloaded.len(),
        human::bytes(report.total_bytes()),
        report.listings
    );
    if !report.failures.is_empty() {
        println!("These items failed:");
        for f in &report.failures {
            println!("  {}: {}", f.target, f.error);
        }
    }
}
