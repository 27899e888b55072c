//! `logmirror list` – show what a run would download.

use anyhow::Result;
use console::style;
use logmirror_core::config::MirrorConfig;
use logmirror_core::mirror::{self, MirrorPlan};

pub fn run_list(cfg: &MirrorConfig) -> Result<()> {
    let plan = MirrorPlan::default();
    let mut total = 0usize;
    for listing in mirror::list(&plan, &cfg.transfer_options()) {
        match listing.links {
            Ok(links) => {
                println!(
                    "{} {} ({} archives)",
                    style("Listing:").cyan(),
                    listing.url,
                    links.len()
                );
                for href in &links {
                    println!("  {}", href);
                }
                total += links.len();
            }
            Err(e) => println!("{} {}", style("Skipped:").red(), e),
        }
    }
    println!("{} archive(s) across {} listing(s)", total, plan.sources.len());
    Ok(())
}
