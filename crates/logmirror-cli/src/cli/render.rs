//! Console rendering of mirror progress: coloured announcements and a
//! per-file progress bar keyed to the expected chunk count.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use logmirror_core::human;
use logmirror_core::progress::{FileStart, ProgressSink};

const BAR_TEMPLATE: &str = "[{elapsed_precise}] {wide_bar} {pos}/{len} ({eta})";

#[derive(Default)]
pub struct ConsoleSink {
    bar: Option<ProgressBar>,
}

impl ConsoleSink {
    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl ProgressSink for ConsoleSink {
    fn listing_fetched(&mut self, url: &str, links: usize) {
        println!("{} {} ({} archives)", style("Listing:").cyan(), url, links);
    }

    fn download_started(&mut self, file: &FileStart) {
        println!();
        println!("{}{}", style("Downloading: ").yellow(), style(&file.name).green());
        println!(
            "{}{}",
            style("File Size: ").blue(),
            style(human::bytes(file.total_bytes)).red()
        );
        self.bar = Some(ProgressBar::new(file.expected_chunks).with_style(Self::bar_style()));
    }

    fn chunk_written(&mut self, _bytes: usize) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn download_completed(&mut self, name: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
        println!("{}{}", style("Download Completed for: ").magenta(), style(name).red());
    }

    fn checksum(&mut self, name: &str, md5: &str) {
        println!("{}", style(format!("MD5 Checksum {}", name)).white());
        println!("{}", style(md5).red());
        println!();
    }

    fn item_failed(&mut self, target: &str, error: &str) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
        eprintln!("{} {}: {}", style("Failed:").red().bold(), target, error);
    }
}
