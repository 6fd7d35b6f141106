use clap::Parser;
use std::path::PathBuf;

use triage_core::render;

#[derive(Parser)]
pub struct Analyze {
    #[arg(
        long,
        default_value = "./security/reports",
        help = "Directory containing security reports"
    )]
    reports_dir: PathBuf,

    #[arg(
        long,
        default_value = "security-analysis-report.md",
        help = "Output report filename, written inside the reports directory"
    )]
    output: String,

    #[arg(long, help = "Print the run state as JSON instead of the summary")]
    json: bool,
}

impl Analyze {
    pub fn run(&self) -> anyhow::Result<()> {
        let mut report = triage_core::scan_reports(&self.reports_dir)?;
        report.build_recommendations();

        if self.json {
            println!("{}", super::display::print_json(&report)?);
        } else {
            super::display::print_report(&report);
        }

        let output_path = self.reports_dir.join(&self.output);
        render::write_markdown(&report, &output_path)?;
        println!("📄 Detailed report saved to: {}", output_path.display());

        Ok(())
    }
}
