//! Render command handler.

use anyhow::{Context, Result};

use crate::cli::RenderArgs;
use crate::cli::config::{Config, RenderOverrides};
use crate::cli::output::{Output, OutputFormat, RenderSummary};
use crate::docset::{DocsetConfig, RenderReport, render_docset};

pub fn handle_render(args: &RenderArgs, config: &Config, overrides: RenderOverrides) -> Result<()> {
    let overrides = RenderOverrides {
        output: args.output.clone(),
        assets: args.assets.clone(),
        templates: args.templates.clone(),
        ..overrides
    };
    let docset = config.docset_config(&overrides);

    let report = render_docset(&docset).with_context(|| {
        format!(
            "failed to render {} into {}",
            docset.notes_dir.display(),
            docset.output_dir.display()
        )
    })?;

    print_report(&docset, report, args.format)
}

fn print_report(docset: &DocsetConfig, report: RenderReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!(
                "Rendered {} page(s) into {}",
                report.pages,
                docset.output_dir.display()
            );
            println!("  {} search index entries", report.index_entries);
            println!("  {} month(s) in overview", report.months);
            if report.assets_copied > 0 || report.asset_failures > 0 {
                println!(
                    "  {} asset(s) copied, {} failed",
                    report.assets_copied, report.asset_failures
                );
            }
            if report.skipped_undated > 0 {
                println!(
                    "  {} undated note(s) left out of the overview",
                    report.skipped_undated
                );
            }
        }
        OutputFormat::Json => {
            let output = Output::new(RenderSummary {
                output: docset.output_dir.display().to_string(),
                report,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
