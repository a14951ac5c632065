use std::path::Path;

use anyhow::Context;
use salecast_core::UserId;

use crate::cli::root_commands::HistoryArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::notice;
use crate::context::AppContext;
use crate::output::{output, output_rows};

/// Handle `salecast history`.
pub fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    show(ctx, &ctx.user(flags)?, args.html.as_deref(), flags)
}

/// Table format lists the records by date; JSON formats print the chart figure.
pub fn show(
    ctx: &AppContext,
    user_id: &UserId,
    html: Option<&Path>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(chart) = ctx.service.history(user_id)? else {
        notice(
            flags,
            "No history to show yet: add at least two records so a model can be trained.",
        );
        return Ok(());
    };

    if let Some(path) = html {
        std::fs::write(path, chart.to_html_fragment())
            .with_context(|| format!("failed to write {}", path.display()))?;
        notice(flags, &format!("Chart written to {}", path.display()));
    }

    match flags.format {
        OutputFormat::Table => {
            let records = ctx.service.records().load(user_id)?.sorted_by_date();
            output_rows(&records, &["year", "month", "sales"], flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&chart.to_value(), flags.format),
    }
}
