use std::path::{Path, PathBuf};

use anyhow::Context;
use salecast_chart::{EXPORT_FILE_NAME, render_forecast};
use salecast_core::PredictionBatch;
use salecast_service::Session;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ExportArgs, PredictArgs};
use crate::commands::notice;
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Serialize)]
struct ExportResponse<'a> {
    path: &'a Path,
    rows: usize,
}

/// Handle `salecast predict`.
pub fn handle_predict(
    args: &PredictArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = Session::new(ctx.user(flags)?);
    let years = args.years.unwrap_or_else(|| ctx.default_horizon());
    predict(&mut session, ctx, years, args.html.as_deref(), flags)?;

    if let Some(path) = &args.export {
        let rows = export(&session, path)?;
        notice(flags, &format!("Exported {rows} predictions to {}", path.display()));
    }
    Ok(())
}

/// Handle `salecast export`: forecast, then write the batch as CSV.
pub fn handle_export(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = Session::new(ctx.user(flags)?);
    let years = args.years.unwrap_or_else(|| ctx.default_horizon());
    session.predict(&ctx.service, years)?;
    write_export(&session, &output_path(args.output.clone()), flags)
}

/// Forecast into `session` and print the predictions.
pub fn predict(
    session: &mut Session,
    ctx: &AppContext,
    years: u32,
    html: Option<&Path>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let batch = session.predict(&ctx.service, years)?;

    if let Some(path) = html {
        std::fs::write(path, render_forecast(batch).to_html_fragment())
            .with_context(|| format!("failed to write {}", path.display()))?;
        notice(flags, &format!("Chart written to {}", path.display()));
    }

    output_rows(&batch.predictions, &["year", "month", "sales"], flags.format)
}

/// Write the session's current batch to `path`, returning the row count.
pub fn export(session: &Session, path: &Path) -> anyhow::Result<usize> {
    let bytes = session.export_csv()?;
    std::fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(session.current_batch().map_or(0, PredictionBatch::len))
}

/// Export and print where the file went.
pub fn write_export(session: &Session, path: &Path, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = export(session, path)?;
    output(&ExportResponse { path, rows }, flags.format)
}

pub fn output_path(requested: Option<PathBuf>) -> PathBuf {
    requested.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME))
}
