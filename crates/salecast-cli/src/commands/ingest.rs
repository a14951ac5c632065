use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use salecast_core::{RawRecord, UserId};
use salecast_service::{IngestReport, TrainingOutcome};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AddArgs, UploadArgs};
use crate::commands::notice;
use crate::context::AppContext;
use crate::output::output;

/// Handle `salecast add`.
pub fn handle_add(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    add(args, ctx, &ctx.user(flags)?, flags)
}

/// Handle `salecast upload`.
pub fn handle_upload(args: &UploadArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    upload(args, ctx, &ctx.user(flags)?, flags)
}

pub fn add(
    args: &AddArgs,
    ctx: &AppContext,
    user_id: &UserId,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let raw = RawRecord::new(&args.year, &args.month, &args.sales);
    let report = ctx.service.add_record(user_id, raw)?;
    notice(flags, "Data added successfully!");
    report_outcome(&report, flags)
}

pub fn upload(
    args: &UploadArgs,
    ctx: &AppContext,
    user_id: &UserId,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let file_name = args
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let file = File::open(&args.path)
        .with_context(|| format!("failed to open {}", args.path.display()))?;

    let report = ctx
        .service
        .upload_csv(user_id, file_name, BufReader::new(file))?;
    notice(flags, "CSV uploaded successfully!");
    report_outcome(&report, flags)
}

fn report_outcome(report: &IngestReport, flags: &GlobalFlags) -> anyhow::Result<()> {
    match &report.training {
        TrainingOutcome::Skipped { required, .. } => notice(
            flags,
            &format!("Model not trained yet: at least {required} records are needed."),
        ),
        TrainingOutcome::Failed { reason } => {
            notice(flags, &format!("Error training model: {reason}"));
        }
        TrainingOutcome::Trained { .. } => {}
    }
    output(report, flags.format)
}
