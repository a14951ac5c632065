use salecast_core::UserId;
use salecast_service::TrainingOutcome;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `salecast retrain`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    retrain(ctx, &ctx.user(flags)?, flags)
}

pub fn retrain(ctx: &AppContext, user_id: &UserId, flags: &GlobalFlags) -> anyhow::Result<()> {
    let model = ctx.service.retrain(user_id)?;
    output(&TrainingOutcome::from(&model), flags.format)
}
