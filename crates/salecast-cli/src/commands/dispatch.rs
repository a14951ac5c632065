use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Signup(args) => commands::account::handle_signup(&args, ctx, flags),
        Commands::Login(args) => commands::account::handle_login(&args, ctx, flags),
        Commands::Add(args) => commands::ingest::handle_add(&args, ctx, flags),
        Commands::Upload(args) => commands::ingest::handle_upload(&args, ctx, flags),
        Commands::Retrain => commands::retrain::handle(ctx, flags),
        Commands::History(args) => commands::history::handle(&args, ctx, flags),
        Commands::Predict(args) => commands::forecast::handle_predict(&args, ctx, flags),
        Commands::Export(args) => commands::forecast::handle_export(&args, ctx, flags),
        Commands::Shell => commands::shell::run(ctx, flags),
    }
}
