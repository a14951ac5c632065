use std::io::{BufRead, IsTerminal, Write};

use salecast_service::Session;

use crate::cli::GlobalFlags;
use crate::cli::shell_commands::{ShellCommands, ShellLine};
use crate::commands::{forecast, history, ingest, notice, retrain};
use crate::context::AppContext;
use crate::output::output_rows;

const PROMPT: &str = "salecast> ";

/// Handle `salecast shell`: one session, many commands.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = Session::new(ctx.user(flags)?);
    let interactive = std::io::stdin().is_terminal();
    notice(
        flags,
        &format!("Signed in as user {}. Type `help` for commands.", session.user_id()),
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{PROMPT}");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let command = match ShellLine::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                eprintln!("{error}");
                continue;
            }
        };

        match execute(&command, &mut session, ctx, flags) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(error) => eprintln!("salecast error: {error:#}"),
        }
    }
    Ok(())
}

enum Flow {
    Continue,
    Exit,
}

fn execute(
    command: &ShellCommands,
    session: &mut Session,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Flow> {
    let user_id = session.user_id().clone();
    match command {
        ShellCommands::Add(args) => ingest::add(args, ctx, &user_id, flags)?,
        ShellCommands::Upload(args) => ingest::upload(args, ctx, &user_id, flags)?,
        ShellCommands::Retrain => retrain::retrain(ctx, &user_id, flags)?,
        ShellCommands::History(args) => history::show(ctx, &user_id, args.html.as_deref(), flags)?,
        ShellCommands::Predict(args) => {
            let years = args.years.unwrap_or_else(|| ctx.default_horizon());
            forecast::predict(session, ctx, years, None, flags)?;
        }
        ShellCommands::Export(args) => {
            forecast::write_export(session, &forecast::output_path(args.output.clone()), flags)?;
        }
        ShellCommands::Show => match session.current_batch() {
            Some(batch) => output_rows(&batch.predictions, &["year", "month", "sales"], flags.format)?,
            None => notice(flags, "No prediction yet: run `predict` first."),
        },
        ShellCommands::Clear => session.clear(),
        ShellCommands::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}
