use salecast_users::{User, login, signup};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CredentialArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AccountResponse<'a> {
    user_id: &'a str,
    email: &'a str,
}

impl<'a> From<&'a User> for AccountResponse<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            user_id: user.id.as_str(),
            email: &user.email,
        }
    }
}

/// Handle `salecast signup`.
pub fn handle_signup(
    args: &CredentialArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = signup(&mut ctx.users, &args.email, &args.password)?;
    output(&AccountResponse::from(&user), flags.format)
}

/// Handle `salecast login`.
pub fn handle_login(
    args: &CredentialArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = login(&ctx.users, &args.email, &args.password)?;
    output(&AccountResponse::from(&user), flags.format)
}
