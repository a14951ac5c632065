use anyhow::Context;
use salecast_config::SalecastConfig;
use salecast_core::UserId;
use salecast_service::ForecastService;
use salecast_users::{JsonlUsers, UserRepository};

use crate::cli::GlobalFlags;

/// Shared resources built once per invocation.
pub struct AppContext {
    pub config: SalecastConfig,
    pub service: ForecastService,
    pub users: JsonlUsers,
}

impl AppContext {
    /// Open the stores named by `config`, after applying `--data-dir`.
    pub fn init(mut config: SalecastConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(root) = &flags.data_dir {
            config.storage.data_dir = root.join("user_data");
            config.storage.model_dir = root.join("models");
        }

        let service = ForecastService::from_config(&config)
            .context("failed to open salecast storage")?;
        let users = JsonlUsers::open(config.storage.users_file())
            .context("failed to open user registry")?;

        Ok(Self {
            config,
            service,
            users,
        })
    }

    /// Horizon to use when a command does not give one.
    pub const fn default_horizon(&self) -> u32 {
        self.config.forecast.default_horizon_years
    }

    /// The user a data command acts as.
    ///
    /// Ids are opaque to the forecasting pipeline; an id missing from the
    /// registry is allowed but logged.
    pub fn user(&self, flags: &GlobalFlags) -> anyhow::Result<UserId> {
        let raw = flags.user.as_deref().context(
            "no user selected: pass --user <id> or set general.default_user \
             (`salecast login` prints your id)",
        )?;
        let user_id = UserId::new(raw)?;
        if self.users.find_by_id(&user_id)?.is_none() {
            tracing::warn!(%user_id, "user id is not in the registry");
        }
        Ok(user_id)
    }
}
