//! `config` command: inspect and persist settings

use super::common::CommandContext;
use crate::{
    cli::ConfigCmd,
    config::{Config, ConfigUpdate},
    Result,
};
use tracing::info;

pub fn handle_config(ctx: &mut CommandContext, cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Show => {
            println!("Config file:          {}", ctx.config_path.display());
            println!("Database:             {}", ctx.config.database_path()?.display());
            println!("Log file:             {}", ctx.config.log_file().display());
            println!("Pythagorean exponent: {}", ctx.config.pythagorean_exponent);
            println!(
                "Default season:       {}",
                ctx.config
                    .default_season
                    .map(|season| season.to_string())
                    .unwrap_or_else(|| "-".to_string())
            );
        }
        ConfigCmd::Set {
            database_path,
            clear_database_path,
            log_file_path,
            clear_log_file_path,
            pythagorean_exponent,
            default_season,
            clear_default_season,
        } => {
            let update = ConfigUpdate {
                database_path: requested(database_path, clear_database_path),
                log_file_path: requested(log_file_path, clear_log_file_path),
                pythagorean_exponent,
                default_season: requested(default_season, clear_default_season),
            };

            // Environment overrides in ctx.config are not written back.
            let mut stored = Config::load_from_path(&ctx.config_path)?;
            stored.apply_update(&update);
            stored.validate()?;
            stored.save_to_path(&ctx.config_path)?;

            ctx.config.apply_update(&update);
            ctx.calculator = ctx.config.calculator();
            info!(path = %ctx.config_path.display(), "Saved configuration");
            println!("✓ Config updated: {}", ctx.config_path.display());
        }
    }
    Ok(())
}

fn requested<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}
