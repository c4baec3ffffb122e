use csstags_config::CsstagsConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &CsstagsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Scan(args) => commands::scan::handle(args, config, flags),
        Commands::Kinds => commands::kinds::handle(config, flags),
        Commands::Schema => commands::schema::handle(),
    }
}
