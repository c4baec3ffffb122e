use anyhow::Context;
use csstags_config::CsstagsConfig;

use crate::cli::GlobalFlags;

/// Load the layered configuration, including `.env` from the current directory.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CsstagsConfig> {
    if let Some(path) = &flags.config
        && !path.is_file()
    {
        anyhow::bail!("config file '{}' does not exist", path.display());
    }

    let config = CsstagsConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load csstags configuration")?;
    tracing::debug!(
        kinds = %config.scan.kinds,
        extensions = ?config.scan.extensions,
        "configuration loaded"
    );
    Ok(config)
}
