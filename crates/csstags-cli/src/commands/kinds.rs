use csstags_config::CsstagsConfig;
use csstags_scanner::STYLESHEET;

use crate::cli::GlobalFlags;
use crate::output::{self, KindRow};

/// Handle `csstags kinds`.
pub fn handle(config: &CsstagsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = kind_rows(config)?;
    output::output_kinds(&rows, flags.resolve_format(config.output.format))
}

/// The parser's kind table, with `enabled` reflecting `scan.kinds`.
fn kind_rows(config: &CsstagsConfig) -> anyhow::Result<Vec<KindRow>> {
    let enabled = config.scan.enabled_kinds()?;
    Ok(STYLESHEET
        .kinds
        .iter()
        .map(|def| KindRow {
            letter: def.letter,
            name: def.name,
            description: def.description,
            enabled: enabled.contains(&def.kind),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use csstags_config::ScanConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rows_follow_configured_kinds() {
        let config = CsstagsConfig {
            scan: ScanConfig {
                kinds: "i".to_string(),
                ..ScanConfig::default()
            },
            ..CsstagsConfig::default()
        };

        let rows = kind_rows(&config).expect("valid kinds");
        let summary: Vec<(char, bool)> = rows.iter().map(|r| (r.letter, r.enabled)).collect();
        assert_eq!(summary, vec![('c', false), ('s', false), ('i', true)]);
        assert_eq!(rows[2].description, "identities");
    }
}
