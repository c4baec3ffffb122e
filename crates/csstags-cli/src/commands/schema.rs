use csstags_core::Tag;

/// Handle `csstags schema`. Always JSON, whatever `--format` says.
pub fn handle() -> anyhow::Result<()> {
    println!("{}", render()?);
    Ok(())
}

fn render() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(Tag);
    Ok(serde_json::to_string_pretty(&schema)?)
}
