//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use csstags_config::{ConfigError, CsstagsConfig, TagFormat};
use csstags_core::TagKind;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_scan_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[scan]
kinds = "ci"
extensions = ["css", "pcss"]
exclude = ["vendor/**"]
respect_ignore = false
"#,
        )?;

        let config: CsstagsConfig = Figment::from(Serialized::defaults(CsstagsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.scan.kinds, "ci");
        assert_eq!(config.scan.extensions, vec!["css", "pcss"]);
        assert_eq!(config.scan.exclude, vec!["vendor/**"]);
        assert!(!config.scan.respect_ignore);
        assert_eq!(
            config.scan.enabled_kinds().expect("valid kinds"),
            vec![TagKind::Class, TagKind::Id]
        );
        Ok(())
    });
}

#[test]
fn loads_output_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[output]
format = "jsonl"
sort = true
"#,
        )?;

        let config: CsstagsConfig = Figment::from(Serialized::defaults(CsstagsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.output.format, TagFormat::Jsonl);
        assert!(config.output.sort);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[scan]\nkinds = \"s\"\n")?;

        let config: CsstagsConfig = Figment::from(Serialized::defaults(CsstagsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.scan.kinds, "s");
        assert_eq!(config.scan.extensions, vec!["css"]);
        assert!(config.scan.respect_ignore);
        assert_eq!(config.output.format, TagFormat::Ctags);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".csstags")?;
        jail.create_file(".csstags/config.toml", "[output]\nformat = \"json\"\n")?;

        let config = CsstagsConfig::load(None).expect("config loads");
        assert_eq!(config.output.format, TagFormat::Json);
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_config() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".csstags")?;
        jail.create_file(".csstags/config.toml", "[scan]\nkinds = \"c\"\n")?;
        jail.create_file("custom.toml", "[scan]\nkinds = \"i\"\n")?;

        let config = CsstagsConfig::load(Some(std::path::Path::new("custom.toml")))
            .expect("config loads");
        assert_eq!(config.scan.kinds, "i");
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn user_global_config_is_lowest_file_layer() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir("xdg/csstags")?;
        jail.create_file(
            "xdg/csstags/config.toml",
            "[scan]\nkinds = \"s\"\n[output]\nsort = true\n",
        )?;
        jail.create_dir(".csstags")?;
        jail.create_file(".csstags/config.toml", "[scan]\nkinds = \"c\"\n")?;

        let config = CsstagsConfig::load(None).expect("config loads");
        assert_eq!(config.scan.kinds, "c");
        assert!(config.output.sort);
        Ok(())
    });
}

#[test]
fn invalid_kind_letters_fail_load() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".csstags")?;
        jail.create_file(".csstags/config.toml", "[scan]\nkinds = \"cz\"\n")?;

        let err = CsstagsConfig::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "scan.kinds"));
        Ok(())
    });
}

#[test]
fn unknown_format_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[output]\nformat = \"xml\"\n")?;

        let result: Result<CsstagsConfig, _> =
            Figment::from(Serialized::defaults(CsstagsConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
