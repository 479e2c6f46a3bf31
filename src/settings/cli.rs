use super::Parser;

/// Shared flags for binaries that load project settings. Flatten this into
/// a binary's own argument struct to pick up `--settings`.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Override the default settings file path.
    #[arg(long)]
    pub settings: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_flag_is_optional() {
        let cli = Cli::try_parse_from(["login_demo"]).unwrap();
        assert!(cli.settings.is_none());

        let cli =
            Cli::try_parse_from(["login_demo", "--settings", "settings/dev.toml"]).unwrap();
        assert_eq!(cli.settings.as_deref(), Some("settings/dev.toml"));
    }
}
