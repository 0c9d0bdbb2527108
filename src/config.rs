use std::path::PathBuf;

use crate::Cli;

/// Everything a conversion run needs, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Session catalog (`{ "data": [...] }`)
    pub sessions_path: PathBuf,
    /// Followed sessions (`{ "data": { "followedSessions": [...] } }`)
    pub interests_path: PathBuf,
    /// Where the .ics files go, created if missing
    pub output_dir: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            sessions_path: cli.sessions,
            interests_path: cli.interests,
            output_dir: cli.output_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_args_default_output_dir() {
        let cli = Cli::try_parse_from(["sessions-to-ics", "catalog.json", "interests.json"]).unwrap();
        let config = Config::from(cli);

        assert_eq!(config.sessions_path, PathBuf::from("catalog.json"));
        assert_eq!(config.interests_path, PathBuf::from("interests.json"));
        assert_eq!(config.output_dir, PathBuf::from("sessions"));
    }

    #[test]
    fn test_config_from_args_output_dir() {
        for flag in ["-o", "--output-dir"] {
            let cli = Cli::try_parse_from(["sessions-to-ics", "a.json", "b.json", flag, "out/cal"])
                .unwrap();
            assert_eq!(Config::from(cli).output_dir, PathBuf::from("out/cal"));
        }
    }

    #[test]
    fn test_cli_requires_both_files() {
        assert!(Cli::try_parse_from(["sessions-to-ics"]).is_err());
        assert!(Cli::try_parse_from(["sessions-to-ics", "a.json"]).is_err());
    }
}
