//! Server configuration loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional configuration file,
//! `MOCKBANK_*` environment variables and command-line flags.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DATA_FILE: &str = "mock_data.json";

/// Listener and storage settings for the server binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOCKBANK")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// JSON document holding every user record.
    pub data_file: Option<PathBuf>,
}

impl ServerSettings {
    /// Return the configured host, falling back to every interface.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Return the configured data file, falling back to `mock_data.json` in
    /// the working directory.
    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 3] = ["MOCKBANK_HOST", "MOCKBANK_PORT", "MOCKBANK_DATA_FILE"];

    fn load_from_args(args: &[&str]) -> ServerSettings {
        let argv =
            std::iter::once(OsString::from("mockbank")).chain(args.iter().map(OsString::from));
        ServerSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_args(&[]);

        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.data_file(), PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("MOCKBANK_HOST", Some("127.0.0.1".to_owned())),
            ("MOCKBANK_PORT", Some("9090".to_owned())),
            ("MOCKBANK_DATA_FILE", Some("/tmp/bank.json".to_owned())),
        ]);

        let settings = load_from_args(&[]);

        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 9090);
        assert_eq!(settings.data_file(), PathBuf::from("/tmp/bank.json"));
    }

    #[rstest]
    fn command_line_flags_win_over_environment() {
        let _guard = lock_env([
            ("MOCKBANK_HOST", None::<String>),
            ("MOCKBANK_PORT", Some("9090".to_owned())),
            ("MOCKBANK_DATA_FILE", None::<String>),
        ]);

        let settings = load_from_args(&["--port", "7070"]);

        assert_eq!(settings.port(), 7070);
    }

    #[rstest]
    fn unrelated_flags_keep_the_default_port() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_args(&["--host", "127.0.0.1"]);

        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.data_file(), PathBuf::from(DEFAULT_DATA_FILE));
    }
}
