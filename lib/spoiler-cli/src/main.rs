#![allow(missing_docs)]
use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::{Context, Result};
use spoiler_core::{ConfigError, SuiteConfig, SuiteEnv, SuiteReport, run_suite};
use tracing::{error, info, warn};

const HELP: &str = "\
Runs the Story Spoiler conformance suite

USAGE:
  story-spoiler [OPTIONS]

OPTIONS:
  --base-url <URL>     Service base URL     [env: STORY_SPOILER_BASE_URL]
  --username <NAME>    Login account        [env: STORY_SPOILER_USERNAME]
  --password <SECRET>  Login password       [env: STORY_SPOILER_PASSWORD]
  --missing-id <ID>    Unknown story id     [env: STORY_SPOILER_MISSING_ID]
  -h, --help           Prints this message

A password given with --password is visible in process listings,
prefer the STORY_SPOILER_PASSWORD environment variable.

EXIT CODES:
  0  every scenario passed
  1  at least one scenario failed
  2  configuration or setup failure
";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().pretty().init();

    let args = match CliArgs::parse(std::env::args_os().skip(1).collect()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            error!("{err:#}");
            return ExitCode::from(2);
        }
    };

    match run(args).await {
        Ok(report) => {
            info!("\n{report}");
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(2)
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_help() {
    print!("{HELP}");
}

async fn run(args: CliArgs) -> Result<SuiteReport> {
    let config = args.into_config().context("loading configuration")?;
    info!(base_url = %config.base_url, "running the suite");

    let report = run_suite(&config).await.context("setting up the suite")?;
    Ok(report)
}

/// Command line values; each one overrides its environment variable.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    missing_id: Option<String>,
}

impl CliArgs {
    /// `None` when help was requested.
    fn parse(args: Vec<OsString>) -> Result<Option<Self>> {
        let mut pargs = pico_args::Arguments::from_vec(args);

        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let result = Self {
            base_url: pargs
                .opt_value_from_str("--base-url")
                .context("parsing base-url argument")?,
            username: pargs
                .opt_value_from_str("--username")
                .context("parsing username argument")?,
            password: pargs
                .opt_value_from_str("--password")
                .context("parsing password argument")?,
            missing_id: pargs
                .opt_value_from_str("--missing-id")
                .context("parsing missing-id argument")?,
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            warn!(?remaining, "Warning: unused arguments left");
        }
        Ok(Some(result))
    }

    fn into_config(self) -> Result<SuiteConfig, ConfigError> {
        self.into_config_with(SuiteEnv::read)
    }

    fn into_config_with<F>(self, mut fallback: F) -> Result<SuiteConfig, ConfigError>
    where
        F: FnMut(SuiteEnv) -> Result<Option<String>, ConfigError>,
    {
        let Self {
            base_url,
            username,
            password,
            missing_id,
        } = self;

        SuiteConfig::load(|key| {
            let value = match key {
                SuiteEnv::BaseUrl => base_url.clone(),
                SuiteEnv::Username => username.clone(),
                SuiteEnv::Password => password.clone(),
                SuiteEnv::MissingStoryId => missing_id.clone(),
            };
            match value {
                Some(value) => Ok(Some(value)),
                None => fallback(key),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    fn no_env(_: SuiteEnv) -> Result<Option<String>, ConfigError> {
        Ok(None)
    }

    #[test]
    fn should_parse_every_flag() {
        let parsed = CliArgs::parse(args(&[
            "--base-url",
            "http://localhost:8080",
            "--username",
            "alice",
            "--password",
            "secret",
            "--missing-id",
            "42",
        ]))
        .expect("valid arguments")
        .expect("not help");

        insta::assert_debug_snapshot!(parsed, @r#"
        CliArgs {
            base_url: Some(
                "http://localhost:8080",
            ),
            username: Some(
                "alice",
            ),
            password: Some(
                "secret",
            ),
            missing_id: Some(
                "42",
            ),
        }
        "#);
    }

    #[test]
    fn should_point_password_to_environment() {
        let advice = HELP
            .lines()
            .skip_while(|line| !line.contains("process listings"))
            .collect::<Vec<_>>()
            .join("\n");

        insta::assert_snapshot!(advice, @r"
        A password given with --password is visible in process listings,
        prefer the STORY_SPOILER_PASSWORD environment variable.

        EXIT CODES:
          0  every scenario passed
          1  at least one scenario failed
          2  configuration or setup failure
        ");
    }

    #[test]
    fn should_detect_help() {
        let parsed = CliArgs::parse(args(&["--help"])).expect("valid arguments");

        assert_eq!(parsed, None);
    }

    #[test]
    fn should_prefer_flags_over_environment() {
        let cli = CliArgs {
            username: Some("alice".to_string()),
            ..CliArgs::default()
        };

        let config = cli
            .into_config_with(|key| {
                Ok(match key {
                    SuiteEnv::Username => Some("from-env".to_string()),
                    SuiteEnv::Password => Some("secret".to_string()),
                    _ => None,
                })
            })
            .expect("valid config");

        assert_eq!(config.credentials.username, "alice");
        assert_eq!(config.credentials.password.as_str(), "secret");
        assert_eq!(config.missing_story_id.as_str(), "23232");
    }

    #[test]
    fn should_fail_without_credentials() {
        let error = CliArgs::default()
            .into_config_with(no_env)
            .expect_err("missing credentials");

        insta::assert_snapshot!(error.to_string(), @"Missing required configuration STORY_SPOILER_USERNAME");
    }
}
