//! Configuration commands.

use crate::config::PanelConfig;
use crate::error::{ClientError, ClientResult};

/// Dump the current configuration to stdout.
///
/// A literal Google access token is masked; secret references are shown as
/// written.
pub fn dump(config: &PanelConfig) -> ClientResult<()> {
    println!("# config.toml ({})", PanelConfig::default_path().display());
    println!("{}", dump_to_string(config)?);
    Ok(())
}

pub(crate) fn dump_to_string(config: &PanelConfig) -> ClientResult<String> {
    #[allow(unused_mut)]
    let mut config = config.clone();

    #[cfg(feature = "google")]
    if let Some(ref mut google) = config.google
        && !crate::secret::is_reference(&google.access_token)
    {
        google.access_token = "<redacted>".to_string();
    }

    toml::to_string_pretty(&config)
        .map_err(|e| ClientError::config(format!("failed to serialize config: {}", e)))
}

/// Validate the configuration.
pub fn validate(config: &PanelConfig) -> ClientResult<()> {
    if let Err(problems) = config.validate() {
        for problem in &problems {
            eprintln!("  - {}", problem);
        }
        return Err(ClientError::config(format!(
            "{} problem(s) found",
            problems.len()
        )));
    }

    #[cfg(feature = "google")]
    if let Some(ref google) = config.google {
        google
            .to_service_config()
            .map_err(|e| ClientError::config(format!("invalid Google settings: {}", e)))?;
        println!("Google access token resolves.");
    }

    println!("Configuration is valid ({} rooms).", config.rooms.len());
    Ok(())
}

/// Show the configuration file path.
pub fn path() -> ClientResult<()> {
    println!("config: {}", PanelConfig::default_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_problems() {
        let mut config = PanelConfig::default();
        config.cache.ttl_secs = 0;
        assert!(matches!(validate(&config), Err(ClientError::Config(_))));
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(validate(&PanelConfig::default()).is_ok());
    }

    #[cfg(feature = "google")]
    #[test]
    fn dump_masks_literal_token_only() {
        let literal = PanelConfig::parse(
            r#"
            [google]
            access_token = "ya29.secret"
            "#,
        )
        .unwrap();
        let dumped = dump_to_string(&literal).unwrap();
        assert!(!dumped.contains("ya29.secret"));
        assert!(dumped.contains("<redacted>"));

        let reference = PanelConfig::parse(
            r#"
            [google]
            access_token = "env::ROOMSTATUS_TOKEN"
            "#,
        )
        .unwrap();
        assert!(
            dump_to_string(&reference)
                .unwrap()
                .contains("env::ROOMSTATUS_TOKEN")
        );
    }
}
