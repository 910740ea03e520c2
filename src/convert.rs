//! Pure conversion functions: TOML config + CLI overrides -> run settings.

use anyhow::{Result, bail};
use chrono::format::{Item, StrftimeItems};

use firstday_week::WeekBasis;

use crate::config::FirstdayConfig;

/// Settings for one run, after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub basis: WeekBasis,
    pub format: Option<String>,
}

/// Validates a strftime format string.
pub fn parse_format(s: &str) -> Result<String> {
    if StrftimeItems::new(s).any(|item| matches!(item, Item::Error)) {
        bail!("invalid output format: {s:?}");
    }
    Ok(s.to_string())
}

/// Builds [`Settings`]. CLI values take precedence over the config file.
pub fn build_settings(
    basis: Option<&str>,
    format: Option<&str>,
    config: &FirstdayConfig,
) -> Result<Settings> {
    let basis = basis.map_or(config.week.basis, WeekBasis::from);
    let format = format
        .or(config.output.format.as_deref())
        .map(parse_format)
        .transpose()?;
    Ok(Settings { basis, format })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputToml, WeekToml};

    fn sunday_config() -> FirstdayConfig {
        FirstdayConfig {
            week: WeekToml {
                basis: WeekBasis::Sunday,
            },
            output: OutputToml {
                format: Some("%Y-%m-%d".to_string()),
            },
        }
    }

    #[test]
    fn defaults() {
        let settings = build_settings(None, None, &FirstdayConfig::default()).unwrap();
        assert_eq!(
            settings,
            Settings {
                basis: WeekBasis::Monday,
                format: None,
            }
        );
    }

    #[test]
    fn config_values_used() {
        let settings = build_settings(None, None, &sunday_config()).unwrap();
        assert_eq!(settings.basis, WeekBasis::Sunday);
        assert_eq!(settings.format.as_deref(), Some("%Y-%m-%d"));
    }

    #[test]
    fn cli_overrides_config() {
        let settings = build_settings(Some("monday"), Some("%d/%m"), &sunday_config()).unwrap();
        assert_eq!(settings.basis, WeekBasis::Monday);
        assert_eq!(settings.format.as_deref(), Some("%d/%m"));
    }

    #[test]
    fn cli_basis_is_case_insensitive() {
        let settings = build_settings(Some("SUNDAY"), None, &FirstdayConfig::default()).unwrap();
        assert_eq!(settings.basis, WeekBasis::Sunday);
    }

    #[test]
    fn valid_formats() {
        for f in ["%Y-%m-%d", "%A, %B %e", "%+", "week of %F", ""] {
            assert!(parse_format(f).is_ok(), "format {f:?}");
        }
    }

    #[test]
    fn invalid_format_rejected() {
        let err = parse_format("%Q").unwrap_err();
        assert_eq!(err.to_string(), "invalid output format: \"%Q\"");
    }

    #[test]
    fn invalid_config_format_rejected() {
        let config = FirstdayConfig {
            output: OutputToml {
                format: Some("%Y-%".to_string()),
            },
            ..FirstdayConfig::default()
        };
        assert!(build_settings(None, None, &config).is_err());
    }
}
