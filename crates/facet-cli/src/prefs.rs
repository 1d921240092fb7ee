// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved CLI preferences (`facet_cli.json`) and how flags override them.

use serde::{Deserialize, Serialize};

/// Config key the preferences live under.
pub const PREFS_KEY: &str = "facet_cli";

/// Unit used when printing angles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    /// Radians (the library's native unit).
    #[default]
    Radians,
    /// Degrees.
    Degrees,
}

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document per invocation.
    Json,
}

/// Persisted defaults for the `facet` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliPrefs {
    /// Unit for Euler output.
    pub angle_unit: AngleUnit,
    /// Output encoding.
    pub format: OutputFormat,
    /// Decimal places in text output.
    pub precision: usize,
}

impl Default for CliPrefs {
    fn default() -> Self {
        Self {
            angle_unit: AngleUnit::Radians,
            format: OutputFormat::Text,
            precision: 6,
        }
    }
}

/// Command-line values that take precedence over saved prefs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// `--json`
    pub json: bool,
    /// `--degrees`
    pub degrees: bool,
    /// `--precision N`
    pub precision: Option<usize>,
}

impl CliPrefs {
    /// Applies flags on top of the saved values. Flags only ever switch a
    /// setting on; they never reset a saved choice back to its default.
    pub fn with_overrides(mut self, o: Overrides) -> Self {
        if o.json {
            self.format = OutputFormat::Json;
        }
        if o.degrees {
            self.angle_unit = AngleUnit::Degrees;
        }
        if let Some(p) = o.precision {
            self.precision = p;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let prefs: CliPrefs = serde_json::from_str(r#"{"angle_unit":"degrees"}"#).unwrap();
        assert_eq!(prefs.angle_unit, AngleUnit::Degrees);
        assert_eq!(prefs.format, OutputFormat::Text);
        assert_eq!(prefs.precision, 6);
    }

    #[test]
    fn flags_override_saved_values() {
        let saved = CliPrefs {
            precision: 2,
            ..CliPrefs::default()
        };
        let merged = saved.with_overrides(Overrides {
            json: true,
            degrees: false,
            precision: Some(9),
        });
        assert_eq!(merged.format, OutputFormat::Json);
        assert_eq!(merged.angle_unit, AngleUnit::Radians);
        assert_eq!(merged.precision, 9);
    }
}
