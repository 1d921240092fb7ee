// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Turns a [`Report`] into the bytes written to stdout.

use std::io::Write;

use anyhow::Result;

use crate::commands::Report;
use crate::prefs::{AngleUnit, CliPrefs, OutputFormat};

/// Writes `report` in the format selected by `prefs`.
pub fn emit(out: &mut impl Write, report: &Report, prefs: &CliPrefs) -> Result<()> {
    match prefs.format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text(out, report, prefs.precision)?,
    }
    Ok(())
}

fn unit_suffix(unit: AngleUnit) -> &'static str {
    match unit {
        AngleUnit::Radians => "rad",
        AngleUnit::Degrees => "deg",
    }
}

fn write_text(out: &mut impl Write, report: &Report, p: usize) -> Result<()> {
    match report {
        Report::Angle { output, unit, .. } => {
            writeln!(out, "{output:.p$} {}", unit_suffix(*unit))?;
        }
        Report::Normalized { lanes } => {
            let joined: Vec<String> = lanes.iter().map(|v| format!("{v:.p$}")).collect();
            writeln!(out, "{}", joined.join(" "))?;
        }
        Report::Euler { angles, unit } => {
            let u = unit_suffix(*unit);
            writeln!(out, "yaw   {:.p$} {u}", angles.yaw)?;
            writeln!(out, "pitch {:.p$} {u}", angles.pitch)?;
            writeln!(out, "roll  {:.p$} {u}", angles.roll)?;
        }
        Report::Matrix { columns } => {
            // Printed row by row; storage stays column-major.
            for row in 0..4 {
                let cells: Vec<String> = columns
                    .iter()
                    .map(|col| format!("{:>w$.p$}", col[row], w = p + 6))
                    .collect();
                writeln!(out, "{}", cells.join(" "))?;
            }
        }
        Report::Color {
            packed,
            argb,
            rgb,
            rgba,
        } => {
            writeln!(out, "packed {packed}")?;
            writeln!(out, "argb   {}", hex_lanes(argb))?;
            writeln!(out, "rgb    {}", hex_lanes(rgb))?;
            writeln!(out, "rgba   {}", hex_lanes(rgba))?;
        }
    }
    Ok(())
}

fn hex_lanes(lanes: &[u8]) -> String {
    lanes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_math::Argb32;

    fn render(report: &Report, prefs: &CliPrefs) -> String {
        let mut buf = Vec::new();
        emit(&mut buf, report, prefs).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_angle_respects_precision() {
        let prefs = CliPrefs {
            precision: 3,
            ..CliPrefs::default()
        };
        let r = Report::Angle {
            input: 180.0,
            output: core::f64::consts::PI,
            unit: AngleUnit::Radians,
        };
        assert_eq!(render(&r, &prefs), "3.142 rad\n");
    }

    #[test]
    fn matrix_prints_rows() {
        let mut columns = [[0.0_f32; 4]; 4];
        for (i, col) in columns.iter_mut().enumerate() {
            col[i] = 1.0;
        }
        columns[3][0] = 5.0;
        let prefs = CliPrefs {
            precision: 1,
            ..CliPrefs::default()
        };
        let text = render(&Report::Matrix { columns }, &prefs);
        let first = text.lines().next().unwrap();
        assert_eq!(first.split_whitespace().collect::<Vec<_>>(), ["1.0", "0.0", "0.0", "5.0"]);
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn json_is_tagged_by_kind() {
        let prefs = CliPrefs {
            format: OutputFormat::Json,
            ..CliPrefs::default()
        };
        let r = Report::Normalized {
            lanes: vec![1.0, 2.0],
        };
        let v: serde_json::Value = serde_json::from_str(&render(&r, &prefs)).unwrap();
        assert_eq!(v["kind"], "normalized");
        assert_eq!(v["lanes"], serde_json::json!([1.0, 2.0]));
    }

    #[test]
    fn color_text_shows_hex_lanes() {
        let c = Argb32::new(0xAABB_CCDD);
        let r = Report::Color {
            packed: c,
            argb: c.argb().to_array(),
            rgb: c.rgb().to_array(),
            rgba: c.rgba().to_array(),
        };
        let text = render(&r, &CliPrefs::default());
        assert!(text.contains("packed #AABBCCDD"));
        assert!(text.contains("argb   DD CC BB AA"));
        assert!(text.contains("rgb    CC BB AA"));
        assert!(text.contains("rgba   CC BB AA DD"));
    }
}
