//! Rendering of command results as text or JSON.

use anyhow::Result;
use crs_common::{CoordinateSystem, CrsSummary, Point};
use serde::Serialize;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One tab-separated line per system.
pub fn render_summaries(summaries: &[CrsSummary], format: Format) -> Result<String> {
    match format {
        Format::Json => to_json(summaries),
        Format::Text => Ok(summaries
            .iter()
            .map(|s| format!("{}\t{}\t{}", s.code, s.name, s.description))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_system(system: &CoordinateSystem, format: Format) -> Result<String> {
    match format {
        Format::Json => to_json(system),
        Format::Text => Ok(format!(
            "code:        {}\nname:        {}\ndescription: {}\ndefinition:  {}",
            system.code, system.name, system.description, system.definition
        )),
    }
}

/// One `x y` line per point, in input order.
pub fn render_points(points: &[Point], format: Format) -> Result<String> {
    match format {
        Format::Json => to_json(points),
        Format::Text => Ok(points
            .iter()
            .map(|p| format!("{} {}", p.x, p.y))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_summaries() {
        let summaries = vec![CrsSummary {
            code: "BD09".to_string(),
            name: "BD-09".to_string(),
            description: "Baidu".to_string(),
        }];
        assert_eq!(
            render_summaries(&summaries, Format::Text).unwrap(),
            "BD09\tBD-09\tBaidu"
        );
    }

    #[test]
    fn test_json_points() {
        let json = render_points(&[Point::new(1.5, -2.0)], Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["x"], 1.5);
        assert_eq!(value[0]["y"], -2.0);
    }

    #[test]
    fn test_text_points() {
        let text = render_points(&[Point::new(1.0, 2.0), Point::new(3.5, 4.25)], Format::Text)
            .unwrap();
        assert_eq!(text, "1 2\n3.5 4.25");
    }
}
