use crate::domain::model::MatchReport;
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::io;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage is taken over every requested entry, duplicates included.
pub fn build_report(skills: &[String], matched: Vec<String>) -> MatchReport {
    let matched_set: HashSet<&str> = matched.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let missing_skills = skills
        .iter()
        .map(|skill| skill.trim())
        .filter(|skill| !matched_set.contains(skill))
        .filter(|skill| seen.insert(*skill))
        .map(str::to_string)
        .collect();

    let match_percentage = if skills.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / skills.len() as f64 * 100.0)
    };

    MatchReport {
        matched_skills: matched,
        missing_skills,
        match_percentage,
    }
}

/// Compact JSON with `", "` and `": "` separators.
#[derive(Debug, Default)]
pub struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        return Ok(serde_json::to_string_pretty(value)?);
    }

    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    // serde_json 只輸出合法 UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
