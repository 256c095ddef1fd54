pub mod cronometer;
pub mod myfitnesspal;

use crate::error::{DiiError, Result};
use crate::reference::NutrientId;
use crate::table::RawTable;
use crate::types::day::DayRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

pub const DATE_COLUMN: &str = "Date";
pub const MEAL_COLUMN: &str = "Meal";

/// Bookkeeping columns that are neither nutrients nor worth reporting as unused.
const STRUCTURAL_COLUMNS: [&str; 4] = [DATE_COLUMN, MEAL_COLUMN, "Note", "Completed"];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Maps one export column onto a canonical nutrient, converting units with
/// a constant multiplier.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMapping {
    pub label: &'static str,
    pub nutrient: NutrientId,
    pub scale: f64,
}

impl ColumnMapping {
    pub const fn new(label: &'static str, nutrient: NutrientId) -> Self {
        Self::scaled(label, nutrient, 1.0)
    }

    pub const fn scaled(label: &'static str, nutrient: NutrientId, scale: f64) -> Self {
        Self {
            label,
            nutrient,
            scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Daily summary export, one row per date.
    Cronometer,
    /// Meal-level export, several rows per date.
    MyFitnessPal,
}

impl SourceFormat {
    /// Detection order.
    pub const ALL: [SourceFormat; 2] = [SourceFormat::Cronometer, SourceFormat::MyFitnessPal];

    pub fn label(self) -> &'static str {
        match self {
            SourceFormat::Cronometer => "Cronometer",
            SourceFormat::MyFitnessPal => "MyFitnessPal",
        }
    }

    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            SourceFormat::Cronometer => cronometer::REQUIRED_COLUMNS,
            SourceFormat::MyFitnessPal => myfitnesspal::REQUIRED_COLUMNS,
        }
    }

    pub fn mappings(self) -> &'static [ColumnMapping] {
        match self {
            SourceFormat::Cronometer => cronometer::MAPPINGS,
            SourceFormat::MyFitnessPal => myfitnesspal::MAPPINGS,
        }
    }

    fn is_meal_granular(self) -> bool {
        matches!(self, SourceFormat::MyFitnessPal)
    }

    fn missing_columns(self, table: &RawTable) -> Vec<String> {
        self.required_columns()
            .iter()
            .filter(|label| table.column(label).is_none())
            .map(|label| label.to_string())
            .collect()
    }
}

/// Which export format to expect. `Auto` inspects the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceHint {
    #[default]
    Auto,
    Cronometer,
    MyFitnessPal,
}

impl SourceHint {
    fn format(self) -> Option<SourceFormat> {
        match self {
            SourceHint::Auto => None,
            SourceHint::Cronometer => Some(SourceFormat::Cronometer),
            SourceHint::MyFitnessPal => Some(SourceFormat::MyFitnessPal),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Normalized {
    pub format: SourceFormat,
    /// Ascending by date, one record per distinct date.
    pub days: Vec<DayRecord>,
    pub recognized_columns: Vec<String>,
    pub unused_columns: Vec<String>,
}

/// Classifies the header row. Formats are tried in [`SourceFormat::ALL`]
/// order; on failure the error names the format with the most required
/// columns present, earlier formats winning ties.
pub fn detect(table: &RawTable) -> Result<SourceFormat> {
    let mut closest: Option<(SourceFormat, usize, Vec<String>)> = None;
    for format in SourceFormat::ALL {
        let missing = format.missing_columns(table);
        if missing.is_empty() {
            return Ok(format);
        }
        let present = format.required_columns().len() - missing.len();
        let closer = closest
            .as_ref()
            .map(|(_, best, _)| present > *best)
            .unwrap_or(true);
        if closer {
            closest = Some((format, present, missing));
        }
    }

    let (format, _, missing) = closest.unwrap_or((SourceFormat::Cronometer, 0, Vec::new()));
    Err(DiiError::UnrecognizedFormat {
        format: format.label(),
        missing,
    })
}

pub fn normalize(table: &RawTable, hint: SourceHint) -> Result<Normalized> {
    if table.headers.iter().all(|header| header.trim().is_empty()) {
        return Err(DiiError::MalformedHeader("no column names".to_string()));
    }

    let format = match hint.format() {
        Some(format) => {
            let missing = format.missing_columns(table);
            if !missing.is_empty() {
                return Err(DiiError::UnrecognizedFormat {
                    format: format.label(),
                    missing,
                });
            }
            format
        }
        None => detect(table)?,
    };
    info!(format = format.label(), rows = table.rows.len(), "detected export format");

    check_duplicate_headers(table, format)?;

    let date_column = table
        .column(DATE_COLUMN)
        .ok_or_else(|| DiiError::MalformedHeader(format!("missing '{DATE_COLUMN}' column")))?;

    let columns: Vec<(usize, &ColumnMapping)> = format
        .mappings()
        .iter()
        .filter_map(|mapping| table.column(mapping.label).map(|index| (index, mapping)))
        .collect();
    for (index, mapping) in &columns {
        debug!(column = index, label = mapping.label, nutrient = %mapping.nutrient, "mapped column");
    }

    let mut by_date: BTreeMap<NaiveDate, (usize, DayRecord)> = BTreeMap::new();
    let mut skipped = 0usize;
    for (line, row) in table.rows.iter().enumerate() {
        let Some(date) = RawTable::cell(row, date_column).and_then(parse_date) else {
            warn!(line = line + 2, "skipping row with unreadable date");
            skipped += 1;
            continue;
        };

        let (rows, day) = by_date
            .entry(date)
            .or_insert_with(|| (0, DayRecord::new(date)));
        *rows += 1;

        for (index, mapping) in &columns {
            if let Some(value) = RawTable::cell(row, *index).and_then(parse_number) {
                *day.nutrients.entry(mapping.nutrient).or_insert(0.0) += value * mapping.scale;
            }
        }
    }

    if by_date.is_empty() {
        return Err(DiiError::EmptyInput);
    }

    let mut days = Vec::with_capacity(by_date.len());
    for (date, (rows, day)) in by_date {
        if rows > 1 {
            if format.is_meal_granular() {
                debug!(%date, meals = rows, "summed meal rows");
            } else {
                warn!(%date, rows, "merged repeated date rows");
            }
        }
        days.push(day);
    }
    info!(days = days.len(), skipped, "normalized nutrition log");

    let mapped: HashSet<&str> = format.mappings().iter().map(|m| m.label).collect();
    let recognized_columns = columns
        .iter()
        .map(|(_, mapping)| mapping.label.to_string())
        .collect();
    let unused_columns = table
        .headers
        .iter()
        .filter(|header| {
            !header.trim().is_empty()
                && !mapped.contains(header.as_str())
                && !STRUCTURAL_COLUMNS.contains(&header.as_str())
        })
        .cloned()
        .collect();

    Ok(Normalized {
        format,
        days,
        recognized_columns,
        unused_columns,
    })
}

fn check_duplicate_headers(table: &RawTable, format: SourceFormat) -> Result<()> {
    let significant: HashSet<&str> = format
        .mappings()
        .iter()
        .map(|mapping| mapping.label)
        .chain(format.required_columns().iter().copied())
        .collect();

    let mut seen = HashSet::new();
    for header in &table.headers {
        if significant.contains(header.as_str()) && !seen.insert(header.as_str()) {
            return Err(DiiError::MalformedHeader(format!(
                "column '{header}' appears more than once"
            )));
        }
    }
    Ok(())
}

/// Parses a numeric cell, tolerating surrounding whitespace and commas that
/// group the integer part in threes. Anything else is absent.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned = if trimmed.contains(',') {
        if !has_thousands_grouping(trimmed) {
            return None;
        }
        trimmed.replace(',', "")
    } else {
        trimmed.to_string()
    };
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// `1,234` or `-12,345,678.9`: a 1-3 digit lead group, then groups of
/// exactly three digits.
fn has_thousands_grouping(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    let integer = match unsigned.split_once('.') {
        Some((integer, fraction)) => {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            integer
        }
        None => unsigned,
    };

    let mut groups = integer.split(',');
    let lead_ok = groups
        .next()
        .map(|lead| (1..=3).contains(&lead.len()) && lead.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false);
    lead_ok && groups.all(|group| group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit()))
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
