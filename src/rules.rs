//! Rule tables for number simplification
//!
//! This module loads the word lists, thresholds and the percentage idiom table
//! that drive classification and formatting. The German rules are embedded as
//! TOML and parsed once on first use.

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use crate::error::RulesError;
use crate::types::PercentIdiom;

mod condition;

pub use condition::parse_condition_str;

/// Lowest value treated as a calendar year
pub const YEAR_MIN: u32 = 1000;
/// Highest value treated as a calendar year
pub const YEAR_MAX: u32 = 2099;
/// From this value on, amounts keep three significant figures
pub const THREE_FIGURE_THRESHOLD: u64 = 100_000;
/// Number of significant figures kept at and above [`THREE_FIGURE_THRESHOLD`]
pub const SIGNIFICANT_FIGURES: u32 = 3;
/// From this value on, counts are rounded and grouped
pub const GROUPING_THRESHOLD: u64 = 1000;
/// Fractional digits kept for counts below [`GROUPING_THRESHOLD`]
pub const REPORTING_FRACTION_DIGITS: u32 = 1;
/// Word placed in front of approximated values
pub const APPROXIMATION_MARKER: &str = "etwa";
/// Groups the integer digits of a German number
pub const THOUSANDS_SEPARATOR: char = '.';
/// Separates the fractional digits of a German number
pub const DECIMAL_SEPARATOR: char = ',';

type Result<T> = std::result::Result<T, RulesError>;

/// Rounding step for values below a bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundingBand {
    /// Exclusive upper bound of the band
    pub below: u64,
    /// Values in the band are rounded to a multiple of this
    pub step: u64,
}

/// All tables the pipeline consults
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub year_range: RangeInclusive<u32>,
    /// Words that mark the following number as a year ("Jahr")
    pub year_markers: Vec<String>,
    /// Full month names, January first
    pub month_names: Vec<String>,
    /// Month abbreviations, January first
    pub month_abbreviations: Vec<String>,
    /// Words that introduce a date ("am")
    pub date_prepositions: Vec<String>,
    pub currency_tokens: Vec<String>,
    pub percent_tokens: Vec<String>,
    /// Nouns that mark the preceding number as a count
    pub count_nouns: Vec<String>,
    pub approximation_marker: String,
    pub grouping_threshold: u64,
    /// Ascending bands; values above the last band keep `significant_figures`
    pub rounding_bands: Vec<RoundingBand>,
    pub significant_figures: u32,
    pub reporting_fraction_digits: u32,
    /// Idioms in evaluation order
    pub percent_idioms: Vec<PercentIdiom>,
}

static GERMAN_RULES: OnceLock<Rules> = OnceLock::new();

impl Rules {
    /// Rules built from the named constants alone, with empty word lists
    pub fn base() -> Self {
        Self {
            year_range: YEAR_MIN..=YEAR_MAX,
            year_markers: Vec::new(),
            month_names: Vec::new(),
            month_abbreviations: Vec::new(),
            date_prepositions: Vec::new(),
            currency_tokens: Vec::new(),
            percent_tokens: Vec::new(),
            count_nouns: Vec::new(),
            approximation_marker: APPROXIMATION_MARKER.to_string(),
            grouping_threshold: GROUPING_THRESHOLD,
            rounding_bands: vec![
                RoundingBand {
                    below: 100,
                    step: 1,
                },
                RoundingBand {
                    below: 1000,
                    step: 100,
                },
                RoundingBand {
                    below: THREE_FIGURE_THRESHOLD,
                    step: 1000,
                },
            ],
            significant_figures: SIGNIFICANT_FIGURES,
            reporting_fraction_digits: REPORTING_FRACTION_DIGITS,
            percent_idioms: Vec::new(),
        }
    }

    /// The built-in German rules
    pub fn german() -> &'static Self {
        GERMAN_RULES.get_or_init(|| {
            Self::from_toml_str(include_str!("rules/de.toml")).unwrap_or_else(|e| {
                tracing::error!("Failed to load embedded rule data: {}", e);
                Self::base()
            })
        })
    }

    /// Parse a rule table, applying it over [`Rules::base`]
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| RulesError::Parse(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| RulesError::Parse("Root is not a table".to_string()))?;

        let mut rules = Self::base();

        if let Some(years) = table.get("years") {
            rules.apply_years(years)?;
        }
        if let Some(dates) = table.get("dates") {
            rules.apply_dates(dates)?;
        }
        if let Some(units) = table.get("units") {
            rules.apply_units(units)?;
        }
        if let Some(rounding) = table.get("rounding") {
            rules.apply_rounding(rounding)?;
        }
        if let Some(percentages) = table.get("percentages") {
            rules.percent_idioms = parse_percent_idioms(percentages)?;
        }

        Ok(rules)
    }

    fn apply_years(&mut self, value: &toml::Value) -> Result<()> {
        let table = as_table(value, "years")?;

        let min = match table.get("min") {
            Some(v) => to_u32(v, "years.min")?,
            None => *self.year_range.start(),
        };
        let max = match table.get("max") {
            Some(v) => to_u32(v, "years.max")?,
            None => *self.year_range.end(),
        };
        if min > max {
            return Err(RulesError::Invalid(format!(
                "years.min ({min}) is greater than years.max ({max})"
            )));
        }
        self.year_range = min..=max;

        if let Some(markers) = string_list(table, "markers")? {
            self.year_markers = markers;
        }
        Ok(())
    }

    fn apply_dates(&mut self, value: &toml::Value) -> Result<()> {
        let table = as_table(value, "dates")?;

        if let Some(months) = string_list(table, "month_names")? {
            if months.len() != 12 {
                return Err(RulesError::Invalid(format!(
                    "dates.month_names must have 12 entries, found {}",
                    months.len()
                )));
            }
            self.month_names = months;
        }

        if let Some(months) = string_list(table, "month_abbreviations")? {
            if months.len() != 12 {
                return Err(RulesError::Invalid(format!(
                    "dates.month_abbreviations must have 12 entries, found {}",
                    months.len()
                )));
            }
            self.month_abbreviations = months;
        }

        if let Some(prepositions) = string_list(table, "prepositions")? {
            self.date_prepositions = prepositions;
        }
        Ok(())
    }

    fn apply_units(&mut self, value: &toml::Value) -> Result<()> {
        let table = as_table(value, "units")?;

        if let Some(currency) = string_list(table, "currency")? {
            self.currency_tokens = currency;
        }
        if let Some(percent) = string_list(table, "percent")? {
            self.percent_tokens = percent;
        }
        if let Some(nouns) = string_list(table, "count_nouns")? {
            self.count_nouns = nouns;
        }
        Ok(())
    }

    fn apply_rounding(&mut self, value: &toml::Value) -> Result<()> {
        let table = as_table(value, "rounding")?;

        if let Some(marker) = table.get("marker").and_then(|v| v.as_str()) {
            self.approximation_marker = marker.to_string();
        }

        if let Some(v) = table.get("grouping_threshold") {
            self.grouping_threshold = u64::from(to_u32(v, "rounding.grouping_threshold")?);
        }
        if let Some(v) = table.get("significant_figures") {
            self.significant_figures = to_u32(v, "rounding.significant_figures")?;
        }
        if let Some(v) = table.get("reporting_fraction_digits") {
            self.reporting_fraction_digits = to_u32(v, "rounding.reporting_fraction_digits")?;
        }

        if let Some(bands) = table.get("bands") {
            self.rounding_bands = parse_rounding_bands(bands)?;
        }

        if self.significant_figures == 0 {
            return Err(RulesError::Invalid(
                "rounding.significant_figures must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::german().clone()
    }
}

fn parse_rounding_bands(value: &toml::Value) -> Result<Vec<RoundingBand>> {
    let entries = value
        .as_array()
        .ok_or_else(|| RulesError::Invalid("rounding.bands is not an array".to_string()))?;

    let mut bands: Vec<RoundingBand> = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let table = as_table(entry, "rounding.bands")?;
        let below = table
            .get("below")
            .ok_or_else(|| RulesError::Invalid(format!("Missing below in rounding band {i}")))
            .and_then(|v| to_u32(v, "rounding.bands.below"))?;
        let step = table
            .get("step")
            .ok_or_else(|| RulesError::Invalid(format!("Missing step in rounding band {i}")))
            .and_then(|v| to_u32(v, "rounding.bands.step"))?;

        if step == 0 {
            return Err(RulesError::Invalid(format!(
                "Rounding band {i} has a zero step"
            )));
        }
        if bands.last().is_some_and(|prev| prev.below >= u64::from(below)) {
            return Err(RulesError::Invalid(format!(
                "Rounding band {i} is not in ascending order"
            )));
        }

        bands.push(RoundingBand {
            below: u64::from(below),
            step: u64::from(step),
        });
    }
    Ok(bands)
}

fn parse_percent_idioms(value: &toml::Value) -> Result<Vec<PercentIdiom>> {
    let entries = value
        .as_array()
        .ok_or_else(|| RulesError::Invalid("percentages is not an array".to_string()))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let table = as_table(entry, "percentages")?;
            let when = table.get("when").and_then(|v| v.as_str()).ok_or_else(|| {
                RulesError::Invalid(format!("Missing or invalid when in percentage idiom {i}"))
            })?;
            let phrase = table.get("phrase").and_then(|v| v.as_str()).ok_or_else(|| {
                RulesError::Invalid(format!("Missing or invalid phrase in percentage idiom {i}"))
            })?;

            Ok(PercentIdiom {
                condition: parse_condition_str(when)?,
                phrase: phrase.to_string(),
            })
        })
        .collect()
}

fn as_table<'v>(value: &'v toml::Value, name: &str) -> Result<&'v toml::Table> {
    value
        .as_table()
        .ok_or_else(|| RulesError::Invalid(format!("{name} is not a table")))
}

fn to_u32(value: &toml::Value, name: &str) -> Result<u32> {
    value
        .as_integer()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| RulesError::Invalid(format!("{name} must be a non-negative integer")))
}

fn string_list(table: &toml::Table, key: &str) -> Result<Option<Vec<String>>> {
    let Some(value) = table.get(key) else {
        return Ok(None);
    };

    let items = value
        .as_array()
        .ok_or_else(|| RulesError::Invalid(format!("{key} is not an array")))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| RulesError::Invalid(format!("{key} must contain only strings")))
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
