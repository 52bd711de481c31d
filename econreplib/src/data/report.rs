//! Report kinds and their behavior table.
//!
//! Every supported report is a variant of [`ReportKind`], and the methods
//! on the enum are the single place that says which columns a report
//! reads, how its cell values are parsed, and how each group's values are
//! reduced. Adding a report means adding a variant and extending these
//! matches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EconrepError;

/// How a report folds one group's values into a single number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reduction {
    /// Arithmetic mean of the group's values
    Mean,
    /// Sum of the group's values
    Sum,
}

/// The reports the engine knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    /// Average GDP per country
    AverageGdp,
    /// Average unemployment rate per country
    AverageUnemployment,
    /// Total population per continent
    PopulationByContinent,
}

impl ReportKind {
    /// Every report kind, in CLI listing order.
    pub const ALL: [ReportKind; 3] = [
        ReportKind::AverageGdp,
        ReportKind::AverageUnemployment,
        ReportKind::PopulationByContinent,
    ];

    /// CLI selector for this report.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::AverageGdp => "average-gdp",
            ReportKind::AverageUnemployment => "average-unemployment",
            ReportKind::PopulationByContinent => "population-by-continent",
        }
    }

    /// Columns every input file must carry for this report.
    pub fn required_columns(&self) -> [&'static str; 2] {
        [self.key_column(), self.value_column()]
    }

    /// Column whose values become the group keys.
    pub fn key_column(&self) -> &'static str {
        match self {
            ReportKind::AverageGdp | ReportKind::AverageUnemployment => "country",
            ReportKind::PopulationByContinent => "continent",
        }
    }

    /// Column whose values are parsed as numbers.
    pub fn value_column(&self) -> &'static str {
        match self {
            ReportKind::AverageGdp => "gdp",
            ReportKind::AverageUnemployment => "unemployment",
            ReportKind::PopulationByContinent => "population",
        }
    }

    /// Header label for the value column in rendered tables.
    ///
    /// Currently the same as the column name for every kind.
    pub fn value_label(&self) -> &'static str {
        self.value_column()
    }

    /// How the group values are folded into one number.
    pub fn reduction(&self) -> Reduction {
        match self {
            ReportKind::AverageGdp | ReportKind::AverageUnemployment => Reduction::Mean,
            ReportKind::PopulationByContinent => Reduction::Sum,
        }
    }

    /// Whether commas are stripped from cell values before parsing.
    ///
    /// GDP and population figures may carry `1,400`-style separators;
    /// unemployment rates are parsed as written.
    pub fn strips_thousands_separators(&self) -> bool {
        !matches!(self, ReportKind::AverageUnemployment)
    }

    /// Whether rows with an empty group key are dropped.
    pub fn skips_blank_keys(&self) -> bool {
        matches!(self, ReportKind::PopulationByContinent)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = EconrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average-gdp" => Ok(ReportKind::AverageGdp),
            "average-unemployment" => Ok(ReportKind::AverageUnemployment),
            "population-by-continent" => Ok(ReportKind::PopulationByContinent),
            _ => Err(EconrepError::UnknownReportKind(s.to_string())),
        }
    }
}
