//! Patient demographics from EEG reports.
//!
//! Parsing the free-text report is left to an external reader implementing
//! [`DemographicsSource`]; this module only normalises what it returns.

use std::path::Path;

use serde::Serialize;

/// Sex value reports use when it could not be determined.
const UNDETERMINED_SEX: &str = "Undetermined";

/// Something that can pull raw age and sex strings out of a report file.
pub trait DemographicsSource {
    /// Return `(age, sex)` exactly as written in the report.
    fn read_demographics(&self, report: &Path) -> anyhow::Result<(String, String)>;
}

/// Normalised demographics for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demographics {
    pub age: Option<f64>,
    pub sex: Option<String>,
}

impl Demographics {
    /// Normalise raw strings: a non-numeric age and an "Undetermined" sex
    /// both become `None`.
    pub fn from_raw(age: &str, sex: &str) -> Self {
        let age = age.trim().parse::<f64>().ok();
        let sex = if sex == UNDETERMINED_SEX {
            None
        } else {
            Some(sex.to_string())
        };
        Self { age, sex }
    }
}
