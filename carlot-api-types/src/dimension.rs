use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of grouping dimensions a sales report can be keyed on.
///
/// Callers pick a report kind through one of two request paths; anything that
/// does not parse into this enum is rejected up front rather than falling
/// back to some default dimension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleDimension {
    Salesperson,
    CarMake,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported grouping dimension {0:?}")]
pub struct InvalidDimension(pub String);

impl SaleDimension {
    /// Axis/title label for rendered charts.
    pub fn display_name(&self) -> &'static str {
        match self {
            SaleDimension::Salesperson => "Salesperson",
            SaleDimension::CarMake => "Car Make",
        }
    }

    /// Path segment the report route uses for this dimension.
    pub fn route_segment(&self) -> &'static str {
        match self {
            SaleDimension::Salesperson => "salesperson",
            SaleDimension::CarMake => "car-make",
        }
    }
}

impl fmt::Display for SaleDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SaleDimension {
    type Err = InvalidDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "salesperson" => Ok(SaleDimension::Salesperson),
            "car-make" | "car_make" | "car make" | "carmake" => Ok(SaleDimension::CarMake),
            _ => Err(InvalidDimension(s.to_string())),
        }
    }
}
