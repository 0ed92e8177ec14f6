//! Load named input scenarios from CSV
//!
//! Expected header: `id,currentTaxRate,retirementTaxRate,depositAmount,yearsInvested,roi,inflation`.
//! Blank cells are read as missing fields; they are rejected later by validation,
//! not here.

use std::io::Read;
use std::path::Path;

use csv::Reader;
use log::info;
use serde::{Deserialize, Serialize};

use super::data::InvestmentInputs;
use crate::error::{CalculatorError, Result};

/// A labelled set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub inputs: InvestmentInputs,
}

impl Scenario {
    pub fn new(id: impl Into<String>, inputs: InvestmentInputs) -> Self {
        Self {
            id: id.into(),
            inputs,
        }
    }
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    #[serde(rename = "currentTaxRate")]
    current_tax_rate: Option<f64>,
    #[serde(rename = "retirementTaxRate")]
    retirement_tax_rate: Option<f64>,
    #[serde(rename = "depositAmount")]
    deposit_amount: Option<f64>,
    #[serde(rename = "yearsInvested")]
    years_invested: Option<f64>,
    roi: Option<f64>,
    inflation: Option<f64>,
}

impl CsvRow {
    fn into_scenario(self, line: u64) -> Result<Scenario> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(CalculatorError::InvalidScenario {
                line,
                reason: "empty scenario id".to_string(),
            });
        }

        Ok(Scenario {
            id: id.to_string(),
            inputs: InvestmentInputs {
                current_tax_rate: self.current_tax_rate,
                retirement_tax_rate: self.retirement_tax_rate,
                deposit_amount: self.deposit_amount,
                years_invested: self.years_invested,
                roi: self.roi,
                inflation: self.inflation,
            },
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let path = path.as_ref();
    let scenarios = read_scenarios(Reader::from_path(path)?)?;
    info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    read_scenarios(Reader::from_reader(reader))
}

fn read_scenarios<R: Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let headers = reader.headers()?.clone();
    let mut scenarios = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: CsvRow = record.deserialize(Some(&headers))?;
        scenarios.push(row.into_scenario(line)?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,currentTaxRate,retirementTaxRate,depositAmount,yearsInvested,roi,inflation\n";

    #[test]
    fn test_load_scenarios_from_reader() {
        let data = format!("{}base,30,20,1500,12,5,3\nminimum,0.1,0.1,0.01,1,0.1,0.1\n", HEADER);

        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].id, "base");
        assert_eq!(
            scenarios[0].inputs,
            InvestmentInputs::new(30.0, 20.0, 1500.0, 12.0, 5.0, 3.0)
        );
        assert_eq!(scenarios[1].inputs.deposit_amount, Some(0.01));
    }

    #[test]
    fn test_blank_cells_become_missing_fields() {
        let data = format!("{}partial,30,,1500,,5,3\n", HEADER);

        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(scenarios[0].inputs.retirement_tax_rate, None);
        assert_eq!(scenarios[0].inputs.years_invested, None);
        assert_eq!(scenarios[0].inputs.roi, Some(5.0));
    }

    #[test]
    fn test_non_numeric_cell_is_an_error() {
        let data = format!("{}bad,thirty,20,1500,12,5,3\n", HEADER);

        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::Csv(_)));
    }

    #[test]
    fn test_empty_id_is_an_error() {
        let data = format!("{} ,30,20,1500,12,5,3\n", HEADER);

        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidScenario { line: 2, .. }));
    }
}
