use crate::domain::model::{Calculation, Evaluation};
use crate::domain::ports::Evaluator;
use crate::utils::error::{ArithError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = ArithError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ArithError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Supported formats: text, json, csv".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ArithError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub evaluations: Vec<Evaluation>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.evaluations.iter().filter(|e| e.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.evaluations.len() - self.succeeded()
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for e in &self.evaluations {
            let outcome = match (&e.result, &e.error) {
                (Some(value), _) => value.to_string(),
                (None, Some(error)) => format!("error: {}", error),
                (None, None) => "error: no result".to_string(),
            };
            out.push_str(&format!("{} {} {} = {}\n", e.operation, e.left, e.right, outcome));
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.evaluations)?)
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for e in &self.evaluations {
            writer.serialize(e)?;
        }
        let bytes = writer.into_inner().map_err(|e| ArithError::IoError(e.into_error()))?;
        csv_to_string(bytes)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
            OutputFormat::Csv => self.to_csv(),
        }
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P, format: OutputFormat) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render(format)?)?;
        tracing::info!("Report written to {}", path.display());
        Ok(())
    }
}

fn csv_to_string(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| ArithError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Evaluates calculations in order. A failed calculation is recorded and the batch continues.
pub struct BatchRunner<E: Evaluator> {
    evaluator: E,
}

impl<E: Evaluator> BatchRunner<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn run(&self, calculations: &[Calculation]) -> BatchReport {
        tracing::info!("Evaluating {} calculations", calculations.len());

        let evaluations: Vec<Evaluation> = calculations
            .iter()
            .map(|calc| {
                match self
                    .evaluator
                    .evaluate(calc.operation, calc.left, calc.right)
                {
                    Ok(value) => Evaluation {
                        operation: calc.operation,
                        left: calc.left,
                        right: calc.right,
                        result: Some(value),
                        error: None,
                    },
                    Err(e) => Evaluation {
                        operation: calc.operation,
                        left: calc.left,
                        right: calc.right,
                        result: None,
                        error: Some(e.to_string()),
                    },
                }
            })
            .collect();

        let report = BatchReport { evaluations };
        tracing::info!(
            "Batch finished: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        report
    }
}
