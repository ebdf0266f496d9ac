use crate::config::toml_config::TomlConfig;
use crate::core::batch::{BatchReport, BatchRunner, OutputFormat};
use crate::core::calculator::Calculator;
use crate::domain::model::{Calculation, OverflowPolicy};
use crate::utils::error::Result;

/// Everything one run needs: what to evaluate and where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub calculations: Vec<Calculation>,
    pub policy: OverflowPolicy,
    pub format: OutputFormat,
    pub output_path: Option<String>,
}

impl RunPlan {
    pub fn single(calculation: Calculation) -> Self {
        Self {
            calculations: vec![calculation],
            policy: OverflowPolicy::default(),
            format: OutputFormat::default(),
            output_path: None,
        }
    }

    pub fn from_toml(config: TomlConfig) -> Self {
        let output_path = config.output_path().map(str::to_string);
        Self {
            policy: config.overflow(),
            format: config.format(),
            output_path,
            calculations: config.calculations,
        }
    }

    /// Values given on the command line win over the batch file.
    pub fn with_overrides(
        mut self,
        policy: Option<OverflowPolicy>,
        format: Option<OutputFormat>,
        output_path: Option<String>,
    ) -> Self {
        if let Some(policy) = policy {
            self.policy = policy;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if output_path.is_some() {
            self.output_path = output_path;
        }
        self
    }
}

#[cfg(feature = "cli")]
impl RunPlan {
    pub fn from_cli(cli: &crate::config::cli::CliConfig) -> Result<Self> {
        use crate::utils::validation::Validate;

        cli.validate()?;

        let plan = match &cli.config {
            Some(path) => {
                tracing::info!("Loading batch file: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Self::from_toml(config)
            }
            None => Self::single(cli.calculation()?),
        };

        Ok(plan.with_overrides(cli.overflow, cli.format, cli.output.clone()))
    }
}

pub struct ArithEngine {
    plan: RunPlan,
}

impl ArithEngine {
    pub fn new(plan: RunPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &RunPlan {
        &self.plan
    }

    /// Evaluates the plan and writes the report when an output path is set.
    pub fn run(&self) -> Result<BatchReport> {
        tracing::debug!(
            "Running {} calculations with {} overflow",
            self.plan.calculations.len(),
            self.plan.policy
        );

        let runner = BatchRunner::new(Calculator::new(self.plan.policy));
        let report = runner.run(&self.plan.calculations);

        if let Some(path) = &self.plan.output_path {
            report.write_to(path, self.plan.format)?;
        }

        Ok(report)
    }

    pub fn render(&self, report: &BatchReport) -> Result<String> {
        // A lone text result prints as the bare number.
        if self.plan.format == OutputFormat::Text && report.evaluations.len() == 1 {
            if let Some(value) = report.evaluations[0].result {
                return Ok(format!("{}\n", value));
            }
        }
        report.render(self.plan.format)
    }
}
