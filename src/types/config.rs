use crate::error::PlannerError;
use serde::Deserialize;
use std::net::SocketAddr;

pub const DEFAULT_TOTAL_HOURS: f64 = 8.0;
pub const DEFAULT_NUM_SUBJECTS: usize = 3;
pub const DEFAULT_CHART_WIDTH: usize = 40;
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8501";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlannerConfig {
    pub defaults: Option<DefaultsConfig>,
    pub output: Option<OutputConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    pub total_hours: Option<f64>,
    pub num_subjects: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormatSetting {
    Table,
    Md,
    Json,
    Csv,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormatSetting>,
    pub chart: Option<bool>,
    pub chart_width: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub addr: Option<String>,
}

impl PlannerConfig {
    pub fn default_total_hours(&self) -> f64 {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.total_hours)
            .unwrap_or(DEFAULT_TOTAL_HOURS)
    }

    pub fn default_num_subjects(&self) -> usize {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.num_subjects)
            .unwrap_or(DEFAULT_NUM_SUBJECTS)
    }

    pub fn output_format(&self) -> OutputFormatSetting {
        self.output
            .as_ref()
            .and_then(|output| output.format)
            .unwrap_or(OutputFormatSetting::Table)
    }

    pub fn chart_enabled(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|output| output.chart)
            .unwrap_or(true)
    }

    pub fn chart_width(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|output| output.chart_width)
            .unwrap_or(DEFAULT_CHART_WIDTH)
    }

    pub fn server_addr(&self) -> Result<SocketAddr, PlannerError> {
        let raw = self
            .server
            .as_ref()
            .and_then(|server| server.addr.as_deref())
            .unwrap_or(DEFAULT_SERVER_ADDR);
        raw.parse().map_err(|_| {
            PlannerError::ConfigParse(format!("server.addr is not a socket address: {raw}"))
        })
    }

    pub fn validate(&self) -> Result<(), PlannerError> {
        let total_hours = self.default_total_hours();
        if !(1.0..=24.0).contains(&total_hours) {
            return Err(PlannerError::ConfigParse(format!(
                "defaults.total_hours must be between 1 and 24 (found {total_hours})"
            )));
        }

        let num_subjects = self.default_num_subjects();
        if !(1..=10).contains(&num_subjects) {
            return Err(PlannerError::ConfigParse(format!(
                "defaults.num_subjects must be between 1 and 10 (found {num_subjects})"
            )));
        }

        let chart_width = self.chart_width();
        if !(10..=200).contains(&chart_width) {
            return Err(PlannerError::ConfigParse(format!(
                "output.chart_width must be between 10 and 200 (found {chart_width})"
            )));
        }

        self.server_addr()?;
        Ok(())
    }
}
