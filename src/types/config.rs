use crate::error::DiiError;
use crate::normalize::SourceHint;
use serde::Deserialize;

pub const DEFAULT_TOP: usize = 10;
pub const DEFAULT_ANTI_BELOW: f64 = -1.0;
pub const DEFAULT_PRO_FROM: f64 = 1.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiiConfig {
    pub input: Option<InputConfig>,
    pub report: Option<ReportConfig>,
    pub interpretation: Option<InterpretationConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub source: SourceHint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterpretationConfig {
    pub anti_inflammatory_below: Option<f64>,
    pub pro_inflammatory_from: Option<f64>,
}

/// Score bands used to label a DII score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub anti_inflammatory_below: f64,
    pub pro_inflammatory_from: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            anti_inflammatory_below: DEFAULT_ANTI_BELOW,
            pro_inflammatory_from: DEFAULT_PRO_FROM,
        }
    }
}

impl DiiConfig {
    pub fn source(&self) -> SourceHint {
        self.input
            .as_ref()
            .map(|input| input.source)
            .unwrap_or_default()
    }

    pub fn format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn top(&self) -> usize {
        self.report
            .as_ref()
            .and_then(|report| report.top)
            .unwrap_or(DEFAULT_TOP)
    }

    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        match &self.interpretation {
            Some(interpretation) => Thresholds {
                anti_inflammatory_below: interpretation
                    .anti_inflammatory_below
                    .unwrap_or(defaults.anti_inflammatory_below),
                pro_inflammatory_from: interpretation
                    .pro_inflammatory_from
                    .unwrap_or(defaults.pro_inflammatory_from),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), DiiError> {
        if self.top() == 0 {
            return Err(DiiError::ConfigParse(
                "report.top must be at least 1".to_string(),
            ));
        }

        let thresholds = self.thresholds();
        if !thresholds.anti_inflammatory_below.is_finite()
            || !thresholds.pro_inflammatory_from.is_finite()
        {
            return Err(DiiError::ConfigParse(
                "interpretation thresholds must be finite numbers".to_string(),
            ));
        }
        if thresholds.anti_inflammatory_below >= thresholds.pro_inflammatory_from {
            return Err(DiiError::ConfigParse(format!(
                "interpretation.anti_inflammatory_below ({:.2}) must be below pro_inflammatory_from ({:.2})",
                thresholds.anti_inflammatory_below, thresholds.pro_inflammatory_from
            )));
        }

        Ok(())
    }
}
