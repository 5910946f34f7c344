use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use talent_intel::engines::benchmark::{presets as benchmark_presets, BenchmarkEngine};
use talent_intel::engines::planning::PlanningScenario;
use talent_intel::engines::retention::{presets as retention_presets, RetentionRiskClassifier};
use talent_intel::engines::scoring::DefinitionError;
use talent_intel::engines::talent::{presets as talent_presets, TalentScoringEngine};
use talent_intel::error::AppError;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum TalentPreset {
    Performance,
    Potential,
    Engagement,
}

impl TalentPreset {
    pub(crate) fn engine(self) -> Result<TalentScoringEngine, DefinitionError> {
        match self {
            Self::Performance => talent_presets::performance_engine(),
            Self::Potential => talent_presets::potential_engine(),
            Self::Engagement => talent_presets::engagement_engine(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum BenchmarkPreset {
    Hr,
    Engagement,
    Recruitment,
}

impl BenchmarkPreset {
    pub(crate) fn engine(self) -> Result<BenchmarkEngine, DefinitionError> {
        match self {
            Self::Hr => benchmark_presets::hr_benchmarks(),
            Self::Engagement => benchmark_presets::engagement_benchmarks(),
            Self::Recruitment => benchmark_presets::recruitment_benchmarks(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum RetentionPreset {
    Standard,
    HighPerformer,
}

impl RetentionPreset {
    pub(crate) fn classifier(self) -> Result<RetentionRiskClassifier, DefinitionError> {
        match self {
            Self::Standard => retention_presets::standard_classifier(),
            Self::HighPerformer => retention_presets::high_performer_classifier(),
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_scenario(raw: &str) -> Result<PlanningScenario, String> {
    raw.parse::<PlanningScenario>()
        .map_err(|err| format!("unknown scenario '{raw}': {err}"))
}

pub(crate) fn print_report<T: Serialize>(report: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date(" 2026-03-01 "),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date"))
        );
        assert!(parse_date("03/01/2026").is_err());
    }

    #[test]
    fn parses_scenarios_by_name() {
        assert_eq!(parse_scenario("aggressive"), Ok(PlanningScenario::Aggressive));
        assert!(parse_scenario("boom").is_err());
    }

    #[test]
    fn every_preset_builds() {
        for preset in TalentPreset::value_variants() {
            assert!(preset.engine().is_ok());
        }
        for preset in BenchmarkPreset::value_variants() {
            assert!(preset.engine().is_ok());
        }
        for preset in RetentionPreset::value_variants() {
            assert!(preset.classifier().is_ok());
        }
    }
}
