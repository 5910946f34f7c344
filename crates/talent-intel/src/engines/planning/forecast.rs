use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Staffing shortfall (or skill shortage) severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    Critical,
    High,
    Medium,
    Low,
    None,
}

impl GapSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::None => "None",
        }
    }

    /// Period risk from the end-of-period gap as a percentage of target.
    pub fn from_gap_percentage(gap_percentage: f64) -> Self {
        if gap_percentage < -15.0 {
            Self::Critical
        } else if gap_percentage < -10.0 {
            Self::High
        } else if gap_percentage < -5.0 {
            Self::Medium
        } else if gap_percentage < 0.0 {
            Self::Low
        } else {
            Self::None
        }
    }
}

/// Share of the open requisitions assumed fillable within one period.
const HIRING_CAPACITY: f64 = 0.7;
/// Hires per period never drop below this while demand remains.
const MIN_PERIOD_HIRES: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadcountForecast {
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start: Option<NaiveDate>,
    pub starting_headcount: u32,
    pub projected_attrition: u32,
    pub projected_hires: u32,
    pub ending_headcount: u32,
    pub target_headcount: u32,
    pub gap: i64,
    pub gap_percentage: f64,
    pub hiring_need: u32,
    pub cost_projection: f64,
    pub risk_level: GapSeverity,
    pub risk_level_label: &'static str,
}

/// Inputs for one sequential month-by-month simulation.
#[derive(Debug, Clone, Copy)]
pub(super) struct ForecastInputs {
    pub current_headcount: u32,
    pub target_headcount: u32,
    /// Annual attrition, in percent.
    pub attrition_rate: f64,
    /// Monthly target growth, in percent.
    pub growth_rate: f64,
    pub cost_per_hire: f64,
    pub periods: u32,
    pub start_date: Option<NaiveDate>,
}

pub(super) fn forecast(inputs: ForecastInputs) -> Vec<HeadcountForecast> {
    let monthly_attrition = inputs.attrition_rate / 12.0 / 100.0;
    let mut headcount = inputs.current_headcount;
    let mut forecasts = Vec::with_capacity(inputs.periods as usize);

    for i in 0..inputs.periods {
        let attrition = ((f64::from(headcount) * monthly_attrition).floor() as u32)
            .max(1)
            .min(headcount);

        let period_target = (f64::from(inputs.target_headcount)
            * (1.0 + inputs.growth_rate * f64::from(i + 1) / 100.0))
            .floor() as u32;

        let after_attrition = headcount - attrition;
        let hiring_need = period_target.saturating_sub(after_attrition);
        let hires = hiring_need.min(
            ((f64::from(hiring_need) * HIRING_CAPACITY).floor() as u32).max(MIN_PERIOD_HIRES),
        );
        let ending = after_attrition + hires;

        let gap = i64::from(ending) - i64::from(period_target);
        let gap_percentage = if period_target > 0 {
            gap as f64 / f64::from(period_target) * 100.0
        } else {
            0.0
        };
        let risk = GapSeverity::from_gap_percentage(gap_percentage);

        forecasts.push(HeadcountForecast {
            period: format!("Month {}", i + 1),
            period_start: inputs
                .start_date
                .and_then(|start| start.checked_add_months(Months::new(i))),
            starting_headcount: headcount,
            projected_attrition: attrition,
            projected_hires: hires,
            ending_headcount: ending,
            target_headcount: period_target,
            gap,
            gap_percentage,
            hiring_need,
            cost_projection: f64::from(hires) * inputs.cost_per_hire,
            risk_level: risk,
            risk_level_label: risk.label(),
        });

        headcount = ending;
    }

    forecasts
}

/// Projected effect of attrition alone, with no backfill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttritionImpact {
    pub current_headcount: u32,
    pub attrition_rate: f64,
    pub months: u32,
    pub projected_departures: u32,
    pub ending_headcount: u32,
    pub monthly_losses: Vec<u32>,
    pub replacement_cost: f64,
    /// Person-months lost assuming a quarter-productivity, three-month ramp per backfill.
    pub productivity_loss_estimate: f64,
}

const RAMP_PRODUCTIVITY_LOSS: f64 = 0.25;
const RAMP_MONTHS: f64 = 3.0;

pub(super) fn attrition_impact(
    current_headcount: u32,
    annual_rate: f64,
    months: u32,
    cost_per_hire: f64,
) -> AttritionImpact {
    let monthly_rate = annual_rate / 12.0 / 100.0;
    let mut remaining = current_headcount;
    let mut monthly_losses = Vec::with_capacity(months as usize);

    for _ in 0..months {
        let loss = ((f64::from(remaining) * monthly_rate).floor() as u32).min(remaining);
        monthly_losses.push(loss);
        remaining -= loss;
    }

    let departures = current_headcount - remaining;
    AttritionImpact {
        current_headcount,
        attrition_rate: annual_rate,
        months,
        projected_departures: departures,
        ending_headcount: remaining,
        monthly_losses,
        replacement_cost: f64::from(departures) * cost_per_hire,
        productivity_loss_estimate: f64::from(departures) * RAMP_PRODUCTIVITY_LOSS * RAMP_MONTHS,
    }
}
