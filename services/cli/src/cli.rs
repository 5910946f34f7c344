use crate::demo::run_demo;
use crate::infra::{
    parse_date, parse_scenario, print_report, BenchmarkPreset, RetentionPreset, TalentPreset,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use talent_intel::config::AppConfig;
use talent_intel::engines::planning::{PlanRequest, PlanningScenario, WorkforcePlanner};
use talent_intel::error::AppError;
use talent_intel::input::read_metric_file;
use talent_intel::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "talent-intel",
    about = "Score, benchmark and forecast workforce metrics from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a person against a component preset
    Talent(TalentArgs),
    /// Benchmark organisational KPIs against an industry catalogue
    Benchmark(BenchmarkArgs),
    /// Classify an employee's retention risk
    Retention(RetentionArgs),
    /// Forecast headcount month by month under a scenario
    Plan(PlanArgs),
    /// Project attrition losses with no backfill
    Attrition(AttritionArgs),
    /// Run every engine over built-in sample data
    Demo,
}

#[derive(Args, Debug)]
struct TalentArgs {
    #[arg(long, value_enum, default_value = "performance")]
    preset: TalentPreset,
    /// Identifier of the person being scored
    #[arg(long)]
    subject: String,
    /// Display name (defaults to the subject id)
    #[arg(long)]
    name: Option<String>,
    /// Metric file (.csv with metric_id,value rows or a flat .json object)
    #[arg(long)]
    metrics: PathBuf,
}

#[derive(Args, Debug)]
struct BenchmarkArgs {
    #[arg(long, value_enum, default_value = "hr")]
    preset: BenchmarkPreset,
    /// Identifier of the organisation or unit being benchmarked
    #[arg(long)]
    subject: String,
    /// Metric file (.csv with metric_id,value rows or a flat .json object)
    #[arg(long)]
    metrics: PathBuf,
}

#[derive(Args, Debug)]
struct RetentionArgs {
    #[arg(long, value_enum, default_value = "standard")]
    preset: RetentionPreset,
    /// Employee identifier
    #[arg(long)]
    subject: String,
    /// Display name (defaults to the subject id)
    #[arg(long)]
    name: Option<String>,
    /// Metric file (.csv with metric_id,value rows or a flat .json object)
    #[arg(long)]
    metrics: PathBuf,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Current headcount
    #[arg(long)]
    current: u32,
    /// Target headcount
    #[arg(long)]
    target: u32,
    #[arg(long, value_parser = parse_scenario, default_value = "baseline")]
    scenario: PlanningScenario,
    /// Planning horizon in months (at most 120)
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(0..=120))]
    horizon: u32,
    /// Monthly target growth in percent
    #[arg(long, default_value_t = 0.0)]
    growth_rate: f64,
    /// First month of the plan (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    start: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct AttritionArgs {
    #[arg(long)]
    headcount: u32,
    /// Annual attrition rate in percent
    #[arg(long)]
    rate: f64,
    #[arg(long, default_value_t = 12)]
    months: u32,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "talent-intel starting");

    match cli.command {
        Command::Talent(args) => {
            let engine = args.preset.engine()?;
            let metrics = read_metric_file(&args.metrics)?;
            let name = args.name.as_deref().unwrap_or(&args.subject);
            print_report(&engine.score(&args.subject, name, &metrics, None))
        }
        Command::Benchmark(args) => {
            let engine = args.preset.engine()?;
            let metrics = read_metric_file(&args.metrics)?;
            print_report(&engine.analyze(&args.subject, &metrics, None))
        }
        Command::Retention(args) => {
            let classifier = args.preset.classifier()?;
            let metrics = read_metric_file(&args.metrics)?;
            let name = args.name.as_deref().unwrap_or(&args.subject);
            print_report(&classifier.assess(&args.subject, name, &metrics, None))
        }
        Command::Plan(args) => {
            let mut request = PlanRequest::new("cli-plan", "cli", args.current, args.target)
                .with_scenario(args.scenario)
                .with_horizon(args.horizon)
                .with_growth_rate(args.growth_rate);
            if let Some(start) = args.start {
                request = request.starting(start);
            }
            let planner = WorkforcePlanner::new(config.planning);
            print_report(&planner.create_plan(&request, None))
        }
        Command::Attrition(args) => {
            let planner = WorkforcePlanner::new(config.planning);
            print_report(&planner.attrition_impact(args.headcount, args.rate, args.months))
        }
        Command::Demo => run_demo(&config),
    }
}
