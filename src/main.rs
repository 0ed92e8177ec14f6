//! Investment Calculator CLI
//!
//! Command-line interface for projecting a deposit into tax-deferred and
//! tax-free accounts, singly or in batches from CSV.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use investment_calculator::inputs::load_scenarios;
use investment_calculator::{
    AccountKind, InvestmentInputs, ProjectionConfig, ProjectionResult, ProjectionRow,
    ScenarioRunner,
};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "investment_calculator", version, about = "Compare tax-deferred and tax-free investment growth")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a single deposit
    Calculate(CalculateArgs),
    /// Project every scenario in a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct PolicyArgs {
    /// Accept tax rates above 100%
    #[arg(long)]
    no_tax_rate_ceiling: bool,
}

impl PolicyArgs {
    fn config(&self) -> ProjectionConfig {
        if self.no_tax_rate_ceiling {
            ProjectionConfig::permissive()
        } else {
            ProjectionConfig::default()
        }
    }
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// Current marginal tax rate (%)
    #[arg(long)]
    current_tax_rate: Option<f64>,

    /// Expected marginal tax rate in retirement (%)
    #[arg(long)]
    retirement_tax_rate: Option<f64>,

    /// Amount deposited ($)
    #[arg(long)]
    deposit_amount: Option<f64>,

    /// Years invested (whole number)
    #[arg(long)]
    years_invested: Option<f64>,

    /// Expected annual return (%)
    #[arg(long)]
    roi: Option<f64>,

    /// Expected annual inflation (%)
    #[arg(long)]
    inflation: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    policy: PolicyArgs,
}

impl CalculateArgs {
    fn inputs(&self) -> InvestmentInputs {
        InvestmentInputs {
            current_tax_rate: self.current_tax_rate,
            retirement_tax_rate: self.retirement_tax_rate,
            deposit_amount: self.deposit_amount,
            years_invested: self.years_invested,
            roi: self.roi,
            inflation: self.inflation,
        }
    }
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Scenario CSV (id + the six input columns)
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Output CSV (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    policy: PolicyArgs,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calculate(args) => run_calculate(&args),
        Command::Batch(args) => run_batch(&args),
    }
}

fn run_calculate(args: &CalculateArgs) -> Result<()> {
    let runner = ScenarioRunner::with_config(args.policy.config());
    let inputs = args.inputs();
    if inputs.is_empty() && !args.json {
        println!("No inputs supplied; see `investment_calculator calculate --help`.");
        return Ok(());
    }

    let result = runner.run(&inputs);

    if args.json {
        let row = ProjectionRow::from_result("cli", &result);
        println!("{}", serde_json::to_string_pretty(&row)?);
        return Ok(());
    }

    if !result.display_results {
        println!("Inputs are incomplete or out of range; no results to display.");
        return Ok(());
    }

    print_report(&inputs, &result);
    Ok(())
}

fn print_report(inputs: &InvestmentInputs, result: &ProjectionResult) {
    let deposit = inputs.deposit_amount.unwrap_or_default();

    println!("Investment Projection");
    println!("=====================\n");
    println!("  Nominal future value:            ${:>14.2}", result.nominal_future_value);
    println!("  Inflation-adjusted future value: ${:>14.2}", result.inflation_future_value);
    println!("  Real rate of return:              {:>14.3}%", result.real_rate_of_return);
    println!("  Nominal growth:                  ${:>14.2}", result.nominal_growth(deposit));
    println!("  Inflation-adjusted growth:       ${:>14.2}", result.inflation_adjusted_growth(deposit));

    for kind in AccountKind::ALL {
        let account = result.account(kind);
        println!("\n{}:", kind.label());
        println!("  Tax refund:                      ${:>14.2}", account.tax_refund);
        println!("  Withdrawal tax:                  ${:>14.2}", account.withdrawal_tax);
        println!("  Future value after tax:          ${:>14.2}", account.future_value_after_tax);
        println!(
            "  After tax, refund reinvested:    ${:>14.2}",
            account.future_value_after_tax_with_refund_reinvested
        );
    }
}

fn run_batch(args: &BatchArgs) -> Result<()> {
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("failed to load scenarios from {}", args.input.display()))?;

    let runner = ScenarioRunner::with_config(args.policy.config());

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let written = runner.run_batch_to_csv(&scenarios, writer)?;
    info!("Wrote {} result rows", written);
    Ok(())
}
