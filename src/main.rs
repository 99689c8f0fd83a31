//! Wealth Projections CLI
//!
//! Runs any of the calculators from the command line, a CSV batch of them, or
//! updates the stored theme/language preferences.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use wealth_projections::batch;
use wealth_projections::report::{render_catalog, render_incomplete, render_outcome, render_settings};
use wealth_projections::settings::DEFAULT_SETTINGS_PATH;
use wealth_projections::{calculate, CalculatorKind, JsonFileStore, RawFields, Settings};

#[derive(Parser)]
#[command(name = "wealth")]
#[command(about = "Financial planning calculators", long_about = None)]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Preferences file (theme, language)
    #[arg(long, global = true, env = "WEALTH_SETTINGS", default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mutual fund lumpsum growth
    Mf {
        #[arg(long)]
        investment: Option<String>,
        /// Expected return, % per year
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
    },
    /// One-time investment growth
    Lumpsum {
        #[arg(long)]
        investment: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
    },
    /// Future value with compounding frequency
    FutureValue {
        #[arg(long)]
        present_value: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
        /// Compounding periods per year (default 1)
        #[arg(long)]
        frequency: Option<String>,
    },
    /// Alternative investment fund, net of annual management fee
    Aif {
        #[arg(long)]
        investment: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
        /// Management fee, % per year (default 2)
        #[arg(long)]
        fee: Option<String>,
    },
    /// Systematic investment plan
    Sip {
        #[arg(long)]
        monthly: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
    },
    /// SIP with an annual increase
    SipTopup {
        #[arg(long)]
        monthly: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
        /// Annual increase, %
        #[arg(long)]
        topup: Option<String>,
    },
    /// Systematic withdrawal plan
    Swp {
        #[arg(long)]
        corpus: Option<String>,
        #[arg(long)]
        withdrawal: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
    },
    /// SIP accumulation followed by SWP
    SipSwp {
        #[arg(long)]
        sip: Option<String>,
        #[arg(long)]
        swp: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        sip_years: Option<String>,
        #[arg(long)]
        swp_years: Option<String>,
    },
    /// Fixed deposit maturity
    Fd {
        #[arg(long)]
        principal: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        #[arg(long)]
        years: Option<String>,
        /// Compounding periods per year (default 4)
        #[arg(long)]
        frequency: Option<String>,
    },
    /// Education goal planning
    Education {
        #[arg(long)]
        cost: Option<String>,
        /// Inflation, % per year (default 6)
        #[arg(long)]
        inflation: Option<String>,
        #[arg(long)]
        years: Option<String>,
        #[arg(long)]
        rate: Option<String>,
    },
    /// Marriage goal planning
    Marriage {
        #[arg(long)]
        cost: Option<String>,
        /// Inflation, % per year (default 7)
        #[arg(long)]
        inflation: Option<String>,
        #[arg(long)]
        years: Option<String>,
        #[arg(long)]
        rate: Option<String>,
    },
    /// Retirement corpus planning
    Retirement {
        #[arg(long)]
        age: Option<String>,
        /// Retirement age (default 60)
        #[arg(long)]
        retirement_age: Option<String>,
        /// Current monthly expenses
        #[arg(long)]
        expenses: Option<String>,
        /// Inflation, % per year (default 6)
        #[arg(long)]
        inflation: Option<String>,
        #[arg(long)]
        rate: Option<String>,
        /// Life expectancy (default 80)
        #[arg(long)]
        life_expectancy: Option<String>,
    },
    /// List the calculators
    Catalog,
    /// Run a CSV of calculations
    Batch {
        /// Input CSV: id,calculator,amount,rate,years,extra1,extra2,extra3
        input: PathBuf,
        /// Output CSV (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show or change preferences
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show current preferences
    Show,
    /// Set the colour theme (default, dark, green, premium)
    Theme { name: String },
    /// Set the display language (en, hi, kn, ta)
    Language { code: String },
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Map a calculator subcommand onto the shared raw-field layout
fn calculator_fields(command: Commands) -> Option<(CalculatorKind, RawFields)> {
    let (kind, fields) = match command {
        Commands::Mf { investment, rate, years } => (
            CalculatorKind::Mf,
            RawFields { amount: text(investment), rate: text(rate), years: text(years), ..Default::default() },
        ),
        Commands::Lumpsum { investment, rate, years } => (
            CalculatorKind::Lumpsum,
            RawFields { amount: text(investment), rate: text(rate), years: text(years), ..Default::default() },
        ),
        Commands::FutureValue { present_value, rate, years, frequency } => (
            CalculatorKind::FutureValue,
            RawFields {
                amount: text(present_value),
                rate: text(rate),
                years: text(years),
                extra1: text(frequency),
                ..Default::default()
            },
        ),
        Commands::Aif { investment, rate, years, fee } => (
            CalculatorKind::Aif,
            RawFields {
                amount: text(investment),
                rate: text(rate),
                years: text(years),
                extra1: text(fee),
                ..Default::default()
            },
        ),
        Commands::Sip { monthly, rate, years } => (
            CalculatorKind::Sip,
            RawFields { amount: text(monthly), rate: text(rate), years: text(years), ..Default::default() },
        ),
        Commands::SipTopup { monthly, rate, years, topup } => (
            CalculatorKind::SipTopup,
            RawFields {
                amount: text(monthly),
                rate: text(rate),
                years: text(years),
                extra1: text(topup),
                ..Default::default()
            },
        ),
        Commands::Swp { corpus, withdrawal, rate, years } => (
            CalculatorKind::Swp,
            RawFields {
                amount: text(corpus),
                rate: text(rate),
                years: text(years),
                extra1: text(withdrawal),
                ..Default::default()
            },
        ),
        Commands::SipSwp { sip, swp, rate, sip_years, swp_years } => (
            CalculatorKind::SipSwp,
            RawFields {
                amount: text(sip),
                rate: text(rate),
                years: text(sip_years),
                extra1: text(swp),
                extra2: text(swp_years),
                ..Default::default()
            },
        ),
        Commands::Fd { principal, rate, years, frequency } => (
            CalculatorKind::Fd,
            RawFields {
                amount: text(principal),
                rate: text(rate),
                years: text(years),
                extra1: text(frequency),
                ..Default::default()
            },
        ),
        Commands::Education { cost, inflation, years, rate } => (
            CalculatorKind::Education,
            RawFields {
                amount: text(cost),
                rate: text(rate),
                years: text(years),
                extra1: text(inflation),
                ..Default::default()
            },
        ),
        Commands::Marriage { cost, inflation, years, rate } => (
            CalculatorKind::Marriage,
            RawFields {
                amount: text(cost),
                rate: text(rate),
                years: text(years),
                extra1: text(inflation),
                ..Default::default()
            },
        ),
        Commands::Retirement { age, retirement_age, expenses, inflation, rate, life_expectancy } => (
            CalculatorKind::Retirement,
            RawFields {
                amount: text(expenses),
                rate: text(rate),
                years: text(age),
                extra1: text(retirement_age),
                extra2: text(life_expectancy),
                extra3: text(inflation),
            },
        ),
        Commands::Catalog | Commands::Batch { .. } | Commands::Settings { .. } => return None,
    };
    Some((kind, fields))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut store = JsonFileStore::new(&cli.settings);
    let mut settings = Settings::load(&store);

    match cli.command {
        Commands::Catalog => {
            if cli.json {
                let ids: Vec<_> = CalculatorKind::ALL
                    .iter()
                    .map(|k| serde_json::json!({ "id": k.id(), "title": k.title(), "subtitle": k.subtitle() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&ids)?);
            } else {
                print!("{}", render_catalog(&settings));
            }
        }
        Commands::Batch { input, output } => {
            let rows = batch::load_requests(&input)
                .with_context(|| format!("reading batch file {}", input.display()))?;
            info!("loaded {} rows from {}", rows.len(), input.display());

            let outcomes = batch::run_batch(&rows);
            match output {
                Some(path) => {
                    batch::write_outcomes_to_path(&path, &outcomes)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Written {} rows to {}", outcomes.len(), path.display());
                }
                None => batch::write_outcomes(std::io::stdout().lock(), &outcomes)?,
            }
        }
        Commands::Settings { command } => {
            match command.unwrap_or(SettingsCommands::Show) {
                SettingsCommands::Show => {}
                SettingsCommands::Theme { name } => settings
                    .change_theme(&mut store, &name)
                    .with_context(|| format!("saving theme to {}", store.path().display()))?,
                SettingsCommands::Language { code } => settings
                    .change_language(&mut store, &code)
                    .with_context(|| format!("saving language to {}", store.path().display()))?,
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                print!("{}", render_settings(&settings));
            }
        }
        command => {
            if let Some((kind, fields)) = calculator_fields(command) {
                let outcome = calculate(kind, &fields);
                match (outcome, cli.json) {
                    (Some(outcome), true) => println!("{}", serde_json::to_string_pretty(&outcome)?),
                    (Some(outcome), false) => print!("{}", render_outcome(&outcome, &settings)),
                    (None, true) => println!("null"),
                    (None, false) => print!("{}", render_incomplete(kind, &settings)),
                }
            }
        }
    }

    Ok(())
}
