use anyhow::Result;
use clap::{Parser, Subcommand};

use presupuesto::cli::{
    handle_breakdown_command, handle_month_command, BreakdownCommands, CliContext, MonthCommands,
};
use presupuesto::config::{paths::PresupuestoPaths, settings::Settings};
use presupuesto::logging::init_tracing;
use presupuesto::services::{MonthService, PeriodService};
use presupuesto::storage::{validate_user_id, JsonBudgetStore};

#[derive(Parser)]
#[command(
    name = "presupuesto",
    version,
    about = "Monthly income and expense budgets",
    long_about = "Presupuesto keeps one budget per calendar month: income and expense \
                  rows, optional breakdowns into sub-items, and totals that are always \
                  computed from the rows."
)]
struct Cli {
    /// Budget owner (overrides the configured user id)
    #[arg(short, long, global = true, env = "PRESUPUESTO_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Month commands
    #[command(subcommand)]
    Month(MonthCommands),

    /// Breakdown (sub-item) commands
    #[command(subcommand)]
    Breakdown(BreakdownCommands),

    /// Write default settings and create the data directories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = PresupuestoPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let user_id = cli.user.clone().unwrap_or_else(|| settings.user_id.clone());
    validate_user_id(&user_id)?;

    let service = MonthService::new(JsonBudgetStore::new(paths.data_dir()));
    let ctx = CliContext {
        service: &service,
        settings: &settings,
        periods: PeriodService::new(),
        user_id,
    };

    match cli.command {
        Some(Commands::Month(cmd)) => handle_month_command(&ctx, cmd)?,
        Some(Commands::Breakdown(cmd)) => handle_breakdown_command(&ctx, cmd)?,
        Some(Commands::Init) => {
            println!("Initializing Presupuesto at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("New months start from '{}' with these categories:", settings.default_seed);
            println!("  Incomes:  {}", settings.default_categories.incomes.join(", "));
            println!("  Expenses: {}", settings.default_categories.expenses.join(", "));
            println!();
            println!("Run 'presupuesto month new' to create this month's budget.");
        }
        Some(Commands::Config) => {
            println!("Presupuesto Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  User id:      {}", ctx.user_id);
            println!("  Currency:     {}", settings.currency_symbol);
            println!("  Default seed: {}", settings.default_seed);
            println!("  Incomes:      {}", settings.default_categories.incomes.join(", "));
            println!("  Expenses:     {}", settings.default_categories.expenses.join(", "));
        }
        None => {
            println!("Presupuesto - monthly budgets");
            println!();
            println!("Run 'presupuesto --help' for usage information.");
        }
    }

    Ok(())
}
