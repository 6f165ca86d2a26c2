mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use platform_authn::{AuthService, FileSessionStore};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{
    Dataset, HrModule,
    analytics::{analytics, dashboard},
    screens::{AttendanceFilter, EmployeeFilter, ImportOutcome, PayrollFilter},
};
use serde::Serialize;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "hr-console", version, about = "HR dashboard data from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a freshly generated dataset as JSON
    Generate {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write one screen's CSV report into a directory
    Export {
        #[arg(value_enum)]
        report: Report,
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Import employees from a CSV file into a generated dataset
    Import { file: PathBuf },
    /// Print workforce analytics as JSON
    Analytics,
    /// Print the dashboard summary as JSON
    Dashboard,
    /// Sign in with one of the built-in accounts
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Report {
    Employees,
    Attendance,
    Payroll,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        Commands::Generate { out } => generate(&config, out)?,
        Commands::Export { report, dir } => export(&config, report, dir)?,
        Commands::Import { file } => import(&config, file)?,
        Commands::Analytics => {
            let data = Dataset::generate(&config.dataset)?;
            print_json(&analytics(
                &data.employees,
                &data.candidates,
                Utc::now().date_naive(),
            ))?;
        }
        Commands::Dashboard => {
            let data = Dataset::generate(&config.dataset)?;
            print_json(&dashboard(&data, Utc::now().date_naive()))?;
        }
        Commands::Login { email, password } => {
            let user = auth(&config)
                .login(&email, &password)
                .await
                .context("login failed")?;
            println!("signed in as {} ({})", user.full_name(), user.role);
        }
        Commands::Logout => {
            auth(&config).logout()?;
            println!("signed out");
        }
        Commands::Whoami => match auth(&config).restore()? {
            Some(user) => print_json(&user)?,
            None => bail!("not signed in"),
        },
    }

    Ok(())
}

fn auth(config: &AppConfig) -> AuthService<FileSessionStore> {
    AuthService::new(FileSessionStore::new(&config.session_dir)).with_latency(config.login_delay)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn generate(config: &AppConfig, out: Option<PathBuf>) -> Result<()> {
    let data = Dataset::generate(&config.dataset)?;
    let json = serde_json::to_string_pretty(&data)?;
    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "dataset written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn export(config: &AppConfig, report: Report, dir: PathBuf) -> Result<()> {
    let hr = HrModule::from_dataset(Dataset::generate(&config.dataset)?)?;
    let export = match report {
        Report::Employees => hr.employees.export(&EmployeeFilter::default())?,
        Report::Attendance => hr.attendance.export(&AttendanceFilter::default())?,
        Report::Payroll => hr.payroll.export(&PayrollFilter::default())?,
    };
    let path = dir.join(export.file_name);
    std::fs::write(&path, export.contents)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

fn import(config: &AppConfig, file: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;
    let mut hr = HrModule::from_dataset(Dataset::generate(&config.dataset)?)?;
    match hr.employees.import(&text, Utc::now().date_naive())? {
        ImportOutcome::Imported(count) => {
            let total = hr.employees.employees()?.len();
            println!("imported {count} employees ({total} on file)");
        }
        ImportOutcome::NoData => println!("no data imported"),
    }
    Ok(())
}
