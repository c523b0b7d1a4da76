use anyhow::Result;
use bigdecimal::BigDecimal;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::{error, info, LevelFilter};

use roomkeep::{
    config::{self, Config},
    logger::setup_logger,
    models::{occupancy::OccupancyStatus, occupant::Gender},
    payment::OccupancyFilter,
    report,
    services::{
        occupancies::{self, OccupancyDraft},
        occupants::{self, OccupantDraft},
    },
};

#[derive(Parser)]
#[command(name = "roomkeep", version, about = "Occupancy and occupant back office")]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List occupancies with their payment status
    List {
        #[arg(long)]
        status: Option<OccupancyStatus>,
        /// Only occupancies that are not terminated
        #[arg(long)]
        active: bool,
        /// Paid within the last 30 days
        #[arg(long)]
        paid_up: bool,
        /// No payment for more than 30 days
        #[arg(long)]
        overdue: bool,
        /// Classify as of this date instead of today
        #[arg(long, value_name = "DATE")]
        as_of: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Show a single occupancy
    Show {
        id: i32,
        #[arg(long, value_name = "DATE")]
        as_of: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Record a rent payment (defaults to today)
    Pay {
        id: i32,
        #[arg(long, value_name = "DATE")]
        on: Option<NaiveDate>,
    },
    /// Mark an occupancy as terminated
    Terminate {
        id: i32,
        #[arg(long, value_name = "DATE")]
        end_date: Option<NaiveDate>,
    },
    /// Create an occupancy for an occupant in a room
    MoveIn {
        #[arg(long)]
        room: i32,
        #[arg(long)]
        occupant: i32,
        #[arg(long)]
        rent: BigDecimal,
        #[arg(long, value_name = "DATE")]
        start: Option<NaiveDate>,
        #[arg(long, value_name = "DATE")]
        end: Option<NaiveDate>,
        #[arg(long, value_name = "DATE")]
        last_payment: Option<NaiveDate>,
        #[arg(long)]
        status: Option<OccupancyStatus>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an occupancy
    Remove { id: i32 },
    /// List occupants and their current occupancy
    Occupants {
        #[arg(long)]
        json: bool,
    },
    /// Register a new occupant
    AddOccupant {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        job: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long, value_name = "DATE")]
        date_of_birth: Option<NaiveDate>,
        #[arg(long)]
        gender: Option<Gender>,
        #[arg(long)]
        national_id: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an occupant and their occupancies
    RemoveOccupant { id: i32 },
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn run(config: &Config, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List {
            status,
            active,
            paid_up,
            overdue,
            as_of,
            json,
        } => {
            let mut filters: Vec<OccupancyFilter> =
                status.map(OccupancyFilter::Status).into_iter().collect();
            if active {
                filters.push(OccupancyFilter::ActiveOnly);
            }
            if paid_up {
                filters.push(OccupancyFilter::PaidUp);
            }
            if overdue {
                filters.push(OccupancyFilter::Overdue);
            }

            let rows = occupancies::list(config, &filters, as_of.unwrap_or_else(today))?;
            if json {
                println!("{}", report::to_json(&rows)?);
            } else {
                print!("{}", report::render_table(&rows));
            }
        }
        Commands::Show { id, as_of, json } => {
            let row = occupancies::show(config, id, as_of.unwrap_or_else(today))?;
            if json {
                println!("{}", report::to_json(&row)?);
            } else {
                print!("{}", report::render_table(std::slice::from_ref(&row)));
            }
        }
        Commands::Pay { id, on } => {
            let paid_on = on.unwrap_or_else(today);
            let updated = occupancies::record_payment(config, id, paid_on)?;
            let status = updated.payment_status(today(), config.deposit_policy);
            println!(
                "Occupancy #{} payment recorded on {}: {}",
                updated.id,
                paid_on,
                report::badge(&status.label(config.label_style()), status.color())
            );
        }
        Commands::Terminate { id, end_date } => {
            let updated = occupancies::terminate(config, id, end_date.unwrap_or_else(today))?;
            println!("Occupancy #{} terminated", updated.id);
        }
        Commands::MoveIn {
            room,
            occupant,
            rent,
            start,
            end,
            last_payment,
            status,
            notes,
        } => {
            let created = occupancies::create(
                config,
                OccupancyDraft {
                    room_id: room,
                    occupant_id: occupant,
                    status,
                    start_date: start.unwrap_or_else(today),
                    end_date: end,
                    last_payment_date: last_payment,
                    monthly_rent: rent,
                    notes,
                },
            )?;
            println!("Created occupancy #{}", created.id);
        }
        Commands::Remove { id } => {
            occupancies::delete(config, id)?;
            println!("Deleted occupancy #{id}");
        }
        Commands::Occupants { json } => {
            let rows = occupants::list(config)?;
            if json {
                println!("{}", report::to_json(&rows)?);
            } else {
                print!("{}", report::render_occupants(&rows));
            }
        }
        Commands::AddOccupant {
            name,
            phone,
            email,
            job,
            address,
            date_of_birth,
            gender,
            national_id,
            notes,
        } => {
            let created = occupants::create(
                config,
                OccupantDraft {
                    name,
                    phone_number: phone,
                    job,
                    email,
                    address,
                    date_of_birth,
                    gender,
                    national_id,
                    notes,
                },
            )?;
            println!("Created occupant #{} ({})", created.id, created.name);
        }
        Commands::RemoveOccupant { id } => {
            occupants::delete(config, id)?;
            println!("Deleted occupant #{id}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    setup_logger(LevelFilter::Trace)?;
    let config = config::read_config();
    log::set_max_level(config.log_level_filter());
    info!("Deposit policy: {:?}", config.deposit_policy);

    if let Err(err) = run(&config, cli.cmd) {
        error!("{:#}", err);
        std::process::exit(1);
    }

    Ok(())
}
