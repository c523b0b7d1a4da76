use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use bigdecimal::{BigDecimal, RoundingMode};
use chrono::NaiveDate;
use diesel::{result::Error, PgConnection};
use log::{info, warn};

use crate::{
    config::Config,
    db,
    models::occupancy::{InsertableOccupancy, Occupancy, OccupancyStatus},
    payment::OccupancyFilter,
    report::OccupancyRow,
};

/// A move-in as entered by the operator, before validation.
#[derive(Debug, Clone)]
pub struct OccupancyDraft {
    pub room_id: i32,
    pub occupant_id: i32,
    pub status: Option<OccupancyStatus>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub last_payment_date: Option<NaiveDate>,
    pub monthly_rent: BigDecimal,
    pub notes: Option<String>,
}

impl OccupancyDraft {
    pub fn validate(self) -> Result<InsertableOccupancy> {
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(anyhow!(
                    "End date {} is before start date {}",
                    end,
                    self.start_date
                ));
            }
        }

        if let Some(paid_on) = self.last_payment_date {
            check_payment_date(self.start_date, paid_on)?;
        }

        if self.monthly_rent < BigDecimal::from(0) {
            return Err(anyhow!("Monthly rent cannot be negative"));
        }

        Ok(InsertableOccupancy {
            room_id: self.room_id,
            occupant_id: self.occupant_id,
            status: self.status.unwrap_or_default(),
            start_date: self.start_date,
            end_date: self.end_date,
            last_payment_date: self.last_payment_date,
            monthly_rent: self.monthly_rent.with_scale_round(2, RoundingMode::HalfUp),
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        })
    }
}

/// A payment cannot predate the occupancy it pays for.
pub fn check_payment_date(start_date: NaiveDate, paid_on: NaiveDate) -> Result<()> {
    if paid_on < start_date {
        return Err(anyhow!(
            "Payment date {} is before start date {}",
            paid_on,
            start_date
        ));
    }
    Ok(())
}

fn not_found(id: i32) -> anyhow::Error {
    anyhow!("Occupancy {id} not found")
}

pub fn create(config: &Config, draft: OccupancyDraft) -> Result<Occupancy> {
    let insertable = draft.validate()?;
    let conn = &mut db::establish_connection(config)?;

    if db::room::find(conn, insertable.room_id)?.is_none() {
        return Err(anyhow!("Room {} not found", insertable.room_id));
    }
    if db::occupant::find(conn, insertable.occupant_id)?.is_none() {
        return Err(anyhow!("Occupant {} not found", insertable.occupant_id));
    }

    db::occupancy::insert(conn, insertable).context("Failed to insert occupancy")
}

pub fn list(
    config: &Config,
    filters: &[OccupancyFilter],
    as_of: NaiveDate,
) -> Result<Vec<OccupancyRow>> {
    let conn = &mut db::establish_connection(config)?;
    let occupancies = db::occupancy::list(conn, filters, as_of)
        .context("Failed to load occupancies")?;

    info!(
        "Loaded {} occupancies with filters [{}]",
        occupancies.len(),
        filters
            .iter()
            .map(OccupancyFilter::label)
            .collect::<Vec<_>>()
            .join(", ")
    );

    to_rows(conn, config, &occupancies, as_of)
}

pub fn show(config: &Config, id: i32, as_of: NaiveDate) -> Result<OccupancyRow> {
    let conn = &mut db::establish_connection(config)?;
    let occupancy = db::occupancy::find(conn, id)?.ok_or_else(|| not_found(id))?;

    to_rows(conn, config, std::slice::from_ref(&occupancy), as_of)?
        .pop()
        .ok_or_else(|| not_found(id))
}

pub fn record_payment(config: &Config, id: i32, paid_on: NaiveDate) -> Result<Occupancy> {
    let conn = &mut db::establish_connection(config)?;
    let occupancy = db::occupancy::find(conn, id)?.ok_or_else(|| not_found(id))?;
    check_payment_date(occupancy.start_date, paid_on)?;

    let updated = match db::occupancy::record_payment(conn, id, paid_on) {
        Ok(o) => o,
        Err(Error::NotFound) => return Err(not_found(id)),
        Err(e) => return Err(e).context("Failed to record payment"),
    };

    if !updated.is_active() {
        warn!("Recorded a payment on terminated occupancy {}", id);
    }

    Ok(updated)
}

pub fn terminate(config: &Config, id: i32, ended_on: NaiveDate) -> Result<Occupancy> {
    let conn = &mut db::establish_connection(config)?;
    let occupancy = db::occupancy::find(conn, id)?.ok_or_else(|| not_found(id))?;

    if occupancy.status == OccupancyStatus::Terminated {
        return Err(anyhow!("Occupancy {id} is already terminated"));
    }
    if ended_on < occupancy.start_date {
        return Err(anyhow!(
            "End date {} is before start date {}",
            ended_on,
            occupancy.start_date
        ));
    }

    db::occupancy::terminate(conn, id, ended_on).context("Failed to terminate occupancy")
}

pub fn delete(config: &Config, id: i32) -> Result<()> {
    let conn = &mut db::establish_connection(config)?;
    match db::occupancy::delete(conn, id)? {
        0 => Err(not_found(id)),
        _ => Ok(()),
    }
}

fn to_rows(
    conn: &mut PgConnection,
    config: &Config,
    occupancies: &[Occupancy],
    as_of: NaiveDate,
) -> Result<Vec<OccupancyRow>> {
    let room_ids: Vec<i32> = occupancies.iter().map(|o| o.room_id).collect();
    let occupant_ids: Vec<i32> = occupancies.iter().map(|o| o.occupant_id).collect();

    let rooms: HashMap<i32, _> = db::room::get_by_ids(conn, &room_ids)?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();
    let occupants: HashMap<i32, _> = db::occupant::get_by_ids(conn, &occupant_ids)?
        .into_iter()
        .map(|o| (o.id, o))
        .collect();

    Ok(occupancies
        .iter()
        .map(|o| {
            OccupancyRow::build(
                config,
                o,
                rooms.get(&o.room_id),
                occupants.get(&o.occupant_id),
                as_of,
            )
        })
        .collect())
}
