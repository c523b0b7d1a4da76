use chrono::NaiveDate;
use diesel::dsl::now;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::QueryFragment;
use diesel::query_dsl::LoadQuery;
use diesel::result::Error;
use log::info;

use super::schema::occupancies::{self, dsl::*};
use crate::models::occupancy::{InsertableOccupancy, Occupancy, OccupancyStatus};
use crate::payment::{filter::filtered_query, OccupancyFilter};

pub fn insert(conn: &mut PgConnection, occupancy: InsertableOccupancy) -> Result<Occupancy, Error> {
    let inserted: Occupancy = diesel::insert_into(occupancies::table)
        .values(&occupancy)
        .returning(Occupancy::as_returning())
        .get_result(conn)?;

    info!(
        "Inserted occupancy {} for occupant {} in room {}",
        inserted.id, inserted.occupant_id, inserted.room_id
    );
    Ok(inserted)
}

pub fn find(conn: &mut PgConnection, target_id: i32) -> Result<Option<Occupancy>, Error> {
    occupancies
        .find(target_id)
        .select(Occupancy::as_select())
        .first(conn)
        .optional()
}

pub fn list(
    conn: &mut PgConnection,
    filters: &[OccupancyFilter],
    as_of: NaiveDate,
) -> Result<Vec<Occupancy>, Error> {
    filtered_query(filters, as_of)
        .select(Occupancy::as_select())
        .load(conn)
}

/// First occupancy of the occupant that has not been terminated.
pub fn current_for_occupant(
    conn: &mut PgConnection,
    target_occupant_id: i32,
) -> Result<Option<Occupancy>, Error> {
    occupancies
        .filter(occupant_id.eq(target_occupant_id))
        .filter(status.ne(OccupancyStatus::Terminated))
        .order(start_date.desc())
        .select(Occupancy::as_select())
        .first(conn)
        .optional()
}

/// Update that sets `last_payment_date` and nothing else. Payment status is
/// derived on read, so there is no stored status to refresh.
pub fn record_payment_statement(
    target_id: i32,
    paid_on: NaiveDate,
) -> impl RunQueryDsl<PgConnection> + LoadQuery<'static, PgConnection, Occupancy> + QueryFragment<Pg>
{
    diesel::update(occupancies.find(target_id))
        .set((last_payment_date.eq(Some(paid_on)), updated_at.eq(now)))
        .returning(Occupancy::as_returning())
}

pub fn record_payment(
    conn: &mut PgConnection,
    target_id: i32,
    paid_on: NaiveDate,
) -> Result<Occupancy, Error> {
    let updated: Occupancy = record_payment_statement(target_id, paid_on).get_result(conn)?;

    info!("Recorded payment on {} for occupancy {}", paid_on, target_id);
    Ok(updated)
}

pub fn terminate(
    conn: &mut PgConnection,
    target_id: i32,
    ended_on: NaiveDate,
) -> Result<Occupancy, Error> {
    let updated: Occupancy = diesel::update(occupancies.find(target_id))
        .set((
            status.eq(OccupancyStatus::Terminated),
            end_date.eq(Some(ended_on)),
            updated_at.eq(now),
        ))
        .returning(Occupancy::as_returning())
        .get_result(conn)?;

    info!("Terminated occupancy {} on {}", target_id, ended_on);
    Ok(updated)
}

pub fn delete(conn: &mut PgConnection, target_id: i32) -> Result<usize, Error> {
    let deleted = diesel::delete(occupancies.find(target_id)).execute(conn)?;
    info!("Deleted {} row(s) in occupancies with ID: {}", deleted, target_id);
    Ok(deleted)
}
