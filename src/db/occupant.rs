use diesel::prelude::*;
use diesel::result::Error;
use log::info;

use super::schema::occupants::{self, dsl::*};
use crate::models::occupant::{InsertableOccupant, Occupant};

pub fn insert(conn: &mut PgConnection, occupant: InsertableOccupant) -> Result<Occupant, Error> {
    let inserted: Occupant = diesel::insert_into(occupants::table)
        .values(&occupant)
        .returning(Occupant::as_returning())
        .get_result(conn)?;

    info!("Inserted occupant {} ({})", inserted.id, inserted.name);
    Ok(inserted)
}

pub fn find(conn: &mut PgConnection, target_id: i32) -> Result<Option<Occupant>, Error> {
    occupants
        .find(target_id)
        .select(Occupant::as_select())
        .first(conn)
        .optional()
}

pub fn get_all(conn: &mut PgConnection) -> Result<Vec<Occupant>, Error> {
    occupants
        .order(name.asc())
        .select(Occupant::as_select())
        .load(conn)
}

pub fn get_by_ids(conn: &mut PgConnection, ids: &[i32]) -> Result<Vec<Occupant>, Error> {
    occupants
        .filter(id.eq_any(ids))
        .select(Occupant::as_select())
        .load(conn)
}

/// Deleting an occupant cascades to their occupancies.
pub fn delete(conn: &mut PgConnection, target_id: i32) -> Result<usize, Error> {
    let deleted = diesel::delete(occupants.find(target_id)).execute(conn)?;
    info!("Deleted {} row(s) in occupants with ID: {}", deleted, target_id);
    Ok(deleted)
}
