use diesel::prelude::*;
use diesel::result::Error;

use super::schema::rooms::dsl::*;
use crate::models::room::Room;

pub fn find(conn: &mut PgConnection, target_id: i32) -> Result<Option<Room>, Error> {
    rooms
        .find(target_id)
        .select(Room::as_select())
        .first(conn)
        .optional()
}

pub fn get_by_ids(conn: &mut PgConnection, ids: &[i32]) -> Result<Vec<Room>, Error> {
    rooms
        .filter(id.eq_any(ids))
        .select(Room::as_select())
        .load(conn)
}
