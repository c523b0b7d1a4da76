use diesel::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = crate::db::schema::rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Room {
    pub id: i32,
    pub building_name: String,
    pub number: String,
}

impl Room {
    pub fn display_name(&self) -> String {
        format!("{} - Room {}", self.building_name, self.number)
    }
}
