use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    config::Config,
    db,
    models::occupant::{Gender, InsertableOccupant, Occupant},
    report::OccupantRow,
};

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9()\-\s]{5,}$").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct OccupantDraft {
    pub name: String,
    pub phone_number: String,
    pub job: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub national_id: Option<String>,
    pub notes: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl OccupantDraft {
    pub fn validate(self) -> Result<InsertableOccupant> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(anyhow!("Occupant name is required"));
        }

        let phone_number = self.phone_number.trim().to_string();
        if phone_number.is_empty() {
            return Err(anyhow!("Phone number is required"));
        }
        if !PHONE_REGEX.is_match(&phone_number) {
            return Err(anyhow!("Invalid phone number: {phone_number}"));
        }

        let email = non_blank(self.email);
        if let Some(address) = &email {
            if !EMAIL_REGEX.is_match(address) {
                return Err(anyhow!("Invalid email address: {address}"));
            }
        }

        Ok(InsertableOccupant {
            name,
            phone_number,
            job: non_blank(self.job),
            email,
            address: non_blank(self.address),
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            national_id: non_blank(self.national_id),
            notes: non_blank(self.notes),
        })
    }
}

pub fn create(config: &Config, draft: OccupantDraft) -> Result<Occupant> {
    let insertable = draft.validate()?;
    let conn = &mut db::establish_connection(config)?;
    db::occupant::insert(conn, insertable).context("Failed to insert occupant")
}

/// Every occupant together with their current (non-terminated) occupancy.
pub fn list(config: &Config) -> Result<Vec<OccupantRow>> {
    let conn = &mut db::establish_connection(config)?;
    let occupants = db::occupant::get_all(conn).context("Failed to load occupants")?;

    occupants
        .iter()
        .map(|occupant| {
            let current = db::occupancy::current_for_occupant(conn, occupant.id)?;
            Ok(OccupantRow::build(occupant, current.as_ref()))
        })
        .collect()
}

pub fn delete(config: &Config, id: i32) -> Result<()> {
    let conn = &mut db::establish_connection(config)?;
    match db::occupant::delete(conn, id)? {
        0 => Err(anyhow!("Occupant {id} not found")),
        _ => Ok(()),
    }
}
