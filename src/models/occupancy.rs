use std::fmt;
use std::io::Write;
use std::str::FromStr;

use anyhow::anyhow;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};

use crate::payment::classifier::{classify, DepositPolicy, PaymentStatus};

/// Stored lifecycle status of an occupancy. Paid/unpaid are never stored.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    Serialize,
    Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyStatus {
    #[default]
    Deposit,
    Terminated,
}

impl OccupancyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OccupancyStatus::Deposit => "deposit",
            OccupancyStatus::Terminated => "terminated",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OccupancyStatus::Deposit => "Deposit",
            OccupancyStatus::Terminated => "Terminated",
        }
    }

    /// Value/label pairs for a status picker.
    pub fn options() -> [(OccupancyStatus, &'static str); 2] {
        [
            (OccupancyStatus::Deposit, OccupancyStatus::Deposit.label()),
            (OccupancyStatus::Terminated, OccupancyStatus::Terminated.label()),
        ]
    }
}

impl fmt::Display for OccupancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OccupancyStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deposit" => Ok(OccupancyStatus::Deposit),
            "terminated" => Ok(OccupancyStatus::Terminated),
            other => Err(anyhow!("Unknown occupancy status: {other:?}")),
        }
    }
}

impl ToSql<Text, Pg> for OccupancyStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for OccupancyStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let raw = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        raw.parse::<OccupancyStatus>().map_err(Into::into)
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = crate::db::schema::occupancies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Occupancy {
    pub id: i32,
    pub room_id: i32,
    pub occupant_id: i32,
    pub status: OccupancyStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub last_payment_date: Option<NaiveDate>,
    pub monthly_rent: BigDecimal,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Occupancy {
    pub fn is_active(&self) -> bool {
        self.status != OccupancyStatus::Terminated
    }

    pub fn payment_status(&self, as_of: NaiveDate, policy: DepositPolicy) -> PaymentStatus {
        classify(
            self.status,
            self.start_date,
            self.last_payment_date,
            as_of,
            policy,
        )
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::db::schema::occupancies)]
pub struct InsertableOccupancy {
    pub room_id: i32,
    pub occupant_id: i32,
    pub status: OccupancyStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub last_payment_date: Option<NaiveDate>,
    pub monthly_rent: BigDecimal,
    pub notes: Option<String>,
}
