use chrono::NaiveDate;
use diesel::pg::Pg;
use diesel::prelude::*;

use super::classifier::{is_overdue, overdue_cutoff, ReferenceDate};
use crate::db::schema::occupancies;
use crate::models::occupancy::{Occupancy, OccupancyStatus};

/// List filters for occupancies. Each one can be checked against a loaded
/// record or pushed down into the occupancies query, and both forms agree.
///
/// `PaidUp` and `Overdue` look at payment recency of every non-terminated
/// occupancy, whatever the deposit policy of the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyFilter {
    Status(OccupancyStatus),
    ActiveOnly,
    PaidUp,
    Overdue,
}

impl OccupancyFilter {
    pub fn label(&self) -> String {
        match self {
            OccupancyFilter::Status(status) => format!("Status: {}", status.label()),
            OccupancyFilter::ActiveOnly => "Active Only".to_string(),
            OccupancyFilter::PaidUp => "Paid Up (Last 30 days)".to_string(),
            OccupancyFilter::Overdue => "Overdue Payments (30+ days)".to_string(),
        }
    }

    pub fn matches(&self, occupancy: &Occupancy, as_of: NaiveDate) -> bool {
        let reference = ReferenceDate::of(occupancy.start_date, occupancy.last_payment_date);

        match self {
            OccupancyFilter::Status(status) => occupancy.status == *status,
            OccupancyFilter::ActiveOnly => occupancy.is_active(),
            OccupancyFilter::PaidUp => {
                occupancy.is_active() && !is_overdue(reference.date(), as_of)
            }
            OccupancyFilter::Overdue => {
                occupancy.is_active() && is_overdue(reference.date(), as_of)
            }
        }
    }

    pub fn apply<'a>(
        &self,
        query: occupancies::BoxedQuery<'a, Pg>,
        as_of: NaiveDate,
    ) -> occupancies::BoxedQuery<'a, Pg> {
        use occupancies::{last_payment_date, start_date, status};

        let cutoff = overdue_cutoff(as_of);

        match self {
            OccupancyFilter::Status(wanted) => query.filter(status.eq(*wanted)),
            OccupancyFilter::ActiveOnly => query.filter(status.ne(OccupancyStatus::Terminated)),
            // reference date is last_payment_date, or start_date when never paid
            OccupancyFilter::PaidUp => query
                .filter(status.ne(OccupancyStatus::Terminated))
                .filter(
                    last_payment_date
                        .is_null()
                        .and(start_date.ge(cutoff))
                        .or(last_payment_date
                            .is_not_null()
                            .and(last_payment_date.assume_not_null().ge(cutoff))),
                ),
            OccupancyFilter::Overdue => query
                .filter(status.ne(OccupancyStatus::Terminated))
                .filter(
                    last_payment_date
                        .is_null()
                        .and(start_date.lt(cutoff))
                        .or(last_payment_date
                            .is_not_null()
                            .and(last_payment_date.assume_not_null().lt(cutoff))),
                ),
        }
    }
}

/// Boxed occupancies query narrowed by every filter.
pub fn filtered_query<'a>(
    filters: &[OccupancyFilter],
    as_of: NaiveDate,
) -> occupancies::BoxedQuery<'a, Pg> {
    filters.iter().fold(
        occupancies::table.order(occupancies::id.asc()).into_boxed(),
        |query, filter| filter.apply(query, as_of),
    )
}
