use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::occupancy::OccupancyStatus;

/// Days after the reference date during which an occupancy still counts as paid.
pub const PAYMENT_WINDOW_DAYS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentState {
    Deposit,
    Terminated,
    Paid,
    Unpaid,
}

impl PaymentState {
    pub fn color(self) -> BadgeColor {
        match self {
            PaymentState::Deposit => BadgeColor::Info,
            PaymentState::Paid => BadgeColor::Success,
            PaymentState::Unpaid => BadgeColor::Warning,
            PaymentState::Terminated => BadgeColor::Danger,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentState::Deposit => "Deposit",
            PaymentState::Terminated => "Terminated",
            PaymentState::Paid => "Paid",
            PaymentState::Unpaid => "Unpaid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Info,
    Danger,
    Success,
    Warning,
}

impl BadgeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeColor::Info => "info",
            BadgeColor::Danger => "danger",
            BadgeColor::Success => "success",
            BadgeColor::Warning => "warning",
        }
    }
}

/// How a `deposit` occupancy is classified.
///
/// `Phase` treats deposit as a lifecycle phase and never looks at payment
/// dates. `TrackPayments` lets a deposit occupancy with a recorded payment
/// fall through to the recency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositPolicy {
    #[default]
    Phase,
    TrackPayments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    Plain,
    #[default]
    Verbose,
}

/// The date elapsed days are counted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceDate {
    LastPayment(NaiveDate),
    Start(NaiveDate),
}

impl ReferenceDate {
    pub fn of(start_date: NaiveDate, last_payment_date: Option<NaiveDate>) -> Self {
        match last_payment_date {
            Some(paid_on) => ReferenceDate::LastPayment(paid_on),
            None => ReferenceDate::Start(start_date),
        }
    }

    pub fn date(self) -> NaiveDate {
        match self {
            ReferenceDate::LastPayment(d) | ReferenceDate::Start(d) => d,
        }
    }
}

/// Whole days from `reference` to `as_of`. References in the future count as 0.
pub fn elapsed_days(reference: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - reference).num_days().max(0)
}

pub fn is_overdue(reference: NaiveDate, as_of: NaiveDate) -> bool {
    elapsed_days(reference, as_of) > PAYMENT_WINDOW_DAYS as i64
}

/// Earliest reference date that is not overdue on `as_of`:
/// `is_overdue(r, as_of)` holds exactly when `r < overdue_cutoff(as_of)`.
pub fn overdue_cutoff(as_of: NaiveDate) -> NaiveDate {
    as_of
        .checked_sub_days(Days::new(PAYMENT_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentStatus {
    pub state: PaymentState,
    /// Set only when the state was derived from payment recency.
    pub reference: Option<ReferenceDate>,
    pub elapsed_days: Option<i64>,
}

impl PaymentStatus {
    fn fixed(state: PaymentState) -> Self {
        PaymentStatus {
            state,
            reference: None,
            elapsed_days: None,
        }
    }

    pub fn color(&self) -> BadgeColor {
        self.state.color()
    }

    pub fn label(&self, style: LabelStyle) -> String {
        let plain = self.state.as_str().to_string();
        if style == LabelStyle::Plain {
            return plain;
        }

        let (Some(reference), Some(days)) = (self.reference, self.elapsed_days) else {
            return plain;
        };

        match (self.state, reference) {
            (PaymentState::Paid, ReferenceDate::LastPayment(_)) => {
                format!("Paid ({} ago)", days_phrase(days))
            }
            (PaymentState::Paid, ReferenceDate::Start(_)) => "Paid (New occupancy)".to_string(),
            (PaymentState::Unpaid, ReferenceDate::LastPayment(_)) => {
                format!("Unpaid ({} overdue)", days_phrase(days))
            }
            (PaymentState::Unpaid, ReferenceDate::Start(_)) => {
                format!("Unpaid ({} since start)", days_phrase(days))
            }
            _ => plain,
        }
    }
}

fn days_phrase(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Paid/unpaid judgement from payment recency alone.
pub fn assess_recency(
    start_date: NaiveDate,
    last_payment_date: Option<NaiveDate>,
    as_of: NaiveDate,
) -> PaymentStatus {
    let reference = ReferenceDate::of(start_date, last_payment_date);
    let days = elapsed_days(reference.date(), as_of);

    let state = if is_overdue(reference.date(), as_of) {
        PaymentState::Unpaid
    } else {
        PaymentState::Paid
    };

    PaymentStatus {
        state,
        reference: Some(reference),
        elapsed_days: Some(days),
    }
}

pub fn classify(
    status: OccupancyStatus,
    start_date: NaiveDate,
    last_payment_date: Option<NaiveDate>,
    as_of: NaiveDate,
    policy: DepositPolicy,
) -> PaymentStatus {
    match (status, policy, last_payment_date) {
        (OccupancyStatus::Terminated, _, _) => PaymentStatus::fixed(PaymentState::Terminated),
        (OccupancyStatus::Deposit, DepositPolicy::TrackPayments, Some(paid_on)) => {
            assess_recency(start_date, Some(paid_on), as_of)
        }
        (OccupancyStatus::Deposit, _, _) => PaymentStatus::fixed(PaymentState::Deposit),
    }
}
