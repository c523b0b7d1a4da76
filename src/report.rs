use anyhow::Result;
use bigdecimal::{BigDecimal, RoundingMode};
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::config::Config;
use crate::models::{occupancy::Occupancy, occupant::Occupant, room::Room};
use crate::payment::{BadgeColor, PaymentState};

const DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyRow {
    pub id: i32,
    pub building: String,
    pub room: String,
    pub occupant: String,
    pub phone: String,
    pub payment_status: String,
    pub payment_state: PaymentState,
    pub color: BadgeColor,
    pub monthly_rent: String,
    pub last_payment: String,
    pub start_date: String,
    pub end_date: String,
}

impl OccupancyRow {
    pub fn build(
        config: &Config,
        occupancy: &Occupancy,
        room: Option<&Room>,
        occupant: Option<&Occupant>,
        as_of: NaiveDate,
    ) -> OccupancyRow {
        let status = occupancy.payment_status(as_of, config.deposit_policy);

        OccupancyRow {
            id: occupancy.id,
            building: room.map_or_else(unknown, |r| r.building_name.clone()),
            room: room.map_or_else(unknown, |r| r.number.clone()),
            occupant: occupant.map_or_else(unknown, |o| o.name.clone()),
            phone: occupant.map_or_else(String::new, |o| o.phone_number.clone()),
            payment_status: status.label(config.label_style()),
            payment_state: status.state,
            color: status.color(),
            monthly_rent: format_money(&config.currency_symbol, &occupancy.monthly_rent),
            last_payment: format_date(occupancy.last_payment_date, "Not set"),
            start_date: format_date(Some(occupancy.start_date), ""),
            end_date: format_date(occupancy.end_date, "Ongoing"),
        }
    }

    fn cells(&self) -> [String; 10] {
        [
            self.id.to_string(),
            self.building.clone(),
            self.room.clone(),
            self.occupant.clone(),
            self.phone.clone(),
            self.payment_status.clone(),
            self.monthly_rent.clone(),
            self.last_payment.clone(),
            self.start_date.clone(),
            self.end_date.clone(),
        ]
    }
}

const HEADERS: [&str; 10] = [
    "ID",
    "Building",
    "Room",
    "Occupant",
    "Phone",
    "Payment Status",
    "Monthly Rent",
    "Last Payment",
    "Start Date",
    "End Date",
];
const BADGE_COLUMN: usize = 5;

fn unknown() -> String {
    "Unknown".to_string()
}

pub fn format_money(symbol: &str, amount: &BigDecimal) -> String {
    format!(
        "{symbol}{}",
        amount.with_scale_round(2, RoundingMode::HalfUp)
    )
}

pub fn format_date(date: Option<NaiveDate>, placeholder: &str) -> String {
    date.map_or_else(
        || placeholder.to_string(),
        |d| d.format(DATE_FORMAT).to_string(),
    )
}

pub fn badge(text: &str, color: BadgeColor) -> ColoredString {
    match color {
        BadgeColor::Info => text.blue(),
        BadgeColor::Success => text.green(),
        BadgeColor::Warning => text.yellow(),
        BadgeColor::Danger => text.red(),
    }
}

/// Aligned table with the payment status column colored by its badge.
pub fn render_table(rows: &[OccupancyRow]) -> String {
    if rows.is_empty() {
        return "No occupancies found.\n".to_string();
    }

    let cells: Vec<[String; 10]> = rows.iter().map(OccupancyRow::cells).collect();
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<w$}", h, w = w).bold().to_string())
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for (row, line) in rows.iter().zip(&cells) {
        let rendered: Vec<String> = line
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                let padded = format!("{:<w$}", cell, w = w);
                if i == BADGE_COLUMN {
                    badge(&padded, row.color).to_string()
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');
    }

    out
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[derive(Debug, Clone, Serialize)]
pub struct OccupantRow {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub job: String,
    pub email: String,
    pub current_occupancy: Option<i32>,
}

impl OccupantRow {
    pub fn build(occupant: &Occupant, current: Option<&Occupancy>) -> OccupantRow {
        OccupantRow {
            id: occupant.id,
            name: occupant.name.clone(),
            phone: occupant.phone_number.clone(),
            job: occupant.job.clone().unwrap_or_default(),
            email: occupant.email.clone().unwrap_or_default(),
            current_occupancy: current.map(|o| o.id),
        }
    }
}

pub fn render_occupants(rows: &[OccupantRow]) -> String {
    if rows.is_empty() {
        return "No occupants found.\n".to_string();
    }

    let mut out = String::new();
    for row in rows {
        let mut line = format!("#{} {} {}", row.id, row.name, row.phone);
        for extra in [&row.job, &row.email] {
            if !extra.is_empty() {
                line.push_str(" | ");
                line.push_str(extra);
            }
        }
        match row.current_occupancy {
            Some(id) => line.push_str(&format!(" (occupancy #{id})")),
            None => line.push_str(" (no active occupancy)"),
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}
