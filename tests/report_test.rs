#[cfg(test)]
mod report_rendering {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    use roomkeep::config::{self, Config};
    use roomkeep::models::occupancy::{Occupancy, OccupancyStatus};
    use roomkeep::models::occupant::Occupant;
    use roomkeep::models::room::Room;
    use roomkeep::payment::{BadgeColor, DepositPolicy, PaymentState};
    use roomkeep::report::{self, OccupancyRow, OccupantRow};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn occupancy(last_payment: Option<NaiveDate>) -> Occupancy {
        let stamp = date(2025, 1, 1).and_hms_opt(9, 0, 0).unwrap();
        Occupancy {
            id: 4,
            room_id: 2,
            occupant_id: 9,
            status: OccupancyStatus::Deposit,
            start_date: date(2025, 1, 1),
            end_date: None,
            last_payment_date: last_payment,
            monthly_rent: BigDecimal::from_str("1250.5").unwrap(),
            notes: None,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn room() -> Room {
        Room {
            id: 2,
            building_name: "Harbor House".to_string(),
            number: "12B".to_string(),
        }
    }

    fn occupant() -> Occupant {
        let stamp = date(2024, 12, 20).and_hms_opt(9, 0, 0).unwrap();
        Occupant {
            id: 9,
            name: "Sam Rivera".to_string(),
            phone_number: "+1 555 0100".to_string(),
            job: Some("Nurse".to_string()),
            email: None,
            address: None,
            date_of_birth: None,
            gender: None,
            national_id: None,
            notes: None,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn track_payments_config() -> Config {
        let mut config = config::create_test_config();
        config.deposit_policy = DepositPolicy::TrackPayments;
        config
    }

    #[test]
    fn builds_row_with_placeholders() {
        let config = config::create_test_config();
        let row = OccupancyRow::build(
            &config,
            &occupancy(None),
            Some(&room()),
            Some(&occupant()),
            date(2025, 3, 15),
        );

        assert_eq!(row.building, "Harbor House");
        assert_eq!(row.room, "12B");
        assert_eq!(row.occupant, "Sam Rivera");
        assert_eq!(row.payment_status, "Deposit");
        assert_eq!(row.color, BadgeColor::Info);
        assert_eq!(row.monthly_rent, "$1250.50");
        assert_eq!(row.last_payment, "Not set");
        assert_eq!(row.start_date, "Jan 1, 2025");
        assert_eq!(row.end_date, "Ongoing");
    }

    #[test]
    fn row_uses_configured_policy() {
        let row = OccupancyRow::build(
            &track_payments_config(),
            &occupancy(Some(date(2025, 2, 1))),
            None,
            None,
            date(2025, 3, 15),
        );

        assert_eq!(row.payment_state, PaymentState::Unpaid);
        assert_eq!(row.payment_status, "Unpaid (42 days overdue)");
        assert_eq!(row.color, BadgeColor::Warning);
        assert_eq!(row.building, "Unknown");
        assert_eq!(row.phone, "");
    }

    #[test]
    fn table_lists_every_row() {
        colored::control::set_override(false);
        let config = config::create_test_config();
        let rows = vec![OccupancyRow::build(
            &config,
            &occupancy(None),
            Some(&room()),
            Some(&occupant()),
            date(2025, 3, 15),
        )];

        let table = report::render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].contains("Payment Status"));
        assert!(lines[1].contains("Harbor House"));
        assert!(lines[1].contains("Deposit"));
        assert!(lines[1].contains("$1250.50"));
    }

    #[test]
    fn empty_table() {
        assert_eq!(report::render_table(&[]), "No occupancies found.\n");
    }

    #[test]
    fn json_carries_badge_color() {
        let config = config::create_test_config();
        let row = OccupancyRow::build(
            &config,
            &occupancy(None),
            Some(&room()),
            Some(&occupant()),
            date(2025, 3, 15),
        );

        let json = report::to_json(&row).unwrap();
        assert!(json.contains(r#""color": "info""#), "{json}");
        assert!(json.contains(r#""payment_state": "Deposit""#), "{json}");
    }

    #[test]
    fn occupant_lines() {
        let rows = vec![OccupantRow::build(&occupant(), Some(&occupancy(None)))];
        assert_eq!(
            report::render_occupants(&rows),
            "#9 Sam Rivera +1 555 0100 | Nurse (occupancy #4)\n"
        );
    }

    #[test]
    fn money_is_rounded_to_cents() {
        let amount = BigDecimal::from_str("99.999").unwrap();
        assert_eq!(report::format_money("$", &amount), "$100.00");
        assert_eq!(report::format_money("€", &BigDecimal::from(800)), "€800.00");
    }
}
