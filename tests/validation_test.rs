#[cfg(test)]
mod draft_validation {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    use roomkeep::models::occupancy::OccupancyStatus;
    use roomkeep::models::occupant::Gender;
    use roomkeep::services::occupancies::OccupancyDraft;
    use roomkeep::services::occupants::OccupantDraft;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft() -> OccupancyDraft {
        OccupancyDraft {
            room_id: 1,
            occupant_id: 2,
            status: None,
            start_date: date(2025, 1, 1),
            end_date: None,
            last_payment_date: None,
            monthly_rent: BigDecimal::from_str("900").unwrap(),
            notes: Some("   ".to_string()),
        }
    }

    #[test]
    fn occupancy_defaults_to_deposit() {
        let insertable = draft().validate().unwrap();
        assert_eq!(insertable.status, OccupancyStatus::Deposit);
        assert_eq!(insertable.monthly_rent.to_string(), "900.00");
        assert_eq!(insertable.notes, None);
    }

    #[test]
    fn default_status_is_deposit() {
        assert_eq!(OccupancyStatus::default(), OccupancyStatus::Deposit);
    }

    #[test]
    fn end_date_may_equal_start_date() {
        let mut d = draft();
        d.end_date = Some(d.start_date);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut d = draft();
        d.end_date = Some(date(2024, 12, 31));
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("before start date"));
    }

    #[test]
    fn payment_before_start_is_rejected() {
        let mut d = draft();
        d.last_payment_date = Some(date(2024, 12, 1));
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("before start date"));
    }

    #[test]
    fn negative_rent_is_rejected() {
        let mut d = draft();
        d.monthly_rent = BigDecimal::from(-1);
        assert!(d.validate().is_err());
    }

    fn occupant_draft() -> OccupantDraft {
        OccupantDraft {
            name: "  Dana Lee ".to_string(),
            phone_number: "+44 (20) 7946-0958".to_string(),
            email: Some("dana@example.com".to_string()),
            job: Some(String::new()),
            ..Default::default()
        }
    }

    #[test]
    fn occupant_fields_are_trimmed() {
        let insertable = occupant_draft().validate().unwrap();
        assert_eq!(insertable.name, "Dana Lee");
        assert_eq!(insertable.email.as_deref(), Some("dana@example.com"));
        assert_eq!(insertable.job, None);
    }

    #[test]
    fn occupant_requires_name_and_phone() {
        let mut d = occupant_draft();
        d.name = "   ".to_string();
        assert!(d.validate().is_err());

        let mut d = occupant_draft();
        d.phone_number = String::new();
        assert!(d.validate().is_err());

        let mut d = occupant_draft();
        d.phone_number = "call me".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn occupant_email_must_be_well_formed() {
        let mut d = occupant_draft();
        d.email = Some("dana.example.com".to_string());
        assert!(d.validate().is_err());

        let mut d = occupant_draft();
        d.email = Some("  ".to_string());
        assert_eq!(d.validate().unwrap().email, None);
    }

    #[test]
    fn statuses_parse_from_stored_values() {
        assert_eq!(
            "deposit".parse::<OccupancyStatus>().unwrap(),
            OccupancyStatus::Deposit
        );
        assert_eq!(
            "Terminated".parse::<OccupancyStatus>().unwrap(),
            OccupancyStatus::Terminated
        );
        assert!("paid".parse::<OccupancyStatus>().is_err());
        assert!("unpaid".parse::<OccupancyStatus>().is_err());
        assert_eq!(OccupancyStatus::Terminated.to_string(), "terminated");
    }

    #[test]
    fn option_lists() {
        let statuses: Vec<&str> = OccupancyStatus::options().iter().map(|(_, l)| *l).collect();
        assert_eq!(statuses, vec!["Deposit", "Terminated"]);

        let genders: Vec<Gender> = Gender::options().iter().map(|(g, _)| *g).collect();
        assert_eq!(genders, vec![Gender::Male, Gender::Female, Gender::Other]);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert!("unknown".parse::<Gender>().is_err());
    }
}
