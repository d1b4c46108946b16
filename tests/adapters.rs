use tarikh::{
    CalendarAdapter, ChineseAdapter, Date, DateInput, DateTime, GregorianAdapter, GregorianDate,
    HijriAdapter, JalaaliAdapter, JalaaliDate, Weekday,
};

fn builtins() -> [&'static dyn CalendarAdapter; 4] {
    [&JalaaliAdapter, &GregorianAdapter, &HijriAdapter, &ChineseAdapter]
}

#[test]
fn weekday_agrees_on_the_same_day() {
    let gregorian = Date::new(2024, 12, 7);
    for adapter in builtins() {
        let local = adapter.from_gregorian(gregorian);
        assert_eq!(
            adapter.weekday(local.year, local.month, local.day),
            Weekday::Saturday,
            "{} {local}",
            adapter.kind()
        );
        assert_eq!(adapter.to_gregorian(local), gregorian);
    }
}

#[test]
fn weekdays_advance_daily() {
    let jalaali = JalaaliAdapter;
    let start = Date::new(1403, 12, 25);
    let first = jalaali.weekday(start.year, start.month, start.day).index();
    for offset in 0..10 {
        let g = jalaali.to_gregorian(start);
        let day = tarikh::math::gregorian::from_jdn(
            tarikh::math::gregorian::to_jdn(g.year, g.month, g.day) + offset,
        );
        let local = jalaali.from_gregorian(day);
        assert_eq!(
            jalaali.weekday(local.year, local.month, local.day),
            Weekday::from_index(first as i64 + offset)
        );
    }
}

#[test]
fn month_arithmetic_clamps() {
    let jalaali = JalaaliAdapter;
    assert_eq!(
        jalaali.add_months(Date::new(1403, 1, 31), 1),
        Date::new(1403, 2, 31)
    );
    assert_eq!(
        jalaali.add_months(Date::new(1403, 6, 31), 1),
        Date::new(1403, 7, 30)
    );
    assert_eq!(
        jalaali.add_years(Date::new(1403, 12, 30), -1),
        Date::new(1402, 12, 29)
    );
}

#[test]
fn parse_and_format() {
    for adapter in builtins() {
        assert_eq!(adapter.parse("1403-09-17"), Some(Date::new(1403, 9, 17)));
        assert_eq!(adapter.parse("1403/9/7"), Some(Date::new(1403, 9, 7)));
        assert_eq!(adapter.parse("1403.9.7"), Some(Date::new(1403, 9, 7)));
        assert_eq!(adapter.parse("17-09-1403"), None);
        assert_eq!(adapter.parse("1403-09-17 "), None);
        assert_eq!(adapter.parse(""), None);
        assert_eq!(adapter.format(Date::new(1403, 9, 7)), "1403-09-07");
    }
}

#[test]
fn chinese_format_has_no_leap_suffix() {
    let chinese = ChineseAdapter;
    let date = chinese.from_gregorian(Date::new(2024, 12, 7));
    assert_eq!(chinese.format(date), "2025-09-07");
}

#[test]
fn today_is_the_same_day_everywhere() {
    let gregorian = GregorianAdapter.today();
    for adapter in builtins() {
        let today = adapter.today();
        assert!((1..=12).contains(&today.month), "{} {today}", adapter.kind());
        assert!((1..=31).contains(&today.day), "{} {today}", adapter.kind());
        // tolerate a midnight between the two clock reads
        let back = adapter.to_gregorian(today);
        assert!(back == gregorian || back == GregorianAdapter.today());
    }
}

#[test]
fn every_shape_reaches_the_adapter() {
    let jalaali = JalaaliAdapter;
    let expected = Date::new(2024, 12, 7);

    let shaped = JalaaliDate {
        jy: 1403,
        jm: 9,
        jd: 17,
    };
    assert_eq!(jalaali.to_gregorian(shaped.into()), expected);
    assert_eq!(GregorianAdapter.from_jalaali(shaped), expected);

    let gregorian = GregorianDate {
        gy: 2024,
        gm: 12,
        gd: 7,
    };
    assert_eq!(jalaali.from_gregorian(gregorian.into()), Date::from(shaped));

    for json in [
        r#"{"year": 1403, "month": 9, "day": 17}"#,
        r#"{"jy": 1403, "jm": 9, "jd": 17}"#,
        r#"{"jy": 1403, "month": 9, "gd": 17}"#,
    ] {
        let input: DateInput = serde_json::from_str(json).unwrap();
        assert_eq!(jalaali.to_gregorian(input.normalize().unwrap()), expected);
    }
}

#[test]
fn incomplete_input_is_reported() {
    let input: DateInput = serde_json::from_str(r#"{"jy": 1403, "jm": 9}"#).unwrap();
    let err = input.normalize().unwrap_err();
    assert_eq!(err.to_string(), "date has no day (checked every accepted key)");
}

#[test]
fn malformed_dates_continue_without_panicking() {
    for adapter in builtins() {
        let date = Date::new(1403, 14, 40);
        let _ = adapter.to_gregorian(date);
        let _ = adapter.to_jalaali(date);
        let _ = adapter.weekday(-5, -3, 0);
        assert!(!adapter.is_valid(date));
    }
}

#[test]
fn timestamps_round_trip_in_every_calendar() {
    let instants = [
        0,
        -1,
        1_733_587_200_000,
        1_742_428_799_999,
        -2_208_988_800_000,
        4_102_444_800_123,
    ];
    for adapter in builtins() {
        for millis in instants {
            let value = adapter.from_timestamp(millis);
            assert!(value.hour < 24 && value.minute < 60 && value.second < 60);
            assert_eq!(adapter.to_timestamp(value), millis, "{} {value}", adapter.kind());
        }
    }
}

#[test]
fn timestamps_agree_across_calendars() {
    let millis = 1_733_587_200_000;
    let expected = "2024-12-07T16:00:00.000Z";
    assert_eq!(
        HijriAdapter.from_timestamp(millis),
        DateTime::new(Date::new(1446, 6, 5), 16, 0, 0)
    );
    for adapter in builtins() {
        let value = adapter.from_timestamp(millis);
        assert_eq!(adapter.to_iso_string(value), expected, "{}", adapter.kind());
    }
}

#[test]
fn now_matches_today() {
    for adapter in builtins() {
        let before = adapter.today();
        let now = adapter.now();
        assert!(now.date == before || now.date == adapter.today());
    }
}
