use chrono::{DateTime, NaiveDate, NaiveDateTime};

const MISSING: &str = "-";

/// `2025-03-01` or `2025-03-01T...` rendered as `2025. 3. 1.`.
///
/// Unparseable values are shown as they came; missing ones as `-`.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return MISSING.to_string();
    };
    let day = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%Y. %-m. %-d.").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Timestamps rendered as `2025. 3. 1. 09:00`, in the offset they carry.
pub fn format_datetime(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return MISSING.to_string();
    };
    const OUT: &str = "%Y. %-m. %-d. %H:%M";
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format(OUT).to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format(OUT).to_string();
    }
    format_date(Some(raw))
}

/// Whole seconds without a fractional part, otherwise one decimal.
pub fn format_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{}초", seconds as i64)
    } else {
        format!("{:.1}초", seconds)
    }
}

/// Empty or missing text as `-`.
pub fn or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(format_date(Some("2025-03-01")), "2025. 3. 1.");
        assert_eq!(format_date(Some("2025-10-15T00:00:00+00:00")), "2025. 10. 15.");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("  ")), "-");
        assert_eq!(format_date(Some("20250301")), "20250301");
    }

    #[test]
    fn datetimes() {
        assert_eq!(
            format_datetime(Some("2025-10-02T09:00:03.512+09:00")),
            "2025. 10. 2. 09:00"
        );
        assert_eq!(
            format_datetime(Some("2025-10-02T18:30:00.123456")),
            "2025. 10. 2. 18:30"
        );
        assert_eq!(format_datetime(Some("2025-10-02")), "2025. 10. 2.");
        assert_eq!(format_datetime(None), "-");
    }

    #[test]
    fn seconds_and_dashes() {
        assert_eq!(format_seconds(14.0), "14초");
        assert_eq!(format_seconds(2.5), "2.5초");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("법률")), "법률");
    }
}
