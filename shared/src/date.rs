//! Turkish long-form dates for the masthead.

use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Pazartesi",
        Weekday::Tue => "Salı",
        Weekday::Wed => "Çarşamba",
        Weekday::Thu => "Perşembe",
        Weekday::Fri => "Cuma",
        Weekday::Sat => "Cumartesi",
        Weekday::Sun => "Pazar",
    }
}

/// `16 Ekim 2026 Cuma`: day, month, year, weekday.
pub fn format_long_date(date: NaiveDate) -> String {
    // month0() is always in 0..12.
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {} {}", date.day(), month, date.year(), weekday_name(date.weekday()))
}

/// [`format_long_date`] from raw calendar fields (1-based month), `None`
/// for impossible dates.
pub fn format_ymd(year: i32, month: u32, day: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day).map(format_long_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_turkish_long_date() {
        assert_eq!(format_ymd(2026, 10, 16).as_deref(), Some("16 Ekim 2026 Cuma"));
        assert_eq!(format_ymd(2024, 2, 29).as_deref(), Some("29 Şubat 2024 Perşembe"));
        assert_eq!(format_ymd(2025, 1, 5).as_deref(), Some("5 Ocak 2025 Pazar"));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(format_ymd(2025, 2, 29), None);
        assert_eq!(format_ymd(2025, 13, 1), None);
    }
}
