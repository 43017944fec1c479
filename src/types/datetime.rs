extern crate regex;
use self::regex::Regex;

use std::fmt;
use std::fmt::Write;

#[derive(PartialEq, Debug, Clone, Default)]
pub struct DateTime {
    pub year: Option<i64>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    // ID3v2.3 has no seconds
}

lazy_static! {
    static ref YEAR: Regex = Regex::new(r"^\d{4}$").unwrap();
    // TDAT is DDMM, TIME is HHMM
    static ref PAIR: Regex = Regex::new(r"^(\d{2})(\d{2})$").unwrap();
}

fn pair(input: &str) -> Option<(u8, u8)> {
    let c = PAIR.captures(input.trim())?;
    Some((c[1].parse().ok()?, c[2].parse().ok()?))
}

impl DateTime {
    /// Combines the `TYER`, `TDAT` and `TIME` frames of an ID3v2.3 tag.
    ///
    /// The year is required. The day and month are only used when valid, and the time
    /// only when the day and month were.
    pub fn from_id3v23(year: &str, tdat: &str, time: &str) -> Option<DateTime> {
        let year = year.trim();
        if !YEAR.is_match(year) {
            return None;
        }

        let mut dt = DateTime {
            year: year.parse().ok(),
            ..Default::default()
        };

        match pair(tdat) {
            Some((day, month)) if (1..=31).contains(&day) && (1..=12).contains(&month) => {
                dt.day = Some(day);
                dt.month = Some(month);
            }
            _ => return Some(dt),
        }

        if let Some((hour, minute)) = pair(time) {
            if hour < 24 && minute < 60 {
                dt.hour = Some(hour);
                dt.minute = Some(minute);
            }
        }
        Some(dt)
    }

    pub fn to_iso_8601(&self) -> String {
        let mut s = String::with_capacity(16);
        if let Some(year) = self.year {
            let _ = write!(s, "{:04}", year);
            if let (Some(month), Some(day)) = (self.month, self.day) {
                let _ = write!(s, "-{:02}-{:02}", month, day);
                if let (Some(hour), Some(minute)) = (self.hour, self.minute) {
                    let _ = write!(s, "T{:02}:{:02}", hour, minute);
                }
            }
        }
        s
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso_8601())
    }
}

#[cfg(feature = "chrono")]
mod chrono {
    extern crate chrono;
    use self::chrono::{NaiveDate, NaiveDateTime};
    use super::DateTime;

    impl DateTime {
        /// Missing parts default to the first day of the year at midnight.
        pub fn to_naive(&self) -> Option<NaiveDateTime> {
            NaiveDate::from_ymd_opt(
                self.year? as i32,
                self.month.unwrap_or(1) as u32,
                self.day.unwrap_or(1) as u32,
            )?
            .and_hms_opt(
                self.hour.unwrap_or(0) as u32,
                self.minute.unwrap_or(0) as u32,
                0,
            )
        }
    }

    #[test]
    fn into_chrono() {
        let dt = DateTime::from_id3v23("2008", "2912", "1830").unwrap();
        let ndt = NaiveDate::from_ymd_opt(2008, 12, 29)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        assert_eq!(dt.to_naive(), Some(ndt));
    }
}

#[test]
fn id3v23_test() {
    assert_eq!(
        DateTime::from_id3v23("2017", "", ""),
        Some(DateTime {
            year: Some(2017),
            ..Default::default()
        })
    );
    assert_eq!(
        DateTime::from_id3v23("2008", "2912", "").unwrap().to_iso_8601(),
        "2008-12-29"
    );
    assert_eq!(
        DateTime::from_id3v23("2008", "2912", "0705").unwrap().to_string(),
        "2008-12-29T07:05"
    );
    // time without a date is dropped
    assert_eq!(
        DateTime::from_id3v23("2008", "", "0705").unwrap().to_iso_8601(),
        "2008"
    );
    // month 13
    assert_eq!(
        DateTime::from_id3v23("2008", "0113", "").unwrap().to_iso_8601(),
        "2008"
    );
    assert_eq!(DateTime::from_id3v23("08", "", ""), None);
    assert_eq!(DateTime::from_id3v23("", "2912", "0705"), None);
}
