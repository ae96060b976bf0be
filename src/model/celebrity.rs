use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Stable record identifier, unique within a store
pub type RecordId = u32;

/// Date format used for `dob` in seed data and the edit form
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Gender as offered by the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Transgender,
    RatherNotSay,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 5] = [
        Gender::Male,
        Gender::Female,
        Gender::Transgender,
        Gender::RatherNotSay,
        Gender::Other,
    ];

    /// Human-readable label, as stored in seed data
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Transgender => "Transgender",
            Gender::RatherNotSay => "Rather not say",
            Gender::Other => "Other",
        }
    }

    /// Next option in form order (wraps)
    pub fn next(self) -> Gender {
        let idx = Self::ALL.iter().position(|g| *g == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous option in form order (wraps)
    pub fn prev(self) -> Gender {
        let idx = Self::ALL.iter().position(|g| *g == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender: {0:?}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    /// Accepts labels case-insensitively, plus the kebab-case `rather-not-say`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', " ");
        match normalized.as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "transgender" => Ok(Gender::Transgender),
            "rather not say" => Ok(Gender::RatherNotSay),
            "other" => Ok(Gender::Other),
            _ => Err(UnknownGender(s.to_string())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = UnknownGender;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gender> for String {
    fn from(g: Gender) -> String {
        g.label().to_string()
    }
}

/// A celebrity record as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celebrity {
    pub id: RecordId,
    pub first: String,
    pub last: String,
    /// Always `"{first} {last}"`
    pub fullname: String,
    /// Date of birth, `YYYY-MM-DD`
    pub dob: String,
    /// Derived from `dob` at load time
    pub age: u32,
    pub gender: Gender,
    pub email: String,
    pub country: String,
    pub description: String,
    pub picture: String,
}

impl Celebrity {
    /// Re-derive `fullname` after `first` or `last` changed
    pub fn refresh_fullname(&mut self) {
        self.fullname = full_name(&self.first, &self.last);
    }

    /// Whether this record may enter edit mode under the given age threshold
    pub fn is_editable(&self, min_age: u32) -> bool {
        self.age >= min_age
    }
}

pub fn full_name(first: &str, last: &str) -> String {
    format!("{} {}", first, last)
}

/// Parse a `YYYY-MM-DD` date of birth
pub fn parse_dob(dob: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(dob.trim(), DOB_FORMAT).ok()
}

/// Whole years elapsed between `dob` and `today`. Zero for future dates.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn gender_parses_labels_case_insensitively() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("FEMALE".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("Rather not say".parse::<Gender>(), Ok(Gender::RatherNotSay));
        assert_eq!("rather-not-say".parse::<Gender>(), Ok(Gender::RatherNotSay));
        assert!("robot".parse::<Gender>().is_err());
    }

    #[test]
    fn gender_cycles_through_all_options() {
        let mut g = Gender::Male;
        for _ in 0..Gender::ALL.len() {
            g = g.next();
        }
        assert_eq!(g, Gender::Male);
        assert_eq!(Gender::Male.prev(), Gender::Other);
        assert_eq!(Gender::Other.next(), Gender::Male);
    }

    #[test]
    fn gender_serializes_as_label() {
        let json = serde_json::to_string(&Gender::RatherNotSay).unwrap();
        assert_eq!(json, "\"Rather not say\"");
        let back: Gender = serde_json::from_str("\"transgender\"").unwrap();
        assert_eq!(back, Gender::Transgender);
    }

    #[test]
    fn age_counts_only_passed_birthdays() {
        let dob = date(2000, 6, 15);
        assert_eq!(age_on(dob, date(2018, 6, 14)), 17);
        assert_eq!(age_on(dob, date(2018, 6, 15)), 18);
        assert_eq!(age_on(dob, date(2018, 12, 1)), 18);
    }

    #[test]
    fn age_of_future_date_is_zero() {
        assert_eq!(age_on(date(2030, 1, 1), date(2020, 1, 1)), 0);
    }

    #[test]
    fn parse_dob_accepts_iso_dates_only() {
        assert_eq!(parse_dob("1984-03-09"), Some(date(1984, 3, 9)));
        assert_eq!(parse_dob(" 1984-03-09 "), Some(date(1984, 3, 9)));
        assert_eq!(parse_dob("09/03/1984"), None);
        assert_eq!(parse_dob("1984-13-01"), None);
    }

    fn sample() -> Celebrity {
        Celebrity {
            id: 1,
            first: String::new(),
            last: String::new(),
            fullname: String::new(),
            dob: "1990-01-01".into(),
            age: 30,
            gender: Gender::Other,
            email: String::new(),
            country: String::new(),
            description: String::new(),
            picture: String::new(),
        }
    }
}
