use chrono::NaiveDate;

use crate::model::{Celebrity, Gender, RecordId, full_name};

/// Fixed "today" for tests: 2024-06-01
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// A record with the given name and age; everything else filled with
/// plausible values.
pub fn record(id: RecordId, first: &str, last: &str, age: u32) -> Celebrity {
    Celebrity {
        id,
        first: first.to_string(),
        last: last.to_string(),
        fullname: full_name(first, last),
        dob: format!("{}-01-01", 2024 - age as i32),
        age,
        gender: Gender::Female,
        email: format!("{}@example.com", first.to_lowercase()),
        country: "Canada".to_string(),
        description: "A description".to_string(),
        picture: format!("https://example.com/{}.png", id),
    }
}

/// Jane Doe (25) and Jon Day (17)
pub fn jane_and_jon() -> Vec<Celebrity> {
    vec![record(1, "Jane", "Doe", 25), record(2, "Jon", "Day", 17)]
}
