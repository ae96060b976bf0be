use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::model::{Celebrity, Gender, RecordId};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CelebrityJson<'a> {
    pub id: RecordId,
    pub first: &'a str,
    pub last: &'a str,
    pub fullname: &'a str,
    pub dob: &'a str,
    pub age: u32,
    pub gender: Gender,
    pub email: &'a str,
    pub country: &'a str,
    pub description: &'a str,
    pub picture: &'a str,
    pub editable: bool,
}

impl<'a> CelebrityJson<'a> {
    pub fn new(c: &'a Celebrity, min_edit_age: u32) -> Self {
        CelebrityJson {
            id: c.id,
            first: &c.first,
            last: &c.last,
            fullname: &c.fullname,
            dob: &c.dob,
            age: c.age,
            gender: c.gender,
            email: &c.email,
            country: &c.country,
            description: &c.description,
            picture: &c.picture,
            editable: c.is_editable(min_edit_age),
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// One line per record: id, name (padded), age, country
pub fn format_list<'a>(records: impl IntoIterator<Item = &'a Celebrity>) -> String {
    let records: Vec<&Celebrity> = records.into_iter().collect();
    let name_width = records
        .iter()
        .map(|c| c.fullname.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for c in records {
        let pad = name_width - c.fullname.width();
        out.push_str(&format!(
            "{:>4}  {}{}  {:>3}  {}\n",
            c.id,
            c.fullname,
            " ".repeat(pad),
            c.age,
            c.country
        ));
    }
    out
}

/// Every field of one record, `label: value` per line
pub fn format_detail(c: &Celebrity, min_edit_age: u32) -> String {
    let editable = if c.is_editable(min_edit_age) {
        "yes"
    } else {
        "no"
    };
    let rows = [
        ("id", c.id.to_string()),
        ("name", c.fullname.clone()),
        ("born", c.dob.clone()),
        ("age", c.age.to_string()),
        ("gender", c.gender.label().to_string()),
        ("email", c.email.clone()),
        ("country", c.country.clone()),
        ("picture", c.picture.clone()),
        ("editable", editable.to_string()),
        ("description", c.description.clone()),
    ];
    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:<12} {}\n", format!("{}:", label), value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_support::{jane_and_jon, record};
    use pretty_assertions::assert_eq;

    #[test]
    fn list_aligns_names() {
        let records = vec![record(1, "Jo", "Li", 30), record(12, "Alexandra", "Smith", 7)];
        let out = format_list(&records);
        assert_eq!(
            out,
            "   1  Jo Li             30  Canada\n  12  Alexandra Smith    7  Canada\n"
        );
    }

    #[test]
    fn list_of_nothing_is_empty() {
        assert_eq!(format_list(&Vec::new()), "");
    }

    #[test]
    fn detail_shows_every_field() {
        let records = jane_and_jon();
        let out = format_detail(&records[1], 18);
        assert!(out.contains("name:        Jon Day\n"));
        assert!(out.contains("age:         17\n"));
        assert!(out.contains("editable:    no\n"));
        assert!(out.contains("picture:     https://example.com/2.png\n"));
    }

    #[test]
    fn json_marks_editability() {
        let records = jane_and_jon();
        let json = serde_json::to_value(CelebrityJson::new(&records[0], 18)).unwrap();
        assert_eq!(json["fullname"], "Jane Doe");
        assert_eq!(json["gender"], "Female");
        assert_eq!(json["editable"], true);
    }
}
