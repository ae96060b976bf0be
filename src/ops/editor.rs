use std::fmt;

use chrono::NaiveDate;

use crate::model::{Celebrity, Gender, RecordId, age_on, parse_dob};

/// Editable fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    First,
    Last,
    Email,
    Country,
    Description,
    Gender,
    Dob,
    Age,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::First,
        Field::Last,
        Field::Email,
        Field::Country,
        Field::Description,
        Field::Gender,
        Field::Dob,
        Field::Age,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::First => "First name",
            Field::Last => "Last name",
            Field::Email => "Email",
            Field::Country => "Country",
            Field::Description => "Description",
            Field::Gender => "Gender",
            Field::Dob => "Date of birth",
            Field::Age => "Age",
        }
    }

    pub fn next(self) -> Field {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Field {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Fields that failed validation on save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    Blank(&'static str),
    Dob,
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invalid::Blank(name) => write!(f, "{} is required", name),
            Invalid::Dob => f.write_str("date of birth must be YYYY-MM-DD"),
        }
    }
}

/// Save was refused; nothing was committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub problems: Vec<Invalid>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.problems.iter().map(|p| p.to_string()).collect();
        f.write_str(&parts.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Working copy of one record while it is being edited
#[derive(Debug, Clone)]
pub struct RowEditor {
    original: Celebrity,
    working: Celebrity,
    dirty: bool,
    today: NaiveDate,
}

impl RowEditor {
    /// `today` is used to recompute the age when the date of birth changes
    pub fn new(record: &Celebrity, today: NaiveDate) -> Self {
        RowEditor {
            original: record.clone(),
            working: record.clone(),
            dirty: false,
            today,
        }
    }

    pub fn id(&self) -> RecordId {
        self.original.id
    }

    pub fn original(&self) -> &Celebrity {
        &self.original
    }

    pub fn working(&self) -> &Celebrity {
        &self.working
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Current working value of a field, as displayed in the form
    pub fn field_value(&self, field: Field) -> String {
        let w = &self.working;
        match field {
            Field::First => w.first.clone(),
            Field::Last => w.last.clone(),
            Field::Email => w.email.clone(),
            Field::Country => w.country.clone(),
            Field::Description => w.description.clone(),
            Field::Gender => w.gender.label().to_string(),
            Field::Dob => w.dob.clone(),
            Field::Age => w.age.to_string(),
        }
    }

    /// Stage a new value for `field`. Input that fails the field's check is
    /// dropped and the working copy is left as it was. Returns whether the
    /// value was accepted.
    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        let changed = match field {
            Field::Age => {
                if !value.chars().all(|c| c.is_ascii_digit()) {
                    return false;
                }
                let age = if value.is_empty() {
                    0
                } else {
                    match value.parse::<u32>() {
                        Ok(n) => n,
                        Err(_) => return false,
                    }
                };
                replace(&mut self.working.age, age)
            }
            Field::Country => {
                if !value.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
                    return false;
                }
                replace(&mut self.working.country, value.to_string())
            }
            Field::Gender => match value.parse::<Gender>() {
                Ok(g) => replace(&mut self.working.gender, g),
                Err(_) => return false,
            },
            Field::Dob => {
                let changed = replace(&mut self.working.dob, value.to_string());
                if changed && let Some(dob) = parse_dob(value) {
                    self.working.age = age_on(dob, self.today);
                }
                changed
            }
            Field::First => {
                let changed = replace(&mut self.working.first, value.to_string());
                self.working.refresh_fullname();
                changed
            }
            Field::Last => {
                let changed = replace(&mut self.working.last, value.to_string());
                self.working.refresh_fullname();
                changed
            }
            Field::Email => replace(&mut self.working.email, value.to_string()),
            Field::Description => replace(&mut self.working.description, value.to_string()),
        };
        if changed {
            self.dirty = true;
        }
        true
    }

    /// Check the working copy and hand it back for committing.
    ///
    /// Returns `Ok(None)` when nothing was changed. On validation failure
    /// the editor is untouched.
    pub fn save(&mut self) -> Result<Option<Celebrity>, ValidationError> {
        if !self.dirty {
            return Ok(None);
        }
        self.validate()?;
        self.original = self.working.clone();
        self.dirty = false;
        Ok(Some(self.working.clone()))
    }

    /// Throw away the working copy
    pub fn cancel(&mut self) {
        self.working = self.original.clone();
        self.dirty = false;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let w = &self.working;
        let mut problems = Vec::new();
        for (name, value) in [
            ("name", &w.fullname),
            ("country", &w.country),
            ("description", &w.description),
            ("email", &w.email),
        ] {
            if value.trim().is_empty() {
                problems.push(Invalid::Blank(name));
            }
        }
        if parse_dob(&w.dob).is_none() {
            problems.push(Invalid::Dob);
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { problems })
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
