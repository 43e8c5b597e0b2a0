//! Employee record schema.

use std::fmt;

use chrono::NaiveDate;

use super::photo::ProfileImage;

/// Fixed list of administrative regions selectable for an employee.
pub const STATES: [&str; 29] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// Employee identifier, `EMP` followed by a 5-digit zero-padded sequence.
///
/// Assigned once by the store's allocator and never changed or reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Format an ID from an allocator sequence number.
    pub fn from_seq(seq: u32) -> Self {
        Self(format!("EMP{:05}", seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employee gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Display label, also the value stored on the record.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The mutable field set of an employee record.
///
/// `add` consumes one to create a record, `update` replaces a record's
/// fields wholesale with one.
#[derive(Debug, Clone)]
pub struct EmployeeFields {
    pub name: String,
    pub gender: Gender,
    pub state: String,
    pub dob: NaiveDate,
    pub active: bool,
    pub photo: ProfileImage,
}

/// A committed employee record.
#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub gender: Gender,
    pub state: String,
    pub dob: NaiveDate,
    pub active: bool,
    pub photo: ProfileImage,
}

impl EmployeeRecord {
    /// Build a record from an allocated ID and its field set.
    pub fn new(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            gender: fields.gender,
            state: fields.state,
            dob: fields.dob,
            active: fields.active,
            photo: fields.photo,
        }
    }

    /// Replace every mutable field. The ID stays as assigned.
    pub fn apply(&mut self, fields: EmployeeFields) {
        self.name = fields.name;
        self.gender = fields.gender;
        self.state = fields.state;
        self.dob = fields.dob;
        self.active = fields.active;
        self.photo = fields.photo;
    }

    /// Status label shown in the table.
    pub fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id_format() {
        assert_eq!(EmployeeId::from_seq(1).as_str(), "EMP00001");
        assert_eq!(EmployeeId::from_seq(42).as_str(), "EMP00042");
        assert_eq!(EmployeeId::from_seq(123456).as_str(), "EMP123456");
    }

    #[test]
    fn test_states_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for state in STATES {
            assert!(seen.insert(state), "duplicate state: {state}");
        }
        assert_eq!(STATES.len(), 29);
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::Male.to_string(), "Male");
        assert_eq!(Gender::Female.to_string(), "Female");
    }

    #[test]
    fn test_status_label_tracks_active_flag() {
        let mut record = EmployeeRecord::new(
            EmployeeId::from_seq(1),
            EmployeeFields {
                name: "Asha Nair".to_string(),
                gender: Gender::Female,
                state: "Kerala".to_string(),
                dob: chrono::NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
                active: true,
                photo: ProfileImage::from_bytes(vec![0u8; 4], "image/png"),
            },
        );
        assert_eq!(record.status_label(), "Active");
        record.active = false;
        assert_eq!(record.status_label(), "Inactive");
    }
}
