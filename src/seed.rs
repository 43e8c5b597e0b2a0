//! Fixed seed data populating the store at startup.

use chrono::NaiveDate;

use crate::models::{EmployeeFields, Gender, ProfileImage};

/// Minimal 1x1 transparent PNG used as the seed avatar.
const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Placeholder avatar for seed records.
pub fn placeholder_photo() -> ProfileImage {
    ProfileImage::from_bytes(PLACEHOLDER_PNG.to_vec(), "image/png")
}

fn seed(name: &str, gender: Gender, state: &str, dob: (i32, u32, u32), active: bool) -> EmployeeFields {
    let (y, m, d) = dob;
    EmployeeFields {
        name: name.to_string(),
        gender,
        state: state.to_string(),
        // Seed dates are fixed and known valid.
        dob: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        active,
        photo: placeholder_photo(),
    }
}

/// Initial employees, in insertion order (the first gets `EMP00001`).
pub fn seed_employees() -> Vec<EmployeeFields> {
    vec![
        seed("Rajesh Verma", Gender::Male, "Maharashtra", (1988, 3, 14), true),
        seed("Priya Sharma", Gender::Female, "Punjab", (1992, 11, 2), false),
        seed("Anand Iyer", Gender::Male, "Tamil Nadu", (1985, 7, 30), true),
        seed("Kavya Reddy", Gender::Female, "Telangana", (1996, 1, 18), true),
    ]
}
