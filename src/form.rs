//! Create/edit form state machine and validation rules.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{EmployeeFields, EmployeeId, EmployeeRecord, Gender, ProfileImage, STATES};
use crate::store::EmployeeStore;

/// Minimum age at the time a record is committed.
const MIN_AGE_YEARS: i32 = 18;

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Gender,
    State,
    Dob,
    Photo,
}

/// Transient, unvalidated form state for one create/edit interaction.
///
/// Discarded on cancel or successful submit.
#[derive(Debug, Clone)]
pub struct FormDraft {
    pub name: String,
    pub gender: Option<Gender>,
    pub state: Option<String>,
    /// Raw date text as typed; parsed into `dob` on change.
    pub dob_input: String,
    pub dob: Option<NaiveDate>,
    pub active: bool,
    pub photo: Option<ProfileImage>,
    pub errors: BTreeMap<Field, String>,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            gender: None,
            state: None,
            dob_input: String::new(),
            dob: None,
            active: true,
            photo: None,
            errors: BTreeMap::new(),
        }
    }
}

impl FormDraft {
    /// Pre-fill a draft from an existing record, inheriting its photo.
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            name: record.name.clone(),
            gender: Some(record.gender),
            state: Some(record.state.clone()),
            dob_input: record.dob.format("%Y-%m-%d").to_string(),
            dob: Some(record.dob),
            active: record.active,
            photo: Some(record.photo.clone()),
            errors: BTreeMap::new(),
        }
    }

    /// Drop a field's error after the user edits it. Re-validation waits
    /// for the next submit.
    pub fn clear_error(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Parse date input flexibly, accepting multiple formats.
pub fn parse_flexible_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for fmt in &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date);
        }
    }
    None
}

/// Evaluate every rule against the draft.
///
/// All rules run; a draft can surface several errors at once. The age rule
/// is a calendar-year subtraction, matching how the directory has always
/// classified ages.
pub fn validate(draft: &FormDraft, creating: bool, today: NaiveDate) -> BTreeMap<Field, String> {
    let mut errors = BTreeMap::new();

    let trimmed = draft.name.trim();
    if trimmed.is_empty() {
        errors.insert(Field::Name, "Full Name is required".to_string());
    } else if trimmed.chars().count() < 3 {
        errors.insert(Field::Name, "Full Name must be at least 3 characters".to_string());
    }

    if draft.gender.is_none() {
        errors.insert(Field::Gender, "Gender is required".to_string());
    }

    match &draft.state {
        Some(state) if STATES.contains(&state.as_str()) => {}
        _ => {
            errors.insert(Field::State, "State is required".to_string());
        }
    }

    match draft.dob {
        None => {
            errors.insert(Field::Dob, "Date of Birth is required".to_string());
        }
        Some(dob) => {
            let age = today.year() - dob.year();
            if age < MIN_AGE_YEARS {
                errors.insert(Field::Dob, "Employee must be at least 18 years old".to_string());
            }
        }
    }

    // Editing inherits the existing preview, so a photo is only demanded
    // for brand-new records.
    if creating && draft.photo.is_none() {
        errors.insert(Field::Photo, "Profile image is required".to_string());
    }

    errors
}

/// What the form is currently doing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Creating,
    Editing(EmployeeId),
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(EmployeeId),
    Updated(EmployeeId),
    /// Validation failed (or the form was not open); nothing committed.
    Invalid,
}

/// Owns the draft and drives the Closed -> Creating/Editing -> Closed
/// lifecycle. Only a valid submit reaches the store.
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
    pub draft: FormDraft,
    generation: u64,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, FormState::Editing(_))
    }

    /// Token identifying the currently open draft. Background photo loads
    /// carry it back so results for a closed or reopened form get dropped.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Open the form with an empty draft for a new employee.
    pub fn open_create(&mut self) {
        self.generation += 1;
        self.draft = FormDraft::default();
        self.state = FormState::Creating;
    }

    /// Open the form pre-filled from an existing record.
    pub fn open_edit(&mut self, record: &EmployeeRecord) {
        self.generation += 1;
        self.draft = FormDraft::from_record(record);
        self.state = FormState::Editing(record.id.clone());
    }

    /// Discard the draft and close the form.
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Attach a loaded photo to the open draft.
    ///
    /// Returns `false` and discards the photo when `generation` no longer
    /// matches, i.e. the draft it was read for is gone.
    pub fn apply_photo(&mut self, generation: u64, photo: ProfileImage) -> bool {
        if generation != self.generation || !self.is_open() {
            tracing::debug!("Discarding stale photo result (generation {})", generation);
            return false;
        }
        self.draft.photo = Some(photo);
        self.draft.clear_error(Field::Photo);
        true
    }

    /// Validate the draft and, if clean, commit it to the store.
    ///
    /// On validation failure the form stays open with the errors recorded
    /// on the draft.
    pub fn submit(&mut self, store: &mut EmployeeStore, today: NaiveDate) -> SubmitOutcome {
        let creating = match &self.state {
            FormState::Closed => return SubmitOutcome::Invalid,
            FormState::Creating => true,
            FormState::Editing(_) => false,
        };

        let errors = validate(&self.draft, creating, today);
        if !errors.is_empty() {
            self.draft.errors = errors;
            return SubmitOutcome::Invalid;
        }

        let Some(fields) = self.validated_fields() else {
            // Unreachable after a clean validate; treat as a rejected draft.
            return SubmitOutcome::Invalid;
        };

        let outcome = match std::mem::take(&mut self.state) {
            FormState::Creating => SubmitOutcome::Created(store.add(fields)),
            FormState::Editing(id) => {
                store.update(&id, fields);
                SubmitOutcome::Updated(id)
            }
            FormState::Closed => SubmitOutcome::Invalid,
        };

        self.close();
        outcome
    }

    fn close(&mut self) {
        self.generation += 1;
        self.draft = FormDraft::default();
        self.state = FormState::Closed;
    }

    /// Assemble the committed field set from a draft that passed validation.
    fn validated_fields(&self) -> Option<EmployeeFields> {
        Some(EmployeeFields {
            name: self.draft.name.clone(),
            gender: self.draft.gender?,
            state: self.draft.state.clone()?,
            dob: self.draft.dob?,
            active: self.draft.active,
            photo: self.draft.photo.clone()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    fn photo() -> ProfileImage {
        ProfileImage::from_bytes(vec![0u8; 4], "image/png")
    }

    fn valid_draft() -> FormDraft {
        FormDraft {
            name: "Asha Nair".to_string(),
            gender: Some(Gender::Female),
            state: Some("Kerala".to_string()),
            dob_input: "1990-04-12".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 4, 12),
            active: true,
            photo: Some(photo()),
            errors: BTreeMap::new(),
        }
    }

    fn seeded_store() -> EmployeeStore {
        let dob = NaiveDate::from_ymd_opt(1985, 1, 20).unwrap();
        EmployeeStore::with_seed([
            EmployeeFields {
                name: "Ravi Kumar".to_string(),
                gender: Gender::Male,
                state: "Karnataka".to_string(),
                dob,
                active: true,
                photo: photo(),
            },
            EmployeeFields {
                name: "Priya Sharma".to_string(),
                gender: Gender::Female,
                state: "Punjab".to_string(),
                dob,
                active: false,
                photo: photo(),
            },
        ])
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid_draft(), true, today()).is_empty());
    }

    #[test]
    fn test_missing_name() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        let errors = validate(&draft, true, today());
        assert_eq!(errors.get(&Field::Name).unwrap(), "Full Name is required");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_short_name() {
        let mut draft = valid_draft();
        draft.name = " Al ".to_string();
        let errors = validate(&draft, true, today());
        assert_eq!(errors.get(&Field::Name).unwrap(), "Full Name must be at least 3 characters");
    }

    #[test]
    fn test_missing_gender() {
        let mut draft = valid_draft();
        draft.gender = None;
        let errors = validate(&draft, true, today());
        assert_eq!(errors.get(&Field::Gender).unwrap(), "Gender is required");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_state_must_be_in_fixed_list() {
        let mut draft = valid_draft();
        draft.state = Some("Atlantis".to_string());
        let errors = validate(&draft, true, today());
        assert_eq!(errors.get(&Field::State).unwrap(), "State is required");
    }

    #[test]
    fn test_missing_dob() {
        let mut draft = valid_draft();
        draft.dob = None;
        let errors = validate(&draft, true, today());
        assert_eq!(errors.get(&Field::Dob).unwrap(), "Date of Birth is required");
    }

    #[test]
    fn test_underage_by_year_subtraction() {
        let mut draft = valid_draft();
        // Age 17 by year difference in 2026.
        draft.dob = NaiveDate::from_ymd_opt(2009, 1, 1);
        let errors = validate(&draft, true, today());
        assert_eq!(errors.get(&Field::Dob).unwrap(), "Employee must be at least 18 years old");
    }

    #[test]
    fn test_exactly_eighteen_by_year_passes() {
        let mut draft = valid_draft();
        // Born later in the calendar year than today; still counts as 18.
        draft.dob = NaiveDate::from_ymd_opt(2008, 12, 31);
        assert!(validate(&draft, true, today()).is_empty());
    }

    #[test]
    fn test_photo_required_only_when_creating() {
        let mut draft = valid_draft();
        draft.photo = None;
        let errors = validate(&draft, true, today());
        assert_eq!(errors.get(&Field::Photo).unwrap(), "Profile image is required");

        assert!(validate(&draft, false, today()).is_empty());
    }

    #[test]
    fn test_all_errors_surface_at_once() {
        let draft = FormDraft::default();
        let errors = validate(&draft, true, today());
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_parse_flexible_date_formats() {
        let expected = NaiveDate::from_ymd_opt(1990, 4, 12);
        assert_eq!(parse_flexible_date("1990-04-12"), expected);
        assert_eq!(parse_flexible_date(" 1990/04/12 "), expected);
        assert_eq!(parse_flexible_date("1990.04.12"), expected);
        assert_eq!(parse_flexible_date("12/04/1990"), None);
        assert_eq!(parse_flexible_date(""), None);
    }

    #[test]
    fn test_create_flow_end_to_end() {
        let mut store = seeded_store();
        let mut form = FormController::new();

        form.open_create();
        form.draft = valid_draft();

        let outcome = form.submit(&mut store, today());
        let id = match outcome {
            SubmitOutcome::Created(id) => id,
            other => panic!("expected Created, got {other:?}"),
        };
        assert_eq!(id.as_str(), "EMP00003");
        assert_eq!(store.total(), 3);
        assert_eq!(store.list()[0].id, id);
        assert!(!form.is_open());

        // Active filter sees the new record first, then the active seed.
        let criteria = crate::filter::FilterCriteria {
            status: Some(true),
            ..Default::default()
        };
        let active: Vec<_> = criteria.apply(store.list()).iter().map(|r| r.id.as_str().to_string()).collect();
        assert_eq!(active, ["EMP00003", "EMP00001"]);
    }

    #[test]
    fn test_underage_submit_leaves_store_unchanged() {
        let mut store = seeded_store();
        let mut form = FormController::new();

        form.open_create();
        form.draft = valid_draft();
        form.draft.dob = NaiveDate::from_ymd_opt(2009, 6, 1);

        assert_eq!(form.submit(&mut store, today()), SubmitOutcome::Invalid);
        assert_eq!(store.total(), 2);
        assert!(form.is_open());
        assert_eq!(
            form.draft.error(Field::Dob),
            Some("Employee must be at least 18 years old")
        );
    }

    #[test]
    fn test_edit_flow_changes_only_status() {
        let mut store = seeded_store();
        let mut form = FormController::new();

        let id = store.list()[1].id.clone();
        assert_eq!(id.as_str(), "EMP00001");
        let original = store.get(&id).unwrap().clone();

        form.open_edit(&original);
        assert!(form.draft.photo.is_some());
        form.draft.active = false;

        assert_eq!(form.submit(&mut store, today()), SubmitOutcome::Updated(id.clone()));
        assert_eq!(store.total(), 2);

        let updated = store.get(&id).unwrap();
        assert!(!updated.active);
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.state, original.state);
        assert_eq!(updated.dob, original.dob);
        assert_eq!(updated.id, original.id);
    }

    #[test]
    fn test_submit_while_closed_is_rejected() {
        let mut store = seeded_store();
        let mut form = FormController::new();
        assert_eq!(form.submit(&mut store, today()), SubmitOutcome::Invalid);
        assert_eq!(store.total(), 2);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut form = FormController::new();
        form.open_create();
        form.draft.name = "Half-typed".to_string();
        form.cancel();
        assert!(!form.is_open());
        assert!(form.draft.name.is_empty());
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut store = EmployeeStore::new();
        let mut form = FormController::new();

        form.open_create();
        form.submit(&mut store, today());
        assert!(form.draft.error(Field::Name).is_some());

        form.draft.name = "A".to_string();
        form.draft.clear_error(Field::Name);
        assert!(form.draft.error(Field::Name).is_none());
        // Other errors stay until the next submit.
        assert!(form.draft.error(Field::Gender).is_some());
    }

    #[test]
    fn test_stale_photo_result_is_discarded() {
        let mut form = FormController::new();

        form.open_create();
        let old_generation = form.generation();
        form.cancel();

        // Result from the read started before cancel arrives late.
        assert!(!form.apply_photo(old_generation, photo()));
        assert!(form.draft.photo.is_none());

        // A fresh draft with a matching token accepts the photo.
        form.open_create();
        let generation = form.generation();
        assert!(form.apply_photo(generation, photo()));
        assert!(form.draft.photo.is_some());
        assert!(form.draft.error(Field::Photo).is_none());
    }

    #[test]
    fn test_reopen_invalidates_previous_generation() {
        let mut form = FormController::new();
        form.open_create();
        let first = form.generation();
        form.open_create();
        assert!(!form.apply_photo(first, photo()));
        assert!(form.draft.photo.is_none());
    }
}
