//! Creation form controller.
//!
//! Holds the draft employee while fields are being edited and appends it to
//! a [`Store`] on save. Field setters only coerce input the way the form's
//! widgets would (digits-only zip code, fixed option lists); blank names are
//! reported in the log but never block a save.

use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::employee::{Address, Department, EmployeeRecord};
use crate::error::{Error, Result};
use crate::states;
use crate::store::Store;

/// Message shown once a record has been saved.
pub const CONFIRMATION_MESSAGE: &str = "Employee Created!";

/// Draft state of the "Create Employee" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationForm {
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    start_date: NaiveDate,
    street: String,
    city: String,
    state: Option<String>,
    zip_code: String,
    department: Option<Department>,
    confirmation_visible: bool,
}

impl Default for CreationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreationForm {
    /// Create an empty form whose date pickers start on today's local date.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_on(Local::now().date_naive())
    }

    /// Create an empty form whose date pickers start on `today`.
    #[must_use]
    pub fn starting_on(today: NaiveDate) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            date_of_birth: today,
            start_date: today,
            street: String::new(),
            city: String::new(),
            state: None,
            zip_code: String::new(),
            department: None,
            confirmation_visible: false,
        }
    }

    /// Set the first name.
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    /// Set the last name.
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    /// Set the date of birth.
    pub fn set_date_of_birth(&mut self, value: NaiveDate) {
        self.date_of_birth = value;
    }

    /// Set the start date.
    pub fn set_start_date(&mut self, value: NaiveDate) {
        self.start_date = value;
    }

    /// Set the street line.
    pub fn set_street(&mut self, value: impl Into<String>) {
        self.street = value.into();
    }

    /// Set the city.
    pub fn set_city(&mut self, value: impl Into<String>) {
        self.city = value.into();
    }

    /// Select a state by abbreviation or name, or clear the selection.
    ///
    /// The abbreviation is what gets stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOption`] if the value is not a listed state;
    /// the previous selection is kept.
    pub fn set_state(&mut self, value: Option<&str>) -> Result<()> {
        self.state = match value {
            None => None,
            Some(raw) => {
                let state = states::find(raw).ok_or_else(|| Error::unknown_option("state", raw))?;
                Some(state.abbreviation.to_string())
            }
        };
        Ok(())
    }

    /// Set the zip code. Only ASCII digits are accepted; empty clears it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldInput`] for any non-digit character; the
    /// previous value is kept.
    pub fn set_zip_code(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::invalid_field_input(
                "zip code",
                format!("'{value}' is not numeric"),
            ));
        }
        self.zip_code = value.to_string();
        Ok(())
    }

    /// Select a department, or clear the selection.
    pub fn set_department(&mut self, value: Option<Department>) {
        self.department = value;
    }

    /// Whether the "Employee Created!" confirmation is showing.
    #[must_use]
    pub fn confirmation_visible(&self) -> bool {
        self.confirmation_visible
    }

    /// Hide the confirmation.
    pub fn dismiss_confirmation(&mut self) {
        self.confirmation_visible = false;
    }

    /// Build a record from the current field values.
    #[must_use]
    pub fn draft(&self) -> EmployeeRecord {
        EmployeeRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
            start_date: self.start_date,
            address: Address {
                street: self.street.clone(),
                city: self.city.clone(),
                state: self.state.clone(),
                zip_code: self.zip_code.clone(),
            },
            department: self.department,
        }
    }

    /// Append the draft to `store` and show the confirmation.
    ///
    /// Field values are kept after saving.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the record could not be written; the
    /// confirmation stays hidden in that case.
    pub fn save<S: Store + ?Sized>(&mut self, store: &mut S) -> Result<EmployeeRecord> {
        let record = self.draft();

        let missing = record.missing_required_fields();
        if !missing.is_empty() {
            warn!(fields = ?missing, "Saving employee with blank required fields");
        }

        store.append_one(&record)?;
        self.confirmation_visible = true;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemorySlots, RecordStore};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn filled_form() -> CreationForm {
        let mut form = CreationForm::starting_on(today());
        form.set_first_name("Ada");
        form.set_last_name("Lovelace");
        form.set_date_of_birth(NaiveDate::from_ymd_opt(1815, 12, 10).unwrap());
        form.set_street("12 St James's Square");
        form.set_city("London");
        form.set_state(Some("ny")).unwrap();
        form.set_zip_code("10001").unwrap();
        form.set_department(Some(Department::Engineering));
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let form = CreationForm::starting_on(today());
        let draft = form.draft();

        assert_eq!(draft.first_name, "");
        assert_eq!(draft.date_of_birth, today());
        assert_eq!(draft.start_date, today());
        assert!(draft.address.state.is_none());
        assert!(draft.department.is_none());
        assert!(!form.confirmation_visible());
    }

    #[test]
    fn test_draft_reflects_fields() {
        let draft = filled_form().draft();

        assert_eq!(draft.full_name(), "Ada Lovelace");
        assert_eq!(draft.address.state.as_deref(), Some("NY"));
        assert_eq!(draft.address.zip_code, "10001");
        assert_eq!(draft.department, Some(Department::Engineering));
        assert_eq!(draft.start_date, today());
    }

    #[test]
    fn test_zip_code_rejects_non_digits() {
        let mut form = filled_form();
        let err = form.set_zip_code("10a01").unwrap_err();

        assert!(matches!(err, Error::InvalidFieldInput { .. }));
        assert_eq!(form.draft().address.zip_code, "10001");
    }

    #[test]
    fn test_zip_code_accepts_empty() {
        let mut form = filled_form();
        form.set_zip_code("").unwrap();
        assert_eq!(form.draft().address.zip_code, "");
    }

    #[test]
    fn test_state_unknown_keeps_selection() {
        let mut form = filled_form();
        let err = form.set_state(Some("Atlantis")).unwrap_err();

        assert!(matches!(err, Error::UnknownOption { .. }));
        assert_eq!(form.draft().address.state.as_deref(), Some("NY"));
    }

    #[test]
    fn test_state_by_name_and_clear() {
        let mut form = filled_form();
        form.set_state(Some("California")).unwrap();
        assert_eq!(form.draft().address.state.as_deref(), Some("CA"));

        form.set_state(None).unwrap();
        assert!(form.draft().address.state.is_none());
    }

    #[test]
    fn test_save_appends_and_confirms() {
        let mut store = RecordStore::new(MemorySlots::new());
        let mut form = filled_form();

        let saved = form.save(&mut store).unwrap();

        assert!(form.confirmation_visible());
        assert_eq!(store.load_all(), vec![saved]);
    }

    #[test]
    fn test_save_keeps_field_values() {
        let mut store = RecordStore::new(MemorySlots::new());
        let mut form = filled_form();
        let before = form.draft();

        form.save(&mut store).unwrap();

        assert_eq!(form.draft(), before);
    }

    #[test]
    fn test_save_blank_form_is_permitted() {
        let mut store = RecordStore::new(MemorySlots::new());
        let mut form = CreationForm::starting_on(today());

        let saved = form.save(&mut store).unwrap();

        assert_eq!(saved.missing_required_fields(), vec!["first name", "last name"]);
        assert_eq!(store.count(), 1);
        assert!(form.confirmation_visible());
    }

    #[test]
    fn test_save_twice_appends_twice() {
        let mut store = RecordStore::new(MemorySlots::new());
        let mut form = filled_form();

        form.save(&mut store).unwrap();
        form.set_first_name("Augusta");
        form.save(&mut store).unwrap();

        let names: Vec<String> = store.load_all().into_iter().map(|r| r.first_name).collect();
        assert_eq!(names, vec!["Ada", "Augusta"]);
    }

    #[test]
    fn test_dismiss_confirmation() {
        let mut store = RecordStore::new(MemorySlots::new());
        let mut form = filled_form();
        form.save(&mut store).unwrap();

        form.dismiss_confirmation();
        assert!(!form.confirmation_visible());
    }

    /// Store that refuses every write.
    struct FullStore;

    impl Store for FullStore {
        fn load_all(&self) -> Vec<EmployeeRecord> {
            Vec::new()
        }

        fn append_one(&mut self, _record: &EmployeeRecord) -> Result<()> {
            Err(crate::error::Error::internal("no space left"))
        }
    }

    #[test]
    fn test_save_failure_keeps_confirmation_hidden() {
        let mut form = filled_form();
        assert!(form.save(&mut FullStore).is_err());
        assert!(!form.confirmation_visible());
    }

    #[test]
    fn test_confirmation_message() {
        assert_eq!(CONFIRMATION_MESSAGE, "Employee Created!");
    }
}
