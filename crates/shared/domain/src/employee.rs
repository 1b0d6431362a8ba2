//! Employee domain entity and related types.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::constants::{DISPLAY_DATE_FORMAT, FIELD_EMAIL, FIELD_FIRST_NAME, FULL_NAME_SEPARATOR};
use crate::error::{DomainError, DomainResult};

/// Compute the full name from its parts.
///
/// Blank parts count as absent. Returns `None` when neither part is present.
pub fn derive_full_name(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    let first = first_name.filter(|s| !s.trim().is_empty());
    let last = last_name.filter(|s| !s.trim().is_empty());

    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{}{}{}", first, FULL_NAME_SEPARATOR, last)),
        (Some(first), None) => Some(first.to_string()),
        (None, Some(last)) => Some(last.to_string()),
        (None, None) => None,
    }
}

/// Return the value if it is present and not blank.
fn require(value: Option<String>, field: &str) -> DomainResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::required(field)),
    }
}

/// Employee domain entity
///
/// Identity is the `id` alone: equality and hashing ignore every other field.
/// `full_name` is kept in sync by the name setters and cannot be set directly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: Uuid,
    first_name: String,
    last_name: Option<String>,
    full_name: Option<String>,
    email: String,
    job_title: Option<String>,
    salary: Option<i32>,
    age: Option<i32>,
    hire_date: DateTime<Utc>,
    /// Termination timestamp (None = active, Some = terminated)
    termination_date: Option<DateTime<Utc>>,
}

impl Employee {
    /// Build a managed record from a candidate.
    ///
    /// Rejects a missing first name, then a missing email. A missing id is
    /// generated and a missing hire date defaults to now.
    pub fn from_new(candidate: NewEmployee) -> DomainResult<Self> {
        let first_name = require(candidate.first_name, FIELD_FIRST_NAME)?;
        let email = require(candidate.email, FIELD_EMAIL)?;
        let id = candidate.id.unwrap_or_else(Uuid::new_v4);
        let hire_date = candidate.hire_date.unwrap_or_else(Utc::now);

        let full_name = derive_full_name(Some(&first_name), candidate.last_name.as_deref());

        Ok(Self {
            id,
            first_name,
            last_name: candidate.last_name,
            full_name,
            email,
            job_title: candidate.job_title,
            salary: candidate.salary,
            age: candidate.age,
            hire_date,
            termination_date: candidate.termination_date,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    pub fn salary(&self) -> Option<i32> {
        self.salary
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn hire_date(&self) -> DateTime<Utc> {
        self.hire_date
    }

    pub fn termination_date(&self) -> Option<DateTime<Utc>> {
        self.termination_date
    }

    /// Check if employee is active (not terminated)
    pub fn is_active(&self) -> bool {
        self.termination_date.is_none()
    }

    /// Check whether the job title matches, ignoring case
    pub fn has_job_title(&self, title: &str) -> bool {
        self.job_title
            .as_deref()
            .is_some_and(|t| t.to_lowercase() == title.to_lowercase())
    }

    /// Update the first name. Blank names are rejected.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> DomainResult<()> {
        self.first_name = require(Some(first_name.into()), FIELD_FIRST_NAME)?;
        self.refresh_full_name();
        Ok(())
    }

    /// Update or clear the last name
    pub fn set_last_name(&mut self, last_name: Option<String>) {
        self.last_name = last_name;
        self.refresh_full_name();
    }

    /// Terminate the contract effective immediately
    pub fn terminate(&mut self) {
        self.termination_date = Some(Utc::now());
    }

    /// Terminate the contract at the given instant, past or future
    pub fn terminate_at(&mut self, at: DateTime<Utc>) {
        self.termination_date = Some(at);
    }

    fn refresh_full_name(&mut self) {
        self.full_name = derive_full_name(Some(&self.first_name), self.last_name.as_deref());
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Employee creation candidate.
///
/// Every field is optional so that missing required fields reach validation
/// instead of failing at construction.
#[derive(Debug, Clone, Default)]
pub struct NewEmployee {
    pub id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub salary: Option<i32>,
    pub age: Option<i32>,
    pub hire_date: Option<DateTime<Utc>>,
    pub termination_date: Option<DateTime<Utc>>,
}

impl NewEmployee {
    /// Start a candidate with the two required fields
    pub fn new(first_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn with_salary(mut self, salary: i32) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_hire_date(mut self, hire_date: DateTime<Utc>) -> Self {
        self.hire_date = Some(hire_date);
        self
    }

    pub fn with_termination_date(mut self, termination_date: DateTime<Utc>) -> Self {
        self.termination_date = Some(termination_date);
        self
    }
}

/// Employee response (safe to return to client)
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    /// Unique employee identifier
    pub id: Uuid,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// First and last name joined by a space
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    pub hire_date: DateTime<Utc>,
    /// Hire date as `YYYY-MM-DD HH:MM:SS` (UTC)
    pub hire_date_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date_display: Option<String>,
    /// True while no termination date is set
    pub active: bool,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            job_title: employee.job_title.clone(),
            salary: employee.salary,
            age: employee.age,
            hire_date: employee.hire_date,
            hire_date_display: employee.hire_date.format(DISPLAY_DATE_FORMAT).to_string(),
            termination_date: employee.termination_date,
            termination_date_display: employee
                .termination_date
                .map(|t| t.format(DISPLAY_DATE_FORMAT).to_string()),
            active: employee.is_active(),
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        EmployeeResponse::from(&employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn john() -> Employee {
        Employee::from_new(NewEmployee::new("John", "john.smith@example.com").with_last_name("Smith"))
            .unwrap()
    }

    #[test]
    fn test_full_name_rules() {
        assert_eq!(derive_full_name(Some("John"), Some("Smith")).as_deref(), Some("John Smith"));
        assert_eq!(derive_full_name(Some("John"), None).as_deref(), Some("John"));
        assert_eq!(derive_full_name(None, Some("Smith")).as_deref(), Some("Smith"));
        assert_eq!(derive_full_name(None, None), None);
        assert_eq!(derive_full_name(Some("John"), Some("  ")).as_deref(), Some("John"));
    }

    #[test]
    fn test_from_new_defaults() {
        let before = Utc::now();
        let employee = Employee::from_new(NewEmployee::new("John", "john@example.com")).unwrap();
        let after = Utc::now();

        assert!(!employee.id().is_nil());
        assert!(employee.hire_date() >= before && employee.hire_date() <= after);
        assert_eq!(employee.full_name(), Some("John"));
        assert!(employee.is_active());
    }

    #[test]
    fn test_from_new_keeps_supplied_id_and_hire_date() {
        let id = Uuid::new_v4();
        let hired = Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap();
        let employee = Employee::from_new(
            NewEmployee::new("John", "john@example.com")
                .with_id(id)
                .with_hire_date(hired),
        )
        .unwrap();

        assert_eq!(employee.id(), id);
        assert_eq!(employee.hire_date(), hired);
    }

    #[test]
    fn test_missing_first_name_is_rejected_before_email() {
        let err = Employee::from_new(NewEmployee::default()).unwrap_err();
        assert_eq!(err, DomainError::required(FIELD_FIRST_NAME));

        let blank = NewEmployee::new("   ", "a@x.com");
        assert!(matches!(Employee::from_new(blank), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let candidate = NewEmployee {
            first_name: Some("John".to_string()),
            ..NewEmployee::default()
        };
        let err = Employee::from_new(candidate).unwrap_err();
        assert_eq!(err, DomainError::required(FIELD_EMAIL));

        let blank = NewEmployee::new("John", "");
        assert!(matches!(Employee::from_new(blank), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_name_setters_recompute_full_name() {
        let mut employee = john();
        assert_eq!(employee.full_name(), Some("John Smith"));

        employee.set_first_name("Johnny").unwrap();
        assert_eq!(employee.full_name(), Some("Johnny Smith"));

        employee.set_last_name(None);
        assert_eq!(employee.full_name(), Some("Johnny"));

        employee.set_last_name(Some("Doe".to_string()));
        assert_eq!(employee.full_name(), Some("Johnny Doe"));
    }

    #[test]
    fn test_blank_first_name_update_is_rejected() {
        let mut employee = john();
        assert!(employee.set_first_name("").is_err());
        assert_eq!(employee.first_name(), "John");
        assert_eq!(employee.full_name(), Some("John Smith"));
    }

    #[test]
    fn test_terminate_now() {
        let mut employee = john();
        assert!(employee.is_active());

        employee.terminate();
        assert!(!employee.is_active());
        assert!(employee.termination_date().is_some());
    }

    #[test]
    fn test_terminate_at_past_instant() {
        let mut employee = john();
        let past = Utc::now() - Duration::days(365);

        employee.terminate_at(past);
        assert!(!employee.is_active());
        assert_eq!(employee.termination_date(), Some(past));
    }

    #[test]
    fn test_equality_uses_id_only() {
        let id = Uuid::new_v4();
        let a = Employee::from_new(NewEmployee::new("A", "a@x.com").with_id(id)).unwrap();
        let b = Employee::from_new(NewEmployee::new("B", "b@x.com").with_id(id)).unwrap();
        let c = Employee::from_new(NewEmployee::new("A", "a@x.com")).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_job_title_match_is_case_insensitive_and_exact() {
        let employee = Employee::from_new(
            NewEmployee::new("John", "john@example.com").with_job_title("Software Engineer"),
        )
        .unwrap();

        assert!(employee.has_job_title("software engineer"));
        assert!(employee.has_job_title("SOFTWARE ENGINEER"));
        assert!(!employee.has_job_title("Software"));
    }

    #[test]
    fn test_response_formats_dates() {
        let hired = Utc.with_ymd_and_hms(2018, 3, 10, 0, 0, 0).unwrap();
        let left = Utc.with_ymd_and_hms(2022, 12, 31, 0, 0, 0).unwrap();
        let employee = Employee::from_new(
            NewEmployee::new("Bob", "bob@example.com")
                .with_last_name("Johnson")
                .with_hire_date(hired)
                .with_termination_date(left),
        )
        .unwrap();

        let response = EmployeeResponse::from(&employee);
        assert_eq!(response.full_name.as_deref(), Some("Bob Johnson"));
        assert_eq!(response.hire_date_display, "2018-03-10 00:00:00");
        assert_eq!(response.termination_date_display.as_deref(), Some("2022-12-31 00:00:00"));
        assert!(!response.active);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(john()).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["fullName"], "John Smith");
        assert!(json["terminationDate"].is_null());
    }
}
