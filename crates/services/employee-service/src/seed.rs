//! Sample directory contents loaded at startup.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use domain::{DomainError, DomainResult, NewEmployee};

/// The three sample employees: two active, one terminated at the end of 2022.
pub fn sample_employees() -> DomainResult<Vec<NewEmployee>> {
    Ok(vec![
        NewEmployee::new("John", "john.smith@example.com")
            .with_id(Uuid::from_u128(0x550e8400_e29b_41d4_a716_446655440000))
            .with_last_name("Smith")
            .with_salary(75_000)
            .with_age(35)
            .with_job_title("Software Engineer")
            .with_hire_date(midnight(2020, 1, 15)?),
        NewEmployee::new("Jane", "jane.doe@example.com")
            .with_id(Uuid::from_u128(0x550e8400_e29b_41d4_a716_446655440001))
            .with_last_name("Doe")
            .with_salary(85_000)
            .with_age(28)
            .with_job_title("Product Manager")
            .with_hire_date(midnight(2019, 6, 1)?),
        NewEmployee::new("Bob", "bob.johnson@example.com")
            .with_id(Uuid::from_u128(0x550e8400_e29b_41d4_a716_446655440002))
            .with_last_name("Johnson")
            .with_salary(65_000)
            .with_age(42)
            .with_job_title("QA Engineer")
            .with_hire_date(midnight(2018, 3, 10)?)
            .with_termination_date(midnight(2022, 12, 31)?),
    ])
}

/// UTC midnight on a calendar date
fn midnight(year: i32, month: u32, day: u32) -> DomainResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| {
            DomainError::internal(format!("Invalid sample date {}-{}-{}", year, month, day))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[test]
    fn test_sample_employees_build() {
        let samples = assert_ok!(sample_employees());
        assert_eq!(samples.len(), 3);
        assert_eq!(
            samples[2].termination_date,
            Some(Utc.with_ymd_and_hms(2022, 12, 31, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_invalid_calendar_date_is_internal_error() {
        let result = midnight(2023, 2, 30);
        assert!(matches!(result, Err(DomainError::Internal(_))));
    }
}
