use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{Employee, Gender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    Under30,
    From30To40,
    From41To50,
    From51To60,
    Over60,
}

impl AgeBand {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Under30,
            Self::From30To40,
            Self::From41To50,
            Self::From51To60,
            Self::Over60,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under30 => "< 30",
            Self::From30To40 => "30-40",
            Self::From41To50 => "41-50",
            Self::From51To60 => "51-60",
            Self::Over60 => "> 60",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Under30 => 0,
            Self::From30To40 => 1,
            Self::From41To50 => 2,
            Self::From51To60 => 3,
            Self::Over60 => 4,
        }
    }

    pub const fn for_age(age: i32) -> Self {
        if age < 30 {
            Self::Under30
        } else if age <= 40 {
            Self::From30To40
        } else if age <= 50 {
            Self::From41To50
        } else if age <= 60 {
            Self::From51To60
        } else {
            Self::Over60
        }
    }

    /// Unknown ages fall through every bounded band into the open-ended one.
    pub const fn for_reading(reading: AgeReading) -> Self {
        match reading {
            AgeReading::Years(age) => Self::for_age(age),
            AgeReading::Unknown => Self::Over60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeReading {
    Years(i32),
    /// Date of birth is empty or not a calendar date.
    Unknown,
}

impl AgeReading {
    pub fn years(self) -> Option<i32> {
        match self {
            Self::Years(age) => Some(age),
            Self::Unknown => None,
        }
    }
}

/// Calendar-year age: evaluation year minus birth year, ignoring month and day.
pub fn calendar_age(employee: &Employee, evaluation_date: NaiveDate) -> AgeReading {
    match employee.birth_year() {
        Some(year) => AgeReading::Years(evaluation_date.year() - year),
        None => AgeReading::Unknown,
    }
}

/// Completed months between two dates; negative when `to` precedes `from`.
pub fn completed_months(from: NaiveDate, to: NaiveDate) -> i32 {
    let months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if months > 0 && to.day() < from.day() {
        months - 1
    } else if months < 0 && to.day() > from.day() {
        months + 1
    } else {
        months
    }
}

/// Statutory retirement ages and the look-ahead window before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementPolicy {
    pub male_age: u32,
    pub female_age: u32,
    pub window_months: u32,
}

impl Default for RetirementPolicy {
    fn default() -> Self {
        Self {
            male_age: 62,
            female_age: 60,
            window_months: 6,
        }
    }
}

impl RetirementPolicy {
    pub const fn retirement_age(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Male => self.male_age,
            Gender::Female => self.female_age,
        }
    }

    /// Date on which the employee reaches retirement age. `None` for an
    /// unreadable birth date or a date outside the calendar.
    pub fn retirement_date(&self, employee: &Employee) -> Option<NaiveDate> {
        let birth = employee.birth_date()?;
        let months = self.retirement_age(employee.gender).checked_mul(12)?;
        birth.checked_add_months(Months::new(months))
    }

    /// Age in completed months when it lies in
    /// `[retirement_age - window, retirement_age)`, otherwise `None`.
    pub fn approaching_age_months(
        &self,
        employee: &Employee,
        evaluation_date: NaiveDate,
    ) -> Option<u32> {
        let birth = employee.birth_date()?;
        let age_months = i64::from(completed_months(birth, evaluation_date));
        let limit = i64::from(self.retirement_age(employee.gender)) * 12;
        let window_start = limit - i64::from(self.window_months);
        if (window_start..limit).contains(&age_months) {
            u32::try_from(age_months).ok()
        } else {
            None
        }
    }

    pub fn is_approaching(&self, employee: &Employee, evaluation_date: NaiveDate) -> bool {
        self.approaching_age_months(employee, evaluation_date).is_some()
    }
}
