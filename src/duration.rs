use serde::{Deserialize, Serialize};
use std::fmt;

/// How a duration relates to the calendar it is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeUnit {
    /// Working hours, measured against a calendar.
    #[default]
    Hours,
    /// Wall-clock hours, ignoring non-working time.
    ElapsedHours,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Duration {
    pub value: f64,
    #[serde(default)]
    pub units: TimeUnit,
}

impl Duration {
    pub fn hours(value: f64) -> Self {
        Self {
            value,
            units: TimeUnit::Hours,
        }
    }

    pub fn elapsed_hours(value: f64) -> Self {
        Self {
            value,
            units: TimeUnit::ElapsedHours,
        }
    }

    pub fn zero() -> Self {
        Self::hours(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl std::ops::Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration {
            value: self.value + rhs.value,
            units: self.units,
        }
    }
}

impl std::ops::Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration {
            value: self.value - rhs.value,
            units: self.units,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.units {
            TimeUnit::Hours => write!(f, "{}h", self.value),
            TimeUnit::ElapsedHours => write!(f, "{}eh", self.value),
        }
    }
}
