use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;

/// Days walked without finding working time before `date_after` gives up.
const MAX_IDLE_DAYS: u32 = 5 * 366;

/// Days walked in total before `date_after` gives up.
const MAX_SPAN_DAYS: u32 = 200 * 366;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DayType {
    Working,
    NonWorking,
    /// Inherit the day from the parent calendar.
    #[default]
    Default,
}

/// A span of working time within a day. An `end` of midnight means the end of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn from_hours(start: u32, end: u32) -> Self {
        Self {
            start: NaiveTime::from_hms_opt(start, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(end % 24, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }

    fn start_seconds(&self) -> i64 {
        i64::from(self.start.num_seconds_from_midnight())
    }

    fn end_seconds(&self) -> i64 {
        if self.end == NaiveTime::MIN {
            SECONDS_PER_DAY
        } else {
            i64::from(self.end.num_seconds_from_midnight())
        }
    }

    pub fn hours(&self) -> f64 {
        (self.end_seconds() - self.start_seconds()).max(0) as f64 / 3600.0
    }
}

/// Standard working hours: 08:00-12:00 and 13:00-17:00.
pub fn default_working_hours() -> Vec<TimeRange> {
    vec![TimeRange::from_hours(8, 12), TimeRange::from_hours(13, 17)]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CalendarDay {
    pub day_type: DayType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Vec<TimeRange>>,
}

impl CalendarDay {
    pub fn working(hours: Vec<TimeRange>) -> Self {
        Self {
            day_type: DayType::Working,
            hours: Some(hours),
        }
    }

    pub fn non_working() -> Self {
        Self {
            day_type: DayType::NonWorking,
            hours: Some(Vec::new()),
        }
    }
}

/// Inclusive range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Seven days indexed from Monday, optionally limited to a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WorkWeek {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<DateRange>,
    pub days: [CalendarDay; 7],
}

impl WorkWeek {
    pub fn day(&self, weekday: chrono::Weekday) -> &CalendarDay {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn day_mut(&mut self, weekday: chrono::Weekday) -> &mut CalendarDay {
        &mut self.days[weekday.num_days_from_monday() as usize]
    }

    /// Gives typed days without hours their default hours.
    pub fn add_default_hours(&mut self) {
        for day in self.days.iter_mut() {
            if day.hours.is_some() {
                continue;
            }
            match day.day_type {
                DayType::Working => day.hours = Some(default_working_hours()),
                DayType::NonWorking => day.hours = Some(Vec::new()),
                DayType::Default => {}
            }
        }
    }

    /// Monday to Friday working with default hours, weekend non-working.
    pub fn standard() -> Self {
        let mut week = Self::default();
        for (index, day) in week.days.iter_mut().enumerate() {
            *day = if index < 5 {
                CalendarDay::working(default_working_hours())
            } else {
                CalendarDay::non_working()
            };
        }
        week
    }
}

/// Exception over a date range; empty hours means non-working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarException {
    pub range: DateRange,
    #[serde(default)]
    pub hours: Vec<TimeRange>,
}

impl CalendarException {
    pub fn is_working(&self) -> bool {
        !self.hours.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCalendar {
    pub unique_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    pub week: WorkWeek,
    #[serde(default)]
    pub work_weeks: Vec<WorkWeek>,
    #[serde(default)]
    pub exceptions: Vec<CalendarException>,
}

impl ProjectCalendar {
    /// Create an empty calendar whose days all inherit from the parent.
    pub fn new(unique_id: i32) -> Self {
        Self {
            unique_id,
            name: None,
            parent_id: None,
            week: WorkWeek::default(),
            work_weeks: Vec::new(),
            exceptions: Vec::new(),
        }
    }

    /// Create a calendar with the standard Monday to Friday week.
    pub fn standard(unique_id: i32, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            week: WorkWeek::standard(),
            ..Self::new(unique_id)
        }
    }

    pub fn add_work_week(&mut self, week: WorkWeek) {
        self.work_weeks.push(week);
    }

    /// Add an exception unless one already covers exactly the same range.
    pub fn add_exception(&mut self, range: DateRange, hours: Vec<TimeRange>) -> bool {
        if self.exceptions.iter().any(|e| e.range == range) {
            return false;
        }
        self.exceptions.push(CalendarException { range, hours });
        true
    }

    pub fn exception(&self, date: NaiveDate) -> Option<&CalendarException> {
        self.exceptions.iter().find(|e| e.range.contains(date))
    }

    /// Work week in force on `date`: a dated work week if one covers it, else the default week.
    pub fn work_week(&self, date: NaiveDate) -> &WorkWeek {
        self.work_weeks
            .iter()
            .find(|w| w.range.is_some_and(|r| r.contains(date)))
            .unwrap_or(&self.week)
    }

    pub fn add_default_hours(&mut self) {
        self.week.add_default_hours();
        for week in self.work_weeks.iter_mut() {
            week.add_default_hours();
        }
    }
}

/// A calendar resolved against its ancestors, used for working-time arithmetic.
#[derive(Debug, Clone, Default)]
pub struct EffectiveCalendar<'a> {
    chain: Vec<&'a ProjectCalendar>,
}

impl<'a> EffectiveCalendar<'a> {
    /// `chain` lists the calendar first, followed by its ancestors.
    pub fn new(chain: Vec<&'a ProjectCalendar>) -> Self {
        Self { chain }
    }

    /// A calendar with only the standard week.
    pub fn standard() -> Self {
        Self { chain: Vec::new() }
    }

    pub fn unique_id(&self) -> Option<i32> {
        self.chain.first().map(|c| c.unique_id)
    }

    /// Working time on `date`: exceptions first, then work weeks, then the default
    /// week, deferring to the parent for days of type `Default`.
    pub fn working_ranges(&self, date: NaiveDate) -> Vec<TimeRange> {
        let weekday = date.weekday();
        for calendar in &self.chain {
            if let Some(exception) = calendar.exception(date) {
                return exception.hours.clone();
            }
            let day = calendar.work_week(date).day(weekday);
            match day.day_type {
                DayType::Working => return day.hours.clone().unwrap_or_else(default_working_hours),
                DayType::NonWorking => return Vec::new(),
                DayType::Default => {}
            }
        }
        WorkWeek::standard()
            .day(weekday)
            .hours
            .clone()
            .unwrap_or_default()
    }

    pub fn is_working_date(&self, date: NaiveDate) -> bool {
        !self.working_ranges(date).is_empty()
    }

    /// Working hours between two instants.
    pub fn work(&self, start: NaiveDateTime, finish: NaiveDateTime) -> f64 {
        if finish <= start {
            return 0.0;
        }

        let mut seconds = 0;
        let mut current = start.date();
        while current <= finish.date() {
            let from = if current == start.date() {
                i64::from(start.time().num_seconds_from_midnight())
            } else {
                0
            };
            let to = if current == finish.date() {
                i64::from(finish.time().num_seconds_from_midnight())
            } else {
                SECONDS_PER_DAY
            };
            for range in self.working_ranges(current) {
                let overlap = range.end_seconds().min(to) - range.start_seconds().max(from);
                if overlap > 0 {
                    seconds += overlap;
                }
            }
            current = match current.checked_add_signed(TimeDelta::days(1)) {
                Some(next) => next,
                None => break,
            };
        }
        seconds as f64 / 3600.0
    }

    /// The instant reached after `hours` of working time from `start`.
    pub fn date_after(&self, start: NaiveDateTime, hours: f64) -> Option<NaiveDateTime> {
        if hours <= 0.0 {
            return Some(start);
        }

        let mut remaining = (hours * 3600.0).round() as i64;
        let mut current = start.date();
        let mut from = i64::from(start.time().num_seconds_from_midnight());
        let mut idle_days = 0;

        for _ in 0..MAX_SPAN_DAYS {
            let mut worked = false;
            for range in self.working_ranges(current) {
                let begin = range.start_seconds().max(from);
                let available = range.end_seconds() - begin;
                if available <= 0 {
                    continue;
                }
                worked = true;
                if available >= remaining {
                    let midnight = current.and_time(NaiveTime::MIN);
                    return midnight.checked_add_signed(TimeDelta::seconds(begin + remaining));
                }
                remaining -= available;
            }

            idle_days = if worked { 0 } else { idle_days + 1 };
            if idle_days > MAX_IDLE_DAYS {
                return None;
            }
            current = current.checked_add_signed(TimeDelta::days(1))?;
            from = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn midnight_end_covers_rest_of_day() {
        let range = TimeRange::from_hours(20, 24);
        assert_eq!(range.hours(), 4.0);
    }

    #[test]
    fn standard_week_spans_weekend() {
        let calendar = EffectiveCalendar::standard();
        // Friday 13:00 to Monday 12:00
        assert_eq!(calendar.work(dt(2024, 1, 5, 13), dt(2024, 1, 8, 12)), 8.0);
        assert_eq!(
            calendar.date_after(dt(2024, 1, 5, 13), 8.0),
            Some(dt(2024, 1, 8, 12))
        );
    }

    #[test]
    fn all_non_working_calendar_never_finishes() {
        let mut calendar = ProjectCalendar::new(1);
        for day in calendar.week.days.iter_mut() {
            *day = CalendarDay::non_working();
        }
        let effective = EffectiveCalendar::new(vec![&calendar]);
        assert_eq!(effective.date_after(dt(2024, 1, 1, 8), 1.0), None);
    }

    #[test]
    fn finish_beyond_the_walk_limit_is_unknown() {
        let calendar = EffectiveCalendar::standard();
        assert_eq!(calendar.date_after(dt(2024, 1, 8, 8), 1.0e9), None);
        assert_eq!(calendar.date_after(NaiveDateTime::MAX, 1.0), None);
    }

    #[test]
    fn work_up_to_the_last_representable_date_stops() {
        let calendar = EffectiveCalendar::standard();
        let last = NaiveDate::MAX.and_hms_opt(17, 0, 0).unwrap();
        assert!(calendar.work(last - TimeDelta::days(7), last) > 0.0);
    }
}
