// Filter domain model
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// The user's current data-scoping intent. Absent or blank fields mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}

impl FilterState {
    #[cfg(test)]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[cfg(test)]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start > end => Err(FilterError::InvertedRange { start, end }),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

/// Values the filter inputs may choose from, as served by `/api/filters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl FilterOptions {
    /// Initial filter state: the full available date range, every city and channel.
    pub fn initial_state(&self) -> FilterState {
        match self.date_range {
            Some(range) if range.min <= range.max => FilterState::default().with_dates(range.min, range.max),
            _ => FilterState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let state = FilterState::default().with_dates(date(2024, 2, 1), date(2024, 1, 1));
        assert_eq!(
            state.validate(),
            Err(FilterError::InvertedRange {
                start: date(2024, 2, 1),
                end: date(2024, 1, 1),
            })
        );

        let single_day = FilterState::default().with_dates(date(2024, 1, 1), date(2024, 1, 1));
        assert!(single_day.validate().is_ok());

        let open_ended = FilterState {
            start_date: Some(date(2024, 3, 1)),
            ..Default::default()
        };
        assert!(open_ended.validate().is_ok());
    }

    #[test]
    fn test_options_deserialize_and_initial_state() {
        let options: FilterOptions = serde_json::from_value(serde_json::json!({
            "cities": ["Lima", "Quito"],
            "channels": ["online", "store"],
            "date_range": {"min": "2023-01-01", "max": "2023-12-31"}
        }))
        .unwrap();

        assert_eq!(options.cities, vec!["Lima", "Quito"]);
        let state = options.initial_state();
        assert_eq!(state.start_date, Some(date(2023, 1, 1)));
        assert_eq!(state.end_date, Some(date(2023, 12, 31)));
        assert_eq!(state.city, None);
        assert_eq!(state.channel, None);
    }

    #[test]
    fn test_state_accepts_partial_json() {
        let state: FilterState = serde_json::from_str(r#"{"city": "Lima"}"#).unwrap();
        assert_eq!(state, FilterState::default().with_city("Lima"));
    }
}
