// Trip window: the arrival/departure bounds every stay has to fit in

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::WizardConfig;

pub(crate) fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

pub(crate) fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripWindow {
    arrival: NaiveDate,
    departure: NaiveDate,
}

impl TripWindow {
    // Takes the dates as given; `departure <= arrival` is only rejected at submission
    pub fn new(arrival: NaiveDate, departure: NaiveDate) -> Self {
        Self { arrival, departure }
    }

    /// Window proposed when the wizard opens: arriving today and leaving
    /// `default_trip_length_days` later.
    pub fn starting_on(today: NaiveDate, config: &WizardConfig) -> Self {
        let length = config.default_trip_length_days.max(1);
        let departure = today
            .checked_add_days(Days::new(length as u64))
            .unwrap_or_else(|| next_day(today));
        Self::new(today, departure)
    }

    pub fn arrival(&self) -> NaiveDate {
        self.arrival
    }

    pub fn departure(&self) -> NaiveDate {
        self.departure
    }

    // Departure is pushed to the day after arrival when the new arrival would reach it
    pub fn set_arrival(&mut self, date: NaiveDate) {
        self.arrival = date;
        if date >= self.departure {
            self.departure = next_day(date);
            tracing::debug!(
                arrival = %date,
                departure = %self.departure,
                "departure advanced past new arrival"
            );
        }
    }

    pub fn set_departure(&mut self, date: NaiveDate) {
        self.departure = date;
    }

    pub fn nights(&self) -> i64 {
        (self.departure - self.arrival).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.arrival && date <= self.departure
    }
}
