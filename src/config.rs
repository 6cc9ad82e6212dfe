// Defaults used when a fresh itinerary draft is started

use chrono::NaiveTime;

#[derive(Debug, Clone)]
pub struct WizardConfig {
    // Length of the trip window proposed when the wizard opens
    pub default_trip_length_days: u32,
    pub default_check_in_time: NaiveTime,
    pub default_check_out_time: NaiveTime,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_trip_length_days: 7,
            default_check_in_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap_or_default(),
            default_check_out_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
        }
    }
}
