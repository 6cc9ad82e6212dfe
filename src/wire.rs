// JSON handoff between wizard steps: plain YYYY-MM-DD dates and HH:MM times

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::sequence::AccommodationSequence;
use crate::stay::{Stay, StayId};
use crate::trip_window::TripWindow;

// (De)serializes `Option<NaiveTime>` as "HH:MM"; seconds are dropped
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|value| NaiveTime::parse_from_str(&value, FORMAT))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationPayload {
    pub id: StayId,
    pub is_relative_house: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    pub check_in_date: NaiveDate,
    #[serde(default, with = "hh_mm", skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<NaiveTime>,
    pub check_out_date: NaiveDate,
    #[serde(default, with = "hh_mm", skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<NaiveTime>,
}

impl From<&Stay> for AccommodationPayload {
    // Informal stays travel without venue name, socials or times
    fn from(stay: &Stay) -> Self {
        let formal = !stay.is_informal;
        Self {
            id: stay.id.clone(),
            is_relative_house: stay.is_informal,
            name: stay.name.clone().filter(|_| formal),
            address: stay.address.clone(),
            instagram: stay.instagram.clone().filter(|_| formal),
            facebook: stay.facebook.clone().filter(|_| formal),
            check_in_date: stay.check_in,
            check_in_time: stay.effective_check_in_time(),
            check_out_date: stay.check_out,
            check_out_time: stay.effective_check_out_time(),
        }
    }
}

impl From<AccommodationPayload> for Stay {
    fn from(payload: AccommodationPayload) -> Self {
        Stay {
            id: payload.id,
            is_informal: payload.is_relative_house,
            name: payload.name,
            address: payload.address,
            instagram: payload.instagram,
            facebook: payload.facebook,
            check_in: payload.check_in_date,
            check_in_time: payload.check_in_time,
            check_out: payload.check_out_date,
            check_out_time: payload.check_out_time,
        }
    }
}

/// Everything the first wizard step hands to the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step1Data {
    pub state: String,
    pub city: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    #[serde(default)]
    pub accommodations: Vec<AccommodationPayload>,
}

impl Step1Data {
    pub fn new(
        state: impl Into<String>,
        city: impl Into<String>,
        window: &TripWindow,
        sequence: &AccommodationSequence,
    ) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
            arrival_date: window.arrival(),
            departure_date: window.departure(),
            accommodations: sequence.iter().map(AccommodationPayload::from).collect(),
        }
    }

    pub fn window(&self) -> TripWindow {
        TripWindow::new(self.arrival_date, self.departure_date)
    }

    pub fn sequence(&self) -> AccommodationSequence {
        self.accommodations.iter().cloned().map(Stay::from).collect()
    }

    pub fn to_json(&self) -> Result<String, WizardError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, WizardError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stay::StayField;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn sample() -> (TripWindow, AccommodationSequence) {
        let window = TripWindow::new(date("2025-03-15"), date("2025-03-22"));

        let mut hotel = Stay::new("1".into(), date("2025-03-15"), date("2025-03-18"))
            .with_times(time(14, 0), time(12, 0));
        hotel.apply(StayField::Name("Hotel X".to_string()));
        hotel.apply(StayField::Address("Av. Beira Mar, 100".to_string()));

        let mut relatives = Stay::new("2".into(), date("2025-03-18"), date("2025-03-22"))
            .with_times(time(14, 0), time(12, 0));
        relatives.apply(StayField::Informal(true));
        relatives.apply(StayField::Address("Rua das Flores, 7".to_string()));

        (window, AccommodationSequence::from(vec![hotel, relatives]))
    }

    #[test]
    fn test_serializes_documented_shape() {
        let (window, sequence) = sample();
        let data = Step1Data::new("Ceará", "Fortaleza", &window, &sequence);
        let value: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();

        assert_eq!(value["state"], "Ceará");
        assert_eq!(value["arrivalDate"], "2025-03-15");
        assert_eq!(value["departureDate"], "2025-03-22");

        let hotel = &value["accommodations"][0];
        assert_eq!(hotel["id"], "1");
        assert_eq!(hotel["isRelativeHouse"], false);
        assert_eq!(hotel["name"], "Hotel X");
        assert_eq!(hotel["checkInDate"], "2025-03-15");
        assert_eq!(hotel["checkInTime"], "14:00");
        assert_eq!(hotel["checkOutTime"], "12:00");
    }

    #[test]
    fn test_informal_stay_omits_name_and_times() {
        let (window, sequence) = sample();
        let data = Step1Data::new("Ceará", "Fortaleza", &window, &sequence);
        let value: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();

        let relatives = value["accommodations"][1].as_object().unwrap();
        assert_eq!(relatives["isRelativeHouse"], true);
        assert!(!relatives.contains_key("name"));
        assert!(!relatives.contains_key("checkInTime"));
        assert!(!relatives.contains_key("checkOutTime"));
        assert_eq!(relatives["address"], "Rua das Flores, 7");
    }

    #[test]
    fn test_round_trip_keeps_dates() {
        let (window, sequence) = sample();
        let json = Step1Data::new("Ceará", "Fortaleza", &window, &sequence)
            .to_json()
            .unwrap();
        let parsed = Step1Data::from_json(&json).unwrap();

        assert_eq!(parsed.window(), window);
        let restored = parsed.sequence();
        for (before, after) in sequence.iter().zip(restored.iter()) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.check_in, after.check_in);
            assert_eq!(before.check_out, after.check_out);
        }
        assert_eq!(restored.as_slice()[0].check_in_time, Some(time(14, 0)));
    }

    #[test]
    fn test_round_trip_drops_seconds() {
        let (window, _) = sample();
        let stay = Stay::new("s".into(), date("2025-03-15"), date("2025-03-22"))
            .with_times(NaiveTime::from_hms_opt(14, 30, 59).unwrap(), time(11, 0));
        let json = Step1Data::new("CE", "Fortaleza", &window, &AccommodationSequence::from(vec![stay]))
            .to_json()
            .unwrap();

        let restored = Step1Data::from_json(&json).unwrap().sequence();
        assert_eq!(restored.as_slice()[0].check_in_time, Some(time(14, 30)));
    }

    #[test]
    fn test_parses_example_payload() {
        let json = r#"{ "state": "Ceará", "city": "Fortaleza",
            "arrivalDate": "2025-03-15", "departureDate": "2025-03-22",
            "accommodations": [
              { "id": "1", "isRelativeHouse": false, "name": "Hotel X",
                "address": "...", "checkInDate": "2025-03-15", "checkInTime": "14:00",
                "checkOutDate": "2025-03-18", "checkOutTime": "12:00" } ] }"#;

        let data = Step1Data::from_json(json).unwrap();
        assert_eq!(data.city, "Fortaleza");
        assert_eq!(data.accommodations.len(), 1);
        assert_eq!(data.accommodations[0].check_out_date, date("2025-03-18"));
        assert_eq!(data.accommodations[0].check_out_time, Some(time(12, 0)));
    }

    #[test]
    fn test_bad_time_is_payload_error() {
        let json = r#"{ "state": "CE", "city": "Fortaleza",
            "arrivalDate": "2025-03-15", "departureDate": "2025-03-22",
            "accommodations": [
              { "id": "1", "isRelativeHouse": false, "address": "",
                "checkInDate": "2025-03-15", "checkInTime": "2pm",
                "checkOutDate": "2025-03-18" } ] }"#;

        match Step1Data::from_json(json) {
            Err(WizardError::Payload(_)) => {}
            other => panic!("Expected payload error, got {:?}", other),
        }
    }
}
