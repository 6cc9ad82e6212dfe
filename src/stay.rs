// A single accommodation booking inside the trip

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StayId(String);

impl StayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    // Random id; callers re-draw when it collides with an existing stay
    pub fn random() -> Self {
        Self(format!("stay-{:08x}", rand::random::<u32>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StayId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    pub id: StayId,
    // Staying with family or friends: no venue name, socials or fixed times
    pub is_informal: bool,
    pub name: Option<String>,
    pub address: String,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub check_in: NaiveDate,
    pub check_in_time: Option<NaiveTime>,
    pub check_out: NaiveDate,
    pub check_out_time: Option<NaiveTime>,
}

impl Stay {
    pub fn new(id: StayId, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            id,
            is_informal: false,
            name: None,
            address: String::new(),
            instagram: None,
            facebook: None,
            check_in,
            check_in_time: None,
            check_out,
            check_out_time: None,
        }
    }

    pub fn with_times(mut self, check_in_time: NaiveTime, check_out_time: NaiveTime) -> Self {
        self.check_in_time = Some(check_in_time);
        self.check_out_time = Some(check_out_time);
        self
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    // Times only count for formal stays
    pub fn effective_check_in_time(&self) -> Option<NaiveTime> {
        self.check_in_time.filter(|_| !self.is_informal)
    }

    pub fn effective_check_out_time(&self) -> Option<NaiveTime> {
        self.check_out_time.filter(|_| !self.is_informal)
    }

    // Field-level update without any neighbour cascade; see `reconcile` for that
    pub(crate) fn apply(&mut self, field: StayField) {
        match field {
            StayField::Informal(informal) => {
                self.is_informal = informal;
                if informal {
                    self.name = None;
                    self.instagram = None;
                    self.facebook = None;
                }
            }
            StayField::Name(name) => self.name = non_blank(name),
            StayField::Address(address) => self.address = address,
            StayField::Instagram(handle) => self.instagram = non_blank(handle),
            StayField::Facebook(handle) => self.facebook = non_blank(handle),
            StayField::CheckIn(date) => self.check_in = date,
            StayField::CheckInTime(time) => self.check_in_time = Some(time),
            StayField::CheckOut(date) => self.check_out = date,
            StayField::CheckOutTime(time) => self.check_out_time = Some(time),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// One editable field of a stay together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StayField {
    Informal(bool),
    Name(String),
    Address(String),
    Instagram(String),
    Facebook(String),
    CheckIn(NaiveDate),
    CheckInTime(NaiveTime),
    CheckOut(NaiveDate),
    CheckOutTime(NaiveTime),
}
