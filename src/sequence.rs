// Ordered list of stays; array order is the chronological stay order

use chrono::NaiveDate;

use crate::stay::{Stay, StayId};
use crate::trip_window::{next_day, previous_day, TripWindow};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccommodationSequence {
    stays: Vec<Stay>,
}

/// Dates a picker may offer for one stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayBounds {
    pub min_check_in: NaiveDate,
    pub max_check_in: NaiveDate,
    pub min_check_out: NaiveDate,
    pub max_check_out: NaiveDate,
}

impl AccommodationSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stays.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stay> {
        self.stays.iter()
    }

    pub fn as_slice(&self) -> &[Stay] {
        &self.stays
    }

    pub fn get(&self, index: usize) -> Option<&Stay> {
        self.stays.get(index)
    }

    pub fn first(&self) -> Option<&Stay> {
        self.stays.first()
    }

    pub fn last(&self) -> Option<&Stay> {
        self.stays.last()
    }

    pub fn position(&self, id: &StayId) -> Option<usize> {
        self.stays.iter().position(|stay| &stay.id == id)
    }

    pub fn contains(&self, id: &StayId) -> bool {
        self.position(id).is_some()
    }

    /// Index of the stay with the given id.
    ///
    /// # Panics
    ///
    /// Panics when no stay has that id; edits addressed to unknown stays are
    /// caller bugs, not user input.
    pub fn index_of(&self, id: &StayId) -> usize {
        self.position(id)
            .unwrap_or_else(|| panic!("no stay with id `{}` in the sequence", id))
    }

    // Random id not used by any stay yet
    pub fn fresh_id(&self) -> StayId {
        loop {
            let id = StayId::random();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    pub fn into_vec(self) -> Vec<Stay> {
        self.stays
    }

    pub(crate) fn stays_mut(&mut self) -> &mut Vec<Stay> {
        &mut self.stays
    }

    /// Picker limits for the stay at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn bounds(&self, window: &TripWindow, index: usize) -> StayBounds {
        assert!(
            index < self.stays.len(),
            "stay index {} out of range for {} stays",
            index,
            self.stays.len()
        );
        let stay = &self.stays[index];

        let min_check_in = match index {
            0 => window.arrival(),
            _ => self.stays[index - 1].check_out,
        };
        let max_check_out = match self.stays.get(index + 1) {
            Some(next) => next.check_in,
            None => window.departure(),
        };

        StayBounds {
            min_check_in,
            max_check_in: previous_day(stay.check_out),
            min_check_out: next_day(stay.check_in),
            max_check_out,
        }
    }
}

impl From<Vec<Stay>> for AccommodationSequence {
    fn from(stays: Vec<Stay>) -> Self {
        Self { stays }
    }
}

impl FromIterator<Stay> for AccommodationSequence {
    fn from_iter<I: IntoIterator<Item = Stay>>(iter: I) -> Self {
        Self {
            stays: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AccommodationSequence {
    type Item = &'a Stay;
    type IntoIter = std::slice::Iter<'a, Stay>;

    fn into_iter(self) -> Self::IntoIter {
        self.stays.iter()
    }
}
