// Step 1 of the wizard: destination, trip window and accommodations.
// Single owner of the mutable state; every stay edit goes through `reconcile`.

use chrono::{NaiveDate, NaiveTime};

use crate::config::WizardConfig;
use crate::draft::ItineraryDraft;
use crate::error::{FormField, ValidationError, WizardError};
use crate::locations::LocationDirectory;
use crate::reconcile::{reconcile, resync_to_window, NewStay, StayEdit};
use crate::sequence::{AccommodationSequence, StayBounds};
use crate::stay::{StayField, StayId};
use crate::trip_window::TripWindow;
use crate::validation::{gaps, validate_sequence, validate_trip_window, DateGap};
use crate::wire::Step1Data;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayPickerField {
    CheckInDate,
    CheckInTime,
    CheckOutDate,
    CheckOutTime,
}

// What the currently open date/time picker edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerTarget {
    Arrival,
    Departure,
    Stay(StayId, StayPickerField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerValue {
    Date(NaiveDate),
    Time(NaiveTime),
}

#[derive(Debug, Clone)]
pub struct TripForm {
    pub state: String,
    pub city: String,
    window: TripWindow,
    stays: AccommodationSequence,
    active_picker: Option<PickerTarget>,
    config: WizardConfig,
}

impl TripForm {
    pub fn new(today: NaiveDate, config: WizardConfig) -> Self {
        Self {
            state: String::new(),
            city: String::new(),
            window: TripWindow::starting_on(today, &config),
            stays: AccommodationSequence::new(),
            active_picker: None,
            config,
        }
    }

    // Re-open step 1 from data handed back by a later step
    pub fn from_step1(data: &Step1Data, config: WizardConfig) -> Self {
        Self {
            state: data.state.clone(),
            city: data.city.clone(),
            window: data.window(),
            stays: data.sequence(),
            active_picker: None,
            config,
        }
    }

    pub fn window(&self) -> &TripWindow {
        &self.window
    }

    pub fn stays(&self) -> &AccommodationSequence {
        &self.stays
    }

    pub fn set_arrival(&mut self, date: NaiveDate) {
        self.window.set_arrival(date);
        self.resync();
    }

    pub fn set_departure(&mut self, date: NaiveDate) {
        self.window.set_departure(date);
        self.resync();
    }

    fn resync(&mut self) {
        let stays = std::mem::take(&mut self.stays);
        self.stays = resync_to_window(&self.window, stays);
    }

    fn apply(&mut self, edit: StayEdit) {
        let stays = std::mem::take(&mut self.stays);
        self.stays = reconcile(&self.window, stays, edit);
    }

    fn new_stay(&self) -> NewStay {
        NewStay::new(self.stays.fresh_id()).with_times(
            self.config.default_check_in_time,
            self.config.default_check_out_time,
        )
    }

    pub fn add_stay(&mut self) -> StayId {
        let new_stay = self.new_stay();
        let id = new_stay.id.clone();
        self.apply(StayEdit::Add(new_stay));
        id
    }

    // Adds a stay starting on `check_in`, cutting the current last stay short
    pub fn add_stay_from(&mut self, check_in: NaiveDate) -> StayId {
        let new_stay = self.new_stay().split_at(check_in);
        let id = new_stay.id.clone();
        self.apply(StayEdit::Add(new_stay));
        id
    }

    pub fn remove_stay(&mut self, id: &StayId) {
        if matches!(&self.active_picker, Some(PickerTarget::Stay(open, _)) if open == id) {
            self.active_picker = None;
        }
        self.apply(StayEdit::Remove(id.clone()));
    }

    pub fn update_stay(&mut self, id: &StayId, field: StayField) {
        self.apply(StayEdit::Update(id.clone(), field));
    }

    /// Picker limits for one stay.
    ///
    /// # Panics
    ///
    /// Panics when the id is unknown.
    pub fn bounds(&self, id: &StayId) -> StayBounds {
        self.stays.bounds(&self.window, self.stays.index_of(id))
    }

    pub fn gaps(&self) -> Vec<DateGap> {
        gaps(&self.window, &self.stays)
    }

    pub fn active_picker(&self) -> Option<&PickerTarget> {
        self.active_picker.as_ref()
    }

    // Only one picker is open at a time; opening another replaces it
    pub fn open_picker(&mut self, target: PickerTarget) {
        if let PickerTarget::Stay(id, _) = &target {
            // fails loudly on ids that are not in the sequence
            let _ = self.stays.index_of(id);
        }
        self.active_picker = Some(target);
    }

    // Close or cancel: the target is forgotten without any edit
    pub fn close_picker(&mut self) -> Option<PickerTarget> {
        self.active_picker.take()
    }

    /// Applies the picked value to the open target and closes the picker.
    /// Returns `false` when no picker was open.
    ///
    /// # Panics
    ///
    /// Panics when a time is confirmed on a date target or the other way round.
    pub fn confirm_picker(&mut self, value: PickerValue) -> bool {
        let Some(target) = self.active_picker.take() else {
            return false;
        };

        match (target, value) {
            (PickerTarget::Arrival, PickerValue::Date(date)) => self.set_arrival(date),
            (PickerTarget::Departure, PickerValue::Date(date)) => self.set_departure(date),
            (PickerTarget::Stay(id, field), value) => {
                let field = match (field, value) {
                    (StayPickerField::CheckInDate, PickerValue::Date(date)) => StayField::CheckIn(date),
                    (StayPickerField::CheckOutDate, PickerValue::Date(date)) => StayField::CheckOut(date),
                    (StayPickerField::CheckInTime, PickerValue::Time(time)) => StayField::CheckInTime(time),
                    (StayPickerField::CheckOutTime, PickerValue::Time(time)) => StayField::CheckOutTime(time),
                    (field, value) => panic!("picker for {:?} cannot take {:?}", field, value),
                };
                self.update_stay(&id, field);
            }
            (target, value) => panic!("picker for {:?} cannot take {:?}", target, value),
        }
        true
    }

    /// Validation checkpoint before leaving step 1.
    ///
    /// Order: required destination fields, trip window shape, arrival not in
    /// the past, destination known to the directory, accommodation sequence.
    pub fn validate(
        &self,
        directory: &impl LocationDirectory,
        today: NaiveDate,
    ) -> Result<Step1Data, WizardError> {
        if self.state.trim().is_empty() {
            return Err(ValidationError::required(FormField::State).into());
        }
        if self.city.trim().is_empty() {
            return Err(ValidationError::required(FormField::City).into());
        }
        validate_trip_window(&self.window, today)?;

        let (state, city) = directory.resolve_destination(&self.state, &self.city)?;
        if let Err(violation) = validate_sequence(&self.window, &self.stays) {
            tracing::warn!(index = violation.index(), %violation, "accommodations rejected");
            return Err(violation.into());
        }

        Ok(Step1Data::new(
            state.name.clone(),
            city.name.clone(),
            &self.window,
            &self.stays,
        ))
    }

    pub fn continue_to_next(
        &self,
        draft: ItineraryDraft,
        directory: &impl LocationDirectory,
        today: NaiveDate,
    ) -> Result<ItineraryDraft, WizardError> {
        let data = self.validate(directory, today)?;
        tracing::debug!(
            state = %data.state,
            city = %data.city,
            stays = data.accommodations.len(),
            "step 1 complete"
        );
        Ok(draft.with_step1(data))
    }
}
