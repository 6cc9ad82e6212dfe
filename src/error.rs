// Error taxonomy shared by the wizard steps

use std::fmt;
use thiserror::Error;

// Form fields a validation error can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    State,
    City,
    ArrivalDate,
    DepartureDate,
    Accommodations,
    Moods,
    Template,
    Name,
    Username,
    Email,
    Password,
    PasswordConfirmation,
    Step(u8),
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::State => write!(f, "state"),
            FormField::City => write!(f, "city"),
            FormField::ArrivalDate => write!(f, "arrivalDate"),
            FormField::DepartureDate => write!(f, "departureDate"),
            FormField::Accommodations => write!(f, "accommodations"),
            FormField::Moods => write!(f, "moods"),
            FormField::Template => write!(f, "template"),
            FormField::Name => write!(f, "name"),
            FormField::Username => write!(f, "username"),
            FormField::Email => write!(f, "email"),
            FormField::Password => write!(f, "password"),
            FormField::PasswordConfirmation => write!(f, "confirmPassword"),
            FormField::Step(step) => write!(f, "step{}", step),
        }
    }
}

// Failures of the pre-submit pass over the accommodation sequence.
// Every variant carries the index of the offending stay.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceViolation {
    #[error("first check-in before trip start")]
    FirstCheckInBeforeTripStart { index: usize },

    #[error("last check-out after trip end")]
    LastCheckOutAfterTripEnd { index: usize },

    #[error("check-out not after check-in for stay #{}", .index + 1)]
    CheckOutNotAfterCheckIn { index: usize },

    #[error("overlapping stays: stay #{} checks in before stay #{} checks out", .index + 1, .index)]
    OverlappingStays { index: usize },
}

impl SequenceViolation {
    pub fn index(&self) -> usize {
        match self {
            SequenceViolation::FirstCheckInBeforeTripStart { index }
            | SequenceViolation::LastCheckOutAfterTripEnd { index }
            | SequenceViolation::CheckOutNotAfterCheckIn { index }
            | SequenceViolation::OverlappingStays { index } => *index,
        }
    }
}

// Why a field was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    #[error("required")]
    Required,

    #[error("arrival in the past")]
    ArrivalInPast,

    #[error("departure not after arrival")]
    DepartureNotAfterArrival,

    #[error(transparent)]
    Sequence(#[from] SequenceViolation),

    #[error("select at least one travel mood")]
    NoMoodSelected,

    #[error("unknown travel mood `{0}`")]
    UnknownMood(String),

    #[error("unknown itinerary template `{0}`")]
    UnknownTemplate(String),

    #[error("passwords do not match")]
    PasswordMismatch,
}

// User-correctable input problem, surfaced inline next to the field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: FormField,
    pub reason: Reason,
}

impl ValidationError {
    pub fn new(field: FormField, reason: Reason) -> Self {
        Self { field, reason }
    }

    pub fn required(field: FormField) -> Self {
        Self::new(field, Reason::Required)
    }
}

impl From<SequenceViolation> for ValidationError {
    fn from(violation: SequenceViolation) -> Self {
        Self::new(FormField::Accommodations, Reason::Sequence(violation))
    }
}

// Destination lookups that matched nothing in the location directory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown state `{0}`")]
    UnknownState(String),

    #[error("city `{city}` not available in state `{state}`")]
    CityNotInState { state: String, city: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(#[from] LookupError),

    #[error("Invalid step payload: {0}")]
    Payload(String),
}

impl From<SequenceViolation> for WizardError {
    fn from(violation: SequenceViolation) -> Self {
        WizardError::Validation(violation.into())
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        WizardError::Payload(err.to_string())
    }
}
