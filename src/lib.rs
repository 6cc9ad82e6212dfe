// Core of the trip planning wizard: trip window, accommodation sequence
// reconciliation, pre-submit validation and the step handoff payloads

pub mod auth;
pub mod catalog;
pub mod config;
pub mod draft;
pub mod error;
pub mod locations;
pub mod reconcile;
pub mod sequence;
pub mod stay;
pub mod trip_form;
pub mod trip_window;
pub mod validation;
pub mod wire;

// Re-export key types for convenience
pub use auth::{
    ApiError, AuthBackend, AuthConfig, AuthService, LoginCredentials, LoginResponse, Receipt,
    RegisterCredentials, RegistrationError, RegistrationForm, UserResponse,
};
pub use config::WizardConfig;
pub use draft::{CompletedItinerary, ItineraryDraft, MoodForm, Step2Data, Step3Data, StyleForm};
pub use error::{
    FormField, LookupError, Reason, SequenceViolation, ValidationError, WizardError,
};
pub use locations::{City, LocationDirectory, State, StaticLocationDirectory};
pub use reconcile::{reconcile, resync_to_window, NewStay, StayEdit};
pub use sequence::{AccommodationSequence, StayBounds};
pub use stay::{Stay, StayField, StayId};
pub use trip_form::{PickerTarget, PickerValue, StayPickerField, TripForm};
pub use trip_window::TripWindow;
pub use validation::{gaps, validate_arrival, validate_sequence, validate_trip_window, DateGap};
pub use wire::{AccommodationPayload, Step1Data};
