// Pre-submit checks. These run only at the wizard checkpoint, never on each edit.

use chrono::NaiveDate;

use crate::error::{FormField, Reason, SequenceViolation, ValidationError};
use crate::sequence::AccommodationSequence;
use crate::trip_window::TripWindow;

/// Walks the whole sequence and stops at the first problem found.
///
/// Checks, in order: first check-in not before arrival, last check-out not
/// after departure, every stay ending after it starts, and no stay starting
/// before the previous one ends. Gaps between stays are accepted.
pub fn validate_sequence(
    window: &TripWindow,
    sequence: &AccommodationSequence,
) -> Result<(), SequenceViolation> {
    let (Some(first), Some(last)) = (sequence.first(), sequence.last()) else {
        return Ok(());
    };

    if first.check_in < window.arrival() {
        return Err(SequenceViolation::FirstCheckInBeforeTripStart { index: 0 });
    }
    if last.check_out > window.departure() {
        return Err(SequenceViolation::LastCheckOutAfterTripEnd {
            index: sequence.len() - 1,
        });
    }

    if let Some(index) = sequence
        .iter()
        .position(|stay| stay.check_in >= stay.check_out)
    {
        return Err(SequenceViolation::CheckOutNotAfterCheckIn { index });
    }

    if let Some(index) = sequence
        .as_slice()
        .windows(2)
        .position(|pair| pair[1].check_in < pair[0].check_out)
    {
        return Err(SequenceViolation::OverlappingStays { index: index + 1 });
    }

    Ok(())
}

// Window shape plus the "not in the past" rule, both date-only
pub fn validate_trip_window(window: &TripWindow, today: NaiveDate) -> Result<(), ValidationError> {
    if window.departure() <= window.arrival() {
        return Err(ValidationError::new(
            FormField::DepartureDate,
            Reason::DepartureNotAfterArrival,
        ));
    }
    validate_arrival(window, today)
}

pub fn validate_arrival(window: &TripWindow, today: NaiveDate) -> Result<(), ValidationError> {
    if window.arrival() < today {
        return Err(ValidationError::new(
            FormField::ArrivalDate,
            Reason::ArrivalInPast,
        ));
    }
    Ok(())
}

// Nights inside the trip window that no stay covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateGap {
    pub from: NaiveDate,
    pub until: NaiveDate,
}

impl DateGap {
    pub fn nights(&self) -> i64 {
        (self.until - self.from).num_days()
    }
}

/// Uncovered stretches of the trip. Informational only: the validator
/// does not reject gaps.
pub fn gaps(window: &TripWindow, sequence: &AccommodationSequence) -> Vec<DateGap> {
    let mut found = Vec::new();
    let mut cursor = window.arrival();

    for stay in sequence {
        if stay.check_in > cursor {
            found.push(DateGap {
                from: cursor,
                until: stay.check_in,
            });
        }
        cursor = cursor.max(stay.check_out);
    }
    if window.departure() > cursor {
        found.push(DateGap {
            from: cursor,
            until: window.departure(),
        });
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stay::{Stay, StayId};
    use test_case::test_case;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn window() -> TripWindow {
        TripWindow::new(date("2025-03-15"), date("2025-03-22"))
    }

    fn sequence(ranges: &[(&str, &str)]) -> AccommodationSequence {
        ranges
            .iter()
            .enumerate()
            .map(|(n, (check_in, check_out))| {
                Stay::new(StayId::new(n.to_string()), date(check_in), date(check_out))
            })
            .collect()
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        assert_eq!(validate_sequence(&window(), &AccommodationSequence::new()), Ok(()));
    }

    #[test]
    fn test_contiguous_sequence_is_valid() {
        let stays = sequence(&[
            ("2025-03-15", "2025-03-18"),
            ("2025-03-18", "2025-03-22"),
        ]);
        assert_eq!(validate_sequence(&window(), &stays), Ok(()));
    }

    #[test_case(&[("2025-03-14", "2025-03-18")],
        SequenceViolation::FirstCheckInBeforeTripStart { index: 0 }; "#1 first check-in before trip start")]
    #[test_case(&[("2025-03-15", "2025-03-18"), ("2025-03-18", "2025-03-23")],
        SequenceViolation::LastCheckOutAfterTripEnd { index: 1 }; "#2 last check-out after trip end")]
    #[test_case(&[("2025-03-15", "2025-03-18"), ("2025-03-18", "2025-03-18"), ("2025-03-18", "2025-03-22")],
        SequenceViolation::CheckOutNotAfterCheckIn { index: 1 }; "#3 zero night stay")]
    #[test_case(&[("2025-03-15", "2025-03-19"), ("2025-03-20", "2025-03-17"), ("2025-03-20", "2025-03-22")],
        SequenceViolation::CheckOutNotAfterCheckIn { index: 1 }; "#4 inverted stay")]
    #[test_case(&[("2025-03-15", "2025-03-19"), ("2025-03-18", "2025-03-22")],
        SequenceViolation::OverlappingStays { index: 1 }; "#5 overlap")]
    #[test_case(&[("2025-03-14", "2025-03-23")],
        SequenceViolation::FirstCheckInBeforeTripStart { index: 0 }; "#6 first failure wins")]
    fn test_validate_sequence_failures(ranges: &[(&str, &str)], expected: SequenceViolation) {
        assert_eq!(validate_sequence(&window(), &sequence(ranges)), Err(expected));
    }

    #[test]
    fn test_gap_between_stays_passes_validation() {
        let stays = sequence(&[
            ("2025-03-15", "2025-03-17"),
            ("2025-03-19", "2025-03-22"),
        ]);
        assert_eq!(validate_sequence(&window(), &stays), Ok(()));

        assert_eq!(
            gaps(&window(), &stays),
            vec![DateGap {
                from: date("2025-03-17"),
                until: date("2025-03-19"),
            }]
        );
    }

    #[test]
    fn test_gaps_at_both_ends() {
        let stays = sequence(&[("2025-03-16", "2025-03-20")]);
        let found = gaps(&window(), &stays);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].nights(), 1);
        assert_eq!(found[1].from, date("2025-03-20"));
        assert_eq!(found[1].nights(), 2);
    }

    #[test]
    fn test_empty_sequence_is_one_gap() {
        let found = gaps(&window(), &AccommodationSequence::new());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].nights(), 7);
    }

    #[test_case("2025-03-15", "2025-03-22", "2025-03-15", None; "#1 arriving today")]
    #[test_case("2025-03-15", "2025-03-22", "2025-03-16", Some(Reason::ArrivalInPast); "#2 arrival in the past")]
    #[test_case("2025-03-15", "2025-03-15", "2025-03-01", Some(Reason::DepartureNotAfterArrival); "#3 same day departure")]
    #[test_case("2025-03-15", "2025-03-10", "2025-03-01", Some(Reason::DepartureNotAfterArrival); "#4 departure before arrival")]
    fn test_validate_trip_window(arrival: &str, departure: &str, today: &str, expected: Option<Reason>) {
        let window = TripWindow::new(date(arrival), date(departure));
        let result = validate_trip_window(&window, date(today));
        assert_eq!(result.err().map(|err| err.reason), expected);
    }
}
