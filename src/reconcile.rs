// Cascade rules that keep the accommodation sequence consistent with the trip window.
// Everything here is a pure function of (window, sequence, edit); invalid intermediate
// states are allowed and only rejected by the validator.

use chrono::{NaiveDate, NaiveTime};

use crate::sequence::AccommodationSequence;
use crate::stay::{Stay, StayField, StayId};
use crate::trip_window::TripWindow;

// A stay about to be appended to the sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStay {
    pub id: StayId,
    // Check-in chosen by the caller; the previous last stay is cut short to it
    pub split_at: Option<NaiveDate>,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
}

impl NewStay {
    pub fn new(id: StayId) -> Self {
        Self {
            id,
            split_at: None,
            check_in_time: None,
            check_out_time: None,
        }
    }

    pub fn split_at(mut self, check_in: NaiveDate) -> Self {
        self.split_at = Some(check_in);
        self
    }

    pub fn with_times(mut self, check_in_time: NaiveTime, check_out_time: NaiveTime) -> Self {
        self.check_in_time = Some(check_in_time);
        self.check_out_time = Some(check_out_time);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StayEdit {
    Add(NewStay),
    Remove(StayId),
    Update(StayId, StayField),
}

/// Applies one stay edit and the cascade it implies.
///
/// # Panics
///
/// Panics when the edit names a stay id that is not in the sequence, or
/// when an added stay reuses an existing id.
pub fn reconcile(
    window: &TripWindow,
    mut sequence: AccommodationSequence,
    edit: StayEdit,
) -> AccommodationSequence {
    match edit {
        StayEdit::Add(new_stay) => add_stay(window, &mut sequence, new_stay),
        StayEdit::Remove(id) => remove_stay(&mut sequence, &id),
        StayEdit::Update(id, field) => update_stay(&mut sequence, &id, field),
    }
    sequence
}

fn add_stay(window: &TripWindow, sequence: &mut AccommodationSequence, new_stay: NewStay) {
    assert!(
        !sequence.contains(&new_stay.id),
        "stay id `{}` is already in the sequence",
        new_stay.id
    );

    let check_in = new_stay
        .split_at
        .or_else(|| sequence.last().map(|last| last.check_out))
        .unwrap_or_else(|| window.arrival());

    let stays = sequence.stays_mut();
    if let Some(previous) = stays.last_mut() {
        previous.check_out = check_in;
    }

    let mut stay = Stay::new(new_stay.id, check_in, window.departure());
    stay.check_in_time = new_stay.check_in_time;
    stay.check_out_time = new_stay.check_out_time;

    tracing::debug!(
        stay = %stay.id,
        check_in = %stay.check_in,
        check_out = %stay.check_out,
        position = stays.len(),
        "stay added"
    );
    stays.push(stay);
}

fn remove_stay(sequence: &mut AccommodationSequence, id: &StayId) {
    let index = sequence.index_of(id);
    let stays = sequence.stays_mut();
    stays.remove(index);

    if index > 0 && index < stays.len() {
        let next_check_in = stays[index].check_in;
        stays[index - 1].check_out = next_check_in;
        tracing::debug!(
            stay = %id,
            closed_at = %next_check_in,
            "stay removed, gap closed"
        );
    } else {
        tracing::debug!(stay = %id, "stay removed");
    }
}

fn update_stay(sequence: &mut AccommodationSequence, id: &StayId, field: StayField) {
    let index = sequence.index_of(id);
    let stays = sequence.stays_mut();

    let cascade_check_in = match field {
        StayField::CheckOut(date) => Some(date),
        _ => None,
    };
    stays[index].apply(field);

    // One step forward only; later stays are left for the user to fix
    if let Some(date) = cascade_check_in {
        if let Some(next) = stays.get_mut(index + 1) {
            tracing::trace!(from = %id, to = %next.id, check_in = %date, "check-out cascaded");
            next.check_in = date;
        }
    }
}

/// Pins the first check-in and the last check-out to the trip window.
/// Idempotent: a second call with the same window changes nothing.
pub fn resync_to_window(
    window: &TripWindow,
    mut sequence: AccommodationSequence,
) -> AccommodationSequence {
    let stays = sequence.stays_mut();

    if let Some(first) = stays.first_mut() {
        if first.check_in != window.arrival() {
            tracing::debug!(stay = %first.id, check_in = %window.arrival(), "first check-in re-synced");
            first.check_in = window.arrival();
        }
    }
    if let Some(last) = stays.last_mut() {
        if last.check_out != window.departure() {
            tracing::debug!(stay = %last.id, check_out = %window.departure(), "last check-out re-synced");
            last.check_out = window.departure();
        }
    }

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn window() -> TripWindow {
        TripWindow::new(date("2025-03-15"), date("2025-03-22"))
    }

    fn add(sequence: AccommodationSequence, id: &str) -> AccommodationSequence {
        reconcile(&window(), sequence, StayEdit::Add(NewStay::new(id.into())))
    }

    fn add_split(sequence: AccommodationSequence, id: &str, at: &str) -> AccommodationSequence {
        reconcile(
            &window(),
            sequence,
            StayEdit::Add(NewStay::new(id.into()).split_at(date(at))),
        )
    }

    fn dates(sequence: &AccommodationSequence) -> Vec<(NaiveDate, NaiveDate)> {
        sequence.iter().map(|s| (s.check_in, s.check_out)).collect()
    }

    #[test]
    fn test_first_stay_fills_the_window() {
        let sequence = add(AccommodationSequence::new(), "1");

        assert_eq!(sequence.len(), 1);
        assert_eq!(dates(&sequence), vec![(date("2025-03-15"), date("2025-03-22"))]);
    }

    #[test]
    fn test_split_moves_previous_check_out() {
        let sequence = add(AccommodationSequence::new(), "1");
        let sequence = add_split(sequence, "2", "2025-03-18");

        assert_eq!(
            dates(&sequence),
            vec![
                (date("2025-03-15"), date("2025-03-18")),
                (date("2025-03-18"), date("2025-03-22")),
            ]
        );
    }

    #[test]
    fn test_default_add_starts_at_previous_check_out() {
        let sequence = add(AccommodationSequence::new(), "1");
        let sequence = add(sequence, "2");

        assert_eq!(sequence.as_slice()[1].check_in, date("2025-03-22"));
        assert_eq!(sequence.as_slice()[0].check_out, date("2025-03-22"));
    }

    #[test]
    fn test_repeated_adds_tile_without_gaps() {
        let mut sequence = add(AccommodationSequence::new(), "s0");
        for (n, at) in ["2025-03-16", "2025-03-17", "2025-03-19", "2025-03-21"]
            .iter()
            .enumerate()
        {
            sequence = add_split(sequence, &format!("s{}", n + 1), at);
        }
        sequence = add(sequence, "tail");

        for pair in sequence.as_slice().windows(2) {
            assert_eq!(pair[1].check_in, pair[0].check_out);
        }
    }

    #[test]
    fn test_added_stay_carries_times() {
        let check_in_time = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        let check_out_time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let sequence = reconcile(
            &window(),
            AccommodationSequence::new(),
            StayEdit::Add(NewStay::new("1".into()).with_times(check_in_time, check_out_time)),
        );

        let stay = sequence.first().unwrap();
        assert_eq!(stay.check_in_time, Some(check_in_time));
        assert_eq!(stay.check_out_time, Some(check_out_time));
    }

    #[test]
    #[should_panic(expected = "already in the sequence")]
    fn test_duplicate_id_panics() {
        let sequence = add(AccommodationSequence::new(), "1");
        add(sequence, "1");
    }

    #[test]
    fn test_remove_middle_closes_gap() {
        let sequence = add(AccommodationSequence::new(), "a");
        let sequence = add_split(sequence, "b", "2025-03-17");
        let sequence = add_split(sequence, "c", "2025-03-20");

        let sequence = reconcile(&window(), sequence, StayEdit::Remove("b".into()));

        assert_eq!(sequence.len(), 2);
        assert_eq!(
            dates(&sequence),
            vec![
                (date("2025-03-15"), date("2025-03-20")),
                (date("2025-03-20"), date("2025-03-22")),
            ]
        );
    }

    #[test]
    fn test_remove_last_leaves_previous_untouched() {
        let sequence = add(AccommodationSequence::new(), "a");
        let sequence = add_split(sequence, "b", "2025-03-17");

        let sequence = reconcile(&window(), sequence, StayEdit::Remove("b".into()));

        assert_eq!(dates(&sequence), vec![(date("2025-03-15"), date("2025-03-17"))]);
    }

    #[test]
    fn test_remove_first_leaves_next_untouched() {
        let sequence = add(AccommodationSequence::new(), "a");
        let sequence = add_split(sequence, "b", "2025-03-17");

        let sequence = reconcile(&window(), sequence, StayEdit::Remove("a".into()));

        assert_eq!(dates(&sequence), vec![(date("2025-03-17"), date("2025-03-22"))]);
    }

    #[test]
    #[should_panic(expected = "no stay with id")]
    fn test_remove_unknown_panics() {
        reconcile(&window(), AccommodationSequence::new(), StayEdit::Remove("x".into()));
    }

    #[test]
    fn test_check_out_cascades_one_step_only() {
        let sequence = add(AccommodationSequence::new(), "a");
        let sequence = add_split(sequence, "b", "2025-03-17");
        let sequence = add_split(sequence, "c", "2025-03-20");

        let sequence = reconcile(
            &window(),
            sequence,
            StayEdit::Update("a".into(), StayField::CheckOut(date("2025-03-18"))),
        );
        assert_eq!(sequence.as_slice()[1].check_in, date("2025-03-18"));

        // only the immediate neighbour moves
        let sequence = reconcile(
            &window(),
            sequence,
            StayEdit::Update("b".into(), StayField::CheckOut(date("2025-03-21"))),
        );
        assert_eq!(sequence.as_slice()[2].check_in, date("2025-03-21"));
        assert_eq!(sequence.as_slice()[0].check_out, date("2025-03-18"));
    }

    #[test]
    fn test_check_in_edit_does_not_cascade_backwards() {
        let sequence = add(AccommodationSequence::new(), "a");
        let sequence = add_split(sequence, "b", "2025-03-17");

        let sequence = reconcile(
            &window(),
            sequence,
            StayEdit::Update("b".into(), StayField::CheckIn(date("2025-03-19"))),
        );
        assert_eq!(sequence.as_slice()[0].check_out, date("2025-03-17"));
        assert_eq!(sequence.as_slice()[1].check_in, date("2025-03-19"));
    }

    #[test]
    fn test_last_check_out_edit_has_no_neighbour() {
        let sequence = add(AccommodationSequence::new(), "a");
        let sequence = reconcile(
            &window(),
            sequence,
            StayEdit::Update("a".into(), StayField::CheckOut(date("2025-03-20"))),
        );
        assert_eq!(dates(&sequence), vec![(date("2025-03-15"), date("2025-03-20"))]);
    }

    #[test]
    fn test_resync_pins_boundaries() {
        let sequence = add(AccommodationSequence::new(), "a");
        let sequence = add_split(sequence, "b", "2025-03-18");

        let moved = TripWindow::new(date("2025-03-14"), date("2025-03-25"));
        let sequence = resync_to_window(&moved, sequence);

        assert_eq!(
            dates(&sequence),
            vec![
                (date("2025-03-14"), date("2025-03-18")),
                (date("2025-03-18"), date("2025-03-25")),
            ]
        );
    }

    #[test]
    fn test_resync_is_idempotent() {
        let sequence = add(AccommodationSequence::new(), "a");
        let sequence = add_split(sequence, "b", "2025-03-18");
        let moved = TripWindow::new(date("2025-03-16"), date("2025-03-20"));

        let once = resync_to_window(&moved, sequence);
        let twice = resync_to_window(&moved, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_resync_empty_is_noop() {
        let sequence = resync_to_window(&window(), AccommodationSequence::new());
        assert!(sequence.is_empty());
    }
}
