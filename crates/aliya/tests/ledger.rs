use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use yaamod_aliya::{AliyaLedger, LedgerError, NewScheduledAliya, PersonId};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 7, 4).unwrap()
}

#[test]
fn second_create_for_same_slot_fails_regardless_of_oleh() {
    let ledger = AliyaLedger::new();
    let first = ledger
        .create(NewScheduledAliya::new(date(), 1, PersonId::new(1)))
        .unwrap();
    assert_eq!(first.oleh(), PersonId::new(1));
    assert!(!first.mincha());

    for oleh in [1, 2] {
        let err = ledger
            .create(NewScheduledAliya::new(date(), 1, PersonId::new(oleh)))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::SlotTaken {
                date: date(),
                mincha: false,
                aliya_number: 1,
            }
        );
    }
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.get(date(), false, 1), Some(first));
}

#[test]
fn mincha_and_number_are_part_of_the_slot() {
    let ledger = AliyaLedger::new();
    let oleh = PersonId::new(1);
    ledger.create(NewScheduledAliya::new(date(), 1, oleh)).unwrap();
    ledger
        .create(NewScheduledAliya::new(date(), 1, oleh).with_mincha(true))
        .unwrap();
    ledger.create(NewScheduledAliya::new(date(), 2, oleh)).unwrap();
    let next_day = date().succ_opt().unwrap();
    ledger.create(NewScheduledAliya::new(next_day, 1, oleh)).unwrap();
    assert_eq!(ledger.len(), 4);

    let rows: Vec<(bool, u8)> = ledger
        .for_date(date())
        .iter()
        .map(|row| (row.mincha(), row.aliya_number()))
        .collect();
    assert_eq!(rows, vec![(false, 1), (false, 2), (true, 1)]);
}

#[test]
fn cancel_frees_the_slot() {
    let ledger = AliyaLedger::new();
    let row = ledger
        .create(NewScheduledAliya::new(date(), 3, PersonId::new(1)))
        .unwrap();
    assert_eq!(ledger.cancel(date(), false, 3), Some(row));
    assert_eq!(ledger.cancel(date(), false, 3), None);
    assert!(ledger.is_empty());

    let replacement = ledger
        .create(NewScheduledAliya::new(date(), 3, PersonId::new(2)))
        .unwrap();
    assert_eq!(replacement.oleh(), PersonId::new(2));
}

#[test]
fn concurrent_assignment_has_one_winner() {
    let ledger = AliyaLedger::new();
    let wins = AtomicUsize::new(0);
    let conflicts = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for oleh in 0..16 {
            let (ledger, wins, conflicts) = (&ledger, &wins, &conflicts);
            scope.spawn(move || {
                match ledger.create(NewScheduledAliya::new(date(), 1, PersonId::new(oleh))) {
                    Ok(_) => wins.fetch_add(1, Ordering::SeqCst),
                    Err(LedgerError::SlotTaken { .. }) => conflicts.fetch_add(1, Ordering::SeqCst),
                    Err(other) => panic!("unexpected error: {other}"),
                };
            });
        }
    });

    assert_eq!(wins.load(Ordering::SeqCst), 1);
    assert_eq!(conflicts.load(Ordering::SeqCst), 15);
    assert_eq!(ledger.len(), 1);
}
