#![forbid(unsafe_code)]
use chrono::TimeDelta;
use creneaux::{offset::minutes, split, tile, Slot, SlotError};

fn m(start: i64, dur: i64) -> Slot {
    Slot::from_minutes(start, dur).unwrap()
}

#[test]
fn split_by_two() {
    assert_eq!(split(m(60, 60), 2).unwrap(), vec![m(60, 30), m(90, 30)]);
}

#[test]
fn split_drops_the_remainder() {
    let slot = Slot::new(TimeDelta::zero(), TimeDelta::seconds(10)).unwrap();
    let tiles = split(slot, 3).unwrap();

    assert_eq!(tiles.len(), 3);
    assert_eq!(tiles[0].duration(), TimeDelta::nanoseconds(3_333_333_333));
    assert!(tiles[2].end() < slot.end());
}

#[test]
fn split_tiles_are_equal_and_contiguous() {
    for dur in 0..50 {
        let slot = m(15, dur);
        for parts in 1..7 {
            let tiles = split(slot, parts).unwrap();
            assert_eq!(tiles.len(), parts as usize);
            assert_eq!(tiles[0].start(), slot.start());
            assert!(tiles.iter().all(|t| t.duration() == tiles[0].duration()));
            assert!(tiles.windows(2).all(|w| w[0].end() == w[1].start()));
            assert!(tiles[tiles.len() - 1].end() <= slot.end());
        }
    }
}

#[test]
fn split_rejects_non_positive_divisors() {
    assert_eq!(split(m(60, 60), 0), Err(SlotError::InvalidDivisor(0)));
    assert_eq!(split(m(60, 60), -3), Err(SlotError::InvalidDivisor(-3)));
}

#[test]
fn tile_by_length() {
    assert_eq!(tile(m(0, 50), minutes(20)).unwrap(), vec![m(0, 20), m(20, 20)]);
    assert!(tile(m(0, 10), minutes(20)).unwrap().is_empty());
    assert_eq!(
        tile(m(0, 10), TimeDelta::zero()),
        Err(SlotError::InvalidLength(TimeDelta::zero()))
    );
}

#[test]
fn tile_many_small_pieces() {
    let slot = Slot::new(TimeDelta::zero(), TimeDelta::microseconds(10)).unwrap();
    let tiles = tile(slot, TimeDelta::nanoseconds(1)).unwrap();
    assert_eq!(tiles.len(), 10_000);
    assert_eq!(tiles[9_999].end(), slot.end());
}

#[test]
fn tile_up_to_the_end_of_the_range() {
    let slot = Slot::new(TimeDelta::MAX - minutes(50), minutes(50)).unwrap();
    let tiles = tile(slot, minutes(20)).unwrap();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[1].start(), TimeDelta::MAX - minutes(30));
}
