#![forbid(unsafe_code)]
use creneaux::algebra::sweep;
use creneaux::{is_canonical, normalize, Slot};

fn m(start: i64, dur: i64) -> Slot {
    Slot::from_minutes(start, dur).unwrap()
}

#[test]
fn difference_splits_across_two_minuends() {
    let result = sweep::difference(&[m(50, 20), m(80, 20)], &[m(60, 30)]);
    assert_eq!(result, vec![m(50, 10), m(90, 10)]);
}

#[test]
fn empty_operands() {
    let a = vec![m(60, 30), m(100, 10)];

    assert_eq!(sweep::difference(&a, &[]), a);
    assert_eq!(sweep::union(&a, &[]), a);
    assert!(sweep::intersection(&a, &[]).is_empty());

    assert!(sweep::difference(&[], &a).is_empty());
    assert_eq!(sweep::union(&[], &a), a);
    assert!(sweep::intersection(&[], &a).is_empty());
}

#[test]
fn empty_operand_still_drops_zero_length_slots() {
    assert_eq!(sweep::difference(&[m(0, 0), m(10, 5)], &[]), vec![m(10, 5)]);
    assert_eq!(sweep::union(&[m(0, 0), m(10, 5)], &[]), vec![m(10, 5)]);
    assert_eq!(sweep::union(&[], &[m(10, 5), m(20, 0)]), vec![m(10, 5)]);
}

#[test]
fn union_with_empty_operand_merges_touching_slots() {
    assert_eq!(sweep::union(&[m(0, 10), m(10, 10)], &[]), vec![m(0, 20)]);
    assert_eq!(sweep::union(&[], &[m(0, 10), m(10, 10)]), vec![m(0, 20)]);
}

#[test]
fn difference_ignores_zero_length_subtrahends() {
    assert!(sweep::difference(&[], &[m(0, 0)]).is_empty());
    assert_eq!(sweep::difference(&[m(60, 30)], &[m(70, 0)]), vec![m(60, 30)]);
}

#[test]
fn difference_of_equal_sequences_is_empty() {
    let a = [m(60, 60)];
    assert!(sweep::difference(&a, &a).is_empty());
}

#[test]
fn difference_single_minuend_cases() {
    let cases = [
        (m(60, 30), m(30, 30), vec![m(60, 30)]),
        (m(60, 30), m(40, 30), vec![m(70, 20)]),
        (m(60, 30), m(60, 10), vec![m(70, 20)]),
        (m(60, 30), m(70, 10), vec![m(60, 10), m(80, 10)]),
        (m(60, 30), m(80, 10), vec![m(60, 20)]),
        (m(60, 30), m(90, 10), vec![m(60, 30)]),
        (m(60, 30), m(100, 10), vec![m(60, 30)]),
    ];
    for (minuend, sub, expected) in cases {
        assert_eq!(sweep::difference(&[minuend], &[sub]), expected, "{minuend} - {sub}");
    }
}

#[test]
fn difference_one_minuend_cut_by_many_subtrahends() {
    let result = sweep::difference(&[m(60, 50)], &[m(60, 10), m(80, 10), m(100, 10)]);
    assert_eq!(result, vec![m(70, 10), m(90, 10)]);
}

#[test]
fn difference_with_touching_minuends() {
    let result = sweep::difference(&[m(60, 30), m(90, 30)], &[m(60, 10), m(90, 10)]);
    assert_eq!(result, vec![m(70, 20), m(100, 20)]);

    let result = sweep::difference(
        &[m(60, 30), m(90, 30)],
        &[m(60, 10), m(80, 20), m(110, 10)],
    );
    assert_eq!(result, vec![m(70, 10), m(100, 10)]);
}

#[test]
fn difference_subtrahend_spanning_several_minuends() {
    let result = sweep::difference(&[m(0, 10), m(20, 10), m(40, 10), m(60, 10)], &[m(5, 50)]);
    assert_eq!(result, vec![m(0, 5), m(60, 10)]);
}

#[test]
fn union_chain_merges() {
    let a = [m(0, 10), m(20, 10), m(40, 10)];
    let b = [m(10, 10), m(30, 10)];
    assert_eq!(sweep::union(&a, &b), vec![m(0, 50)]);
}

#[test]
fn union_interleaved_keeps_gaps() {
    let a = [m(0, 10), m(40, 10)];
    let b = [m(5, 10), m(60, 5)];
    assert_eq!(sweep::union(&a, &b), vec![m(0, 15), m(40, 10), m(60, 5)]);
}

#[test]
fn intersection_interleaved() {
    let a = [m(0, 30), m(40, 30)];
    let b = [m(10, 40), m(65, 20)];
    assert_eq!(
        sweep::intersection(&a, &b),
        vec![m(10, 20), m(40, 10), m(65, 5)]
    );
}

#[test]
fn normalize_sorts_and_merges() {
    let raw = vec![m(90, 30), m(60, 30), m(200, 0), m(150, 10), m(100, 60)];
    let canonical = normalize(raw);
    assert_eq!(canonical, vec![m(60, 100)]);
    assert!(is_canonical(&canonical));
}

#[test]
fn canonical_check() {
    assert!(is_canonical(&[]));
    assert!(is_canonical(&[m(0, 10), m(10, 10)]));
    assert!(!is_canonical(&[m(10, 10), m(0, 5)]));
    assert!(!is_canonical(&[m(0, 10), m(5, 10)]));
}

#[test]
fn long_sequences_are_swept_iteratively() {
    let a: Vec<Slot> = (0..100_000).map(|k| m(k * 10, 5)).collect();
    let b: Vec<Slot> = (0..100_000).map(|k| m(k * 10 + 2, 1)).collect();

    let diff = sweep::difference(&a, &b);
    assert_eq!(diff.len(), 200_000);
    assert_eq!(sweep::intersection(&a, &b), b);
    assert_eq!(sweep::union(&a, &b), a);
}

// Oracle : un ensemble de minutes dans une fenêtre de 8, codé en bits.
const WINDOW: u32 = 8;

fn runs(mask: u32) -> Vec<Slot> {
    let mut out = Vec::new();
    let mut k = 0;
    while k < WINDOW {
        if mask & (1 << k) == 0 {
            k += 1;
            continue;
        }
        let start = k;
        while k < WINDOW && mask & (1 << k) != 0 {
            k += 1;
        }
        out.push(m(i64::from(start), i64::from(k - start)));
    }
    out
}

#[test]
fn sweeps_match_a_minute_bitmap_oracle() {
    let all = 1u32 << WINDOW;
    for x in 0..all {
        let a = runs(x);
        for y in 0..all {
            let b = runs(y);
            assert_eq!(sweep::difference(&a, &b), runs(x & !y), "{x:08b} - {y:08b}");
            assert_eq!(sweep::intersection(&a, &b), runs(x & y), "{x:08b} & {y:08b}");
            assert_eq!(sweep::union(&a, &b), runs(x | y), "{x:08b} | {y:08b}");
        }
    }
}
