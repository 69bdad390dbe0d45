use rstest::rstest;

use super::*;
use crate::data_structs::typedef::PosType;

// --- GenomicPosition Tests ---

#[test]
fn test_genomic_position_accessors() {
    let gp = GenomicPosition::new(3, 1_000_000);
    assert_eq!(gp.contig(), 3);
    assert_eq!(gp.position(), 1_000_000);
    assert_eq!(gp.to_string(), "3:1000000");
}

#[test]
fn test_genomic_position_orders_by_contig_first() {
    let a = GenomicPosition::new(0, 500);
    let b = GenomicPosition::new(1, 10);
    let c = GenomicPosition::new(1, 20);
    assert!(a < b);
    assert!(b < c);
    assert_eq!(vec![c, a, b].into_iter().max(), Some(c));
}

// --- SvInterval Tests ---

#[test]
#[should_panic(expected = "Start position must be less than or equal to end position")]
fn test_interval_new_rejects_inverted_bounds() {
    let _ = SvInterval::new(0, 20, 10);
}

#[test]
fn test_interval_accessors() {
    let iv = SvInterval::new(2, 100, 150);
    assert_eq!(iv.contig(), 2);
    assert_eq!(iv.start(), 100);
    assert_eq!(iv.end(), 150);
    assert_eq!(iv.length(), 50);
    assert_eq!(iv.start_gpos(), GenomicPosition::new(2, 100));
    assert_eq!(iv.to_string(), "2:100-150");
}

#[rstest]
#[case::separated(SvInterval::new(0, 0, 10), SvInterval::new(0, 12, 20), 2)]
#[case::abutting(SvInterval::new(0, 0, 10), SvInterval::new(0, 10, 20), 0)]
#[case::overlapping(SvInterval::new(0, 0, 10), SvInterval::new(0, 5, 20), 0)]
#[case::contained(SvInterval::new(0, 0, 100), SvInterval::new(0, 40, 60), 0)]
#[case::other_contig(SvInterval::new(0, 0, 10), SvInterval::new(1, 12, 20), PosType::MAX)]
fn test_interval_gap_len(
    #[case] left: SvInterval,
    #[case] right: SvInterval,
    #[case] expected: PosType,
) {
    assert_eq!(left.gap_len(&right), expected);
    assert_eq!(right.gap_len(&left), expected);
}

#[test]
fn test_interval_join_covers_both() {
    let joined = SvInterval::new(0, 0, 10).join(&SvInterval::new(0, 12, 20));
    assert_eq!(joined, SvInterval::new(0, 0, 20));

    let joined = SvInterval::new(0, 30, 40).join(&SvInterval::new(0, 12, 20));
    assert_eq!(joined, SvInterval::new(0, 12, 40));
}

#[test]
fn test_interval_same_contig_and_overlaps() {
    let a = SvInterval::new(1, 0, 10);
    let b = SvInterval::new(1, 9, 15);
    let c = SvInterval::new(2, 0, 10);
    assert!(a.same_contig(&b));
    assert!(!a.same_contig(&c));
    assert!(a.overlaps(&b));
    assert!(!a.overlaps(&c));
    assert!(!a.overlaps(&SvInterval::new(1, 10, 20)));
}

#[test]
fn test_interval_sort_order() {
    let mut intervals = vec![
        SvInterval::new(1, 5, 10),
        SvInterval::new(0, 50, 60),
        SvInterval::new(1, 0, 3),
    ];
    intervals.sort();
    assert_eq!(intervals, vec![
        SvInterval::new(0, 50, 60),
        SvInterval::new(1, 0, 3),
        SvInterval::new(1, 5, 10),
    ]);
}

#[test]
fn test_interval_serde_roundtrip() {
    let iv = SvInterval::new(4, 10, 20);
    let json = serde_json::to_string(&iv).unwrap();
    assert_eq!(json, r#"{"contig":4,"start":10,"end":20}"#);
    let back: SvInterval = serde_json::from_str(&json).unwrap();
    assert_eq!(back, iv);
}

#[test]
fn test_interval_try_new() {
    assert_eq!(SvInterval::try_new(0, 5, 5).unwrap(), SvInterval::new(0, 5, 5));
    let err = SvInterval::try_new(0, 20, 10).unwrap_err();
    assert!(err.to_string().contains("Start position must be less than"));
}

#[test]
fn test_interval_deserialize_rejects_inverted_bounds() {
    let res = serde_json::from_str::<SvInterval>(r#"{"contig":0,"start":20,"end":10}"#);
    let err = res.unwrap_err();
    assert!(err.to_string().contains("Start position must be less than"));
}
