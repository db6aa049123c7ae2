use super::*;

fn seen(index: usize, ratio: f64) -> Visibility {
    Visibility { index, is_intersecting: ratio > 0.0, ratio }
}

fn set_of(n: usize) -> RevealSet {
    let mut set = RevealSet::new(RevealOptions::default());
    for _ in 0..n {
        set.track();
    }
    set
}

#[test]
fn default_options_match_page_tuning() {
    let opts = RevealOptions::default();
    assert!((opts.threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(opts.root_margin, "0px 0px -100px 0px");
}

#[test]
fn tracked_elements_start_hidden() {
    let mut set = RevealSet::new(RevealOptions::default());
    assert!(set.is_empty());
    assert_eq!(set.track(), 0);
    assert_eq!(set.track(), 1);
    assert_eq!(set.state(0), Some(RevealState::Hidden));
    assert_eq!(set.state(1), Some(RevealState::Hidden));
    assert_eq!(set.revealed_count(), 0);
}

#[test]
fn hidden_and_revealed_styles() {
    assert_eq!(RevealState::Hidden.style(), ("0", "translateY(30px)"));
    assert_eq!(RevealState::Revealed.style(), ("1", "translateY(0)"));
    assert_eq!(REVEAL_TRANSITION, "opacity 0.6s ease, transform 0.6s ease");
}

#[test]
fn below_threshold_stays_hidden() {
    let mut set = set_of(1);
    assert!(set.observe(&[seen(0, 0.05)]).is_empty());
    assert_eq!(set.state(0), Some(RevealState::Hidden));
}

#[test]
fn not_intersecting_stays_hidden() {
    let mut set = set_of(1);
    let entry = Visibility { index: 0, is_intersecting: false, ratio: 0.5 };
    assert!(set.observe(&[entry]).is_empty());
}

#[test]
fn threshold_crossing_reveals() {
    let mut set = set_of(1);
    assert_eq!(set.observe(&[seen(0, 0.1)]), vec![0]);
    assert_eq!(set.state(0), Some(RevealState::Revealed));
}

#[test]
fn ratio_within_tolerance_below_threshold_reveals() {
    // Browsers report a crossing at 0.1 as slightly less than 0.1.
    let mut set = set_of(1);
    assert_eq!(set.observe(&[seen(0, 0.099_999)]), vec![0]);
}

#[test]
fn reveal_happens_exactly_once() {
    let mut set = set_of(1);
    assert_eq!(set.observe(&[seen(0, 0.3)]), vec![0]);
    assert!(set.observe(&[seen(0, 0.9)]).is_empty());
    assert!(set.observe(&[seen(0, 0.0)]).is_empty());
    assert_eq!(set.state(0), Some(RevealState::Revealed));
    assert_eq!(set.revealed_count(), 1);
}

#[test]
fn batch_entries_are_independent_of_order() {
    let batch = [seen(2, 0.5), seen(0, 0.02), seen(1, 1.0)];
    let mut forward = set_of(3);
    let mut reversed = set_of(3);

    let mut a = forward.observe(&batch);
    let mut rev = batch;
    rev.reverse();
    let mut b = reversed.observe(&rev);
    a.sort_unstable();
    b.sort_unstable();

    assert_eq!(a, vec![1, 2]);
    assert_eq!(a, b);
    for i in 0..3 {
        assert_eq!(forward.state(i), reversed.state(i));
    }
}

#[test]
fn duplicate_entries_in_one_batch_reveal_once() {
    let mut set = set_of(1);
    assert_eq!(set.observe(&[seen(0, 0.2), seen(0, 0.4)]), vec![0]);
}

#[test]
fn unknown_index_is_ignored() {
    let mut set = set_of(1);
    assert!(set.observe(&[seen(5, 1.0)]).is_empty());
    assert_eq!(set.state(5), None);
}

#[test]
fn ratio_beyond_tolerance_stays_hidden() {
    let mut set = set_of(1);
    assert!(set.observe(&[seen(0, 0.098)]).is_empty());
    assert_eq!(set.state(0), Some(RevealState::Hidden));
}

#[test]
fn index_of_matches_by_equality() {
    let tracked = ["header", "section", "footer"];
    assert_eq!(index_of(&tracked, &"section"), Some(1));
    assert_eq!(index_of(&tracked, &"aside"), None);
}

#[test]
fn index_of_feeds_observe() {
    let tracked = ["a", "b", "c"];
    let mut set = set_of(tracked.len());
    let index = index_of(&tracked, &"c").unwrap();
    assert_eq!(set.observe(&[seen(index, 0.5)]), vec![2]);
    assert_eq!(set.state(2), Some(RevealState::Revealed));
    assert_eq!(set.state(0), Some(RevealState::Hidden));
}
