use super::*;

fn run(tw: &mut Typewriter) -> (String, Vec<u32>, usize) {
    let mut shown = String::new();
    let mut delays = Vec::new();
    let mut finishes = 0;
    loop {
        match tw.tick() {
            Tick::Typed { ch, next_in_ms } => {
                shown.push(ch);
                delays.push(next_in_ms);
            }
            Tick::Finished => {
                finishes += 1;
                break;
            }
            Tick::Idle => break,
        }
    }
    (shown, delays, finishes)
}

#[test]
fn new_typewriter_shows_nothing() {
    let tw = Typewriter::new("Kaushal");
    assert_eq!(tw.cursor(), 0);
    assert_eq!(tw.revealed(), "");
    assert!(!tw.is_finished());
}

#[test]
fn after_n_ticks_shows_first_n_chars() {
    let text = "Kaushal Bhattarai";
    for n in 0..=text.len() {
        let mut tw = Typewriter::new(text);
        let mut shown = String::new();
        for _ in 0..n {
            if let Tick::Typed { ch, .. } = tw.tick() {
                shown.push(ch);
            }
        }
        assert_eq!(shown, &text[..n]);
        assert_eq!(tw.revealed(), &text[..n]);
        assert_eq!(tw.cursor(), n);
    }
}

#[test]
fn every_typed_tick_schedules_after_fixed_delay() {
    let mut tw = Typewriter::new("abc");
    let (shown, delays, _) = run(&mut tw);
    assert_eq!(shown, "abc");
    assert_eq!(delays, vec![100, 100, 100]);
}

#[test]
fn finish_is_reported_exactly_once() {
    let mut tw = Typewriter::new("hi");
    let (_, _, finishes) = run(&mut tw);
    assert_eq!(finishes, 1);
    assert!(tw.is_finished());
    assert_eq!(tw.tick(), Tick::Idle);
    assert_eq!(tw.tick(), Tick::Idle);
    assert_eq!(tw.cursor(), 2);
}

#[test]
fn cursor_never_exceeds_length() {
    let mut tw = Typewriter::new("ok");
    for _ in 0..10 {
        tw.tick();
        assert!(tw.cursor() <= tw.len());
    }
}

#[test]
fn empty_text_finishes_on_first_tick() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_empty());
    assert_eq!(tw.tick(), Tick::Finished);
    assert_eq!(tw.tick(), Tick::Idle);
}

#[test]
fn multibyte_text_is_typed_per_char() {
    let mut tw = Typewriter::new("né✓");
    let (shown, delays, _) = run(&mut tw);
    assert_eq!(shown, "né✓");
    assert_eq!(delays.len(), 3);
}

#[test]
fn start_delay_is_half_a_second() {
    assert_eq!(Typewriter::start_delay_ms(), 500);
}
