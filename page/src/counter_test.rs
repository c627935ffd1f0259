#![allow(clippy::float_cmp)]

use super::*;

fn frames(spec: CounterSpec) -> Vec<CounterFrame> {
    let anim = CounterAnimation::new(spec, 1000.0, 2000.0);
    (0..=125).map(|i| anim.sample(1000.0 + f64::from(i) * 16.0)).collect()
}

fn displayed_number(text: &str) -> f64 {
    text.trim_end_matches(['M', '+', '%']).parse().unwrap()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_plus_suffix() {
    assert_eq!(CounterSpec::parse("250+"), Some(CounterSpec { target: 250.0, suffix: Suffix::Plus }));
}

#[test]
fn parses_percent_suffix() {
    assert_eq!(CounterSpec::parse("98%"), Some(CounterSpec { target: 98.0, suffix: Suffix::Percent }));
}

#[test]
fn percent_takes_integer_part() {
    assert_eq!(CounterSpec::parse("99.9%").map(|s| s.target), Some(99.0));
}

#[test]
fn parses_millions_as_tenths() {
    assert_eq!(CounterSpec::parse("5M+"), Some(CounterSpec { target: 50.0, suffix: Suffix::Millions }));
    assert_eq!(CounterSpec::parse("1.5M+").map(|s| s.target), Some(15.0));
}

#[test]
fn parses_bare_number() {
    assert_eq!(CounterSpec::parse("42"), Some(CounterSpec { target: 42.0, suffix: Suffix::Bare }));
    assert_eq!(CounterSpec::parse("  12 years").map(|s| s.target), Some(12.0));
}

#[test]
fn non_numeric_text_is_rejected() {
    assert_eq!(CounterSpec::parse("many+"), None);
    assert_eq!(CounterSpec::parse(""), None);
    assert_eq!(CounterSpec::parse("M+"), None);
    assert_eq!(CounterSpec::parse("%"), None);
}

// =============================================================
// Formatting / easing
// =============================================================

#[test]
fn format_reapplies_suffix() {
    let plus = CounterSpec { target: 250.0, suffix: Suffix::Plus };
    assert_eq!(plus.format(0.0), "0+");
    assert_eq!(CounterSpec { target: 1.0, suffix: Suffix::Percent }.format(37.0), "37%");
    assert_eq!(CounterSpec { target: 1.0, suffix: Suffix::Bare }.format(7.0), "7");
}

#[test]
fn millions_format_divides_by_ten() {
    let spec = CounterSpec { target: 50.0, suffix: Suffix::Millions };
    assert_eq!(spec.format(50.0), "5M+");
    assert_eq!(spec.format(25.0), "3M+");
    assert_eq!(spec.format(4.0), "0M+");
}

#[test]
fn easing_endpoints() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert_eq!(ease_out_quart(0.5), 0.9375);
}

// =============================================================
// Animation
// =============================================================

#[test]
fn plus_counter_runs_from_zero_to_target() {
    let frames = frames(CounterSpec::parse("250+").unwrap());
    assert_eq!(frames[0].text, "0+");
    assert!(!frames[0].done);
    let last = frames.last().unwrap();
    assert_eq!(last.text, "250+");
    assert!(last.done);
}

#[test]
fn plus_counter_never_decreases() {
    let frames = frames(CounterSpec::parse("250+").unwrap());
    let values = frames.iter().map(|f| displayed_number(&f.text)).collect::<Vec<_>>();
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "{values:?}");
}

#[test]
fn done_only_at_end_of_window() {
    let anim = CounterAnimation::new(CounterSpec::parse("250+").unwrap(), 0.0, 2000.0);
    assert!(!anim.sample(1999.0).done);
    assert!(anim.sample(2000.0).done);
    assert_eq!(anim.sample(5000.0).text, "250+");
}

#[test]
fn millions_counter_ends_at_original_text() {
    let frames = frames(CounterSpec::parse("5M+").unwrap());
    assert_eq!(frames[0].text, "0M+");
    assert_eq!(frames.last().unwrap().text, "5M+");
}

#[test]
fn progress_clamps_before_start() {
    let anim = CounterAnimation::new(CounterSpec::parse("10").unwrap(), 500.0, 2000.0);
    assert_eq!(anim.progress(0.0), 0.0);
    assert_eq!(anim.sample(0.0).text, "0");
}

#[test]
fn zero_duration_finishes_immediately() {
    let anim = CounterAnimation::new(CounterSpec::parse("10").unwrap(), 0.0, 0.0);
    assert_eq!(anim.sample(0.0), CounterFrame { text: "10".to_owned(), done: true });
}

// =============================================================
// Watch
// =============================================================

#[test]
fn counter_starts_once() {
    let mut watch = CounterWatch::new(2);
    assert!(!watch.on_intersect(0, false));
    assert!(watch.on_intersect(0, true));
    assert!(!watch.on_intersect(0, true));
    assert!(watch.on_intersect(1, true));
}
