use super::*;

#[test]
fn fires_after_quiet_period() {
    let mut debounce = Debounce::new(250);
    let ticket = debounce.arm(1000.0);
    assert!(debounce.is_pending());
    assert!(debounce.fire(ticket, 1250.0));
    assert!(!debounce.is_pending());
}

#[test]
fn does_not_fire_early() {
    let mut debounce = Debounce::new(250);
    let ticket = debounce.arm(1000.0);
    assert!(!debounce.fire(ticket, 1249.0));
    assert!(debounce.is_pending());
}

#[test]
fn newer_event_supersedes_older_ticket() {
    let mut debounce = Debounce::new(250);
    let first = debounce.arm(0.0);
    let second = debounce.arm(100.0);
    assert!(!debounce.fire(first, 250.0));
    assert!(!debounce.fire(second, 300.0));
    assert!(debounce.fire(second, 350.0));
}

#[test]
fn fires_only_once() {
    let mut debounce = Debounce::new(250);
    let ticket = debounce.arm(0.0);
    assert!(debounce.fire(ticket, 300.0));
    assert!(!debounce.fire(ticket, 400.0));
}

#[test]
fn ticket_reports_due_time() {
    let mut debounce = Debounce::new(250);
    assert!((debounce.arm(10.0).due_at_ms() - 260.0).abs() < f64::EPSILON);
}
