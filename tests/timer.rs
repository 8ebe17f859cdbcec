use fryflip::timer::{timer_seconds_for, CookTimer, TimerEvent};

#[test]
fn timer_length_is_ninety_percent_of_oven_time() {
    assert_eq!(timer_seconds_for("25"), 1350);
    assert_eq!(timer_seconds_for("1:15"), 4050);
    assert_eq!(timer_seconds_for(""), 1);
    assert_eq!(timer_seconds_for("abc"), 1);
}

#[test]
fn halfway_is_announced_once() {
    let mut timer = CookTimer::new();
    timer.start(10);
    let events: Vec<TimerEvent> = std::iter::from_fn(|| match timer.tick() {
        TimerEvent::Idle => None,
        ev => Some(ev),
    })
    .collect();

    let halfway: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, TimerEvent::Halfway { .. }))
        .collect();
    assert_eq!(halfway, vec![&TimerEvent::Halfway { remaining: 5 }]);
    assert_eq!(events.last(), Some(&TimerEvent::Finished));
    assert_eq!(events.len(), 10);
    assert!(!timer.is_running());
}

#[test]
fn stop_cancels_and_restart_resets_halfway() {
    let mut timer = CookTimer::new();
    timer.start(4);
    assert_eq!(timer.tick(), TimerEvent::Running { remaining: 3 });
    assert_eq!(timer.tick(), TimerEvent::Halfway { remaining: 2 });
    timer.stop();
    assert_eq!(timer.tick(), TimerEvent::Idle);
    assert_eq!(timer.display(), "0:00");

    timer.start(4);
    assert!(!timer.halfway_announced());
    assert_eq!(timer.display(), "0:04");
}

#[test]
fn start_for_uses_oven_text() {
    let mut timer = CookTimer::new();
    let secs = timer.start_for("1h");
    assert_eq!(secs, 3240);
    assert_eq!(timer.display(), "54:00");
}
