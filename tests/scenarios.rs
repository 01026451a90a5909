use carousel::{
    Carousel, CarouselConfig, CarouselItem, CarouselState, Direction, PlayState, Release, SettleOutcome, Size,
    TrackTransform,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn banners(n: i64) -> Vec<CarouselItem> {
    (1..=n).map(|o| CarouselItem::new(o, format!("banner{o}.jpg"))).collect()
}

#[derive(Default)]
struct Recorder {
    items: Rc<RefCell<Vec<i64>>>,
    states: Rc<RefCell<Vec<PlayState>>>,
}

impl Recorder {
    fn attach(&self, carousel: Carousel) -> Carousel {
        let items = self.items.clone();
        let states = self.states.clone();
        carousel
            .on_change_item(move |item| items.borrow_mut().push(item.order))
            .on_change_state(move |state| states.borrow_mut().push(state))
    }

    fn items(&self) -> Vec<i64> {
        self.items.borrow().clone()
    }

    fn states(&self) -> Vec<PlayState> {
        self.states.borrow().clone()
    }
}

/// Runs 16ms frames from `from` until no gesture remains, returning the time reached.
fn settle(carousel: &mut Carousel, from: u64) -> u64 {
    let mut t = from;
    while carousel.gesture().is_some() {
        carousel.frame(ms(t));
        t += 16;
        assert!(t < from + 10_000, "settle never finished");
    }
    t - 16
}

fn banner_config() -> CarouselConfig {
    CarouselConfig::new(banners(3))
        .interval(ms(5000))
        .duration(ms(200))
        .size(Size::new(200.0, 100.0))
}

#[test]
fn three_quick_next_calls_wrap_around() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config(), ms(0)));

    let mut targets = Vec::new();
    for _ in 0..3 {
        carousel.go_next(ms(0));
        targets.push(carousel.target_item().unwrap().order);
    }
    assert_eq!(targets, vec![2, 3, 1]);

    assert!(carousel.complete_transition(carousel.style().id));
    assert_eq!(recorder.items(), vec![2, 3, 1]);
    assert_eq!(carousel.visible_item().unwrap().order, 1);
    assert!(carousel.state().is_resting());
}

#[test]
fn disabled_autoplay_never_schedules() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config().interval(ms(0)), ms(0)));

    carousel.mount(ms(0));
    carousel.play(ms(10));
    carousel.toggle_play(ms(20));
    carousel.update(ms(60_000));

    assert_eq!(carousel.next_autoplay(), None);
    assert!(!carousel.is_playing());
    assert!(!carousel.progress_scheduled());
    assert!(carousel.view().progress.is_none());
    assert!(recorder.states().is_empty());
    assert_eq!(carousel.visible_item().unwrap().order, 1);
}

#[test]
fn autoplay_advances_on_interval() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config(), ms(0)));
    carousel.mount(ms(0));
    assert_eq!(recorder.states(), vec![PlayState::Play]);

    carousel.update(ms(4999));
    assert!(carousel.state().is_resting());

    carousel.update(ms(5000));
    assert!(matches!(carousel.state(), CarouselState::TransitioningNext { .. }));
    assert!(carousel.complete_transition(carousel.style().id));
    assert_eq!(recorder.items(), vec![2]);
    assert_eq!(carousel.next_autoplay(), Some(ms(10_000)));
}

#[test]
fn resume_preserves_elapsed_time() {
    let mut carousel = Carousel::new(banner_config(), ms(0));
    carousel.mount(ms(0));
    carousel.pause(ms(2000));
    assert_eq!(carousel.timer_state().elapsed_at_pause, Some(ms(2000)));

    carousel.play(ms(10_000));
    assert_eq!(carousel.next_autoplay(), Some(ms(13_000)));

    carousel.update(ms(12_999));
    assert!(carousel.state().is_resting());
    carousel.update(ms(13_000));
    assert_eq!(carousel.target_item().unwrap().order, 2);
}

#[test]
fn manual_navigation_resets_the_cycle() {
    let mut carousel = Carousel::new(banner_config(), ms(0));
    carousel.mount(ms(0));

    carousel.go_prev(ms(3000));
    assert_eq!(carousel.next_autoplay(), Some(ms(8000)));
    assert_eq!(carousel.timer_state().start, ms(3000));
    assert!(carousel.complete_transition(carousel.style().id));
    assert_eq!(carousel.visible_item().unwrap().order, 3);

    carousel.update(ms(5000));
    assert!(carousel.state().is_resting());
    carousel.update(ms(8000));
    assert_eq!(carousel.target_item().unwrap().order, 1);
}

#[test]
fn manual_navigation_rearms_paused_autoplay() {
    let mut carousel = Carousel::new(banner_config(), ms(0));
    carousel.mount(ms(0));
    carousel.pause(ms(1000));

    carousel.go_next(ms(2000));
    assert!(carousel.is_playing());
    assert_eq!(carousel.next_autoplay(), Some(ms(7000)));
    assert_eq!(carousel.timer_state().elapsed_at_pause, None);
}

#[test]
fn single_item_still_slides() {
    let recorder = Recorder::default();
    let config = CarouselConfig::new(vec![CarouselItem::new(1, "only.jpg")]);
    let mut carousel = recorder.attach(Carousel::new(config, ms(0)));

    assert_eq!(carousel.view().slides.len(), 1);

    carousel.go_next(ms(0));
    let CarouselState::TransitioningNext { visible, next } = carousel.state() else {
        panic!("expected a next transition, got {:?}", carousel.state());
    };
    assert_ne!(visible, next);

    let view = carousel.view();
    let orders: Vec<i64> = view.slides.iter().map(|s| s.item.order).collect();
    assert_eq!(orders, vec![1, 2]);
    assert!(view.slides.iter().all(|s| s.item.image == "only.jpg"));

    assert!(carousel.complete_transition(carousel.style().id));
    assert_eq!(recorder.items(), vec![2]);
}

#[test]
fn swipe_left_past_threshold_commits_next() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config(), ms(0)));
    carousel.mount(ms(0));

    assert!(carousel.touch_start(100.0, ms(1000)));
    assert!(!carousel.is_playing());
    carousel.touch_move(40.0);
    assert_eq!(
        carousel.view().gesture_transform,
        Some(TrackTransform::new(0.0, -60.0))
    );
    let orders: Vec<i64> = carousel.view().slides.iter().map(|s| s.item.order).collect();
    assert_eq!(orders, vec![1, 2]);

    assert_eq!(
        carousel.touch_end(ms(1100)),
        Release::Settling(SettleOutcome::Commit(Direction::Next))
    );
    assert!(recorder.items().is_empty());

    let done = settle(&mut carousel, 1100);
    assert_eq!(recorder.items(), vec![2]);
    assert_eq!(carousel.visible_item().unwrap().order, 2);
    assert!(carousel.state().is_resting());
    assert!(carousel.is_playing());
    assert_eq!(carousel.next_autoplay(), Some(ms(done + 5000)));
    assert_eq!(
        recorder.states(),
        vec![PlayState::Play, PlayState::Pause, PlayState::Play]
    );
}

#[test]
fn swipe_right_past_threshold_commits_prev() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config(), ms(0)));

    carousel.touch_start(20.0, ms(0));
    carousel.touch_move(90.0);
    let view = carousel.view();
    assert_eq!(view.gesture_transform, Some(TrackTransform::new(-1.0, 70.0)));
    assert_eq!(view.slides[0].item.order, 3);

    carousel.touch_end(ms(10));
    settle(&mut carousel, 10);
    assert_eq!(recorder.items(), vec![3]);
}

#[test]
fn short_swipe_snaps_back_and_resumes() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config(), ms(0)));
    carousel.mount(ms(0));

    carousel.touch_start(100.0, ms(1000));
    carousel.touch_move(60.0);
    assert_eq!(carousel.touch_end(ms(1000)), Release::Settling(SettleOutcome::Cancel));

    carousel.frame(ms(1000));
    carousel.frame(ms(1100));
    let mid = carousel.view().gesture_transform.unwrap();
    assert!(mid.px < 0.0 && mid.px > -40.0);

    settle(&mut carousel, 1200);
    assert!(recorder.items().is_empty());
    assert_eq!(carousel.visible_item().unwrap().order, 1);
    assert!(carousel.view().gesture_transform.is_none());
    assert!(carousel.is_playing());
    // Paused 1000ms into the cycle, resumed at 1200.
    assert_eq!(carousel.next_autoplay(), Some(ms(5200)));
}

#[test]
fn tap_resumes_without_moving() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config(), ms(0)));
    carousel.mount(ms(0));

    carousel.touch_start(50.0, ms(500));
    assert_eq!(carousel.touch_end(ms(700)), Release::Tap);
    assert!(carousel.gesture().is_none());
    assert!(carousel.is_playing());
    assert_eq!(carousel.next_autoplay(), Some(ms(5200)));
    assert!(recorder.items().is_empty());
}

#[test]
fn touch_during_settle_is_ignored() {
    let mut carousel = Carousel::new(banner_config(), ms(0));
    carousel.touch_start(150.0, ms(0));
    carousel.touch_move(20.0);
    carousel.touch_end(ms(0));
    carousel.frame(ms(0));

    assert!(!carousel.touch_start(10.0, ms(50)));
    carousel.touch_move(190.0);
    assert_eq!(carousel.touch_end(ms(60)), Release::Ignored);

    settle(&mut carousel, 60);
    assert_eq!(carousel.visible_item().unwrap().order, 2);
    assert!(carousel.touch_start(10.0, ms(400)));
}

#[test]
fn autoplay_does_not_fire_during_gesture() {
    let mut carousel = Carousel::new(banner_config(), ms(0));
    carousel.mount(ms(0));
    carousel.touch_start(100.0, ms(4000));
    carousel.touch_move(90.0);

    carousel.update(ms(9000));
    assert!(carousel.state().is_resting());
    assert_eq!(carousel.visible_item().unwrap().order, 1);
}

#[test]
fn progress_bar_tracks_the_cycle() {
    let mut carousel = Carousel::new(banner_config().interval(ms(1000)), ms(0));
    carousel.mount(ms(0));
    assert!(carousel.progress_scheduled());

    carousel.frame(ms(250));
    let bar = carousel.view().progress.unwrap();
    assert!((bar.left - 0.25).abs() < 1e-4);
    assert!((bar.width - 0.75).abs() < 1e-4);

    carousel.pause(ms(500));
    assert!(!carousel.progress_scheduled());

    carousel.play(ms(2000));
    carousel.frame(ms(2000));
    let bar = carousel.view().progress.unwrap();
    assert!((bar.left - 0.5).abs() < 1e-4);
}

#[test]
fn progress_lead_shortens_the_bar() {
    let config = banner_config().interval(ms(1000)).progress_lead(ms(200));
    let mut carousel = Carousel::new(config, ms(0));
    carousel.mount(ms(0));

    carousel.frame(ms(400));
    let bar = carousel.view().progress.unwrap();
    assert!((bar.left - 0.5).abs() < 1e-4);

    carousel.frame(ms(800));
    assert!(!carousel.progress_scheduled());
}

#[test]
fn pause_mid_slide_is_not_overridden_by_the_commit() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config(), ms(0)));
    carousel.mount(ms(0));

    carousel.go_next(ms(100));
    carousel.pause(ms(150));
    assert!(carousel.complete_transition(carousel.style().id));

    assert_eq!(recorder.items(), vec![2]);
    assert!(!carousel.is_playing());
    assert_eq!(recorder.states(), vec![PlayState::Play, PlayState::Pause]);
}

#[test]
fn navigating_while_paused_reports_play_when_rearmed() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config(), ms(0)));
    carousel.mount(ms(0));
    carousel.pause(ms(1000));

    carousel.go_next(ms(2000));
    assert_eq!(
        recorder.states(),
        vec![PlayState::Play, PlayState::Pause, PlayState::Play]
    );

    assert!(carousel.complete_transition(carousel.style().id));
    assert_eq!(recorder.states().last(), Some(&PlayState::Play));
    assert!(carousel.is_playing());
}

#[test]
fn commits_report_play_when_autoplay_is_disabled() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config().interval(ms(0)), ms(0)));

    carousel.go_next(ms(0));
    assert!(recorder.states().is_empty());
    assert!(carousel.complete_transition(carousel.style().id));
    assert_eq!(recorder.states(), vec![PlayState::Play]);
}

#[test]
fn controls_do_not_rearm_autoplay_during_a_drag() {
    let recorder = Recorder::default();
    let mut carousel = recorder.attach(Carousel::new(banner_config(), ms(0)));
    carousel.mount(ms(0));

    assert!(carousel.touch_start(100.0, ms(1000)));
    carousel.touch_move(60.0);
    carousel.toggle_play(ms(1100));
    carousel.play(ms(1100));
    carousel.go_next(ms(1200));
    assert!(!carousel.is_playing());
    assert!(carousel.state().is_resting());

    carousel.update(ms(9000));
    assert!(carousel.state().is_resting());
    assert_eq!(carousel.visible_item().unwrap().order, 1);

    carousel.touch_move(20.0);
    carousel.touch_end(ms(9000));
    let done = settle(&mut carousel, 9000);
    assert_eq!(recorder.items(), vec![2]);
    assert_eq!(carousel.next_autoplay(), Some(ms(done + 5000)));
}
