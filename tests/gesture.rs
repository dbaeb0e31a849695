//! End-to-end gesture scenarios driven through the public API, the way a host
//! adapter would: feed pointer events, carry out the returned actions.
#![allow(clippy::float_cmp)]

use element_resize::{Action, Direction, PointerEvent, Rect, ResizeConfig, ResizeEvent, Resizer};

fn init_tracing() {
    // Another test in this binary may already have installed it.
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}

/// A minimal host: records notifications, tracks listener and class state.
#[derive(Default)]
struct RecordingHost {
    log: Vec<&'static str>,
    events: Vec<ResizeEvent>,
    listening: bool,
    classes: Vec<String>,
    prevented: usize,
}

impl RecordingHost {
    fn perform(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::PreventDefault => self.prevented += 1,
                Action::CaptureListeners => {
                    assert!(!self.listening, "listeners captured twice");
                    self.listening = true;
                }
                Action::ReleaseListeners => {
                    assert!(self.listening, "listeners released while not captured");
                    self.listening = false;
                }
                Action::AddClass(class) => self.classes.push(class),
                Action::RemoveClass(class) => self.classes.retain(|c| *c != class),
                Action::Start(evt) => {
                    self.log.push("start");
                    self.events.push(evt);
                }
                Action::Progress(evt) => {
                    self.log.push("progress");
                    self.events.push(evt);
                }
                Action::End(evt) => {
                    self.log.push("end");
                    self.events.push(evt);
                }
                Action::Cancelled(_) => self.log.push("cancel"),
            }
        }
    }
}

fn original() -> Rect {
    Rect::new(10.0, 10.0, 100.0, 50.0)
}

fn run(config: ResizeConfig, path: &[(f64, f64)]) -> RecordingHost {
    init_tracing();
    let mut host = RecordingHost::default();
    let mut resizer = Resizer::new(config).unwrap();
    host.perform(resizer.begin(PointerEvent::new(0.0, 0.0), &original()).unwrap());
    let (last, moves) = path.split_last().unwrap();
    for &(x, y) in moves {
        host.perform(resizer.on_pointer_move(PointerEvent::new(x, y)).unwrap());
    }
    host.perform(resizer.end(PointerEvent::new(last.0, last.1)).unwrap());
    host
}

#[test]
fn bottom_right_drag_reports_growth() {
    let host = run(ResizeConfig::new(Direction::BottomRight), &[(20.0, 5.0)]);
    let end = host.events.last().unwrap();
    assert_eq!(end.current, Rect::new(10.0, 10.0, 120.0, 55.0));
    assert_eq!(end.difference, Rect::new(0.0, 0.0, 20.0, 5.0));
}

#[test]
fn left_drag_shifts_left_edge() {
    let host = run(ResizeConfig::new(Direction::Left), &[(-30.0, 0.0)]);
    let end = host.events.last().unwrap();
    assert_eq!(end.current.width, 130.0);
    assert_eq!(end.current.left, -20.0);
    assert_eq!(end.current.height, 50.0);
    assert_eq!(end.current.top, 10.0);
}

#[test]
fn notifications_follow_start_progress_end() {
    let host = run(ResizeConfig::new(Direction::TopRight), &[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    assert_eq!(host.log, ["start", "progress", "progress", "progress", "end"]);
    assert_eq!(host.prevented, 1);
    assert!(!host.listening);
    assert!(host.classes.is_empty());
}

#[test]
fn pointer_up_without_moves_still_sends_progress_before_end() {
    let host = run(ResizeConfig::new(Direction::Bottom), &[(0.0, 10.0)]);
    assert_eq!(host.log, ["start", "progress", "end"]);
    assert_eq!(host.events[1], host.events[2]);
}

#[test]
fn bounded_proportional_gesture_stays_inside() {
    let bounds = Rect::new(0.0, 0.0, 150.0, 80.0);
    let config = ResizeConfig::new(Direction::TopLeft).with_proportional(true).with_bounds(bounds);
    let host = run(config, &[(-40.0, -40.0), (-400.0, -5.0), (90.0, 90.0), (-25.0, -60.0)]);
    for evt in &host.events {
        let r = evt.current;
        assert!(r.top >= bounds.top && r.left >= bounds.left, "{r:?}");
        assert!(r.bottom() <= bounds.height && r.right() <= bounds.width, "{r:?}");
        assert_eq!(evt.original, original());
    }
}

#[test]
fn cancel_mid_gesture_releases_without_end() {
    init_tracing();
    let mut host = RecordingHost::default();
    let mut resizer = Resizer::new(ResizeConfig::new(Direction::Right)).unwrap();
    host.perform(resizer.begin(PointerEvent::new(0.0, 0.0), &original()).unwrap());
    host.perform(resizer.on_pointer_move(PointerEvent::new(15.0, 0.0)).unwrap());
    host.perform(resizer.cancel());
    // A pointer-up arriving after the cancel is ignored.
    host.perform(resizer.end(PointerEvent::new(15.0, 0.0)).unwrap());

    assert_eq!(host.log, ["start", "progress", "cancel"]);
    assert!(!host.listening);
    assert!(host.classes.is_empty());
}

#[test]
fn config_from_json_drives_gesture() {
    let config = ResizeConfig::from_json(r#"{"direction":"bottom-left","applyClass":"busy"}"#).unwrap();
    init_tracing();
    let mut host = RecordingHost::default();
    let mut resizer = Resizer::new(config).unwrap();
    host.perform(resizer.begin(PointerEvent::new(0.0, 0.0), &original()).unwrap());
    assert_eq!(host.classes, ["busy"]);
    host.perform(resizer.end(PointerEvent::new(-10.0, 7.0)).unwrap());
    assert_eq!(host.events.last().unwrap().current, Rect::new(10.0, 0.0, 110.0, 57.0));
    assert!(host.classes.is_empty());
}
