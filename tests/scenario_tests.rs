//! End-to-end host loop scenarios.

use fadestate::builder::{ConfigError, StateConfigBuilder, TransitionSettings};
use fadestate::core::{Canvas, FnState, StateRef, Timer};
use fadestate::effects::Blend;
use fadestate::StateMachine;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Player {
    speed: f32,
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Alpha(f32),
    Draw(&'static str),
    Reset,
}

type Log = Arc<Mutex<Vec<Event>>>;

struct RecordingCanvas(Log);

impl Canvas for RecordingCanvas {
    fn set_alpha(&mut self, alpha: f32) {
        self.0.lock().unwrap().push(Event::Alpha(alpha));
    }

    fn reset(&mut self) {
        self.0.lock().unwrap().push(Event::Reset);
    }
}

fn recorded_state(name: &'static str, log: &Log) -> StateRef<Player> {
    let log = Arc::clone(log);
    StateRef::new(FnState::new(name, move |_: &Player, _canvas| {
        log.lock().unwrap().push(Event::Draw(name));
    }))
}

fn idle_walk_machine(blend: Blend, log: &Log) -> Result<StateMachine<Player>, ConfigError> {
    let idle = recorded_state("Idle", log);
    let walk = recorded_state("Walk", log);

    let mut builder = StateConfigBuilder::new();
    builder
        .default_state(&idle)?
        .transition_effect(blend)?
        .transition_duration(30.0)?
        .entry(&idle, &walk, |p: &Player| p.speed > 0.0)?;
    builder.build()?;
    builder.instantiate(Player::default())
}

fn draw_and_take(machine: &StateMachine<Player>, log: &Log) -> Vec<Event> {
    let mut canvas = RecordingCanvas(Arc::clone(log));
    machine.draw(&mut canvas);
    std::mem::take(&mut *log.lock().unwrap())
}

fn alphas(events: &[Event]) -> Vec<f32> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Alpha(a) => Some(*a),
            _ => None,
        })
        .collect()
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn idle_to_walk_with_smooth_fade() {
    let log = Log::default();
    let mut machine = idle_walk_machine(Blend::SmoothFade, &log).unwrap();

    machine.spend(10.0);
    assert!(!machine.update_state());
    assert_eq!(machine.cur_state().name(), "Idle");

    machine.entity_mut().speed = 5.0;
    assert!(machine.update_state());
    assert_eq!(machine.cur_state().name(), "Walk");
    assert_eq!(machine.last_state().map(|s| s.name()), Some("Idle"));
    assert_eq!(machine.last_switch_time(), machine.cur_time());

    machine.spend(15.0);
    assert_eq!(machine.progress(), 0.5);
    let events = draw_and_take(&machine, &log);
    assert_eq!(
        events,
        vec![
            Event::Alpha(0.5),
            Event::Draw("Idle"),
            Event::Alpha(0.5),
            Event::Draw("Walk"),
            Event::Reset,
        ]
    );
}

#[test]
fn smooth_fade_follows_smootherstep_not_linear() {
    let log = Log::default();
    let mut machine = idle_walk_machine(Blend::SmoothFade, &log).unwrap();
    machine.entity_mut().speed = 1.0;
    machine.update_state();

    machine.spend(7.5);
    assert_eq!(machine.progress(), 0.25);
    let weights = alphas(&draw_and_take(&machine, &log));

    assert_eq!(weights.len(), 2);
    assert!(approx_eq(weights[1], 0.103_515_625));
    assert!(!approx_eq(weights[1], 0.25));
    assert!(approx_eq(weights[0] + weights[1], 1.0));
}

#[test]
fn linear_fade_differs_from_smooth_fade_at_midpoint() {
    let log = Log::default();
    let mut machine = idle_walk_machine(Blend::LinearFade, &log).unwrap();
    machine.entity_mut().speed = 1.0;
    machine.update_state();
    machine.spend(15.0);

    let weights = alphas(&draw_and_take(&machine, &log));

    assert!(approx_eq(weights[0], 0.625));
    assert!(approx_eq(weights[1], 0.375));
}

#[test]
fn blend_progress_over_time() {
    let log = Log::default();
    let mut machine = idle_walk_machine(Blend::SmoothFade, &log).unwrap();
    machine.spend(4.0);
    machine.entity_mut().speed = 1.0;
    machine.update_state();

    // t0: only the outgoing state, at full weight.
    assert_eq!(
        draw_and_take(&machine, &log),
        vec![Event::Alpha(1.0), Event::Draw("Idle"), Event::Reset]
    );

    // t0 + d: settled on the incoming state.
    machine.spend(30.0);
    assert_eq!(machine.progress(), 1.0);
    assert_eq!(
        draw_and_take(&machine, &log),
        vec![Event::Alpha(1.0), Event::Draw("Walk"), Event::Reset]
    );

    // t0 + 2d: still clamped.
    machine.spend(30.0);
    assert_eq!(machine.progress(), 1.0);
    assert_eq!(
        draw_and_take(&machine, &log),
        vec![Event::Alpha(1.0), Event::Draw("Walk"), Event::Reset]
    );
}

#[test]
fn cut_ignores_progress() {
    let log = Log::default();
    let mut machine = idle_walk_machine(Blend::None, &log).unwrap();
    machine.entity_mut().speed = 1.0;
    machine.update_state();

    assert_eq!(
        draw_and_take(&machine, &log),
        vec![Event::Draw("Walk"), Event::Reset]
    );
}

#[test]
fn new_switch_restarts_blend() {
    let log = Log::default();
    let idle = recorded_state("Idle", &log);
    let walk = recorded_state("Walk", &log);

    let mut builder = StateConfigBuilder::new();
    builder
        .default_state(&idle)
        .unwrap()
        .settings(TransitionSettings {
            effect: Blend::SmoothFade,
            duration: 10.0,
        })
        .unwrap()
        .entry(&idle, &walk, |p: &Player| p.speed > 0.0)
        .unwrap()
        .entry(&walk, &idle, |p: &Player| p.speed == 0.0)
        .unwrap();
    let config = builder.build().unwrap();
    let mut machine = config.instantiate(Player::default());

    machine.entity_mut().speed = 2.0;
    machine.update_state();
    machine.spend(5.0);
    assert_eq!(machine.progress(), 0.5);

    machine.entity_mut().speed = 0.0;
    assert!(machine.update_state());
    assert_eq!(machine.cur_state(), &idle);
    assert_eq!(machine.last_state(), Some(&walk));
    assert_eq!(machine.progress(), 0.0);
    assert!(machine.is_switching());
}

#[test]
fn one_config_drives_many_entities() {
    let log = Log::default();
    let idle = recorded_state("Idle", &log);
    let walk = recorded_state("Walk", &log);
    let mut builder = StateConfigBuilder::new();
    builder
        .default_state(&idle)
        .unwrap()
        .entry(&idle, &walk, |p: &Player| p.speed > 0.0)
        .unwrap();
    let config = builder.build().unwrap();

    let mut machines: Vec<_> = (0..4)
        .map(|i| config.instantiate(Player { speed: i as f32 }))
        .collect();
    for machine in &mut machines {
        machine.spend(1.0);
        machine.update_state();
    }

    let names: Vec<_> = machines.iter().map(|m| m.cur_state().name()).collect();
    assert_eq!(names, ["Idle", "Walk", "Walk", "Walk"]);
}

#[test]
fn config_can_be_shared_across_threads() {
    let log = Log::default();
    let idle = recorded_state("Idle", &log);
    let walk = recorded_state("Walk", &log);
    let mut builder = StateConfigBuilder::new();
    builder
        .default_state(&idle)
        .unwrap()
        .entry(&idle, &walk, |p: &Player| p.speed > 0.0)
        .unwrap();
    let config = builder.build().unwrap();

    let handles: Vec<_> = (0..3)
        .map(|i| {
            let config = Arc::clone(&config);
            std::thread::spawn(move || {
                let mut machine = config.instantiate(Player { speed: i as f32 });
                machine.spend(1.0);
                machine.update_state();
                machine.cur_state().name().to_string()
            })
        })
        .collect();

    let names: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(names, ["Idle", "Walk", "Walk"]);
}
