use glam::Vec2;

use twini_golf::Settings;
use twini_golf::sim::{GameEvent, GameState, TickInput, advance_frame, tick};

fn play_until_rest(state: &mut GameState, max_frames: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..max_frames {
        if !state.any_moving() {
            break;
        }
        events.extend(advance_frame(state));
    }
    events
}

fn shot(press: Vec2, release: Vec2) -> TickInput {
    TickInput {
        press: Some(press),
        release: Some(release),
        ..Default::default()
    }
}

#[test]
fn straight_shot_holes_left_ball_only() {
    let mut state = GameState::new(Settings::default());

    // Pull down 250 units: both balls leave straight up at speed 5
    let mut events = tick(&mut state, &shot(Vec2::new(300.0, 100.0), Vec2::new(300.0, 350.0)));
    assert_eq!(events[0], GameEvent::ShotTaken { stroke: 1 });
    events.extend(play_until_rest(&mut state, 1000));

    assert!(!state.any_moving());
    assert!(events.contains(&GameEvent::BallCaptured { ball: 0, hole: 0 }));
    assert!(state.balls[0].captured);
    assert!(!state.balls[1].captured);
    assert!(!state.all_captured());

    // The right ball never left its playfield
    let barrier = state.arena().center_barrier_x();
    assert!(state.balls[1].pos.x >= barrier);
    assert_eq!(state.balls[1].pos.x, 480.0);
}

#[test]
fn second_shot_moves_only_the_ball_in_play() {
    let mut state = GameState::new(Settings::default());
    tick(&mut state, &shot(Vec2::new(300.0, 100.0), Vec2::new(300.0, 350.0)));
    play_until_rest(&mut state, 1000);
    let holed = state.balls[0].clone();

    let events = tick(&mut state, &shot(Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0)));
    assert_eq!(events, vec![GameEvent::ShotTaken { stroke: 2 }]);
    play_until_rest(&mut state, 1000);

    assert_eq!(state.balls[0], holed);
    assert_eq!(state.strokes, 2);
}

#[test]
fn reset_brings_everything_back() {
    let mut state = GameState::new(Settings::default());
    tick(&mut state, &shot(Vec2::new(300.0, 100.0), Vec2::new(300.0, 350.0)));
    play_until_rest(&mut state, 1000);

    let reset = TickInput {
        reset: true,
        ..Default::default()
    };
    assert!(tick(&mut state, &reset).is_empty());
    for ball in &state.balls {
        assert_eq!(ball.pos, ball.initial_pos());
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(!ball.captured);
    }
    assert!(state.can_shoot());
}

#[test]
fn shot_ignored_while_reference_ball_rolls() {
    let mut state = GameState::new(Settings::default());
    tick(&mut state, &shot(Vec2::new(300.0, 100.0), Vec2::new(300.0, 150.0)));
    let moving = state.balls.clone();

    let events = tick(&mut state, &shot(Vec2::new(0.0, 0.0), Vec2::new(200.0, 200.0)));
    assert!(events.is_empty());
    assert_eq!(state.strokes, 1);
    // Velocities only changed by friction, not by the rejected shot
    for (before, after) in moving.iter().zip(&state.balls) {
        assert!(after.vel.y < 0.0);
        assert!(after.vel.length() < before.vel.length());
    }
}

#[test]
fn settings_from_json_drive_the_layout() {
    let json = r#"{
        "arena_width": 200.0,
        "arena_height": 100.0,
        "friction": 0.5,
        "ball_spawns": [[20.0, 40.0], [120.0, 40.0]],
        "hole_positions": [[60.0, 40.0], [160.0, 40.0]]
    }"#;
    let mut state = GameState::new(Settings::from_json(json).unwrap());
    assert_eq!(state.arena().center_barrier_x(), 100.0);

    // Launch at 8.5: steps of 8, 7.5, 7, 6.5, 6 put both balls over their holes on frame 5
    let mut events = tick(&mut state, &shot(Vec2::new(425.0, 0.0), Vec2::new(0.0, 0.0)));
    events.extend(play_until_rest(&mut state, 100));

    assert!(events.contains(&GameEvent::BallCaptured { ball: 0, hole: 0 }));
    assert!(events.contains(&GameEvent::BallCaptured { ball: 1, hole: 1 }));
    assert!(state.all_captured());
    assert!(!state.can_shoot());
}
