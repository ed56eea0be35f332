//! Integration tests for the march session
//!
//! Drives a headless Bevy app through advance requests and verifies the
//! session invariants: the traversal cycle, the trail/step-counter
//! lockstep, and the input triggers.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use pawnmarch::core::BoardConfig;
use pawnmarch::march::resources::{PawnState, StepCounter, Trail};
use pawnmarch::march::rules::{initial_position, Coordinate};
use pawnmarch::march::{AdvanceRequested, MarchPlugin};

/// Headless app with the march session on the given board
fn test_app(config: BoardConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    // Bare input state; tests drive it directly instead of going through
    // the winit event plumbing
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(config);
    app.add_plugins(MarchPlugin);
    app
}

/// Queue one advance request, as the HUD button and pawn observer do
fn request_advance(app: &mut App) {
    app.world_mut()
        .resource_mut::<Messages<AdvanceRequested>>()
        .write(AdvanceRequested);
}

#[test]
fn test_initial_session_state() {
    //! A fresh session: pawn at the top-left cell, empty trail, zero steps

    let mut app = test_app(BoardConfig::default());
    app.update();

    assert_eq!(
        app.world().resource::<PawnState>().position,
        Coordinate::new(-2.0, 1.5)
    );
    assert!(app.world().resource::<Trail>().is_empty());
    assert_eq!(app.world().resource::<StepCounter>().count(), 0);
}

#[test]
fn test_single_advance_steps_one_square() {
    //! One request: pawn moves one square right, the square it left is
    //! recorded, the counter reads 1

    let mut app = test_app(BoardConfig::default());
    app.update();

    request_advance(&mut app);
    app.update();

    assert_eq!(
        app.world().resource::<PawnState>().position,
        Coordinate::new(-1.5, 1.5)
    );

    let trail = app.world().resource::<Trail>();
    assert_eq!(trail.len(), 1);
    assert_eq!(trail.get(0), Some(&Coordinate::new(-2.0, 1.5)));

    assert_eq!(app.world().resource::<StepCounter>().count(), 1);
}

#[test]
fn test_trail_length_matches_step_counter() {
    //! trail.len() == steps after every controller step

    let mut app = test_app(BoardConfig::default());
    app.update();

    for expected in 1..=10u64 {
        request_advance(&mut app);
        app.update();

        let trail_len = app.world().resource::<Trail>().len() as u64;
        let steps = app.world().resource::<StepCounter>().count();
        assert_eq!(trail_len, steps);
        assert_eq!(steps, expected);
    }
}

#[test]
fn test_full_traversal_returns_to_start() {
    //! 64 advances on the default board bring the pawn back to the
    //! initial cell with a 64-entry trail

    let board = BoardConfig::default();
    let initial = initial_position(&board);

    let mut app = test_app(board);
    app.update();

    for _ in 0..board.cell_count() {
        request_advance(&mut app);
        app.update();
    }

    assert_eq!(app.world().resource::<PawnState>().position, initial);
    assert_eq!(app.world().resource::<StepCounter>().count(), 64);

    let trail = app.world().resource::<Trail>();
    assert_eq!(trail.len(), 64);
    assert_eq!(trail.get(0), Some(&initial));

    // Every recorded square lies on the board
    let low = -board.half_extent();
    let high = board.half_extent() - board.square_size;
    for position in trail.iter() {
        assert!(position.x >= low && position.x <= high);
        assert!(position.z >= low && position.z <= high);
    }
}

#[test]
fn test_multiple_requests_in_one_frame() {
    //! Several buffered requests are each applied as a full step

    let mut app = test_app(BoardConfig::default());
    app.update();

    for _ in 0..3 {
        request_advance(&mut app);
    }
    app.update();

    assert_eq!(app.world().resource::<StepCounter>().count(), 3);
    assert_eq!(app.world().resource::<Trail>().len(), 3);
    assert_eq!(
        app.world().resource::<PawnState>().position,
        Coordinate::new(-0.5, 1.5)
    );
}

#[test]
fn test_space_key_triggers_advance() {
    //! Pressing Space advances exactly once per press

    let mut app = test_app(BoardConfig::default());
    app.update();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    app.update();

    assert_eq!(app.world().resource::<StepCounter>().count(), 1);

    // Held key does not retrigger once the just-pressed edge is consumed
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear_just_pressed(KeyCode::Space);
    app.update();
    assert_eq!(app.world().resource::<StepCounter>().count(), 1);
}

#[test]
fn test_custom_board_traversal_cycle() {
    //! A 4x4 board of 1.0-unit squares cycles after 16 advances

    let board = BoardConfig {
        square_size: 1.0,
        board_size: 4,
    };
    let initial = initial_position(&board);

    let mut app = test_app(board);
    app.update();

    assert_eq!(app.world().resource::<PawnState>().position, initial);

    for _ in 0..board.cell_count() {
        request_advance(&mut app);
        app.update();
    }

    assert_eq!(app.world().resource::<PawnState>().position, initial);
    assert_eq!(app.world().resource::<StepCounter>().count(), 16);
}
