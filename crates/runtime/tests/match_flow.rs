//! End-to-end match flow through the runtime handle.
mod common;

use std::time::Duration;

use common::*;
use game_core::{
    Action, ActionError, ClickOutcome, HighlightColor, MatchOutcome, PointerStyle, Side,
    UnitKind,
};
use runtime::{GameEvent, IdleActionProvider, Runtime, RuntimeConfig, RuntimeError};

#[tokio::test]
async fn player_attack_is_answered_by_the_computer() {
    let (surface, log) = RecordingSurface::new(8);
    let state = match_state(&[
        (0, unit(UnitKind::Swordsman, 50.0)),
        (8, unit(UnitKind::Archer, 50.0)),
        (1, unit(UnitKind::Vampire, 50.0)),
        (63, unit(UnitKind::Skeleton, 50.0)),
    ]);

    let runtime = Runtime::builder()
        .config(test_config())
        .surface(surface)
        .provider(ScriptedProvider::new([Action::attack(p(1), p(8))]))
        .initial_state(state)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut events = handle.subscribe();

    let selected = handle.cell_click(p(0)).await.expect("selection");
    assert_eq!(
        selected,
        ClickOutcome::Selected {
            position: p(0),
            previous: None
        }
    );

    let attacked = handle.cell_click(p(1)).await.expect("attack");
    assert_eq!(attacked, ClickOutcome::Action(Action::attack(p(0), p(1))));

    let state = handle.query_state().await.expect("state");
    assert_eq!(entry_at(&state, 1).unwrap().unit.health(), 35.0);
    assert_eq!(entry_at(&state, 8).unwrap().unit.health(), 47.5);
    assert_eq!(state.turn().current_turn, Side::Player);
    assert_eq!(state.turn().selected, None);

    let calls = calls(&log);
    assert!(calls.contains(&SurfaceCall::Highlight(p(0), HighlightColor::Yellow)));
    assert!(calls.contains(&SurfaceCall::Unhighlight(p(0))));
    assert!(calls.contains(&SurfaceCall::Damage(p(1), 15)));
    assert!(calls.contains(&SurfaceCall::Damage(p(8), 3)));

    let mut resolved = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let GameEvent::ActionResolved { side, action, .. } = event {
            resolved.push((side, action));
        }
    }
    assert_eq!(
        resolved,
        vec![
            (Side::Player, Action::attack(p(0), p(1))),
            (Side::Computer, Action::attack(p(1), p(8))),
        ]
    );

    drop(handle);
    runtime.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn killing_the_last_enemy_clears_the_level() {
    let (surface, log) = RecordingSurface::new(8);
    let state = match_state(&[
        (0, unit(UnitKind::Swordsman, 50.0)),
        (1, unit(UnitKind::Vampire, 10.0)),
    ]);

    let runtime = Runtime::builder()
        .config(test_config())
        .surface(surface)
        .provider(IdleActionProvider)
        .initial_state(state)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut events = handle.subscribe();

    handle.cell_click(p(0)).await.expect("selection");
    handle.cell_click(p(1)).await.expect("attack");

    let state = handle.query_state().await.expect("state");
    let turn = state.turn();
    assert_eq!(turn.theme_index, 1);
    assert_eq!(turn.score, 50);
    assert_eq!(turn.current_turn, Side::Player);

    let swordsman = &entry_at(&state, 0).expect("swordsman survives").unit;
    assert_eq!(swordsman.level(), 2);
    assert_eq!(swordsman.attack(), 52.0);

    let teams = state.teams(&game_core::UnitTable::standard());
    assert_eq!(teams.computer.len(), 4);

    assert!(calls(&log).contains(&SurfaceCall::DrawBoard("desert".into())));

    let mut cleared = None;
    while let Ok(event) = events.try_recv() {
        if let GameEvent::LevelCleared {
            theme,
            score_gained,
        } = event
        {
            cleared = Some((theme, score_gained));
        }
    }
    assert_eq!(cleared, Some(("desert".to_owned(), 50)));
}

#[tokio::test]
async fn computer_wiping_out_the_player_ends_the_match() {
    let (surface, log) = RecordingSurface::new(8);
    let state = match_state(&[
        (8, unit(UnitKind::Archer, 2.0)),
        (10, unit(UnitKind::Vampire, 50.0)),
    ]);

    let runtime = Runtime::builder()
        .config(test_config())
        .surface(surface)
        .provider(ScriptedProvider::new([Action::attack(p(10), p(16))]))
        .initial_state(state)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut events = handle.subscribe();

    handle.cell_click(p(8)).await.expect("selection");
    let moved = handle.cell_click(p(16)).await.expect("move");
    assert_eq!(moved, ClickOutcome::Action(Action::movement(p(8), p(16))));

    let state = handle.query_state().await.expect("state");
    assert_eq!(state.turn().outcome, Some(MatchOutcome::Defeat));
    assert!(
        calls(&log)
            .iter()
            .any(|call| matches!(call, SurfaceCall::Notice(text) if text.starts_with("You lost")))
    );

    let ended = std::iter::from_fn(|| events.try_recv().ok())
        .any(|event| matches!(event, GameEvent::MatchEnded { outcome: MatchOutcome::Defeat, .. }));
    assert!(ended);

    let after = handle.cell_click(p(16)).await;
    assert!(matches!(
        after,
        Err(RuntimeError::Action(ActionError::GameOver))
    ));
}

#[tokio::test]
async fn out_of_range_click_is_rejected_without_changing_state() {
    let (surface, log) = RecordingSurface::new(8);
    let state = match_state(&[
        (0, unit(UnitKind::Swordsman, 50.0)),
        (63, unit(UnitKind::Skeleton, 50.0)),
    ]);

    let runtime = Runtime::builder()
        .config(test_config())
        .surface(surface)
        .provider(IdleActionProvider)
        .initial_state(state)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();

    handle.cell_click(p(0)).await.expect("selection");
    let before = handle.query_state().await.expect("state");

    let result = handle.cell_click(p(7)).await;
    assert!(matches!(
        result,
        Err(RuntimeError::Action(ActionError::OutOfMoveRange {
            distance: 7,
            range: 4,
            ..
        }))
    ));

    let after = handle.query_state().await.expect("state");
    assert_eq!(before, after);
    assert_eq!(after.turn().selected, Some(p(0)));

    let calls = calls(&log);
    assert!(calls.contains(&SurfaceCall::Pointer(PointerStyle::NotAllowed)));
    assert!(calls.iter().any(|call| matches!(call, SurfaceCall::Notice(_))));
}

#[tokio::test]
async fn idle_computer_passes_its_turn() {
    let (surface, _log) = RecordingSurface::new(8);
    let state = match_state(&[
        (0, unit(UnitKind::Swordsman, 50.0)),
        (63, unit(UnitKind::Skeleton, 50.0)),
    ]);

    let runtime = Runtime::builder()
        .config(test_config())
        .surface(surface)
        .provider(IdleActionProvider)
        .initial_state(state)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut events = handle.subscribe();

    handle.cell_click(p(0)).await.expect("selection");
    handle.cell_click(p(3)).await.expect("move");

    let state = handle.query_state().await.expect("state");
    assert_eq!(state.turn().current_turn, Side::Player);
    assert!(entry_at(&state, 3).is_some());

    let skipped = std::iter::from_fn(|| events.try_recv().ok())
        .any(|event| event == GameEvent::TurnSkipped { side: Side::Computer });
    assert!(skipped);
}

#[tokio::test]
async fn hover_highlights_targets_relative_to_the_selection() {
    let (surface, log) = RecordingSurface::new(8);
    let state = match_state(&[
        (0, unit(UnitKind::Swordsman, 50.0)),
        (1, unit(UnitKind::Vampire, 50.0)),
    ]);

    let runtime = Runtime::builder()
        .config(test_config())
        .surface(surface)
        .provider(IdleActionProvider)
        .initial_state(state)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();

    let idle = handle.cell_enter(p(1)).await.expect("hover");
    assert_eq!(idle.pointer, PointerStyle::NotAllowed);
    assert_eq!(idle.tooltip, None);

    handle.cell_click(p(0)).await.expect("selection");

    let enemy = handle.cell_enter(p(1)).await.expect("hover");
    assert_eq!(enemy.pointer, PointerStyle::Crosshair);
    assert_eq!(enemy.highlight, Some(HighlightColor::Red));
    assert_eq!(enemy.tooltip.as_deref(), Some("🎖1 ⚔25 🛡25 ❤50"));

    let empty = handle.cell_enter(p(2)).await.expect("hover");
    assert_eq!(empty.highlight, Some(HighlightColor::Green));
    assert_eq!(empty.clear, Some(p(1)));

    handle.cell_leave(p(2)).await.expect("leave");

    let calls = calls(&log);
    assert!(calls.contains(&SurfaceCall::Highlight(p(1), HighlightColor::Red)));
    assert!(calls.contains(&SurfaceCall::Unhighlight(p(1))));
    assert!(calls.contains(&SurfaceCall::Highlight(p(2), HighlightColor::Green)));
    assert_eq!(calls.last(), Some(&SurfaceCall::HideTooltip(p(2))));

    assert!(matches!(
        handle.cell_enter(p(64)).await,
        Err(RuntimeError::Action(ActionError::OutOfBoard { .. }))
    ));
}

#[tokio::test]
async fn input_during_damage_display_is_rejected_as_busy() {
    let (surface, _log, gate) = RecordingSurface::gated(8);
    let state = match_state(&[
        (0, unit(UnitKind::Swordsman, 50.0)),
        (1, unit(UnitKind::Vampire, 50.0)),
    ]);

    let runtime = Runtime::builder()
        .config(test_config())
        .surface(surface)
        .provider(IdleActionProvider)
        .initial_state(state)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();

    handle.cell_click(p(0)).await.expect("selection");

    let clicker = handle.clone();
    let attack = tokio::spawn(async move { clicker.cell_click(p(1)).await });
    gate.started.notified().await;

    let hover = handle.cell_enter(p(5));
    tokio::pin!(hover);
    tokio::select! {
        biased;
        _ = &mut hover => panic!("worker answered while the damage display was running"),
        _ = tokio::task::yield_now() => {}
    }

    gate.release.notify_one();
    let attacked = attack.await.expect("join").expect("attack");
    assert_eq!(attacked, ClickOutcome::Action(Action::attack(p(0), p(1))));
    assert!(matches!(hover.await, Err(RuntimeError::Busy)));

    handle
        .cell_enter(p(5))
        .await
        .expect("input is accepted again once the turn resolved");
}

#[tokio::test]
async fn clicks_during_a_resumed_computer_turn_are_rejected() {
    let (surface, _log) = RecordingSurface::new(8);
    let (_, roster) = match_state(&[
        (0, unit(UnitKind::Swordsman, 50.0)),
        (63, unit(UnitKind::Skeleton, 50.0)),
    ])
    .into_parts();
    let turn = game_core::TurnState {
        current_turn: Side::Computer,
        ..game_core::TurnState::new()
    };

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            turn_delay: Duration::from_millis(300),
            ..test_config()
        })
        .surface(surface)
        .provider(IdleActionProvider)
        .initial_state(game_core::MatchState::new(turn, roster))
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();

    // Queued behind the computer's pacing delay.
    assert!(matches!(handle.cell_click(p(0)).await, Err(RuntimeError::Busy)));

    let state = handle.query_state().await.expect("state");
    assert_eq!(state.turn().current_turn, Side::Player);
    assert_eq!(state.turn().selected, None);

    let selected = handle.cell_click(p(0)).await.expect("selection");
    assert!(matches!(selected, ClickOutcome::Selected { .. }));
}

#[tokio::test]
async fn new_game_resets_the_match_and_keeps_the_best_score() {
    let (surface, log) = RecordingSurface::new(8);
    let (_, roster) = match_state(&[
        (0, unit(UnitKind::Swordsman, 50.0)),
        (63, unit(UnitKind::Skeleton, 50.0)),
    ])
    .into_parts();
    let turn = game_core::TurnState {
        theme_index: 2,
        score: 30,
        max_score: 120,
        ..game_core::TurnState::new()
    };
    let state = game_core::MatchState::new(turn, roster);

    let runtime = Runtime::builder()
        .config(test_config())
        .surface(surface)
        .provider(IdleActionProvider)
        .initial_state(state)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut events = handle.subscribe();

    handle.new_game().await.expect("new game");

    let state = handle.query_state().await.expect("state");
    let turn = state.turn();
    assert_eq!(turn.theme_index, 0);
    assert_eq!(turn.score, 0);
    assert_eq!(turn.max_score, 120);
    assert_eq!(state.roster().len(), 8);

    assert_eq!(
        events.try_recv().expect("event"),
        GameEvent::MatchStarted {
            theme: "prairie".into()
        }
    );
    assert!(calls(&log).contains(&SurfaceCall::DrawBoard("prairie".into())));
}

#[tokio::test]
async fn built_runtime_generates_a_match_and_draws_it() {
    let (surface, log) = RecordingSurface::new(6);

    let runtime = Runtime::builder()
        .config(test_config())
        .surface(surface)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();

    let state = handle.query_state().await.expect("state");
    let teams = state.teams(&game_core::UnitTable::standard());
    assert_eq!(teams.player.len(), 4);
    assert_eq!(teams.computer.len(), 4);
    assert!(teams.player.iter().all(|entry| entry.position.index() % 6 < 2));
    assert!(teams.computer.iter().all(|entry| entry.position.index() % 6 >= 4));
    assert!(teams.player.iter().all(|entry| entry.unit.level() == 1));

    let calls = calls(&log);
    assert_eq!(calls.first(), Some(&SurfaceCall::DrawBoard("prairie".into())));
    assert_eq!(calls.get(1), Some(&SurfaceCall::Redraw(8)));
}

#[tokio::test]
async fn runtime_without_surface_fails_to_build() {
    let result = Runtime::builder().config(test_config()).build().await;
    assert!(matches!(result, Err(RuntimeError::MissingSurface)));
}
