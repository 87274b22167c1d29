//! Per-frame simulation tick
//!
//! One entry point, `tick`, advances the whole game by one host frame:
//! catcher movement, spawn timing, raindrop falls and removals.

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input for a single tick, polled by the host and resolved to field space
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer/touch position in field coordinates (x only matters)
    pub target_x: Option<f32>,
    /// "Move left" key held
    pub move_left: bool,
    /// "Move right" key held
    pub move_right: bool,
    /// Demo mode - the autopilot steers the catcher
    pub idle_mode: bool,
}

/// Advance the game state by one frame
///
/// `dt` is the host-supplied elapsed seconds since the previous frame,
/// `now_ns` a monotonic clock reading. Returns the events of this tick in
/// the order they occurred; the caller turns them into side effects.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now_ns: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.time_ticks += 1;

    // Autopilot: chase the drop closest to the floor
    let mut input = *input;
    if input.idle_mode {
        let target = state
            .drops
            .iter()
            .min_by(|a, b| a.rect.pos.y.total_cmp(&b.rect.pos.y))
            .map(|drop| drop.rect.center().x);
        if target.is_some() {
            input.target_x = target;
        }
    }

    // Pointer placement first; held keys still nudge in the same frame
    if let Some(x) = input.target_x {
        state.catcher.center_on(x);
    }
    if input.move_left {
        state.catcher.shift(-CATCHER_SPEED * dt);
    }
    if input.move_right {
        state.catcher.shift(CATCHER_SPEED * dt);
    }
    state.catcher.clamp_to_field();

    if now_ns.saturating_sub(state.last_spawn_ns) > SPAWN_INTERVAL_NS {
        let id = state.spawn_raindrop(now_ns);
        events.push(GameEvent::Spawned { id });
    }

    // Single pass over the drops with in-place removal. Walk backward and
    // swap-remove so removal never invalidates the remaining indices.
    // The off-field check runs before the overlap check and takes
    // precedence when both would apply in the same tick.
    let mut i = state.drops.len();
    while i > 0 {
        i -= 1;
        state.drops[i].fall(dt);
        if state.drops[i].below_field() {
            let drop = state.drops.swap_remove(i);
            events.push(GameEvent::Missed { id: drop.id });
        } else if state.drops[i].rect.overlaps(&state.catcher.rect) {
            let drop = state.drops.swap_remove(i);
            events.push(GameEvent::Caught { id: drop.id });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    /// Ticks with the clock frozen so no new drops spawn mid-test
    fn tick_quiet(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
        let now = state.last_spawn_ns;
        tick(state, input, DT, now)
    }

    #[test]
    fn test_keys_move_catcher() {
        let mut state = GameState::new(1, 0);
        let x0 = state.catcher.rect.pos.x;

        let input = TickInput {
            move_right: true,
            ..Default::default()
        };
        tick_quiet(&mut state, &input);
        let moved = state.catcher.rect.pos.x - x0;
        assert!((moved - CATCHER_SPEED * DT).abs() < 1e-4);

        let input = TickInput {
            move_left: true,
            ..Default::default()
        };
        tick_quiet(&mut state, &input);
        assert!((state.catcher.rect.pos.x - x0).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_centers_catcher() {
        let mut state = GameState::new(1, 0);
        let input = TickInput {
            target_x: Some(100.0),
            ..Default::default()
        };
        tick_quiet(&mut state, &input);
        assert_eq!(state.catcher.rect.pos.x, 100.0 - SPRITE_SIZE / 2.0);
    }

    #[test]
    fn test_pointer_then_keys_same_tick() {
        let mut state = GameState::new(1, 0);
        let input = TickInput {
            target_x: Some(400.0),
            move_right: true,
            ..Default::default()
        };
        tick_quiet(&mut state, &input);
        let expected = 400.0 - SPRITE_SIZE / 2.0 + CATCHER_SPEED * DT;
        assert!((state.catcher.rect.pos.x - expected).abs() < 1e-4);
    }

    #[test]
    fn test_spawn_interval_gates_spawning() {
        let mut state = GameState::new(1, 0);
        assert_eq!(state.drops.len(), 1);

        // Just inside the interval: nothing spawns
        let events = tick(&mut state, &TickInput::default(), DT, SPAWN_INTERVAL_NS);
        assert!(events.iter().all(|e| !matches!(e, GameEvent::Spawned { .. })));
        assert_eq!(state.drops.len(), 1);

        // Past the interval: exactly one spawn, timestamp recorded
        let now = SPAWN_INTERVAL_NS + 1;
        let events = tick(&mut state, &TickInput::default(), DT, now);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::Spawned { .. }))
                .count(),
            1
        );
        assert_eq!(state.drops.len(), 2);
        assert_eq!(state.last_spawn_ns, now);
    }

    #[test]
    fn test_drop_falls_at_fixed_rate() {
        let mut state = GameState::new(1, 0);
        let y0 = state.drops[0].rect.pos.y;
        tick_quiet(&mut state, &TickInput::default());
        let fallen = y0 - state.drops[0].rect.pos.y;
        assert!((fallen - FALL_SPEED * DT).abs() < 1e-4);
    }

    #[test]
    fn test_missed_drop_removed_below_floor() {
        let mut state = GameState::new(1, 0);
        // Park the catcher far away and put the drop just above the cutoff
        state.catcher.rect.pos.x = 0.0;
        state.drops[0].rect.pos.x = 700.0;
        state.drops[0].rect.pos.y = -SPRITE_SIZE + 1.0;

        let events = tick_quiet(&mut state, &TickInput::default());
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::Missed { .. }));
        assert!(state.drops.is_empty());
    }

    #[test]
    fn test_caught_drop_removed_with_event() {
        let mut state = GameState::new(1, 0);
        let id = state.drops[0].id;
        // Directly above the catcher, one tick away from its top edge
        let catcher_center = state.catcher.rect.center().x;
        state.drops[0].rect.pos = Vec2::new(
            catcher_center - SPRITE_SIZE / 2.0,
            state.catcher.rect.top() + FALL_SPEED * DT / 2.0,
        );

        let events = tick_quiet(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::Caught { id }]);
        assert!(state.drops.is_empty());
    }

    #[test]
    fn test_off_field_takes_precedence_over_overlap() {
        let mut state = GameState::new(1, 0);
        // A drop that is already past the floor cannot be caught, even if
        // the catcher's rectangle were somehow in the way
        state.catcher.rect.pos.y = -SPRITE_SIZE;
        state.drops[0].rect.pos.x = state.catcher.rect.pos.x;
        state.drops[0].rect.pos.y = -SPRITE_SIZE + 1.0;

        let events = tick_quiet(&mut state, &TickInput::default());
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::Missed { .. }));
    }

    #[test]
    fn test_idle_mode_chases_lowest_drop() {
        let mut state = GameState::new(1, 0);
        state.drops[0].rect.pos = Vec2::new(100.0, 300.0);
        state.spawn_raindrop(0);
        let low_idx = state.drops.len() - 1;
        state.drops[low_idx].rect.pos = Vec2::new(600.0, 120.0);

        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        tick_quiet(&mut state, &input);
        // Centered on the lower drop's center (600 + 32), left edge at 600
        assert_eq!(state.catcher.rect.pos.x, 600.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn arb_input() -> impl Strategy<Value = TickInput> {
            (
                proptest::option::of(-1000.0f32..2000.0),
                any::<bool>(),
                any::<bool>(),
            )
                .prop_map(|(target_x, move_left, move_right)| TickInput {
                    target_x,
                    move_left,
                    move_right,
                    idle_mode: false,
                })
        }

        proptest! {
            /// The catcher never leaves the field, whatever the input
            /// sequence or frame timing.
            #[test]
            fn catcher_stays_in_field(
                seed in any::<u64>(),
                inputs in proptest::collection::vec(arb_input(), 1..100),
                dt in 0.0f32..0.1,
            ) {
                let mut state = GameState::new(seed, 0);
                let mut now = 0u64;
                for input in &inputs {
                    now += (dt as f64 * 1e9) as u64;
                    tick(&mut state, input, dt, now);
                    prop_assert!(state.catcher.rect.pos.x >= 0.0);
                    prop_assert!(state.catcher.rect.pos.x <= FIELD_WIDTH - SPRITE_SIZE);
                }
            }

            /// Every removal has the right cause: drops still in the list
            /// neither overlap the catcher nor sit below the field.
            #[test]
            fn survivors_are_live(seed in any::<u64>(), frames in 1u64..400) {
                let mut state = GameState::new(seed, 0);
                let dt = 1.0 / 60.0;
                for frame in 0..frames {
                    let now = frame * 16_666_667;
                    tick(&mut state, &TickInput::default(), dt, now);
                    for drop in &state.drops {
                        prop_assert!(!drop.below_field());
                        prop_assert!(!drop.rect.overlaps(&state.catcher.rect));
                    }
                }
            }
        }
    }
}
