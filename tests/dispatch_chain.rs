//! Mode-filtered dispatch through the public chain API

use std::any::Any;

use glam::Vec2;
use onboarding::app::input::{
    ChainError, CutsceneHandler, DialogHandler, DispatchChain, GameplayHandler, InputSnapshot,
    Mode, ModeHandler, ModeSet, Reaction, UiHandler,
};

/// Handler that records every snapshot it reacts to
struct Recorder {
    name: &'static str,
    claims: ModeSet,
    seen: Vec<Vec2>,
}

impl Recorder {
    fn new(name: &'static str, claims: ModeSet) -> Self {
        Self {
            name,
            claims,
            seen: Vec::new(),
        }
    }
}

impl ModeHandler for Recorder {
    fn name(&self) -> &str {
        self.name
    }

    fn claimed_modes(&self) -> ModeSet {
        self.claims
    }

    fn react(&mut self, snapshot: &InputSnapshot, _reactions: &mut Vec<Reaction>) {
        self.seen.push(snapshot.movement());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn dispatch_in(chain: &mut DispatchChain, mode: Mode, mut snapshot: InputSnapshot) -> Vec<Reaction> {
    chain.set_mode(mode);
    assert!(chain.dispatch(&mut snapshot));
    assert!(snapshot.is_consumed());
    chain.take_reactions()
}

#[test]
fn test_ui_mode_navigates_instead_of_moving() {
    let mut chain = DispatchChain::standard();
    let reactions = dispatch_in(
        &mut chain,
        Mode::Ui,
        InputSnapshot::new(Vec2::new(0.0, -1.0), false, false),
    );

    assert_eq!(reactions, vec![Reaction::UiNavigate(Vec2::new(0.0, -1.0))]);
    let gameplay = chain
        .get_handler_typed::<GameplayHandler>("gameplay")
        .unwrap();
    assert_eq!(gameplay.reacted_count(), 0);
}

#[test]
fn test_each_mode_reaches_only_its_handler() {
    let mut chain = DispatchChain::standard();

    for mode in Mode::ALL {
        dispatch_in(&mut chain, mode, InputSnapshot::new(Vec2::X, true, true));
    }

    let counts = [
        chain
            .get_handler_typed::<GameplayHandler>("gameplay")
            .unwrap()
            .reacted_count(),
        chain.get_handler_typed::<UiHandler>("ui").unwrap().reacted_count(),
        chain
            .get_handler_typed::<CutsceneHandler>("cutscene")
            .unwrap()
            .reacted_count(),
        chain
            .get_handler_typed::<DialogHandler>("dialog")
            .unwrap()
            .reacted_count(),
    ];
    assert_eq!(counts, [1, 1, 1, 1]);
}

#[test]
fn test_cutscene_swallows_movement() {
    let mut chain = DispatchChain::standard();
    let reactions = dispatch_in(
        &mut chain,
        Mode::Cutscene,
        InputSnapshot::new(Vec2::X, true, false),
    );

    // Claimed and consumed even though nothing happened
    assert!(reactions.is_empty());

    let reactions = dispatch_in(
        &mut chain,
        Mode::Cutscene,
        InputSnapshot::new(Vec2::ZERO, false, true),
    );
    assert_eq!(reactions, vec![Reaction::SkipCutscene]);
}

#[test]
fn test_dispatch_is_deterministic() {
    let snapshot = InputSnapshot::new(Vec2::new(1.0, 1.0), true, true);

    let mut first = DispatchChain::standard();
    let mut second = DispatchChain::standard();
    for mode in [Mode::Dialog, Mode::Gameplay, Mode::Ui] {
        assert_eq!(
            dispatch_in(&mut first, mode, snapshot.clone()),
            dispatch_in(&mut second, mode, snapshot.clone()),
        );
    }
}

#[test]
fn test_consumed_snapshot_is_not_reacted_to_again() {
    let mut chain = DispatchChain::standard();
    let mut snapshot = InputSnapshot::new(Vec2::ZERO, true, false);

    assert!(chain.dispatch(&mut snapshot));
    assert!(chain.dispatch(&mut snapshot));

    assert_eq!(chain.take_reactions(), vec![Reaction::Jump]);
}

#[test]
fn test_mode_switch_is_broadcast() {
    let mut chain = DispatchChain::standard();
    chain.set_mode(Mode::Dialog);

    let ui = chain.get_handler_typed::<UiHandler>("ui").unwrap();
    assert_eq!(ui.observed_mode(), Mode::Dialog);
    assert_eq!(chain.active_mode(), Mode::Dialog);
}

#[test]
fn test_order_does_not_change_routing() {
    let mut forward = DispatchChain::builder()
        .handler(Recorder::new("a", ModeSet::GAMEPLAY | ModeSet::UI))
        .handler(Recorder::new("b", ModeSet::CUTSCENE | ModeSet::DIALOG))
        .build()
        .unwrap();
    let mut reverse = DispatchChain::builder()
        .handler(Recorder::new("b", ModeSet::CUTSCENE | ModeSet::DIALOG))
        .handler(Recorder::new("a", ModeSet::GAMEPLAY | ModeSet::UI))
        .build()
        .unwrap();

    for chain in [&mut forward, &mut reverse] {
        for mode in Mode::ALL {
            chain.set_mode(mode);
            let mut snapshot = InputSnapshot::new(Vec2::X, false, false);
            chain.dispatch(&mut snapshot);
        }
    }

    for chain in [&forward, &reverse] {
        assert_eq!(
            chain.get_handler_typed::<Recorder>("a").unwrap().seen.len(),
            2
        );
        assert_eq!(
            chain.get_handler_typed::<Recorder>("b").unwrap().seen.len(),
            2
        );
    }
}

#[test]
fn test_overlapping_claims_rejected() {
    let result = DispatchChain::builder()
        .handler(Recorder::new("menus", ModeSet::UI | ModeSet::DIALOG))
        .handler(Recorder::new("talk", ModeSet::DIALOG))
        .build_partial();

    assert_eq!(
        result.err(),
        Some(ChainError::OverlappingClaims {
            mode: Mode::Dialog,
            first: "menus".to_string(),
            second: "talk".to_string(),
        })
    );
}

#[test]
fn test_uncovered_mode_rejected_unless_partial() {
    let full = DispatchChain::builder()
        .handler(Recorder::new("play", ModeSet::GAMEPLAY))
        .build();
    assert!(matches!(full, Err(ChainError::UncoveredMode { mode: Mode::Ui })));

    let mut partial = DispatchChain::builder()
        .handler(Recorder::new("play", ModeSet::GAMEPLAY))
        .build_partial()
        .unwrap();
    partial.set_mode(Mode::Ui);

    let mut snapshot = InputSnapshot::new(Vec2::X, false, false);
    assert!(!partial.dispatch(&mut snapshot));
    assert!(!snapshot.is_consumed());
}

#[test]
fn test_empty_claims_rejected() {
    let result = DispatchChain::builder()
        .handler(Recorder::new("idle", ModeSet::empty()))
        .build_partial();

    assert!(matches!(result, Err(ChainError::EmptyClaims { .. })));
}
