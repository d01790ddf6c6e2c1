#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bevy_ecs::query::With;
use glam::IVec2;

use scavengers::game::{Game, LevelLayout};
use scavengers::session::PlayerSession;
use scavengers::systems::{
    ActorStats, AudioOutput, AudioResource, AudioState, CollisionLayer, Cue, GoldDisplay, HealthDisplay, PickupKind,
    PlayerControlled, Position, TriggerKind,
};

/// Audio backend double that records every resolved cue instead of playing it.
pub struct RecordingOutput {
    cues: Rc<RefCell<Vec<Cue>>>,
    music_stopped: Rc<Cell<bool>>,
}

impl AudioOutput for RecordingOutput {
    fn play(&mut self, cue: Cue) {
        self.cues.borrow_mut().push(cue);
    }

    fn stop_music(&mut self) {
        self.music_stopped.set(true);
    }
}

/// Shared handles into a [`RecordingOutput`] installed in a game.
pub struct Recording {
    pub cues: Rc<RefCell<Vec<Cue>>>,
    pub music_stopped: Rc<Cell<bool>>,
}

impl Recording {
    pub fn cue_count(&self) -> usize {
        self.cues.borrow().len()
    }

    pub fn count_of(&self, cue: Cue) -> usize {
        self.cues.borrow().iter().filter(|c| **c == cue).count()
    }

    pub fn contains_one_of(&self, first: Cue, second: Cue) -> bool {
        self.cues.borrow().iter().any(|c| *c == first || *c == second)
    }
}

/// Swaps the game's audio backend for a recording double with a fixed seed.
pub fn install_recorder(game: &mut Game) -> Recording {
    let cues = Rc::new(RefCell::new(Vec::new()));
    let music_stopped = Rc::new(Cell::new(false));

    game.world.insert_resource(AudioState::new(7));
    game.world.insert_non_send_resource(AudioResource(Box::new(RecordingOutput {
        cues: cues.clone(),
        music_stopped: music_stopped.clone(),
    })));

    Recording { cues, music_stopped }
}

/// A fresh game in the given layout with a default session and a recording
/// audio backend.
pub fn new_game(layout: &LevelLayout) -> (Game, Recording) {
    new_game_with_session(PlayerSession::default(), layout)
}

pub fn new_game_with_session(session: PlayerSession, layout: &LevelLayout) -> (Game, Recording) {
    let mut game = Game::new(session, layout);
    let recording = install_recorder(&mut game);
    (game, recording)
}

/// An 8x8 walled room with no pickups; the player starts at (1, 1).
pub fn empty_room() -> LevelLayout {
    LevelLayout::walled_room(8, 8)
}

/// Grants the turn, writes the sampled axes, and runs one tick.
pub fn step(game: &mut Game, horizontal: i32, vertical: i32) -> bool {
    game.grant_turn();
    game.set_axis_input(horizontal, vertical);
    game.tick()
}

/// Reads the player's position and stats.
pub fn player_state(game: &mut Game) -> (IVec2, ActorStats) {
    let mut query = game.world.query_filtered::<(&Position, &ActorStats), With<PlayerControlled>>();
    let (position, stats) = query.single(&game.world).unwrap();
    (position.0, *stats)
}

pub fn session(game: &Game) -> &PlayerSession {
    game.world.resource::<PlayerSession>()
}

pub fn health_text(game: &Game) -> String {
    game.world.resource::<HealthDisplay>().0.clone()
}

pub fn gold_text(game: &Game) -> String {
    game.world.resource::<GoldDisplay>().0.clone()
}

pub fn spawn_pickup(game: &mut Game, cell: IVec2, kind: PickupKind) {
    game.world
        .spawn((Position(cell), CollisionLayer::TRIGGER, TriggerKind::Pickup(kind)));
}
