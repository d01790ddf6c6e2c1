//! Audio dispatch for the turn engine.
//!
//! Gameplay systems never talk to an audio backend directly: they write
//! [`AudioEvent`]s, and `audio_system` resolves them against the host's
//! [`AudioOutput`] at the end of the tick. The output lives in a non-send
//! resource so hosts with main-thread-only audio backends can participate.

use bevy_ecs::{
    event::{Event, EventReader},
    resource::Resource,
    system::{NonSendMut, ResMut},
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::{debug, trace};

/// Every audio cue the controller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Cue {
    /// First of two cues for a successful step.
    MoveA,
    /// Second of two cues for a successful step.
    MoveB,
    EatA,
    EatB,
    /// Richer eating cues, used by the better food pickup.
    SlurpA,
    SlurpB,
    GoldA,
    GoldB,
    GameOver,
}

/// Events for triggering audio playback.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// Play one of the two cues, chosen pseudo-randomly.
    PlayOneOf(Cue, Cue),
    /// Play a single cue.
    Play(Cue),
    /// Halt the ambient/background channel.
    StopMusic,
}

/// Resource for tracking audio state.
#[derive(Resource, Debug)]
pub struct AudioState {
    /// Whether cue playback is currently muted.
    pub muted: bool,
    rng: SmallRng,
}

impl AudioState {
    /// Creates the state with a seeded generator for cue-pair choices.
    /// Tests use this for reproducible cue selection.
    pub fn new(seed: u64) -> Self {
        AudioState {
            muted: false,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates the state with an OS-seeded generator.
    pub fn from_entropy() -> Self {
        AudioState {
            muted: false,
            rng: SmallRng::from_os_rng(),
        }
    }
}

/// The host's audio backend.
///
/// `play` receives already-resolved cues; pair randomization happens in
/// `audio_system`. `stop_music` halts the ambient channel only — one-shot
/// cues are the backend's own business.
pub trait AudioOutput {
    fn play(&mut self, cue: Cue);
    fn stop_music(&mut self);
}

/// Non-send resource wrapper for the host's audio backend.
pub struct AudioResource(pub Box<dyn AudioOutput>);

/// A backend that only logs. Used when the host supplies nothing.
#[derive(Default)]
pub struct NullOutput;

impl AudioOutput for NullOutput {
    fn play(&mut self, cue: Cue) {
        trace!(%cue, "Audio cue discarded (no backend)");
    }

    fn stop_music(&mut self) {
        trace!("Music stop discarded (no backend)");
    }
}

/// System that processes audio events and plays cues on the backend.
pub fn audio_system(mut output: NonSendMut<AudioResource>, mut state: ResMut<AudioState>, mut events: EventReader<AudioEvent>) {
    for event in events.read() {
        match event {
            AudioEvent::PlayOneOf(first, second) => {
                if state.muted {
                    debug!(%first, %second, "Skipping cue pair while muted");
                    continue;
                }
                let cue = if state.rng.random_bool(0.5) { *first } else { *second };
                trace!(%cue, "Playing randomized cue");
                output.0.play(cue);
            }
            AudioEvent::Play(cue) => {
                if state.muted {
                    debug!(%cue, "Skipping cue while muted");
                    continue;
                }
                trace!(%cue, "Playing cue");
                output.0.play(*cue);
            }
            // Mute gates cues, not transport control.
            AudioEvent::StopMusic => {
                debug!("Stopping ambient music");
                output.0.stop_music();
            }
        }
    }
}
