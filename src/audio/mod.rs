//! Fire-and-forget sound effects.
//!
//! The game never waits on audio and never fails because of it. With the
//! `sound` feature the effects are short synthesized tones played through
//! rodio; otherwise every effect is silent.

#[cfg(feature = "sound")]
mod tone;

use log::warn;

use crate::game::SoundEffect;

#[cfg(feature = "sound")]
pub use tone::TonePlayer;

/// Something that can play a sound effect
pub trait SoundPlayer {
    fn play(&self, effect: SoundEffect);
}

/// Plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _effect: SoundEffect) {}
}

/// One tone of an effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub freq_hz: f32,
    pub duration_ms: u64,
}

const EAT_NOTES: [Note; 2] = [
    Note {
        freq_hz: 520.0,
        duration_ms: 70,
    },
    Note {
        freq_hz: 780.0,
        duration_ms: 90,
    },
];

const CRASH_NOTES: [Note; 3] = [
    Note {
        freq_hz: 330.0,
        duration_ms: 120,
    },
    Note {
        freq_hz: 220.0,
        duration_ms: 120,
    },
    Note {
        freq_hz: 110.0,
        duration_ms: 260,
    },
];

/// Tones making up an effect, played back to back
pub fn notes(effect: SoundEffect) -> &'static [Note] {
    match effect {
        SoundEffect::Eat => &EAT_NOTES,
        SoundEffect::Crash => &CRASH_NOTES,
    }
}

/// Pick the player for this run, falling back to silence when no output device opens
pub fn open_player(mute: bool) -> Box<dyn SoundPlayer> {
    if mute {
        return Box::new(SilentPlayer);
    }

    #[cfg(feature = "sound")]
    {
        match TonePlayer::new() {
            Ok(player) => return Box::new(player),
            Err(err) => warn!("Audio unavailable, continuing silently: {}", err),
        }
    }

    #[cfg(not(feature = "sound"))]
    warn!("Built without the `sound` feature, effects are silent");

    Box::new(SilentPlayer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_notes() {
        let eat = notes(SoundEffect::Eat);
        assert_eq!(eat.len(), 2);
        assert!(eat[0].freq_hz < eat[1].freq_hz);

        let crash = notes(SoundEffect::Crash);
        assert!(crash.windows(2).all(|pair| pair[0].freq_hz > pair[1].freq_hz));
        let crash_ms: u64 = crash.iter().map(|note| note.duration_ms).sum();
        assert!(crash_ms > eat.iter().map(|note| note.duration_ms).sum::<u64>());
    }

    #[test]
    fn test_muted_player_is_silent() {
        let player = open_player(true);
        player.play(SoundEffect::Eat);
        player.play(SoundEffect::Crash);
    }
}
