use rodio::{OutputStream, OutputStreamHandle, Sink, Source, source::SineWave};
use std::time::Duration;

use super::{SoundPlayer, notes};
use crate::game::SoundEffect;

const VOLUME: f32 = 0.15;

/// Synthesized beeps on the default output device
pub struct TonePlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl TonePlayer {
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl SoundPlayer for TonePlayer {
    fn play(&self, effect: SoundEffect) {
        if let Ok(sink) = Sink::try_new(&self.handle) {
            for note in notes(effect) {
                let tone = SineWave::new(note.freq_hz)
                    .take_duration(Duration::from_millis(note.duration_ms))
                    .amplify(VOLUME);
                sink.append(tone);
            }
            sink.detach();
        }
    }
}
