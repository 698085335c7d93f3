//! Load-time note catalog: flattens a per-channel score into one immutable
//! event list and derives the pitch bounds the timeline layout needs.

use thiserror::Error;

/// One timed note, immutable after load. `channel` is the index of the score
/// channel the note came from and only affects hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteEvent {
    pub channel: u32,
    pub pitch: u32,
    pub start_ms: i32,
    pub duration_ms: i32,
}

impl NoteEvent {
    pub fn end_ms(&self) -> i32 {
        self.start_ms + self.duration_ms
    }
}

/// One note as delivered by the external score loader, before a channel is
/// assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreNote {
    pub pitch: u32,
    pub start_ms: i32,
    pub duration_ms: i32,
}

/// Catalog validation failures are fatal: pitch-range normalization needs a
/// complete, valid catalog, so there is no degraded partial-load mode.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("score contains no notes")]
    Empty,
    #[error("channel {channel} note {index}: negative start time {start_ms} ms")]
    NegativeStart {
        channel: usize,
        index: usize,
        start_ms: i32,
    },
    #[error("channel {channel} note {index}: non-positive duration {duration_ms} ms")]
    NonPositiveDuration {
        channel: usize,
        index: usize,
        duration_ms: i32,
    },
}

/// Immutable flattened catalog plus derived pitch bounds.
#[derive(Clone, Debug)]
pub struct NoteCatalog {
    notes: Vec<NoteEvent>,
    min_pitch: u32,
    max_pitch: u32,
}

impl NoteCatalog {
    /// Flatten a per-channel score, rejecting the whole load on the first
    /// malformed record. Corrupt timing would otherwise render silently
    /// wrong with no downstream failure to catch it.
    pub fn from_score(channels: &[Vec<ScoreNote>]) -> Result<Self, CatalogError> {
        let mut notes = Vec::new();
        let mut min_pitch = u32::MAX;
        let mut max_pitch = 0;

        for (channel, events) in channels.iter().enumerate() {
            for (index, note) in events.iter().enumerate() {
                if note.start_ms < 0 {
                    return Err(CatalogError::NegativeStart {
                        channel,
                        index,
                        start_ms: note.start_ms,
                    });
                }
                if note.duration_ms <= 0 {
                    return Err(CatalogError::NonPositiveDuration {
                        channel,
                        index,
                        duration_ms: note.duration_ms,
                    });
                }
                notes.push(NoteEvent {
                    channel: channel as u32,
                    pitch: note.pitch,
                    start_ms: note.start_ms,
                    duration_ms: note.duration_ms,
                });
                min_pitch = min_pitch.min(note.pitch);
                max_pitch = max_pitch.max(note.pitch);
            }
        }

        if notes.is_empty() {
            return Err(CatalogError::Empty);
        }

        log::info!(
            "[catalog] {} notes across {} channels, pitch range {}..={}",
            notes.len(),
            channels.len(),
            min_pitch,
            max_pitch
        );

        Ok(Self {
            notes,
            min_pitch,
            max_pitch,
        })
    }

    pub fn notes(&self) -> &[NoteEvent] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn min_pitch(&self) -> u32 {
        self.min_pitch
    }

    pub fn max_pitch(&self) -> u32 {
        self.max_pitch
    }

    /// Number of distinct pitch rows; at least 1, so the block-height
    /// division below never sees zero even for a single-pitch score.
    pub fn pitch_span(&self) -> u32 {
        self.max_pitch - self.min_pitch + 1
    }

    /// Height of one pitch row for a given viewport height. A single-pitch
    /// score gets the full viewport.
    pub fn block_height(&self, viewport_h: f32) -> f32 {
        viewport_h / self.pitch_span() as f32
    }
}
