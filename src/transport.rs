//! External audio/MIDI transport collaborator.

/// The playback transport the frame loop owns. Position is a monotonic
/// external input, assumed advancing or held, never decreasing; seeking
/// backward is out of scope.
pub trait Transport {
    fn is_playing(&self) -> bool;
    fn position_sec(&self) -> f64;
    fn play(&mut self);
    /// `volume` in [0, 1].
    fn set_volume(&mut self, volume: f32);
}
