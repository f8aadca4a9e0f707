use thiserror::Error;

/// Configuration defects detected while assembling a deck.
///
/// None of these are recoverable at runtime: a scene whose objects do not line
/// up with the content table would index slides out of range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("scene has {objects} focusable objects but the content table has {slides} slides")]
    ContentMismatch { objects: usize, slides: usize },
    #[error("focusable object at position {position} carries index {index}")]
    IndexMismatch { position: usize, index: usize },
    #[error("scene has no focusable objects")]
    EmptyScene,
}
