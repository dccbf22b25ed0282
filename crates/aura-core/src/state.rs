//! Scene state shared between the external update callback and the frame loop.
//!
//! Both sides run on the same thread (the browser main thread), so the handle
//! is a plain `Rc<RefCell<_>>`. Updates overwrite the whole state and there is
//! no queue: if several arrive between two frames only the last one is seen.

use crate::constants::DEFAULT_SENTIMENT;
use crate::emotion::Emotion;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    /// Always within [0, 1].
    pub sentiment: f32,
    pub emotion: Emotion,
    /// Display-only; the simulation never reads these.
    pub keywords: Vec<String>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            sentiment: DEFAULT_SENTIMENT,
            emotion: Emotion::Neutral,
            keywords: Vec::new(),
        }
    }
}

/// A fully defaulted update, ready to be written into [`SceneState`].
#[derive(Clone, Debug, PartialEq)]
pub struct StateUpdate {
    pub sentiment: f32,
    pub emotion: Emotion,
    pub keywords: Vec<String>,
}

/// Clamp a sentiment reading into [0, 1]. Infinities clamp to the nearest
/// bound; NaN has no ordering and becomes the default.
#[inline]
pub fn normalize_sentiment(s: f32) -> f32 {
    if s.is_nan() {
        DEFAULT_SENTIMENT
    } else {
        s.clamp(0.0, 1.0)
    }
}

impl StateUpdate {
    /// Build an update from loosely-typed inbound fields.
    ///
    /// Missing or NaN sentiment becomes 0.5, anything else is clamped to
    /// [0, 1]. Missing or unknown emotion becomes neutral. Missing keywords
    /// become an empty list.
    pub fn from_parts(
        sentiment: Option<f64>,
        emotion: Option<&str>,
        keywords: Option<Vec<String>>,
    ) -> Self {
        let sentiment = match sentiment {
            Some(s) if s.is_nan() => {
                log::warn!("[state] NaN sentiment, using {DEFAULT_SENTIMENT}");
                DEFAULT_SENTIMENT
            }
            Some(s) => normalize_sentiment(s as f32),
            None => DEFAULT_SENTIMENT,
        };
        let parsed = emotion.and_then(Emotion::parse);
        if let (Some(label), None) = (emotion, parsed) {
            log::warn!("[state] unknown emotion {label:?}, using neutral");
        }
        Self {
            sentiment,
            emotion: parsed.unwrap_or_default(),
            keywords: keywords.unwrap_or_default(),
        }
    }
}

impl Default for StateUpdate {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}

/// Cloneable handle to the single shared [`SceneState`].
///
/// Reads take a snapshot copy; nothing holds a borrow across a frame.
#[derive(Clone, Debug, Default)]
pub struct SceneStateHandle {
    inner: Rc<RefCell<SceneState>>,
    revision: Rc<Cell<u64>>,
}

impl SceneStateHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every field with the update (no merging). The sentiment is
    /// re-clamped, so hand-built updates cannot break the [0, 1] range.
    pub fn apply_update(&self, update: StateUpdate) {
        {
            let mut state = self.inner.borrow_mut();
            if state.emotion != update.emotion {
                log::info!("[state] emotion {} -> {}", state.emotion, update.emotion);
            }
            state.sentiment = normalize_sentiment(update.sentiment);
            state.emotion = update.emotion;
            state.keywords = update.keywords;
        }
        self.revision.set(self.revision.get().wrapping_add(1));
    }

    pub fn snapshot(&self) -> SceneState {
        self.inner.borrow().clone()
    }

    /// Number of updates applied so far.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }
}
