use std::fmt;

/// Coarse mood label delivered by the classification pipeline.
///
/// Anything outside the six known labels collapses to `Neutral`, so every
/// downstream table lookup is total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Emotion {
    Happy,
    Excited,
    Sad,
    Angry,
    Calm,
    #[default]
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Excited,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Calm,
        Emotion::Neutral,
    ];

    /// Exact-match lookup of a wire label; `None` for anything unknown.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "happy" => Some(Emotion::Happy),
            "excited" => Some(Emotion::Excited),
            "sad" => Some(Emotion::Sad),
            "angry" => Some(Emotion::Angry),
            "calm" => Some(Emotion::Calm),
            "neutral" => Some(Emotion::Neutral),
            _ => None,
        }
    }

    /// Like [`Emotion::parse`] but falls back to `Neutral`.
    pub fn from_label(label: Option<&str>) -> Self {
        label.and_then(Self::parse).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Excited => "excited",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Calm => "calm",
            Emotion::Neutral => "neutral",
        }
    }

    /// High-arousal positive moods get accent-colored connections and sparkles.
    #[inline]
    pub fn is_vivid(self) -> bool {
        matches!(self, Emotion::Excited | Emotion::Happy)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
