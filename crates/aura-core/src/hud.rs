//! Display mapping for the heads-up overlay (emotion badge, sentiment meter,
//! keyword chips). Nothing here feeds back into the simulation.

use crate::emotion::Emotion;

pub fn emoji(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "😊",
        Emotion::Excited => "🤩",
        Emotion::Sad => "😢",
        Emotion::Angry => "😠",
        Emotion::Calm => "😌",
        Emotion::Neutral => "😐",
    }
}

/// "happy" -> "Happy".
pub fn display_label(emotion: Emotion) -> String {
    let s = emotion.as_str();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentimentTier {
    Positive,
    Mixed,
    Negative,
}

impl SentimentTier {
    pub fn of(sentiment: f32) -> Self {
        if sentiment > 0.7 {
            SentimentTier::Positive
        } else if sentiment > 0.4 {
            SentimentTier::Mixed
        } else {
            SentimentTier::Negative
        }
    }

    pub fn css_color(self) -> &'static str {
        match self {
            SentimentTier::Positive => "#4CAF50",
            SentimentTier::Mixed => "#FFC107",
            SentimentTier::Negative => "#F44336",
        }
    }
}

/// Whole-number percentage for the meter label, e.g. `0.456` -> `"46%"`.
pub fn percent_label(sentiment: f32) -> String {
    format!("{:.0}%", (sentiment.clamp(0.0, 1.0) * 100.0).round())
}

/// Meter fill width as a CSS percentage.
pub fn meter_width(sentiment: f32) -> String {
    format!("{:.1}%", sentiment.clamp(0.0, 1.0) * 100.0)
}

/// Escape text for insertion into HTML markup. Keywords come from an
/// external service and are never trusted as markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
