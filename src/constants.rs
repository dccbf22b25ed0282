// DOM wiring and host-side tuning for the web front-end.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "aura-canvas";
pub const HUD_EMOTION_ID: &str = "hud-emotion";
pub const HUD_SENTIMENT_ID: &str = "hud-sentiment";
pub const HUD_KEYWORDS_ID: &str = "hud-keywords";

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;
pub const STATS_LOG_INTERVAL_FRAMES: u64 = 600; // ~10 s at 60 fps

// HUD panel styling shared by all three panels
pub const HUD_PANEL_STYLE: &str =
    "background: rgba(0,0,0,0.8); color: white; border-radius: 20px; font: 14px system-ui;";
