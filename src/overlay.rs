use crate::constants::*;
use aura_core::hud::{self, SentimentTier};
use aura_core::SceneState;
use web_sys as web;

/// Refresh the emotion badge, sentiment meter and keyword chips.
/// Panels missing from the page are skipped.
pub fn update_hud(document: &web::Document, state: &SceneState) {
    let tier_color = SentimentTier::of(state.sentiment).css_color();

    if let Some(el) = document.get_element_by_id(HUD_EMOTION_ID) {
        el.set_inner_html(&format!(
            "<div style='{HUD_PANEL_STYLE} padding: 25px 35px; text-align: center;'>\
             <div style='font-size: 60px;'>{}</div>\
             <div style='font-size: 22px; font-weight: bold; margin-top: 10px;'>{}</div></div>",
            hud::emoji(state.emotion),
            hud::display_label(state.emotion),
        ));
    }

    if let Some(el) = document.get_element_by_id(HUD_SENTIMENT_ID) {
        el.set_inner_html(&format!(
            "<div style='{HUD_PANEL_STYLE} padding: 25px; min-width: 200px;'>\
             <div style='margin-bottom: 12px;'>Sentiment Score</div>\
             <div style='height: 30px; background: rgba(255,255,255,0.2); border-radius: 15px; overflow: hidden;'>\
             <div style='width: {}; height: 100%; background: {}; transition: width 0.5s ease;'></div></div>\
             <div style='margin-top: 10px; font-size: 24px; font-weight: bold; text-align: center;'>{}</div></div>",
            hud::meter_width(state.sentiment),
            tier_color,
            hud::percent_label(state.sentiment),
        ));
    }

    if let Some(el) = document.get_element_by_id(HUD_KEYWORDS_ID) {
        if state.keywords.is_empty() {
            _ = el.set_attribute("style", "display:none");
            el.set_inner_html("");
        } else {
            let chips: String = state
                .keywords
                .iter()
                .map(|k| {
                    format!(
                        "<span style='background: {tier_color}; padding: 8px 15px; border-radius: 20px; font-size: 13px;'>{}</span>",
                        hud::escape_html(k)
                    )
                })
                .collect();
            _ = el.set_attribute("style", "");
            el.set_inner_html(&format!(
                "<div style='{HUD_PANEL_STYLE} padding: 20px; max-width: 300px;'>\
                 <div style='margin-bottom: 12px; opacity: 0.8;'>Key Topics:</div>\
                 <div style='display: flex; flex-wrap: wrap; gap: 8px;'>{chips}</div></div>"
            ));
        }
    }
}
