//! Placeholder SVG endpoint for demo mode.
//!
//! Renders stand-in artwork without touching the provider: a 3x3 grid of
//! standard emoji approximating each style, or a single round badge. The
//! style here is presentational only, so an unknown value falls back to the
//! cute set instead of erroring.

use axum::extract::Query;
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use petmoji_core::Style;
use serde::Deserialize;
use std::fmt::Write;
use std::str::FromStr;

const GRID_SIZE: usize = 3;
const CELL_SIZE: usize = 200;

/// Query string for `GET /placeholder/emoji`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceholderQuery {
    /// Style to mimic, default cute
    #[serde(default)]
    pub style: Option<String>,
    /// "grid" for the 3x3 pack, anything else for a single badge
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Identifier shown on the badge
    #[serde(default)]
    pub id: Option<String>,
    /// Optional caption, truncated for display
    #[serde(default)]
    pub text: Option<String>,
}

/// Emoji approximating the nine expressions of a style.
fn expressions(style: Style) -> [&'static str; 9] {
    match style {
        Style::Cute => ["😛", "😉", "🤔", "😲", "😴", "😄", "😊", "😎", "😘"],
        Style::Funny => ["🤪", "🤓", "🥱", "🤯", "😏", "🤨", "🤣", "🦆", "👀"],
        Style::Angry => ["😠", "😬", "🤨", "😤", "🙄", "😮‍💨", "😡", "😒", "💢"],
        Style::Happy => ["😃", "😆", "😍", "🐕", "✨", "😌", "🥰", "👋", "🎉"],
    }
}

/// Badge palette and face for a style.
fn badge_theme(style: Style) -> (&'static str, &'static str, &'static str) {
    match style {
        Style::Cute => ("#FFB6C1", "😊", "#FF69B4"),
        Style::Funny => ("#FFD700", "😂", "#FFA500"),
        Style::Angry => ("#FF6B6B", "😠", "#FF0000"),
        Style::Happy => ("#98FB98", "😍", "#32CD32"),
    }
}

/// Render the 3x3 demo grid for a style.
pub fn grid_svg(style: Style) -> String {
    let total = GRID_SIZE * CELL_SIZE;
    let mut svg = format!(
        r##"<svg width="{total}" height="{total}" viewBox="0 0 {total} {total}" xmlns="http://www.w3.org/2000/svg">
  <rect width="{total}" height="{total}" fill="#ffffff"/>
"##
    );
    for (index, emoji) in expressions(style).iter().enumerate() {
        let row = index / GRID_SIZE;
        let col = index % GRID_SIZE;
        let x = col * CELL_SIZE;
        let y = row * CELL_SIZE;
        if col > 0 {
            let _ = writeln!(
                svg,
                r##"  <line x1="{x}" y1="{y}" x2="{x}" y2="{}" stroke="#f0f0f0" stroke-width="2"/>"##,
                y + CELL_SIZE
            );
        }
        if row > 0 {
            let _ = writeln!(
                svg,
                r##"  <line x1="{x}" y1="{y}" x2="{}" y2="{y}" stroke="#f0f0f0" stroke-width="2"/>"##,
                x + CELL_SIZE
            );
        }
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-family="Arial" font-size="80" text-anchor="middle" dominant-baseline="middle">{emoji}</text>"#,
            x + CELL_SIZE / 2,
            y + CELL_SIZE / 2
        );
    }
    let _ = writeln!(
        svg,
        r##"  <text x="{}" y="{}" font-family="Arial" font-size="16" fill="#ccc" text-anchor="middle">DEMO - {style} style</text>"##,
        total / 2,
        total - 20
    );
    svg.push_str("</svg>\n");
    svg
}

/// Render a single round placeholder badge.
pub fn badge_svg(style: Style, id: &str, text: Option<&str>) -> String {
    let (bg, emoji, border) = badge_theme(style);
    let caption = match text {
        Some(t) => format!("{}...", t.chars().take(20).collect::<String>()),
        None => format!("{} pet emoji", style),
    };
    format!(
        r##"<svg width="200" height="200" xmlns="http://www.w3.org/2000/svg">
  <title>{caption}</title>
  <defs>
    <linearGradient id="gradient-{id}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{bg};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{border};stop-opacity:0.8" />
    </linearGradient>
  </defs>
  <circle cx="100" cy="100" r="90" fill="url(#gradient-{id})" stroke="{border}" stroke-width="4"/>
  <text x="100" y="120" font-family="Arial, sans-serif" font-size="60" text-anchor="middle" fill="#333">{emoji}</text>
  <text x="100" y="40" font-family="Arial, sans-serif" font-size="14" font-weight="bold" text-anchor="middle" fill="#333">{style_upper}</text>
  <text x="100" y="180" font-family="Arial, sans-serif" font-size="12" text-anchor="middle" fill="#666">#{id}</text>
  <text x="100" y="160" font-family="Arial, sans-serif" font-size="10" text-anchor="middle" fill="#999">DEMO</text>
</svg>
"##,
        style_upper = style.as_str().to_uppercase(),
    )
}

/// `GET /placeholder/emoji` handler.
pub async fn placeholder_emoji(Query(query): Query<PlaceholderQuery>) -> Response {
    let style = query
        .style
        .as_deref()
        .and_then(|raw| Style::from_str(raw).ok())
        .unwrap_or(Style::Cute);

    let svg = if query.kind.as_deref() == Some("grid") {
        grid_svg(style)
    } else {
        let id = query.id.as_deref().unwrap_or("1");
        badge_svg(style, id, query.text.as_deref())
    };

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("image/svg+xml"),
        ),
        (
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ),
    ];
    (headers, svg).into_response()
}
