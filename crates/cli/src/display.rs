// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of the screens.

use crate::viewmodel::{MapView, Marker, MarkerSummary, ProfileEntry, ProfileView};

/// Maximum line width for wrapped comments (excluding the indent).
const WRAP_WIDTH: usize = 72;

/// Wrap a single-line comment at word boundaries.
///
/// Text that already contains newlines is returned unchanged. Width is
/// counted in characters, so accented names and emoji wrap sensibly.
pub fn wrap_text(content: &str, width: usize) -> Vec<String> {
    if content.contains('\n') {
        return content.lines().map(str::to_string).collect();
    }
    if content.chars().count() <= width {
        return vec![content.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in content.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// One line per marker: `Name  Type - 4⭐  (lat, lon)  [id]`.
pub fn format_marker(marker: &Marker) -> String {
    format!(
        "{}  {}  ({})  [{}]",
        marker.title, marker.description, marker.coordinate, marker.id
    )
}

/// The whole map screen.
pub fn format_map(view: &MapView) -> Vec<String> {
    match view {
        MapView::Placeholder { title, hint } => vec![title.to_string(), hint.to_string()],
        MapView::Markers { region, markers } => {
            let mut lines = vec![format!(
                "Map centered on {} (span {}, {})",
                region.center, region.latitude_delta, region.longitude_delta
            )];
            if markers.is_empty() {
                lines.push("No beer spots yet.".to_string());
            }
            lines.extend(markers.iter().map(|m| format!("  {}", format_marker(m))));
            lines
        }
    }
}

/// The read-only card shown for a tapped marker.
pub fn format_summary(summary: &MarkerSummary) -> Vec<String> {
    let mut lines = vec![
        summary.name.clone(),
        format!("  Type: {}", summary.beer_type),
        format!("  Rating: {}/5", summary.rating),
    ];
    if !summary.comment.is_empty() {
        lines.push("  Comment:".to_string());
        lines.extend(
            wrap_text(&summary.comment, WRAP_WIDTH)
                .into_iter()
                .map(|l| format!("    {}", l)),
        );
    }
    lines
}

fn format_entry(entry: &ProfileEntry) -> Vec<String> {
    let mut lines = vec![format!(
        "  {} ({}) {}⭐  [{}]",
        entry.name, entry.beer_type, entry.rating, entry.id
    )];
    lines.extend(
        wrap_text(&entry.comment, WRAP_WIDTH)
            .into_iter()
            .filter(|l| !l.is_empty())
            .map(|l| format!("    {}", l)),
    );
    lines
}

/// The profile screen: header, stats, then every tasting.
pub fn format_profile(view: &ProfileView) -> Vec<String> {
    let mut lines = vec![
        view.username.clone(),
        view.subtitle.to_string(),
        String::new(),
        format!("Beers tasted: {}", view.total_count),
        format!("Average rating: {}", view.average_display()),
    ];
    if !view.entries.is_empty() {
        lines.push(String::new());
        lines.push("My Beers".to_string());
        for entry in &view.entries {
            lines.extend(format_entry(entry));
        }
    }
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
