//! List view: turns the store state into printable rows and maps row
//! controls back to store actions.

use std::fmt::Write as _;

use colored::Colorize;

use crate::config::Config;
use crate::tracker::{
    ActivityAction, ActivityState, CalorieSummary, CategoryCatalog, CategoryKind,
};

pub const LIST_TITLE: &str = "Food & Activities";

/// Formats a calorie amount with at most two decimals and no trailing zeros.
pub fn format_calories(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Presentation settings shared by the list and summary renderers.
#[derive(Debug, Clone)]
pub struct ViewStyle {
    pub color: bool,
    pub unit_label: String,
    pub empty_message: String,
}

impl Default for ViewStyle {
    fn default() -> Self {
        ViewStyle::from(&Config::default())
    }
}

impl From<&Config> for ViewStyle {
    fn from(config: &Config) -> Self {
        Self {
            color: config.color_output,
            unit_label: config.unit_label.clone(),
            empty_message: config.empty_message.clone(),
        }
    }
}

impl ViewStyle {
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}

/// Display values for one activity. Unknown categories resolve to an empty
/// label.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow<'a> {
    pub position: usize,
    pub id: &'a str,
    pub category_label: &'a str,
    pub kind: Option<CategoryKind>,
    pub name: &'a str,
    pub calories: f64,
}

pub fn rows<'a>(state: &'a ActivityState, catalog: &'a CategoryCatalog) -> Vec<ActivityRow<'a>> {
    state
        .activities
        .iter()
        .enumerate()
        .map(|(idx, activity)| ActivityRow {
            position: idx + 1,
            id: activity.id.as_str(),
            category_label: catalog.resolve_name(activity.category).unwrap_or_default(),
            kind: catalog.kind_of(activity.category),
            name: activity.name.as_str(),
            calories: activity.calories,
        })
        .collect()
}

fn badge(row: &ActivityRow<'_>, style: &ViewStyle) -> String {
    let text = format!("[{}]", row.category_label.to_uppercase());
    if !style.color {
        return text;
    }
    match row.kind {
        Some(CategoryKind::Intake) => text.bright_green().bold().to_string(),
        _ => text.truecolor(249, 115, 22).bold().to_string(),
    }
}

pub fn render_list(state: &ActivityState, catalog: &CategoryCatalog, style: &ViewStyle) -> String {
    let mut out = String::new();
    let title = if style.color {
        LIST_TITLE.bold().to_string()
    } else {
        LIST_TITLE.to_string()
    };
    let _ = writeln!(out, "{title}");

    if state.is_empty() {
        let _ = writeln!(out, "{}", style.empty_message);
        return out;
    }

    for row in rows(state, catalog) {
        let marker = if state.selected_id() == Some(row.id) {
            "*"
        } else {
            " "
        };
        let _ = writeln!(
            out,
            "{marker}{:>3}. {} {} - {} {}",
            row.position,
            badge(&row, style),
            row.name,
            format_calories(row.calories),
            style.unit_label
        );
    }
    out
}

pub fn render_summary(summary: &CalorieSummary, style: &ViewStyle) -> String {
    let unit = &style.unit_label;
    let net = summary.net();
    let net_line = format!("Net: {} {unit}", format_calories(net));
    let net_line = match (style.color, net > 0.0) {
        (false, _) => net_line,
        (true, true) => net_line.bright_green().to_string(),
        (true, false) => net_line.bright_yellow().to_string(),
    };
    format!(
        "Consumed: {} {unit}\nBurned: {} {unit}\n{net_line}\n",
        format_calories(summary.consumed),
        format_calories(summary.burned)
    )
}

/// Resolves a row control argument: a 1-based position or an activity id.
pub fn resolve_target(state: &ActivityState, token: &str) -> Option<String> {
    if let Some(activity) = state.activity(token) {
        return Some(activity.id.clone());
    }
    let position = token.parse::<usize>().ok()?;
    position
        .checked_sub(1)
        .and_then(|idx| state.activities.get(idx))
        .map(|activity| activity.id.clone())
}

pub fn edit_action(id: impl Into<String>) -> ActivityAction {
    ActivityAction::SetActiveId { id: id.into() }
}

pub fn delete_action(id: impl Into<String>) -> ActivityAction {
    ActivityAction::DeleteActivity { id: id.into() }
}
