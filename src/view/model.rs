// View model - SystemRecord projected onto the system page's element ids
use serde::Serialize;
use crate::format::{format_security, meter_offset, security_text};
use crate::models::{Kills, Station, SystemRecord, TopKill};

pub const NO_STATION: &str = "No station (login to see structure like fortizar)";
pub const NO_BELT: &str = "No belt in this system";
pub const NO_MINERALS: &str = "No minerals";
pub const NO_RECENT_KILL: &str = "No recent kill";
pub const NOT_AVAILABLE: &str = "N/A";

pub const SECURITY_BADGE_BASE: &str = "ml-1 font-medium px-2 py-1 rounded-full";

/// Activity containers in `recomendations` order
pub const ACTIVITY_CONTAINERS: [&str; 4] = [
    "mining-activity",
    "exploration-activity",
    "pvp-activity",
    "pve-activity",
];

/// One mutation of a named element on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FieldUpdate {
    SetText { id: String, text: String },
    SetClass { id: String, class: String },
    SetStyle { id: String, property: String, value: String },
    SetHtml { id: String, html: String },
    ActivityBar { id: String, score: f64 },
}

impl FieldUpdate {
    pub fn text(id: &str, text: impl Into<String>) -> Self {
        FieldUpdate::SetText { id: id.to_string(), text: text.into() }
    }

    pub fn class(id: &str, class: impl Into<String>) -> Self {
        FieldUpdate::SetClass { id: id.to_string(), class: class.into() }
    }

    pub fn style(id: &str, property: &str, value: impl Into<String>) -> Self {
        FieldUpdate::SetStyle {
            id: id.to_string(),
            property: property.to_string(),
            value: value.into(),
        }
    }

    pub fn html(id: &str, html: impl Into<String>) -> Self {
        FieldUpdate::SetHtml { id: id.to_string(), html: html.into() }
    }

    pub fn activity(id: &str, score: f64) -> Self {
        FieldUpdate::ActivityBar { id: id.to_string(), score }
    }

    pub fn show(id: &str) -> Self {
        Self::style(id, "display", "block")
    }

    pub fn hide(id: &str) -> Self {
        Self::style(id, "display", "none")
    }
}

/// Every update needed to show `record`, ending with the loading/content swap.
pub fn system_view(record: &SystemRecord) -> Vec<FieldUpdate> {
    let mut updates = Vec::new();

    // Header
    updates.push(FieldUpdate::text("system-name-header", &record.system_name));
    updates.push(FieldUpdate::text("system-id", &record.system_id));
    updates.push(FieldUpdate::text("region", &record.region));

    // Security
    let badge = format_security(record.security);
    let shown = security_text(record.security);
    updates.push(FieldUpdate::text("security", shown.clone()));
    updates.push(FieldUpdate::class("security", format!("{} {}", SECURITY_BADGE_BASE, badge.badge_class)));
    updates.push(FieldUpdate::text("security-value", shown));
    updates.push(FieldUpdate::text("security-label", badge.label));
    updates.push(FieldUpdate::style("security-meter", "stroke", badge.meter_color));
    updates.push(FieldUpdate::style(
        "security-meter",
        "stroke-dashoffset",
        format!("{}", meter_offset(record.security)),
    ));

    updates.push(FieldUpdate::html("stations-info", stations_html(&record.stations)));

    // Zone
    updates.push(FieldUpdate::text("zone-type", or_not_available(record.zone_type.as_deref())));
    updates.push(FieldUpdate::text("constellation", or_not_available(record.constellation.as_deref())));
    updates.push(FieldUpdate::text("region2", or_not_available(Some(record.region.as_str()))));

    updates.push(FieldUpdate::html("asteroid-belts", belts_html(&record.resources.belts)));
    updates.push(FieldUpdate::html("minerals-list", minerals_html(&record.resources.minerals)));

    if let Some(kills) = &record.kills {
        let (npc, ship) = kill_counters(kills);
        updates.push(FieldUpdate::text("npc-kills", npc));
        updates.push(FieldUpdate::text("ship-kills", ship));
    }

    updates.push(FieldUpdate::html("top-kills", top_kills_html(&record.top_kills)));

    if let Some(scores) = record.recommendations() {
        let ordered = [scores.mining, scores.exploration, scores.pvp, scores.pve];
        for (container, score) in ACTIVITY_CONTAINERS.iter().zip(ordered) {
            updates.push(FieldUpdate::activity(container, score));
        }
    }

    updates.push(FieldUpdate::hide("loading-state"));
    updates.push(FieldUpdate::show("content"));
    updates
}

/// Updates that replace the loading indicator with the error panel.
pub fn error_view(message: &str) -> Vec<FieldUpdate> {
    vec![
        FieldUpdate::hide("loading-state"),
        FieldUpdate::text("error-message", message),
        FieldUpdate::show("error-state"),
    ]
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Counters as shown, a missing or falsy count reads "0".
pub fn kill_counters(kills: &Kills) -> (String, String) {
    let shown = |count: &Option<String>| count.clone().unwrap_or_else(|| "0".to_string());
    (shown(&kills.npc_kills), shown(&kills.ship_kills))
}

fn placeholder(class: &str, text: &str) -> String {
    format!(r#"<div class="{}">{}</div>"#, class, text)
}

pub fn stations_html(stations: &[Station]) -> String {
    if stations.is_empty() {
        return placeholder("text-center py-4 text-yellow-500", NO_STATION);
    }
    stations
        .iter()
        .map(|station| {
            format!(
                r#"<div class="resource-item px-4 py-2 rounded bg-gray-800"><div class="font-medium">{}</div><div class="text-sm text-gray-400">{}</div></div>"#,
                html_escape(&station.owner),
                html_escape(&station.station_type)
            )
        })
        .collect()
}

pub fn belts_html(belts: &[String]) -> String {
    if belts.is_empty() {
        return placeholder("text-center py-4 text-yellow-500", NO_BELT);
    }
    belts
        .iter()
        .map(|belt| {
            format!(
                r#"<div class="resource-item px-4 py-2 rounded bg-gray-800"><span class="font-medium">{}</span></div>"#,
                html_escape(belt)
            )
        })
        .collect()
}

pub fn minerals_html(minerals: &[String]) -> String {
    if minerals.is_empty() {
        return placeholder("text-sm text-yellow-500", NO_MINERALS);
    }
    minerals
        .iter()
        .map(|mineral| {
            format!(
                r#"<span class="px-3 py-1 bg-gray-700 rounded-full text-sm">{}</span>"#,
                html_escape(mineral)
            )
        })
        .collect()
}

/// Kill cards. Links open in a new context with no handle back to this page.
pub fn top_kills_html(kills: &[TopKill]) -> String {
    if kills.is_empty() {
        return placeholder("text-center py-4 text-yellow-500", NO_RECENT_KILL);
    }
    kills
        .iter()
        .map(|kill| {
            format!(
                concat!(
                    r#"<div class="kill-item px-4 py-2 rounded bg-gray-800"><div class="flex justify-between items-center"><div>"#,
                    r#"<div class="font-medium">Victim: <a href="{}" class="text-blue-400 hover:text-blue-300" target="_blank" rel="noopener noreferrer">{}</a></div>"#,
                    r#"<div class="text-sm text-gray-400">Main Attacker: {}</div>"#,
                    r#"</div><div class="text-sm text-gray-500">{}</div></div></div>"#,
                ),
                html_escape(&kill.url),
                html_escape(&kill.victim),
                html_escape(&kill.main_attacker),
                html_escape(&kill.time)
            )
        })
        .collect()
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
