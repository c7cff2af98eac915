// Document adapter - the system page's element-id contract and an in-memory host
use std::collections::BTreeMap;
use tracing::{debug, warn};
use crate::format::activity::{self, INACTIVE_SEGMENT_CLASS};
use crate::view::FieldUpdate;

/// Segments in each activity container of the stock page
pub const DEFAULT_ACTIVITY_SEGMENTS: usize = 5;

/// Minimal surface the renderer needs from whatever hosts the page.
pub trait Document {
    fn set_text(&mut self, id: &str, text: &str);
    fn set_class(&mut self, id: &str, class: &str);
    fn set_style(&mut self, id: &str, property: &str, value: &str);
    fn set_inner_html(&mut self, id: &str, html: &str);

    /// Number of `.activity-segment` children in `container_id`
    fn segment_count(&self, container_id: &str) -> usize;
    /// Returns false when the container has no segment at `index`
    fn set_segment_class(&mut self, container_id: &str, index: usize, class: &str) -> bool;
    /// Writes the `.activity-value` slot of `container_id`
    fn set_activity_value(&mut self, container_id: &str, text: &str);
}

/// Reset every segment of `container_id`, light the first `score` of them and
/// write the `score/5` label.
pub fn render_activity_bar<D: Document + ?Sized>(doc: &mut D, container_id: &str, score: f64) {
    let segments = doc.segment_count(container_id);
    for index in 0..segments {
        doc.set_segment_class(container_id, index, INACTIVE_SEGMENT_CLASS);
    }

    for index in 0..activity::activation_count(score, segments) {
        if !doc.set_segment_class(container_id, index, &activity::active_segment_class(score, index)) {
            debug!("{} has no segment {}", container_id, index);
        }
    }

    doc.set_activity_value(container_id, &activity::score_label(score));
}

pub fn apply<D: Document + ?Sized>(doc: &mut D, updates: &[FieldUpdate]) {
    for update in updates {
        match update {
            FieldUpdate::SetText { id, text } => doc.set_text(id, text),
            FieldUpdate::SetClass { id, class } => doc.set_class(id, class),
            FieldUpdate::SetStyle { id, property, value } => doc.set_style(id, property, value),
            FieldUpdate::SetHtml { id, html } => doc.set_inner_html(id, html),
            FieldUpdate::ActivityBar { id, score } => render_activity_bar(doc, id, *score),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub text: String,
    pub class: String,
    pub styles: BTreeMap<String, String>,
    pub inner_html: Option<String>,
    pub segments: Vec<String>,
    pub activity_value: Option<String>,
}

impl Element {
    fn new(tag: &'static str, class: &str) -> Self {
        Self {
            tag,
            class: class.to_string(),
            ..Default::default()
        }
    }

    fn hidden(mut self) -> Self {
        self.styles.insert("display".to_string(), "none".to_string());
        self
    }

    fn with_segments(mut self, count: usize) -> Self {
        self.segments = vec![INACTIVE_SEGMENT_CLASS.to_string(); count];
        self.activity_value = Some(String::new());
        self
    }

    pub fn is_visible(&self) -> bool {
        self.styles.get("display").map(|d| d != "none").unwrap_or(true)
    }
}

/// In-memory rendition of `system.html`: every element the viewer and the
/// search form address, keyed by id, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    order: Vec<String>,
    elements: BTreeMap<String, Element>,
}

impl PageDocument {
    pub fn system_page() -> Self {
        Self::with_activity_segments(DEFAULT_ACTIVITY_SEGMENTS)
    }

    pub fn with_activity_segments(segments: usize) -> Self {
        let mut doc = Self {
            order: Vec::new(),
            elements: BTreeMap::new(),
        };

        doc.insert("search-form", Element::new("form", ""));
        doc.insert("system-name", Element::new("input", ""));
        doc.insert("loading-state", Element::new("div", ""));
        doc.insert("error-state", Element::new("div", "").hidden());
        doc.insert("error-message", Element::new("p", ""));
        doc.insert("content", Element::new("div", "").hidden());
        for id in ["system-name-header", "system-id", "region", "security", "security-value", "security-label"] {
            doc.insert(id, Element::new("span", ""));
        }
        doc.insert("security-meter", Element::new("circle", ""));
        doc.insert("stations-info", Element::new("div", ""));
        for id in ["zone-type", "constellation", "region2"] {
            doc.insert(id, Element::new("span", ""));
        }
        doc.insert("asteroid-belts", Element::new("div", ""));
        doc.insert("minerals-list", Element::new("div", ""));
        doc.insert("npc-kills", Element::new("span", ""));
        doc.insert("ship-kills", Element::new("span", ""));
        doc.insert("top-kills", Element::new("div", ""));
        for id in crate::view::model::ACTIVITY_CONTAINERS {
            doc.insert(id, Element::new("div", "").with_segments(segments));
        }
        doc
    }

    fn insert(&mut self, id: &str, element: Element) {
        self.order.push(id.to_string());
        self.elements.insert(id.to_string(), element);
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        let element = self.elements.get_mut(id);
        if element.is_none() {
            warn!("no element with id '{}'", id);
        }
        element
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.text.as_str())
    }

    pub fn class(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.class.as_str())
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.styles.get(property)).map(String::as_str)
    }

    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.inner_html.as_deref())
    }

    pub fn segment_classes(&self, container_id: &str) -> &[String] {
        self.element(container_id).map(|e| e.segments.as_slice()).unwrap_or(&[])
    }

    pub fn activity_value(&self, container_id: &str) -> Option<&str> {
        self.element(container_id).and_then(|e| e.activity_value.as_deref())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.element(id).map(Element::is_visible).unwrap_or(false)
    }

    /// Serialized page body, stable for a given element state.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for id in &self.order {
            let Some(element) = self.elements.get(id) else { continue };
            out.push_str(&format!("<{} id=\"{}\"", element.tag, id));
            if !element.class.is_empty() {
                out.push_str(&format!(" class=\"{}\"", element.class));
            }
            if !element.styles.is_empty() {
                let style: Vec<String> = element.styles.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                out.push_str(&format!(" style=\"{}\"", style.join("; ")));
            }
            out.push('>');
            if let Some(html) = &element.inner_html {
                out.push_str(html);
            } else if !element.segments.is_empty() {
                for class in &element.segments {
                    out.push_str(&format!("<div class=\"{}\"></div>", class));
                }
                out.push_str(&format!(
                    "<span class=\"activity-value\">{}</span>",
                    crate::view::model::html_escape(element.activity_value.as_deref().unwrap_or(""))
                ));
            } else {
                out.push_str(&crate::view::model::html_escape(&element.text));
            }
            out.push_str(&format!("</{}>\n", element.tag));
        }
        out
    }

    /// Plain-text report of whatever panel is visible.
    pub fn to_text_report(&self) -> String {
        if self.is_visible("error-state") {
            return format!("Error: {}\n", self.text("error-message").unwrap_or_default());
        }
        if !self.is_visible("content") {
            return "Loading...\n".to_string();
        }

        let text = |id: &str| self.text(id).unwrap_or_default().to_string();
        let mut out = String::new();
        out.push_str(&format!("System: {} ({})\n", text("system-name-header"), text("system-id")));
        out.push_str(&format!("Region: {}\n", text("region")));
        out.push_str(&format!("Security: {} {}\n", text("security-value"), text("security-label")));
        out.push_str(&format!("Zone: {}\n", text("zone-type")));
        out.push_str(&format!("Constellation: {}\n", text("constellation")));

        for (title, id) in [
            ("Stations", "stations-info"),
            ("Asteroid belts", "asteroid-belts"),
            ("Minerals", "minerals-list"),
            ("Top kills", "top-kills"),
        ] {
            out.push_str(&format!("{}:\n", title));
            for line in text_chunks(self.inner_html(id).unwrap_or_default()) {
                out.push_str(&format!("  {}\n", line));
            }
        }

        out.push_str(&format!("NPC kills: {}\n", text("npc-kills")));
        out.push_str(&format!("Ship kills: {}\n", text("ship-kills")));

        for (title, id) in [
            ("Mining", "mining-activity"),
            ("Exploration", "exploration-activity"),
            ("PvP", "pvp-activity"),
            ("PvE", "pve-activity"),
        ] {
            let lit = self.segment_classes(id).iter().filter(|c| c.contains("active-segment-")).count();
            let bar: String = (0..self.segment_classes(id).len())
                .map(|i| if i < lit { '#' } else { '.' })
                .collect();
            out.push_str(&format!("{:<12} [{}] {}\n", title, bar, self.activity_value(id).unwrap_or_default()));
        }
        out
    }
}

/// Text nodes of an HTML fragment, tags dropped and entities decoded.
fn text_chunks(html: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                let chunk = current.trim();
                if !chunk.is_empty() {
                    chunks.push(html_unescape(chunk));
                }
                current.clear();
            }
            '>' => in_tag = false,
            _ if !in_tag => current.push(ch),
            _ => {}
        }
    }
    let chunk = current.trim();
    if !chunk.is_empty() {
        chunks.push(html_unescape(chunk));
    }
    chunks
}

fn html_unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

impl Document for PageDocument {
    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.element_mut(id) {
            element.text = text.to_string();
            element.inner_html = None;
        }
    }

    fn set_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.element_mut(id) {
            element.class = class.to_string();
        }
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn set_inner_html(&mut self, id: &str, html: &str) {
        if let Some(element) = self.element_mut(id) {
            element.inner_html = Some(html.to_string());
            element.text.clear();
        }
    }

    fn segment_count(&self, container_id: &str) -> usize {
        self.segment_classes(container_id).len()
    }

    fn set_segment_class(&mut self, container_id: &str, index: usize, class: &str) -> bool {
        match self.elements.get_mut(container_id).and_then(|e| e.segments.get_mut(index)) {
            Some(segment) => {
                *segment = class.to_string();
                true
            }
            None => false,
        }
    }

    fn set_activity_value(&mut self, container_id: &str, text: &str) {
        if let Some(element) = self.element_mut(container_id) {
            if element.activity_value.is_some() {
                element.activity_value = Some(text.to_string());
            }
        }
    }
}
