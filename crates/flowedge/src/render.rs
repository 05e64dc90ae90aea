//! The element tree an edge renders to, and its SVG serialization.

use crate::edge::InlineStyle;
use crate::label::LabelProps;
use flowedge_geom::fmt::fmt_path_into;

#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    pub d: String,
    pub class: String,
    pub style: Option<InlineStyle>,
    /// `url(#<marker id>)`; the marker itself is defined by the host scene.
    pub marker_end: String,
}

/// One interactive group: the edge path plus its label instances.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeElement {
    pub id: String,
    pub class: String,
    /// `-1`: focusable programmatically (keyboard events reach it) but outside the tab order.
    pub tab_index: i32,
    pub path: PathElement,
    pub labels: Vec<LabelProps>,
}

impl EdgeElement {
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(256 + self.path.d.len());
        self.write_svg(&mut out);
        out
    }

    pub fn write_svg(&self, out: &mut String) {
        out.push_str("<g class=\"");
        escape_xml_into(out, &self.class);
        out.push_str("\" tabindex=\"");
        out.push_str(&self.tab_index.to_string());
        out.push_str("\" data-id=\"");
        escape_xml_into(out, &self.id);
        out.push_str("\">");

        out.push_str("<path class=\"");
        escape_xml_into(out, &self.path.class);
        out.push('"');
        if let Some(style) = self.path.style.as_ref().filter(|s| !s.is_empty()) {
            out.push_str(" style=\"");
            escape_xml_into(out, &style_attr(style));
            out.push('"');
        }
        out.push_str(" d=\"");
        escape_xml_into(out, &self.path.d);
        out.push_str("\" marker-end=\"");
        escape_xml_into(out, &self.path.marker_end);
        out.push_str("\"/>");

        for label in &self.labels {
            write_label(out, label);
        }
        out.push_str("</g>");
    }
}

fn write_label(out: &mut String, label: &LabelProps) {
    out.push_str("<text");
    if let Some(class) = label.class_name.as_deref() {
        out.push_str(" class=\"");
        escape_xml_into(out, class);
        out.push('"');
    }
    for (name, value) in [
        ("x", label.x),
        ("y", label.y),
        ("width", label.width),
        ("height", label.height),
    ] {
        if let Some(v) = value {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            fmt_path_into(out, v);
            out.push('"');
        }
    }
    if let Some(style) = label.style.as_ref().filter(|s| !s.is_empty()) {
        out.push_str(" style=\"");
        escape_xml_into(out, &style_attr(style));
        out.push('"');
    }
    out.push('>');
    if let Some(text) = label.text.as_deref() {
        escape_xml_into(out, text);
    }
    out.push_str("</text>");
}

/// `prop:value;prop:value`
pub fn style_attr(style: &InlineStyle) -> String {
    let mut out = String::new();
    for (i, (k, v)) in style.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(k.trim());
        out.push(':');
        out.push_str(v.trim());
    }
    out
}

fn escape_xml_into(out: &mut String, text: &str) {
    let mut start = 0usize;
    for (i, b) in text.bytes().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&text[start..i]);
        out.push_str(esc);
        start = i + 1;
    }
    out.push_str(&text[start..]);
}
