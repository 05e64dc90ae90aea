//! The interactive edge.

use crate::Result;
use crate::callbacks::EdgeCallbacks;
use crate::config::EdgeConfig;
use crate::event::{KeyboardEvent, PointerEvent, SceneEvent};
use crate::label::{LabelProps, instantiate_labels};
use crate::memo::PathMemo;
use crate::render::{EdgeElement, PathElement};
use flowedge_geom::{EdgePath, RoutedSection};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Inline CSS declarations, property -> value, kept in insertion order.
pub type InlineStyle = IndexMap<String, String>;

/// Everything an owner configures on an edge. `D` is the application's payload; the edge never
/// looks inside it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeProps<D = serde_json::Value> {
    pub id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
    #[serde(default)]
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<String>,
    #[serde(default)]
    pub properties: D,
    #[serde(default)]
    pub sections: Vec<RoutedSection>,
    /// `None` means the owner has no opinion; only `Some(true)` marks the path active.
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<InlineStyle>,
    /// Template every label instance starts from.
    #[serde(default)]
    pub label: LabelProps,
    #[serde(default)]
    pub labels: Vec<LabelProps>,
}

impl<D> EdgeProps<D> {
    pub fn new(id: impl Into<String>, sections: Vec<RoutedSection>, properties: D) -> Self {
        Self {
            id: id.into(),
            source: String::new(),
            source_port: None,
            target: String::new(),
            target_port: None,
            properties,
            sections,
            is_active: None,
            disabled: false,
            class_name: None,
            style: None,
            label: LabelProps::default(),
            labels: Vec::new(),
        }
    }

    pub fn between(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source = source.into();
        self.target = target.into();
        self
    }
}

pub struct Edge<D = serde_json::Value> {
    props: EdgeProps<D>,
    callbacks: EdgeCallbacks<D>,
    config: EdgeConfig,
    memo: PathMemo,
}

impl<D: 'static> Edge<D> {
    pub fn new(props: EdgeProps<D>) -> Self {
        Self {
            props,
            callbacks: EdgeCallbacks::default(),
            config: EdgeConfig::default(),
            memo: PathMemo::new(),
        }
    }
}

impl<D> Edge<D> {
    pub fn with_callbacks(mut self, callbacks: EdgeCallbacks<D>) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// The config's geometry options are part of the path memo key: a config that changes
    /// them recomputes the path on the next render.
    pub fn with_config(mut self, config: EdgeConfig) -> Self {
        self.config = config;
        self
    }

    /// See [`Edge::with_config`].
    pub fn set_config(&mut self, config: EdgeConfig) {
        self.config = config;
    }

    pub fn id(&self) -> &str {
        &self.props.id
    }

    pub fn props(&self) -> &EdgeProps<D> {
        &self.props
    }

    pub fn properties(&self) -> &D {
        &self.props.properties
    }

    pub fn config(&self) -> &EdgeConfig {
        &self.config
    }

    /// Replaces all props. The path is only recomputed if the sections differ by value.
    pub fn set_props(&mut self, props: EdgeProps<D>) {
        self.props = props;
    }

    pub fn set_sections(&mut self, sections: Vec<RoutedSection>) {
        self.props.sections = sections;
    }

    pub fn set_active(&mut self, is_active: Option<bool>) {
        self.props.is_active = is_active;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.props.disabled = disabled;
    }

    pub fn set_labels(&mut self, labels: Vec<LabelProps>) {
        self.props.labels = labels;
    }

    pub fn geometry(&mut self) -> Result<&EdgePath> {
        let options = self.config.path_options();
        self.memo.get_or_compute(&self.props.sections, &options)
    }

    /// SVG path data for the current sections.
    pub fn path(&mut self) -> Result<&str> {
        Ok(self.geometry()?.d.as_str())
    }

    /// How many times the path has actually been computed for this edge.
    pub fn path_computations(&self) -> u64 {
        self.memo.computations()
    }

    pub fn labels(&self) -> Vec<LabelProps> {
        instantiate_labels(&self.props.label, &self.props.labels)
    }

    pub fn render(&mut self) -> Result<EdgeElement> {
        let d = self.path()?.to_string();
        let classes = &self.config.classes;

        let mut class = String::new();
        if let Some(extra) = self.props.class_name.as_deref().filter(|c| !c.trim().is_empty()) {
            class.push_str(extra.trim());
            class.push(' ');
        }
        class.push_str(&classes.path);
        if self.props.is_active == Some(true) {
            class.push(' ');
            class.push_str(&classes.active);
        }
        if self.props.disabled {
            class.push(' ');
            class.push_str(&classes.disabled);
        }

        Ok(EdgeElement {
            id: self.props.id.clone(),
            class: classes.edge.clone(),
            tab_index: -1,
            path: PathElement {
                d,
                class,
                style: self.props.style.clone(),
                marker_end: format!("url(#{})", self.config.marker_end),
            },
            labels: self.labels(),
        })
    }

    /// Stops the event and reports whether the owner's callback may run.
    fn intercept<E: SceneEvent>(&self, event: &mut E, kind: &'static str) -> bool {
        event.stop_propagation();
        if self.props.disabled {
            tracing::trace!(edge = %self.props.id, kind, "edge disabled; callback suppressed");
            return false;
        }
        true
    }

    pub fn click(&mut self, event: &mut PointerEvent) {
        if self.intercept(event, "click") {
            (self.callbacks.on_click)(&*event, &self.props.properties);
        }
    }

    pub fn key_down(&mut self, event: &mut KeyboardEvent) {
        if self.intercept(event, "key_down") {
            (self.callbacks.on_key_down)(&*event, &self.props.properties);
        }
    }

    pub fn pointer_enter(&mut self, event: &mut PointerEvent) {
        if self.intercept(event, "enter") {
            (self.callbacks.on_enter)(&*event, &self.props.properties);
        }
    }

    pub fn pointer_leave(&mut self, event: &mut PointerEvent) {
        if self.intercept(event, "leave") {
            (self.callbacks.on_leave)(&*event, &self.props.properties);
        }
    }

    /// Hands the payload to the owner's removal callback.
    pub fn remove(&mut self) {
        (self.callbacks.on_remove)(&self.props.properties);
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for Edge<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Edge")
            .field("props", &self.props)
            .field("config", &self.config)
            .field("memo", &self.memo)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowedge_geom::Point;

    fn props() -> EdgeProps<u32> {
        EdgeProps::new(
            "e1",
            vec![RoutedSection::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))],
            7,
        )
    }

    #[test]
    fn path_is_memoized_until_sections_change() {
        let mut edge = Edge::new(props());
        let first = edge.path().expect("path").to_string();
        let second = edge.path().expect("path").to_string();
        assert_eq!(first, second);
        assert_eq!(edge.path_computations(), 1);

        // Presentation changes do not touch geometry.
        edge.set_active(Some(true));
        edge.set_props(props());
        edge.path().expect("path");
        assert_eq!(edge.path_computations(), 1);

        edge.set_sections(vec![RoutedSection::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
        )]);
        assert_ne!(edge.path().expect("path"), first);
        assert_eq!(edge.path_computations(), 2);
    }

    #[test]
    fn path_class_reflects_state() {
        let mut p = props();
        p.class_name = Some("custom".to_string());
        p.is_active = Some(true);
        let mut edge = Edge::new(p);
        assert_eq!(edge.render().expect("render").path.class, "custom path active");

        edge.set_active(None);
        edge.set_disabled(true);
        assert_eq!(edge.render().expect("render").path.class, "custom path disabled");

        edge.set_active(Some(false));
        edge.set_disabled(false);
        assert_eq!(edge.render().expect("render").path.class, "custom path");
    }

    #[test]
    fn props_deserialize_with_defaults() {
        let p: EdgeProps = serde_json::from_str(
            r#"{
                "id": "e9",
                "source": "a",
                "sourcePort": "a.out",
                "target": "b",
                "properties": {"weight": 3},
                "sections": [{"startPoint": {"x": 0, "y": 0}, "endPoint": {"x": 4, "y": 4}}],
                "isActive": null,
                "labels": [{"text": "hello"}]
            }"#,
        )
        .expect("props");
        assert_eq!(p.source_port.as_deref(), Some("a.out"));
        assert_eq!(p.is_active, None);
        assert!(!p.disabled);
        assert_eq!(p.properties["weight"], 3);
        assert_eq!(p.labels.len(), 1);
    }
}
