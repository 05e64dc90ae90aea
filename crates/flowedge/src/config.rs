//! Edge tunables read from a JSON config value.
//!
//! Keys live under `edge` (e.g. `{"edge": {"bow": 0.3, "classes": {"active": "is-active"}}}`).
//! Missing keys keep their defaults.

use crate::{Error, Result};
use flowedge_geom::PathOptions;
use flowedge_geom::curve::{DEFAULT_ALPHA, DEFAULT_BETA};
use flowedge_geom::kernel::DEFAULT_BOW;
use serde_json::Value;

pub const DEFAULT_MARKER_END: &str = "end-arrow";

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeClasses {
    pub edge: String,
    pub path: String,
    pub active: String,
    pub disabled: String,
}

impl Default for EdgeClasses {
    fn default() -> Self {
        Self {
            edge: "edge".to_string(),
            path: "path".to_string(),
            active: "active".to_string(),
            disabled: "disabled".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeConfig {
    pub bow: f64,
    pub bundle_beta: f64,
    pub catmull_rom_alpha: f64,
    /// Id of the terminator marker defined by the host scene.
    pub marker_end: String,
    pub classes: EdgeClasses,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            bow: DEFAULT_BOW,
            bundle_beta: DEFAULT_BETA,
            catmull_rom_alpha: DEFAULT_ALPHA,
            marker_end: DEFAULT_MARKER_END.to_string(),
            classes: EdgeClasses::default(),
        }
    }
}

impl EdgeConfig {
    pub fn from_value(cfg: &Value) -> Result<Self> {
        let d = Self::default();
        let config = Self {
            bow: config_f64(cfg, &["edge", "bow"]).unwrap_or(d.bow),
            bundle_beta: config_f64(cfg, &["edge", "bundleBeta"]).unwrap_or(d.bundle_beta),
            catmull_rom_alpha: config_f64(cfg, &["edge", "catmullRomAlpha"])
                .unwrap_or(d.catmull_rom_alpha),
            marker_end: config_string(cfg, &["edge", "markerEnd"]).unwrap_or(d.marker_end),
            classes: EdgeClasses {
                edge: config_string(cfg, &["edge", "classes", "edge"]).unwrap_or(d.classes.edge),
                path: config_string(cfg, &["edge", "classes", "path"]).unwrap_or(d.classes.path),
                active: config_string(cfg, &["edge", "classes", "active"])
                    .unwrap_or(d.classes.active),
                disabled: config_string(cfg, &["edge", "classes", "disabled"])
                    .unwrap_or(d.classes.disabled),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| Error::InvalidConfig {
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(Error::InvalidConfig { message });
        if !self.bow.is_finite() {
            return invalid(format!("edge.bow must be finite, got {}", self.bow));
        }
        if !(0.0..=1.0).contains(&self.bundle_beta) {
            return invalid(format!(
                "edge.bundleBeta must be within [0, 1], got {}",
                self.bundle_beta
            ));
        }
        if !(0.0..=1.0).contains(&self.catmull_rom_alpha) {
            return invalid(format!(
                "edge.catmullRomAlpha must be within [0, 1], got {}",
                self.catmull_rom_alpha
            ));
        }
        if self.marker_end.trim().is_empty() {
            return invalid("edge.markerEnd must not be empty".to_string());
        }
        Ok(())
    }

    pub fn path_options(&self) -> PathOptions {
        PathOptions {
            bow: self.bow,
            beta: self.bundle_beta,
            alpha: self.catmull_rom_alpha,
        }
    }
}

fn lookup<'a>(cfg: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = cfg;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

fn json_f64(v: &Value) -> Option<f64> {
    v.as_f64()
        .or_else(|| v.as_i64().map(|n| n as f64))
        .or_else(|| v.as_u64().map(|n| n as f64))
        .or_else(|| v.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
}

fn config_f64(cfg: &Value, path: &[&str]) -> Option<f64> {
    lookup(cfg, path).and_then(json_f64)
}

fn config_string(cfg: &Value, path: &[&str]) -> Option<String> {
    lookup(cfg, path)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}
