//! Label instances attached to an edge.
//!
//! The caller supplies a template plus one descriptor per label. Each instance is the descriptor
//! merged over the template: any field the descriptor sets wins, the rest fall back to the
//! template.

use crate::edge::InlineStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<InlineStyle>,
}

impl LabelProps {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// `self` over `template`: fields set on `self` take precedence.
    pub fn merged_over(&self, template: &LabelProps) -> LabelProps {
        fn pick<T: Clone>(over: &Option<T>, base: &Option<T>) -> Option<T> {
            over.as_ref().or(base.as_ref()).cloned()
        }

        LabelProps {
            text: pick(&self.text, &template.text),
            x: self.x.or(template.x),
            y: self.y.or(template.y),
            width: self.width.or(template.width),
            height: self.height.or(template.height),
            class_name: pick(&self.class_name, &template.class_name),
            style: pick(&self.style, &template.style),
        }
    }
}

/// One instance per descriptor, in descriptor order.
pub fn instantiate_labels(template: &LabelProps, descriptors: &[LabelProps]) -> Vec<LabelProps> {
    let mut out = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        out.push(descriptor.merged_over(template));
    }
    out
}
