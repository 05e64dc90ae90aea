//! Host-agnostic interaction events.
//!
//! A host adapter (DOM, native canvas, test harness) translates its native events into these
//! types and dispatches them from the target element up through its ancestors.

use flowedge_geom::Point;

/// An event that bubbles through the scene and can be stopped on the way.
pub trait SceneEvent {
    fn stop_propagation(&mut self);
    fn propagation_stopped(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerEvent {
    /// Position in the diagram's local coordinate space.
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    stopped: bool,
}

impl PointerEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl SceneEvent for PointerEvent {
    fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    fn propagation_stopped(&self) -> bool {
        self.stopped
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyboardEvent {
    /// Key value in the DOM `KeyboardEvent.key` vocabulary (`"Enter"`, `"Delete"`, `"a"`).
    pub key: String,
    pub modifiers: Modifiers,
    pub repeat: bool,
    stopped: bool,
}

impl KeyboardEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }
}

impl SceneEvent for KeyboardEvent {
    fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    fn propagation_stopped(&self) -> bool {
        self.stopped
    }
}

/// Runs `chain` from the target outwards, stopping after the first handler that halts
/// propagation. Returns how many handlers ran.
pub fn dispatch_bubbling<E: SceneEvent>(event: &mut E, chain: &mut [&mut dyn FnMut(&mut E)]) -> usize {
    let mut ran = 0;
    for handler in chain.iter_mut() {
        handler(event);
        ran += 1;
        if event.propagation_stopped() {
            tracing::trace!(ran, "event propagation stopped");
            break;
        }
    }
    ran
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubbling_reaches_every_ancestor_unless_stopped() {
        let mut hits = Vec::new();
        {
            let mut target = |_: &mut PointerEvent| hits.push("target");
            let mut ancestor = |_: &mut PointerEvent| {};
            let mut ev = PointerEvent::new(Point::new(1.0, 2.0));
            let ran = dispatch_bubbling(&mut ev, &mut [&mut target, &mut ancestor]);
            assert_eq!(ran, 2);
            assert!(!ev.propagation_stopped());
        }
        assert_eq!(hits, vec!["target"]);
    }

    #[test]
    fn stopping_skips_ancestors() {
        let mut ancestor_hits = 0;
        let mut target = |e: &mut KeyboardEvent| e.stop_propagation();
        let mut ancestor = |_: &mut KeyboardEvent| ancestor_hits += 1;
        let mut ev = KeyboardEvent::new("Enter");
        let ran = dispatch_bubbling(&mut ev, &mut [&mut target, &mut ancestor]);
        assert_eq!(ran, 1);
        drop(ancestor);
        assert_eq!(ancestor_hits, 0);
    }
}
