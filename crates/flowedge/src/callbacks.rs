//! Callback slots an edge invokes on interaction.
//!
//! Every slot starts out as a no-op, so an edge is always safe to dispatch to. Panics raised by a
//! callback are not caught here; they belong to the application that installed it.

use crate::event::{KeyboardEvent, PointerEvent};

pub type PointerCallback<D> = Box<dyn FnMut(&PointerEvent, &D)>;
pub type KeyboardCallback<D> = Box<dyn FnMut(&KeyboardEvent, &D)>;
pub type RemoveCallback<D> = Box<dyn FnMut(&D)>;

pub struct EdgeCallbacks<D> {
    pub on_click: PointerCallback<D>,
    pub on_key_down: KeyboardCallback<D>,
    pub on_enter: PointerCallback<D>,
    pub on_leave: PointerCallback<D>,
    /// Not bound to any UI trigger; the owner calls [`crate::Edge::remove`] itself.
    pub on_remove: RemoveCallback<D>,
}

impl<D: 'static> Default for EdgeCallbacks<D> {
    fn default() -> Self {
        Self {
            on_click: Box::new(|_: &PointerEvent, _: &D| {}),
            on_key_down: Box::new(|_: &KeyboardEvent, _: &D| {}),
            on_enter: Box::new(|_: &PointerEvent, _: &D| {}),
            on_leave: Box::new(|_: &PointerEvent, _: &D| {}),
            on_remove: Box::new(|_: &D| {}),
        }
    }
}

impl<D> EdgeCallbacks<D> {
    pub fn on_click(mut self, f: impl FnMut(&PointerEvent, &D) + 'static) -> Self {
        self.on_click = Box::new(f);
        self
    }

    pub fn on_key_down(mut self, f: impl FnMut(&KeyboardEvent, &D) + 'static) -> Self {
        self.on_key_down = Box::new(f);
        self
    }

    pub fn on_enter(mut self, f: impl FnMut(&PointerEvent, &D) + 'static) -> Self {
        self.on_enter = Box::new(f);
        self
    }

    pub fn on_leave(mut self, f: impl FnMut(&PointerEvent, &D) + 'static) -> Self {
        self.on_leave = Box::new(f);
        self
    }

    pub fn on_remove(mut self, f: impl FnMut(&D) + 'static) -> Self {
        self.on_remove = Box::new(f);
        self
    }
}

impl<D> std::fmt::Debug for EdgeCallbacks<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeCallbacks").finish_non_exhaustive()
    }
}
