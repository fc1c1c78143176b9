//! Named child slots populated before render.
//!
//! A component declares its slots as fields of a collection type (for example
//! [`CardSlots`](crate::CardSlots)). Callers fill the collection through `with_<slot>` methods
//! inside [`SlotCollection::populate`]; each call returns the slot instance's options for
//! chaining. Rendering takes the captured content out exactly once.

use std::fmt;

use leptos::{IntoView, View};

/// Deferred content rendered exactly once.
pub struct Content<T = View>(Box<dyn FnOnce() -> T>);

impl<T> Content<T> {
    /// Wraps a producer.
    pub fn new(produce: impl FnOnce() -> T + 'static) -> Self {
        Self(Box::new(produce))
    }

    /// Runs the producer.
    pub fn render(self) -> T {
        (self.0)()
    }
}

impl Content<View> {
    /// Wraps a producer of anything renderable.
    pub fn view<V: IntoView>(produce: impl FnOnce() -> V + 'static) -> Self {
        Self::new(move || produce().into_view())
    }
}

impl<T> fmt::Debug for Content<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Content(..)")
    }
}

/// Deferred population block for a nested slot collection.
pub struct Populate<S>(Box<dyn FnOnce(&mut S)>);

impl<S: Default> Populate<S> {
    /// Wraps a setup closure.
    pub fn new(setup: impl FnOnce(&mut S) + 'static) -> Self {
        Self(Box::new(setup))
    }

    /// Runs the setup against a fresh collection.
    pub fn run(self) -> S {
        let mut slots = S::default();
        (self.0)(&mut slots);
        slots
    }
}

impl<S> fmt::Debug for Populate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Populate(..)")
    }
}

#[derive(Debug)]
/// Slot holding at most one instance. A later population replaces the earlier one.
pub struct SingleSlot<O, C> {
    entry: Option<(O, C)>,
}

impl<O, C> Default for SingleSlot<O, C> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<O, C> SingleSlot<O, C> {
    /// Populates the slot with explicit options.
    pub fn set_with(&mut self, options: O, content: C) -> &mut O {
        &mut self.entry.insert((options, content)).0
    }

    /// Returns `true` when the slot was populated.
    pub fn is_present(&self) -> bool {
        self.entry.is_some()
    }

    /// Options of the populated instance.
    pub fn options(&self) -> Option<&O> {
        self.entry.as_ref().map(|(options, _)| options)
    }

    /// Moves the populated instance out.
    pub fn take(&mut self) -> Option<(O, C)> {
        self.entry.take()
    }
}

impl<O: Default, C> SingleSlot<O, C> {
    /// Populates the slot with default options.
    pub fn set(&mut self, content: C) -> &mut O {
        self.set_with(O::default(), content)
    }
}

#[derive(Debug)]
/// Slot holding any number of instances in population order.
pub struct ManySlot<O, C> {
    entries: Vec<(O, C)>,
}

impl<O, C> Default for ManySlot<O, C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<O, C> ManySlot<O, C> {
    /// Appends an instance.
    pub fn push(&mut self, options: O, content: C) -> &mut O {
        let index = self.entries.len();
        self.entries.push((options, content));
        &mut self.entries[index].0
    }

    /// Number of populated instances.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing was populated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Options of every instance in order.
    pub fn options(&self) -> impl Iterator<Item = &O> {
        self.entries.iter().map(|(options, _)| options)
    }

    /// Moves every instance out in order.
    pub fn take(&mut self) -> Vec<(O, C)> {
        std::mem::take(&mut self.entries)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Per-instance options shared by slots that only accept extra classes.
pub struct SlotOptions {
    classes: Option<String>,
}

impl SlotOptions {
    /// Appends caller classes to the slot wrapper.
    pub fn classes(&mut self, classes: impl Into<String>) -> &mut Self {
        self.classes = Some(classes.into());
        self
    }

    /// Caller classes, if any.
    pub fn class_override(&self) -> Option<&str> {
        self.classes.as_deref()
    }
}

/// Collections of named slots filled by a setup closure.
pub trait SlotCollection: Default {
    /// Builds a collection by running `setup` against an empty one.
    fn populate(setup: impl FnOnce(&mut Self)) -> Self {
        let mut slots = Self::default();
        setup(&mut slots);
        slots
    }
}
