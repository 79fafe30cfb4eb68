//! Composable getter/setter pairs over immutable records.
//!
//! A lens focuses on one part of a larger value. Setting through a lens
//! consumes the outer value and returns an updated copy, so lenses compose
//! naturally with persistent data structures where copies share structure.

/// A functional reference from a record `S` to one of its parts.
///
/// Implementations must satisfy the usual laws:
///
/// - get-set: `lens.set(s.clone(), lens.get(&s)) == s`
/// - set-get: `lens.get(&lens.set(s, v.clone())) == v`
/// - set-set: `lens.set(lens.set(s, a), b) == lens.set(s, b)`
pub trait Lens<S> {
    /// The part of `S` this lens focuses on.
    type Target;

    /// Reads the focused part.
    fn get(&self, source: &S) -> Self::Target;

    /// Replaces the focused part, returning the updated record.
    fn set(&self, source: S, value: Self::Target) -> S;

    /// Applies `f` to the focused part.
    fn modify<F>(&self, source: S, f: F) -> S
    where
        F: FnOnce(Self::Target) -> Self::Target,
    {
        let value = f(self.get(&source));
        self.set(source, value)
    }

    /// Focuses further into the target with `inner`.
    fn then<L>(self, inner: L) -> Compose<Self, L>
    where
        Self: Sized,
        L: Lens<Self::Target>,
    {
        Compose { outer: self, inner }
    }
}

/// Two lenses chained end to end. Built by [`Lens::then`].
#[derive(Debug, Clone, Copy)]
pub struct Compose<O, I> {
    outer: O,
    inner: I,
}

impl<S, O, I> Lens<S> for Compose<O, I>
where
    O: Lens<S>,
    I: Lens<O::Target>,
{
    type Target = I::Target;

    fn get(&self, source: &S) -> Self::Target {
        self.inner.get(&self.outer.get(source))
    }

    fn set(&self, source: S, value: Self::Target) -> S {
        let part = self.outer.get(&source);
        let part = self.inner.set(part, value);
        self.outer.set(source, part)
    }
}

/// The lens that focuses on the whole record.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<S: Clone> Lens<S> for Identity {
    type Target = S;

    fn get(&self, source: &S) -> S {
        source.clone()
    }

    fn set(&self, _source: S, value: S) -> S {
        value
    }
}
