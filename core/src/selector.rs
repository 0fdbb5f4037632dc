//! Memoized selectors
//!
//! Views often display values derived from state (a total, a label, a
//! doubled count). Those values are never stored in state: they are
//! recomputed from it, and [`Memo`] makes sure the recomputation only happens
//! when the input actually changed.

/// A memoized pure derivation `I → O`.
///
/// The derivation runs on the first [`Memo::get`] and again only when the
/// input differs from the last one seen.
///
/// # Example
///
/// ```
/// use slicekit_core::selector::Memo;
///
/// let mut label = Memo::new(|count: &usize| format!("{count} items"));
///
/// assert_eq!(label.get(&3), "3 items");
/// assert_eq!(label.get(&3), "3 items");
/// assert_eq!(label.recomputations(), 1);
///
/// assert_eq!(label.get(&4), "4 items");
/// assert_eq!(label.recomputations(), 2);
/// ```
pub struct Memo<I, O> {
    derive: fn(&I) -> O,
    cached: Option<(I, O)>,
    recomputations: usize,
}

impl<I, O> Memo<I, O> {
    /// Create a memo around a pure derivation function
    #[must_use]
    pub const fn new(derive: fn(&I) -> O) -> Self {
        Self {
            derive,
            cached: None,
            recomputations: 0,
        }
    }

    /// Number of times the derivation function has actually run
    #[must_use]
    pub const fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// The last derived value, if any
    #[must_use]
    pub fn peek(&self) -> Option<&O> {
        self.cached.as_ref().map(|(_, output)| output)
    }

    /// Forget the cached value so the next `get` recomputes
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

impl<I, O> Memo<I, O>
where
    I: PartialEq + Clone,
{
    /// Derive the value for `input`, reusing the cached one when the input is unchanged
    pub fn get(&mut self, input: &I) -> &O {
        let stale = self
            .cached
            .as_ref()
            .is_none_or(|(cached_input, _)| cached_input != input);

        if stale {
            self.cached = None;
        }

        let derive = self.derive;
        let recomputations = &mut self.recomputations;
        let (_, output) = self.cached.get_or_insert_with(|| {
            *recomputations += 1;
            (input.clone(), derive(input))
        });
        output
    }
}

impl<I, O> std::fmt::Debug for Memo<I, O>
where
    I: std::fmt::Debug,
    O: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo")
            .field("cached", &self.cached)
            .field("recomputations", &self.recomputations)
            .finish_non_exhaustive()
    }
}
