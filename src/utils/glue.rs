use std::iter::{
    Fuse,
    FusedIterator,
};

/// Lazily flattens the output of an expansion function applied to every
/// element of an input iterator.
///
/// Unlike [`Iterator::flat_map`], a `FlatMapGluer` can be given a terminal
/// sentinel value. Once the input is drained, the expansion function is
/// applied to the sentinel exactly once, which lets stateful expansion
/// functions flush whatever they still hold.
///
/// At most one expanded sub-sequence is buffered at a time; nothing is
/// computed ahead of what the consumer pulls.
pub struct FlatMapGluer<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator, {
    func:     F,
    input:    Fuse<I>,
    sentinel: Option<I::Item>,
    output:   Option<U::IntoIter>,
}

impl<I, F, U> FlatMapGluer<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    /// Creates a gluer without a sentinel.
    pub fn new(
        input: I,
        func: F,
    ) -> Self {
        Self {
            func,
            input: input.fuse(),
            sentinel: None,
            output: None,
        }
    }

    /// Creates a gluer that expands `sentinel` once the input is exhausted.
    pub fn with_sentinel(
        input: I,
        func: F,
        sentinel: I::Item,
    ) -> Self {
        Self {
            func,
            input: input.fuse(),
            sentinel: Some(sentinel),
            output: None,
        }
    }

    /// Returns `true` while the sentinel has not been expanded yet.
    pub fn sentinel_pending(&self) -> bool {
        self.sentinel.is_some()
    }
}

impl<I, F, U> Iterator for FlatMapGluer<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.output.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            let source = match self.input.next() {
                Some(element) => element,
                None => self.sentinel.take()?,
            };
            self.output = Some((self.func)(source).into_iter());
        }
    }
}

impl<I, F, U> FusedIterator for FlatMapGluer<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
}

/// Extension trait exposing [`FlatMapGluer`] as an iterator method.
pub trait GlueExt: Iterator + Sized {
    fn glue_flat_map<F, U>(
        self,
        func: F,
    ) -> FlatMapGluer<Self, F, U>
    where
        F: FnMut(Self::Item) -> U,
        U: IntoIterator, {
        FlatMapGluer::new(self, func)
    }

    fn glue_flat_map_with_sentinel<F, U>(
        self,
        func: F,
        sentinel: Self::Item,
    ) -> FlatMapGluer<Self, F, U>
    where
        F: FnMut(Self::Item) -> U,
        U: IntoIterator, {
        FlatMapGluer::with_sentinel(self, func, sentinel)
    }
}

impl<I: Iterator> GlueExt for I {}
