use rand::Rng;

/// Uniform pick over a fixed, non-empty option list.
pub trait RandomChoice {
    /// Index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;

    fn choose<'a, T>(&self, options: &'a [T]) -> &'a T {
        &options[self.pick_index(options.len())]
    }
}

/// Backed by the thread-local generator; no seeding, so repeated calls differ.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomChoice for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

#[cfg(test)]
pub(crate) struct FixedChoice(pub usize);

#[cfg(test)]
impl RandomChoice for FixedChoice {
    fn pick_index(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
