//! Type class implementations for [`SmallVec`].
//!
//! Results keep the inline capacity `N` of the receiver.

use smallvec::SmallVec;

use super::applicative::Applicative;
use super::functor::Functor;
use super::monad::Monad;

impl<T, const N: usize> Functor for SmallVec<[T; N]> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> SmallVec<[B; N]>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn try_fmap<B, E, F>(self, function: F) -> Result<SmallVec<[B; N]>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> SmallVec<[B; N]>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

impl<A, const N: usize> Applicative for SmallVec<[A; N]> {
    #[inline]
    fn pure<B>(value: B) -> SmallVec<[B; N]> {
        std::iter::once(value).collect()
    }

    fn apply<B, F, Functions>(self, functions: Functions) -> SmallVec<[B; N]>
    where
        A: Clone,
        Functions: IntoIterator<Item = F>,
        F: FnMut(A) -> B,
    {
        let values = self.as_slice();
        functions
            .into_iter()
            .flat_map(move |mut function| values.iter().map(move |value| function(value.clone())))
            .collect()
    }

    fn try_apply<B, E, F, Functions>(self, functions: Functions) -> Result<SmallVec<[B; N]>, E>
    where
        A: Clone,
        Functions: IntoIterator<Item = F>,
        F: FnMut(A) -> Result<B, E>,
    {
        let values = self.as_slice();
        functions
            .into_iter()
            .flat_map(move |mut function| values.iter().map(move |value| function(value.clone())))
            .collect()
    }

    fn map2<B, C, F>(self, other: SmallVec<[B; N]>, mut function: F) -> SmallVec<[C; N]>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut result = SmallVec::with_capacity(self.len().saturating_mul(other.len()));
        for a in &self {
            result.extend(other.iter().map(|b| function(a.clone(), b.clone())));
        }
        result
    }
}

impl<A, const N: usize> Monad for SmallVec<[A; N]> {
    #[inline]
    fn flat_map<B, R, F>(self, function: F) -> SmallVec<[B; N]>
    where
        F: FnMut(A) -> R,
        R: IntoIterator<Item = B>,
    {
        self.into_iter().flat_map(function).collect()
    }

    fn try_flat_map<B, R, E, F>(self, mut function: F) -> Result<SmallVec<[B; N]>, E>
    where
        F: FnMut(A) -> Result<R, E>,
        R: IntoIterator<Item = B>,
    {
        let mut result = SmallVec::new();
        for element in self {
            result.extend(function(element)?);
        }
        Ok(result)
    }
}
