//! Property-based tests for the Functor, Applicative and Monad type classes.
//!
//! This module verifies that every sequence implementation satisfies the laws
//! and agrees with the free combinators:
//!
//! - **Functor Identity / Composition**
//! - **Applicative Identity / Homomorphism / Interchange**
//! - **Monad Left Identity / Right Identity / Associativity**
//! - **Agreement**: `values.apply(fs) == ap(fs, values)` and `m.flat_map(f) == bind_left(m, f)`

use proptest::prelude::*;
use runes::typeclass::{Applicative, Functor, Monad};
use std::collections::{LinkedList, VecDeque};

fn spread(n: i32) -> Vec<i32> {
    vec![n, n.wrapping_neg()]
}

fn small_divisors(n: i32) -> Vec<i32> {
    (1..=n.rem_euclid(6)).filter(|d| n % d == 0).collect()
}

// =============================================================================
// Vec<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Vec<i32>
    #[test]
    fn prop_vec_functor_identity(values in any::<Vec<i32>>()) {
        let result: Vec<i32> = values.clone().fmap(|x| x);
        prop_assert_eq!(result, values);
    }

    /// Composition Law for Vec<i32>
    #[test]
    fn prop_vec_functor_composition(values in any::<Vec<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left: Vec<i32> = values.clone().fmap(function1).fmap(function2);
        let right: Vec<i32> = values.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Applicative Identity Law: v.apply(pure(identity)) == v
    #[test]
    fn prop_vec_applicative_identity(values in any::<Vec<i32>>()) {
        let result = values.clone().apply(Vec::<()>::pure(|x: i32| x));
        prop_assert_eq!(result, values);
    }

    /// Homomorphism Law: pure(x).apply(pure(f)) == pure(f(x))
    #[test]
    fn prop_vec_applicative_homomorphism(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);
        let left = Vec::<()>::pure(x).apply(Vec::<()>::pure(function));
        let right: Vec<i32> = Vec::<()>::pure(function(x));
        prop_assert_eq!(left, right);
    }

    /// Interchange Law: pure(y).apply(u) == u.fmap(|f| f(y))
    #[test]
    fn prop_vec_applicative_interchange(y in any::<i32>(), offsets in prop::collection::vec(any::<i32>(), 0..6)) {
        let functions: Vec<_> = offsets.iter().map(|&o| move |x: i32| x.wrapping_add(o)).collect();

        let left = Vec::<()>::pure(y).apply(functions.clone());
        let right: Vec<i32> = functions.fmap(|function| function(y));

        prop_assert_eq!(left, right);
    }

    /// apply on the sequence agrees with the free ap function
    #[test]
    fn prop_vec_apply_matches_ap(values in prop::collection::vec(any::<i32>(), 0..10), offsets in prop::collection::vec(any::<i32>(), 0..5)) {
        let functions: Vec<_> = offsets.iter().map(|&o| move |x: i32| x.wrapping_sub(o)).collect();

        let method = values.clone().apply(functions.clone());
        let free = runes::sequence::ap(functions, values);

        prop_assert_eq!(method, free);
    }

    /// Left Identity Law: pure(a).flat_map(f) == f(a)
    #[test]
    fn prop_vec_monad_left_identity(a in any::<i32>()) {
        prop_assert_eq!(Vec::<()>::pure(a).flat_map(spread), spread(a));
    }

    /// Right Identity Law: m.flat_map(pure) == m
    #[test]
    fn prop_vec_monad_right_identity(values in any::<Vec<i32>>()) {
        let result = values.clone().flat_map(Vec::<()>::pure);
        prop_assert_eq!(result, values);
    }

    /// Associativity Law: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[test]
    fn prop_vec_monad_associativity(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let left = values.clone().flat_map(spread).flat_map(small_divisors);
        let right = values.flat_map(|x| spread(x).flat_map(small_divisors));

        prop_assert_eq!(left, right);
    }

    /// flat_map on the sequence agrees with the free bind_left function
    #[test]
    fn prop_vec_flat_map_matches_bind_left(values in prop::collection::vec(any::<i32>(), 0..30)) {
        prop_assert_eq!(values.clone().flat_map(spread), runes::sequence::bind_left(values, spread));
    }
}

// =============================================================================
// VecDeque<A> and LinkedList<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for VecDeque<i32>
    #[test]
    fn prop_vec_deque_functor_identity(values in any::<Vec<i32>>()) {
        let queue = VecDeque::from(values);
        let result: VecDeque<i32> = queue.clone().fmap(|x| x);
        prop_assert_eq!(result, queue);
    }

    /// Associativity Law for VecDeque<i32>
    #[test]
    fn prop_vec_deque_monad_associativity(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let queue = VecDeque::from(values);
        let left = queue.clone().flat_map(spread).flat_map(small_divisors);
        let right = queue.flat_map(|x| VecDeque::from(spread(x)).flat_map(small_divisors));

        prop_assert_eq!(left, right);
    }

    /// LinkedList keeps the same element order as Vec
    #[test]
    fn prop_linked_list_flat_map_matches_vec(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let list: LinkedList<i32> = values.iter().copied().collect();
        let from_list: Vec<i32> = list.flat_map(spread).into_iter().collect();

        prop_assert_eq!(from_list, values.flat_map(spread));
    }

    /// Right Identity Law for LinkedList<i32>
    #[test]
    fn prop_linked_list_monad_right_identity(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let list: LinkedList<i32> = values.into_iter().collect();
        prop_assert_eq!(list.clone().flat_map(LinkedList::<()>::pure), list);
    }
}
