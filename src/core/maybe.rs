// =============================================================================
// MAYBE — Présence ou absence d'une valeur
// =============================================================================
//
// Maybe<T> modélise « il y a peut-être une valeur » sans jamais utiliser null.
// C'est l'échec le plus pauvre : on sait QUE ça a échoué, pas POURQUOI.
//
// Lois (monade) :
//   present(x).chain(f)  == f(x)           (identité à gauche)
//   m.chain(present)     == m              (identité à droite)
//   m.map(id)            == m              (foncteur)
//
// Absent se propage sans jamais appeler la continuation.
//
// =============================================================================

use tracing::trace;

use super::disjoint::Disjoint;
use super::raise;

/// Une valeur présente (`Present`) ou absente (`Absent`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// Aucune valeur
    Absent,
    /// Une valeur, toujours définie
    Present(T),
}

pub use Maybe::{Absent, Present};

impl<T> Maybe<T> {
    /// Construit un `Present(value)`.
    pub fn present(value: T) -> Self {
        Present(value)
    }

    /// Construit un `Absent`.
    pub fn absent() -> Self {
        Absent
    }

    /// Traite `None` comme l'absence ; tout le reste, y compris `0` ou `""`,
    /// est présent.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Present(v),
            None => Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Absent)
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Present(v) => Present(v),
            Absent => Absent,
        }
    }

    /// Applique `f` à la valeur présente.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(v) => Present(f(v)),
            Absent => Absent,
        }
    }

    /// Bind monadique : `f` rend elle-même un Maybe, aplati d'un niveau.
    pub fn chain<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Present(v) => f(v),
            Absent => Absent,
        }
    }

    /// Combinaison applicative.
    ///
    /// Un receveur absent l'emporte toujours, sans regarder `f`.
    /// Sinon c'est l'état du conteneur de fonction qui décide.
    pub fn apply<U, F>(self, f: Maybe<F>) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Absent => Absent,
            Present(v) => f.map(|g| g(v)),
        }
    }

    /// Extraction totale : la valeur, ou `default`.
    pub fn value_or(self, default: T) -> T {
        match self {
            Present(v) => v,
            Absent => default,
        }
    }

    /// Éliminateur : exactement une des deux branches s'exécute.
    pub fn fold<U, A, P>(self, on_absent: A, on_present: P) -> U
    where
        A: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Present(v) => on_present(v),
            Absent => on_absent(),
        }
    }

    /// Absent devient `Failure(failure)`, Present devient `Success(value)`.
    pub fn to_disjoint<L>(self, failure: L) -> Disjoint<L, T> {
        match self {
            Present(v) => Disjoint::Success(v),
            Absent => Disjoint::Failure(failure),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Present(v) => Some(v),
            Absent => None,
        }
    }
}

/// Exécute `f` ; une erreur renvoyée devient `Absent`, et son détail est perdu.
pub fn try_maybe<T, E, F>(f: F) -> Maybe<T>
where
    F: FnOnce() -> Result<T, E>,
{
    match f() {
        Ok(v) => Present(v),
        Err(_) => {
            trace!(target: "faillible", "try_maybe: erreur écartée");
            Absent
        }
    }
}

/// Comme [`try_maybe`], mais pour une fonction qui panique au lieu de renvoyer une erreur.
pub fn catch_maybe<T, F>(f: F) -> Maybe<T>
where
    F: FnOnce() -> T,
{
    match raise::capture(f) {
        Ok(v) => Present(v),
        Err(payload) => {
            trace!(target: "faillible", message = ?raise::describe(&payload), "catch_maybe: panique écartée");
            Absent
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn half(n: i32) -> Maybe<i32> {
        if n % 2 == 0 {
            Present(n / 2)
        } else {
            Absent
        }
    }

    #[test]
    fn test_map_present_and_absent() {
        assert_eq!(Present(2).map(|n| n + 1), Present(3));
        assert_eq!(Maybe::<i32>::absent().map(|n| n + 1), Absent);
    }

    #[test]
    fn test_absent_never_calls_continuation() {
        let called = Cell::new(false);
        let out: Maybe<i32> = Absent.chain(|n: i32| {
            called.set(true);
            Present(n)
        });
        assert_eq!(out, Absent);
        assert!(!called.get());
    }

    #[test]
    fn test_chain_identities() {
        assert_eq!(Present(8).chain(half), half(8));
        assert_eq!(Present(7).chain(Maybe::present), Present(7));
        assert_eq!(Maybe::<i32>::Absent.chain(Maybe::present), Absent);
    }

    #[test]
    fn test_from_nullable_keeps_falsy_values() {
        assert_eq!(Maybe::from_nullable(Some(0)), Present(0));
        assert_eq!(Maybe::from_nullable(Some("")), Present(""));
        assert_eq!(Maybe::<i32>::from_nullable(None), Absent);
    }

    #[test]
    fn test_value_or_and_fold() {
        assert_eq!(Present(1).value_or(9), 1);
        assert_eq!(Absent.value_or(9), 9);
        assert_eq!(Present(4).fold(|| "none".to_string(), |n| n.to_string()), "4");
        assert_eq!(Maybe::<i32>::Absent.fold(|| "none".to_string(), |n| n.to_string()), "none");
    }

    #[test]
    fn test_apply() {
        let describe = |s: &'static str| move |n: i32| format!("{} = {}", s, n);
        assert_eq!(Present(42).apply(Present("foo").map(describe)), Present("foo = 42".to_string()));
        assert_eq!(Present(42).apply(Maybe::<fn(i32) -> i32>::Absent), Absent);
        assert_eq!(Maybe::<i32>::Absent.apply(Present(|n: i32| n + 1)), Absent);
    }

    #[test]
    fn test_to_disjoint() {
        assert_eq!(Present(5).to_disjoint("missing"), Disjoint::Success(5));
        assert_eq!(Maybe::<i32>::Absent.to_disjoint("missing"), Disjoint::Failure("missing"));
    }

    #[test]
    fn test_try_and_catch_discard_detail() {
        assert_eq!(try_maybe(|| "12".parse::<i32>()), Present(12));
        assert_eq!(try_maybe(|| "douze".parse::<i32>()), Absent);
        assert_eq!(catch_maybe(|| 3), Present(3));
        assert_eq!(catch_maybe(|| -> i32 { panic!("nope") }), Absent);
    }

    #[test]
    fn test_option_round_trip() {
        let m: Maybe<u8> = Some(3).into();
        let o: Option<u8> = m.into();
        assert_eq!(o, Some(3));
    }
}
