// =============================================================================
// DISJOINT — Le conteneur central : Failure(L) OU Success(R)
// =============================================================================
//
// Disjoint<L, R> porte exactement une issue parmi deux, mutuellement
// exclusives. Les deux côtés sont typés indépendamment : L et R n'ont
// aucune raison de partager un type commun.
//
// Les opérations sont SYMÉTRIQUES :
//   map / chain                 → travaillent sur le côté Success
//   map_failure / chain_failure → leurs duales, côté Failure
//
// COURT-CIRCUIT :
//   Failure(e).map(f) et Failure(e).chain(f) n'appellent JAMAIS f.
//   Le Failure est reconstruit avec le nouveau type, jamais « casté ».
//
// Lois (monade, côté Success) :
//   success(x).chain(f)           == f(x)
//   c.chain(success)              == c
//   c.chain(f).chain(g)           == c.chain(|x| f(x).chain(g))
//
// =============================================================================

use std::any::Any;

use tracing::trace;

use super::maybe::Maybe;
use super::raise::{self, Unknown};

/// Une issue d'échec (`Failure`) ou de succès (`Success`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disjoint<L, R> {
    /// Côté échec
    Failure(L),
    /// Côté succès
    Success(R),
}

pub use Disjoint::{Failure, Success};

impl<L, R> Disjoint<L, R> {
    /// Construit un `Failure(value)`.
    pub fn failure(value: L) -> Self {
        Failure(value)
    }

    /// Construit un `Success(value)`.
    pub fn success(value: R) -> Self {
        Success(value)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    pub fn as_ref(&self) -> Disjoint<&L, &R> {
        match self {
            Failure(l) => Failure(l),
            Success(r) => Success(r),
        }
    }

    /// Échange les deux côtés.
    pub fn swap(self) -> Disjoint<R, L> {
        match self {
            Failure(l) => Success(l),
            Success(r) => Failure(r),
        }
    }

    /// Transforme la valeur de succès ; un échec traverse intact.
    pub fn map<R2, F>(self, f: F) -> Disjoint<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Success(r) => Success(f(r)),
            Failure(l) => Failure(l),
        }
    }

    /// Bind monadique côté succès. `f` n'est jamais invoquée sur un échec.
    pub fn chain<R2, F>(self, f: F) -> Disjoint<L, R2>
    where
        F: FnOnce(R) -> Disjoint<L, R2>,
    {
        match self {
            Success(r) => f(r),
            Failure(l) => Failure(l),
        }
    }

    /// Dual de [`map`](Self::map) : transforme la valeur d'échec.
    pub fn map_failure<L2, F>(self, f: F) -> Disjoint<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Failure(l) => Failure(f(l)),
            Success(r) => Success(r),
        }
    }

    /// Dual de [`chain`](Self::chain) : un succès court-circuite.
    pub fn chain_failure<L2, F>(self, f: F) -> Disjoint<L2, R>
    where
        F: FnOnce(L) -> Disjoint<L2, R>,
    {
        match self {
            Failure(l) => f(l),
            Success(r) => Success(r),
        }
    }

    /// Combinaison applicative.
    ///
    /// Règle de départage : si le receveur est un échec, c'est SON échec
    /// qui est rendu, même si `f` est aussi un échec. Sur un receveur en
    /// succès, c'est l'état de `f` qui décide.
    pub fn apply<R2, F>(self, f: Disjoint<L, F>) -> Disjoint<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Failure(l) => Failure(l),
            Success(r) => f.map(|g| g(r)),
        }
    }

    /// Éliminateur : exactement une branche s'exécute.
    pub fn fold<T, FL, FR>(self, on_failure: FL, on_success: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Failure(l) => on_failure(l),
            Success(r) => on_success(r),
        }
    }

    pub fn failure_or(self, default: L) -> L {
        match self {
            Failure(l) => l,
            Success(_) => default,
        }
    }

    pub fn success_or(self, default: R) -> R {
        match self {
            Success(r) => r,
            Failure(_) => default,
        }
    }

    /// La valeur d'échec, si c'en est un.
    pub fn failure_value(self) -> Maybe<L> {
        match self {
            Failure(l) => Maybe::Present(l),
            Success(_) => Maybe::Absent,
        }
    }

    /// La valeur de succès, si c'en est un.
    pub fn success_value(self) -> Maybe<R> {
        match self {
            Success(r) => Maybe::Present(r),
            Failure(_) => Maybe::Absent,
        }
    }

    /// Extrait l'échec, ou relance la valeur de succès comme panique.
    ///
    /// Réservé aux appelants qui ont déjà discriminé la variante.
    #[track_caller]
    pub fn failure_or_raise(self) -> L
    where
        R: Any + Send,
    {
        match self {
            Failure(l) => l,
            Success(r) => raise::raise(r),
        }
    }

    /// Extrait le succès, ou relance la valeur d'échec comme panique.
    ///
    /// La charge relancée est récupérable telle quelle par [`catch_disjoint`].
    #[track_caller]
    pub fn success_or_raise(self) -> R
    where
        L: Any + Send,
    {
        match self {
            Success(r) => r,
            Failure(l) => raise::raise(l),
        }
    }

    /// Constructeur curryfié : `None` devient `Failure(failure)`.
    pub fn from_nullable(failure: L) -> impl Fn(Option<R>) -> Disjoint<L, R>
    where
        L: Clone,
    {
        move |value| match value {
            Some(r) => Success(r),
            None => Failure(failure.clone()),
        }
    }
}

impl<L, R> From<Result<R, L>> for Disjoint<L, R> {
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(r) => Success(r),
            Err(l) => Failure(l),
        }
    }
}

impl<L, R> From<Disjoint<L, R>> for Result<R, L> {
    fn from(value: Disjoint<L, R>) -> Self {
        match value {
            Success(r) => Ok(r),
            Failure(l) => Err(l),
        }
    }
}

/// Exécute `f` de façon synchrone. L'erreur renvoyée devient la charge
/// du `Failure`, sans transformation.
pub fn try_disjoint<L, R, F>(f: F) -> Disjoint<L, R>
where
    F: FnOnce() -> Result<R, L>,
{
    match f() {
        Ok(r) => Success(r),
        Err(l) => {
            trace!(target: "faillible", "try_disjoint: échec capturé");
            Failure(l)
        }
    }
}

/// Exécute `f` ; une panique devient `Failure(payload)` avec la charge d'origine.
pub fn catch_disjoint<R, F>(f: F) -> Disjoint<Unknown, R>
where
    F: FnOnce() -> R,
{
    match raise::capture(f) {
        Ok(r) => Success(r),
        Err(payload) => {
            trace!(target: "faillible", message = ?raise::describe(&payload), "catch_disjoint: panique capturée");
            Failure(payload)
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

    fn positive(n: i32) -> Disjoint<String, i32> {
        if n > 0 {
            Success(n)
        } else {
            Failure(format!("{} n'est pas positif", n))
        }
    }

    #[test]
    fn test_map_and_short_circuit() {
        let called = Cell::new(0);
        let ok: Disjoint<&str, i32> = Success(2);
        assert_eq!(ok.map(|n| n * 10), Success(20));

        let ko: Disjoint<&str, i32> = Failure("e");
        let mapped = ko.map(|n| {
            called.set(called.get() + 1);
            n * 10
        });
        let chained = ko.chain(|n| {
            called.set(called.get() + 1);
            Success::<&str, i32>(n)
        });
        assert_eq!(mapped, Failure("e"));
        assert_eq!(chained, Failure("e"));
        assert_eq!(called.get(), 0);
    }

    #[test]
    fn test_chain_identities() {
        assert_eq!(Disjoint::<String, i32>::success(3).chain(positive), positive(3));
        assert_eq!(positive(-1).chain(Disjoint::success), positive(-1));
        assert_eq!(positive(4).chain(Disjoint::success), Success(4));
    }

    #[test]
    fn test_failure_side_duals() {
        let ko: Disjoint<i32, &str> = Failure(2);
        assert_eq!(ko.map_failure(|e| e + 1), Failure(3));
        assert_eq!(ko.chain_failure(|_| Success::<u8, &str>("recovered")), Success("recovered"));

        let called = Cell::new(false);
        let ok: Disjoint<i32, &str> = Success("ok");
        let out = ok.chain_failure(|e| {
            called.set(true);
            Failure::<i32, &str>(e)
        });
        assert_eq!(out, Success("ok"));
        assert!(!called.get());
    }

    #[test]
    fn test_apply_receiver_failure_wins() {
        fn inc(n: i32) -> i32 {
            n + 1
        }
        let f_ok: Disjoint<&str, fn(i32) -> i32> = Success(inc as fn(i32) -> i32);
        let f_ko: Disjoint<&str, fn(i32) -> i32> = Failure("f");

        assert_eq!(Success::<&str, i32>(1).apply(f_ok), Success(2));
        assert_eq!(Success::<&str, i32>(1).apply(f_ko), Failure("f"));
        assert_eq!(Failure::<&str, i32>("receiver").apply(f_ok), Failure("receiver"));
        assert_eq!(Failure::<&str, i32>("receiver").apply(f_ko), Failure("receiver"));
    }

    #[test]
    fn test_fold_and_extractors() {
        assert_eq!(positive(2).fold(|e| e.len() as i32, |n| n), 2);
        assert_eq!(positive(0).failure_or("x".into()), "0 n'est pas positif");
        assert_eq!(positive(5).failure_or("x".into()), "x");
        assert_eq!(positive(5).success_or(0), 5);
        assert_eq!(positive(-5).success_or(0), 0);
        assert_eq!(positive(5).success_value(), Maybe::Present(5));
        assert_eq!(positive(5).failure_value(), Maybe::Absent);
    }

    #[test]
    fn test_success_or_raise() {
        assert_eq!(positive(9).success_or_raise(), 9);
        let raised = catch_disjoint(|| positive(-2).success_or_raise());
        let payload = raised.failure_or_raise();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("-2 n'est pas positif"));
    }

    #[test]
    #[should_panic(expected = "-3 n'est pas positif")]
    fn test_success_or_raise_panics_with_failure() {
        positive(-3).success_or_raise();
    }

    #[test]
    fn test_failure_or_raise() {
        let ko: Disjoint<&str, u16> = Failure("why");
        assert_eq!(ko.failure_or_raise(), "why");
        let raised = catch_disjoint(|| Disjoint::<&str, u16>::Success(7).failure_or_raise());
        assert_eq!(raised.failure_or_raise().downcast_ref::<u16>(), Some(&7));
    }

    #[test]
    fn test_try_disjoint_keeps_error_verbatim() {
        assert_eq!(try_disjoint(|| "12".parse::<u8>()), Success(12));
        let err = "300".parse::<u8>().unwrap_err();
        assert_eq!(try_disjoint(|| "300".parse::<u8>()), Failure(err));
    }

    #[test]
    fn test_catch_disjoint() {
        assert!(catch_disjoint(|| 1).is_success());
        let ko = catch_disjoint(|| -> i32 { raise::raise(vec!['a']) });
        assert_eq!(ko.failure_or_raise().downcast_ref::<Vec<char>>(), Some(&vec!['a']));
    }

    #[test]
    fn test_from_nullable_and_result_bridges() {
        let lookup = Disjoint::<&str, i32>::from_nullable("introuvable");
        assert_eq!(lookup(Some(0)), Success(0));
        assert_eq!(lookup(None), Failure("introuvable"));

        let d: Disjoint<String, u8> = Err::<u8, String>("e".into()).into();
        assert_eq!(d, Failure("e".to_string()));
        let r: Result<u8, String> = Disjoint::Success(1).into();
        assert_eq!(r, Ok(1));
        assert_eq!(positive(1).swap(), Failure(1));
    }
}
