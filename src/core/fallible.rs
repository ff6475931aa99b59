// =============================================================================
// FALLIBLE — La saveur « Result » de Disjoint
// =============================================================================
//
// Même conteneur que Disjoint, mais le côté échec est figé sur une erreur
// opaque (anyhow::Error) : on ne sait pas à l'avance ce qui peut échouer,
// seulement que ça peut échouer.
//
// Aucun type dupliqué : Fallible<T> EST un Disjoint, avec toutes ses
// opérations. L'erreur d'origine reste récupérable par downcast.
//
// anyhow::Error n'est pas Clone ; l'échec est donc partagé derrière un Arc
// (Cause), ce qui laisse passer Fallible vers le monde différé
// (to_deferred, Deferred::rejected relisent la même erreur à chaque run).
//
// =============================================================================

use std::sync::Arc;

use tracing::trace;

use super::disjoint::{Disjoint, Failure, Success};

/// Erreur quelconque, partageable. `Deref` vers `anyhow::Error` :
/// `downcast_ref`, `chain`, `to_string` s'utilisent directement.
pub type Cause = Arc<anyhow::Error>;

/// Un Disjoint dont l'échec est une erreur quelconque.
pub type Fallible<T> = Disjoint<Cause, T>;

/// Exécute `f` ; l'erreur renvoyée est convertie en [`Cause`]
/// sans perdre son identité (`downcast_ref::<E>()` la retrouve).
pub fn try_fallible<T, E, F>(f: F) -> Fallible<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<anyhow::Error>,
{
    match f() {
        Ok(v) => Success(v),
        Err(e) => {
            let error = Cause::new(e.into());
            trace!(target: "faillible", error = %error, "try_fallible: échec capturé");
            Failure(error)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::num::ParseIntError;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("mauvaise question : {0}")]
    struct WrongQuestion(String);

    fn answer(question: &str) -> Fallible<u32> {
        try_fallible(|| {
            if question == "la grande question" {
                Ok(42)
            } else {
                Err(WrongQuestion(question.to_string()))
            }
        })
    }

    #[test]
    fn test_success() {
        assert_eq!(answer("la grande question").success_or(0), 42);
    }

    #[test]
    fn test_failure_keeps_original_error() {
        let error = answer("quoi ?").failure_or_raise();
        assert_eq!(
            error.downcast_ref::<WrongQuestion>(),
            Some(&WrongQuestion("quoi ?".into()))
        );
        assert_eq!(error.to_string(), "mauvaise question : quoi ?");
    }

    #[test]
    fn test_composes_like_disjoint() {
        let doubled = try_fallible(|| "21".parse::<u32>()).map(|n| n * 2);
        assert_eq!(doubled.success_or(0), 42);

        let parsed = try_fallible(|| "x".parse::<u32>())
            .map_failure(|e| e.downcast_ref::<ParseIntError>().is_some());
        assert_eq!(parsed, Disjoint::Failure(true));
    }

    #[test]
    fn test_failure_is_shared_not_copied() {
        let failed = answer("pourquoi ?");
        let copy = failed.clone();
        match (failed, copy) {
            (Failure(a), Failure(b)) => assert!(Arc::ptr_eq(&a, &b)),
            other => panic!("deux échecs attendus, obtenu {:?}", other),
        }
    }
}
