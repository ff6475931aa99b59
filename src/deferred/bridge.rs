// =============================================================================
// BRIDGE — Entrer dans le monde différé
// =============================================================================
//
// Trois portes d'entrée, toutes paresseuses :
//   - Disjoint::to_deferred : une valeur déjà résolue, relue à chaque run()
//   - try_deferred          : une opération async qui renvoie Result ; l'Err
//                             devient le Failure TEL QUEL
//   - catch_deferred        : une opération async qui peut paniquer ; la
//                             charge de la panique devient le Failure
//
// =============================================================================

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::future::{self, FutureExt};
use tracing::trace;

use super::Deferred;
use crate::core::disjoint::{Disjoint, Failure, Success};
use crate::core::fallible::{Cause, Fallible};
use crate::core::raise::{self, Unknown};

/// Un Deferred dont l'échec est une erreur quelconque.
pub type AsyncFallible<T> = Deferred<Cause, T>;

impl<L, R> Disjoint<L, R>
where
    L: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
{
    /// Enveloppe une valeur déjà résolue ; chaque run() la rend immédiatement.
    pub fn to_deferred(self) -> Deferred<L, R> {
        Deferred::new(move || future::ready(self.clone()))
    }
}

/// Enveloppe l'opération async `f` sans la lancer.
///
/// À chaque run(), `f` est appelée ; un `Err(e)` devient `Failure(e)` sans
/// transformation, un `Ok(v)` devient `Success(v)`.
pub fn try_deferred<L, R, F, Fut>(f: F) -> Deferred<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, L>> + Send + 'static,
{
    Deferred::new(move || {
        let pending = f();
        async move {
            match pending.await {
                Ok(r) => Success(r),
                Err(l) => {
                    trace!(target: "faillible", "try_deferred: échec capturé");
                    Failure(l)
                }
            }
        }
    })
}

/// Enveloppe l'opération async `f` ; une panique, pendant l'appel de `f`
/// ou pendant l'attente de sa future, devient `Failure(payload)`.
pub fn catch_deferred<R, F, Fut>(f: F) -> Deferred<Unknown, R>
where
    R: Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
{
    Deferred::new(move || {
        let pending = raise::capture(|| f());
        async move {
            let caught = match pending {
                Ok(pending) => AssertUnwindSafe(pending).catch_unwind().await,
                Err(payload) => Err(payload),
            };
            match caught {
                Ok(r) => Success(r),
                Err(payload) => {
                    trace!(target: "faillible", message = ?raise::describe(&payload), "catch_deferred: panique capturée");
                    Failure(payload)
                }
            }
        }
    })
}

/// Version asynchrone de [`try_fallible`](crate::try_fallible).
pub fn try_async_fallible<T, E, F, Fut>(f: F) -> AsyncFallible<T>
where
    T: Send + 'static,
    E: Into<anyhow::Error> + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    Deferred::new(move || {
        let pending = f();
        async move {
            let outcome: Fallible<T> = match pending.await {
                Ok(v) => Success(v),
                Err(e) => Failure(Cause::new(e.into())),
            };
            outcome
        }
    })
}
