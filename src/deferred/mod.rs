// =============================================================================
// DEFERRED — Un Disjoint produit plus tard, par une opération asynchrone
// =============================================================================
//
// Deferred<L, R> enveloppe une opération sans argument qui, QUAND ON LA LANCE,
// produit de façon asynchrone un Disjoint<L, R>.
//
// CONTRAT DE PARESSE :
//   - construire un Deferred ne lance RIEN ;
//   - map / chain / ... ne lancent rien non plus : ils rendent un nouveau
//     Deferred dont run() referme le receveur ET le combinateur, jamais un
//     résultat déjà évalué ;
//   - seul run() démarre le travail. Chaque appel est indépendant :
//     pas de mémoïsation, deux run() = deux exécutions.
//
// SÉQUENTIALITÉ :
//   chain() n'appelle sa continuation qu'une fois le prédécesseur résolu.
//   Composer N Deferred par chain() = N suspensions successives.
//   Pas de race, pas de all, pas d'annulation, pas de timeout.
//
// Le module core ne connaît pas Deferred : c'est ici que Disjoint reçoit
// son pont to_deferred().
//
// =============================================================================

pub mod bridge;
pub mod collapse;

pub use bridge::{catch_deferred, try_async_fallible, try_deferred, AsyncFallible};
pub use collapse::{collapse_deferred_list, collapse_deferred_map};

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};
use tracing::trace;

use crate::core::disjoint::{Disjoint, Failure, Success};

/// L'opération partagée : ré-invocable, donc `Fn` et non `FnOnce`.
type Operation<L, R> = dyn Fn() -> BoxFuture<'static, Disjoint<L, R>> + Send + Sync;

/// Une opération asynchrone, pas encore lancée, qui produira un `Disjoint<L, R>`.
///
/// Cloner un Deferred partage l'opération, jamais un résultat.
pub struct Deferred<L, R> {
    operation: Arc<Operation<L, R>>,
}

impl<L, R> Clone for Deferred<L, R> {
    fn clone(&self) -> Self {
        Deferred {
            operation: Arc::clone(&self.operation),
        }
    }
}

impl<L, R> fmt::Debug for Deferred<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

impl<L, R> Deferred<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    /// Enveloppe `operation` sans l'appeler.
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Disjoint<L, R>> + Send + 'static,
    {
        Deferred {
            operation: Arc::new(move || operation().boxed()),
        }
    }

    /// Un Deferred qui se résout immédiatement en `Success(value)`, sans I/O.
    pub fn resolved(value: R) -> Self
    where
        R: Clone + Sync,
    {
        Deferred::new(move || future::ready(Success(value.clone())))
    }

    /// Un Deferred qui se résout immédiatement en `Failure(failure)`, sans I/O.
    pub fn rejected(failure: L) -> Self
    where
        L: Clone + Sync,
    {
        Deferred::new(move || future::ready(Failure(failure.clone())))
    }

    /// Constructeur curryfié : `None` devient `Failure(failure)`.
    pub fn from_nullable(failure: L) -> impl Fn(Option<R>) -> Deferred<L, R>
    where
        L: Clone + Sync,
        R: Clone + Sync,
    {
        move |value| match value {
            Some(r) => Deferred::resolved(r),
            None => Deferred::rejected(failure.clone()),
        }
    }

    /// Lance l'opération. Chaque appel recommence depuis zéro.
    pub fn run(&self) -> BoxFuture<'static, Disjoint<L, R>> {
        trace!(target: "faillible", "deferred: run");
        (self.operation)()
    }

    /// Éliminateur asynchrone : lance, attend, puis replie.
    pub async fn fold<T, FL, FR>(&self, on_failure: FL, on_success: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        self.run().await.fold(on_failure, on_success)
    }

    pub fn map<R2, F>(&self, f: F) -> Deferred<L, R2>
    where
        R2: Send + 'static,
        F: Fn(R) -> R2 + Send + Sync + 'static,
    {
        let state = Arc::new((self.clone(), f));
        Deferred::new(move || {
            let state = Arc::clone(&state);
            async move {
                let (source, f) = &*state;
                source.run().await.map(f)
            }
        })
    }

    /// Bind monadique. La continuation rend un Deferred, lancé et attendu
    /// seulement après la résolution du receveur, et seulement s'il a réussi.
    pub fn chain<R2, F>(&self, f: F) -> Deferred<L, R2>
    where
        R2: Send + 'static,
        F: Fn(R) -> Deferred<L, R2> + Send + Sync + 'static,
    {
        let state = Arc::new((self.clone(), f));
        Deferred::new(move || {
            let state = Arc::clone(&state);
            async move {
                let (source, f) = &*state;
                match source.run().await {
                    Success(r) => f(r).run().await,
                    Failure(l) => Failure(l),
                }
            }
        })
    }

    pub fn map_failure<L2, F>(&self, f: F) -> Deferred<L2, R>
    where
        L2: Send + 'static,
        F: Fn(L) -> L2 + Send + Sync + 'static,
    {
        let state = Arc::new((self.clone(), f));
        Deferred::new(move || {
            let state = Arc::clone(&state);
            async move {
                let (source, f) = &*state;
                source.run().await.map_failure(f)
            }
        })
    }

    pub fn chain_failure<L2, F>(&self, f: F) -> Deferred<L2, R>
    where
        L2: Send + 'static,
        F: Fn(L) -> Deferred<L2, R> + Send + Sync + 'static,
    {
        let state = Arc::new((self.clone(), f));
        Deferred::new(move || {
            let state = Arc::clone(&state);
            async move {
                let (source, f) = &*state;
                match source.run().await {
                    Failure(l) => f(l).run().await,
                    Success(r) => Success(r),
                }
            }
        })
    }

    /// Combinaison applicative, même départage que [`Disjoint::apply`] :
    /// le receveur est lancé d'abord ; s'il échoue, son échec est rendu
    /// et `f` n'est jamais lancé.
    pub fn apply<R2, F>(&self, f: Deferred<L, F>) -> Deferred<L, R2>
    where
        R2: Send + 'static,
        F: FnOnce(R) -> R2 + Send + 'static,
    {
        let source = self.clone();
        Deferred::new(move || {
            let source = source.clone();
            let f = f.clone();
            async move {
                match source.run().await {
                    Failure(l) => Failure(l),
                    Success(r) => f.run().await.map(|g| g(r)),
                }
            }
        })
    }
}
