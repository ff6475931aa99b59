// =============================================================================
// RAISE — Le seul canal d'exception : la panique
// =============================================================================
//
// Une fois dans le pipeline, aucun échec ne déroule la pile. Deux exceptions :
//
//   - les accesseurs `*_or_raise`, qui relancent la valeur du côté opposé
//     quand l'appelant s'est trompé de variante ;
//   - les constructeurs `catch_*`, qui rattrapent une panique et rangent
//     sa charge utile, TELLE QUELLE, dans un Failure.
//
// raise() et capture() sont inverses l'une de l'autre : une valeur relancée
// par raise() est récupérée à l'identique (même type, même valeur) par capture().
//
// =============================================================================

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Charge utile opaque d'une panique rattrapée.
///
/// C'est le type « unknown » des constructeurs `catch_*` : on ne sait rien
/// de ce qui a été levé, seulement qu'on peut tenter un `downcast`.
pub type Unknown = Box<dyn Any + Send + 'static>;

/// Relance `payload` comme charge utile d'une panique.
///
/// Passe par `panic_any` : le panic hook voit la charge et l'emplacement
/// de l'appelant. Si `payload` est déjà un `Unknown` (charge rattrapée par
/// un `catch_*`), il est relancé sans être ré-emballé, pour que capture()
/// rende la charge d'origine et non une boîte de boîte.
#[track_caller]
pub fn raise<P: Any + Send>(payload: P) -> ! {
    let boxed: Unknown = Box::new(payload);
    match boxed.downcast::<Unknown>() {
        Ok(inner) => panic::resume_unwind(*inner),
        Err(boxed) => match boxed.downcast::<P>() {
            Ok(payload) => panic::panic_any(*payload),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Exécute `f` et rattrape une éventuelle panique.
pub fn capture<R>(f: impl FnOnce() -> R) -> Result<R, Unknown> {
    panic::catch_unwind(AssertUnwindSafe(f))
}

/// Lit le message d'une charge de panique produite par `panic!("...")`.
///
/// Renvoie `None` pour toute autre charge utile.
pub fn describe(payload: &Unknown) -> Option<&str> {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        Some(*s)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    }
}
