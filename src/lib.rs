// =============================================================================
// FAILLIBLE — Conteneurs de résultats composables
// =============================================================================
//
// Faillible remplace les exceptions et les tests de null par des valeurs
// explicites, composées par map / chain / fold.
//
// Architecture :
//   core/      → Les conteneurs synchrones purs (Maybe, Disjoint, collapse)
//   deferred/  → Le conteneur asynchrone Deferred, bâti sur Disjoint
//
// Concepts fondamentaux :
//   Maybe    = présence / absence d'une valeur
//   Disjoint = échec (Failure) OU succès (Success), jamais les deux
//   Deferred = une opération asynchrone, pas encore lancée, qui produit un Disjoint
//   collapse = agrège plusieurs Disjoint en gardant TOUS les échecs
//
// =============================================================================

pub mod core;
pub mod deferred;

pub use crate::core::collapse::{collapse_list, collapse_map};
pub use crate::core::disjoint::{catch_disjoint, try_disjoint, Disjoint};
pub use crate::core::fallible::{try_fallible, Cause, Fallible};
pub use crate::core::maybe::{catch_maybe, try_maybe, Maybe};
pub use crate::core::raise::Unknown;
pub use crate::deferred::{
    catch_deferred, collapse_deferred_list, collapse_deferred_map, try_async_fallible,
    try_deferred, AsyncFallible, Deferred,
};
