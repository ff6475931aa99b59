// =============================================================================
// CORE — Les conteneurs synchrones
// =============================================================================
//
// Ce module regroupe toute l'algèbre pure :
// aucune suspension, aucun runtime — uniquement des valeurs immuables
// et leurs lois de composition.
//
// Architecture :
//   maybe     → présence / absence (Maybe)
//   disjoint  → le type central : Failure(L) | Success(R)
//   fallible  → la saveur « Result » : l'échec est une anyhow::Error opaque, partagée
//   raise     → capture et relance des paniques (les seules exceptions)
//   collapse  → agrégation : collecte tous les échecs, pas seulement le premier
//
// =============================================================================

pub mod maybe;
pub mod disjoint;
pub mod fallible;
pub mod raise;
pub mod collapse;
