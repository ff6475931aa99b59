// =============================================================================
// COLLAPSE (différé) — Agréger plusieurs Deferred
// =============================================================================
//
// Même règle que core::collapse, mais sur des opérations pas encore lancées.
//
// ÉVALUATION SÉQUENTIELLE :
//   run() lance les entrées UNE PAR UNE, dans l'ordre d'entrée, et attend
//   chacune avant la suivante. Aucune entrée n'est sautée : un échec ne
//   court-circuite pas les suivantes.
//
// Le résultat est lui-même un Deferred : rien n'est lancé avant son run().
//
// =============================================================================

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use super::Deferred;
use crate::core::collapse::{collapse_list, collapse_map};

/// Agrège une séquence de Deferred, lancés l'un après l'autre.
pub fn collapse_deferred_list<L, R, I>(entries: I) -> Deferred<Vec<L>, Vec<R>>
where
    L: Send + 'static,
    R: Send + 'static,
    I: IntoIterator<Item = Deferred<L, R>>,
{
    let entries: Arc<[Deferred<L, R>]> = entries.into_iter().collect();
    Deferred::new(move || {
        let entries = Arc::clone(&entries);
        async move {
            let mut settled = Vec::with_capacity(entries.len());
            for entry in entries.iter() {
                settled.push(entry.run().await);
            }
            collapse_list(settled)
        }
    })
}

/// Agrège une correspondance clé → Deferred, lancés l'un après l'autre
/// dans l'ordre d'itération de l'entrée.
pub fn collapse_deferred_map<K, L, R, I>(entries: I) -> Deferred<HashMap<K, L>, HashMap<K, R>>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    L: Send + 'static,
    R: Send + 'static,
    I: IntoIterator<Item = (K, Deferred<L, R>)>,
{
    let entries: Arc<[(K, Deferred<L, R>)]> = entries.into_iter().collect();
    Deferred::new(move || {
        let entries = Arc::clone(&entries);
        async move {
            let mut settled = Vec::with_capacity(entries.len());
            for (key, entry) in entries.iter() {
                settled.push((key.clone(), entry.run().await));
            }
            collapse_map(settled)
        }
    })
}
