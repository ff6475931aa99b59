// =============================================================================
// COLLAPSE — Agréger plusieurs Disjoint en un seul
// =============================================================================
//
// chain() s'arrête au PREMIER échec. collapse ne s'arrête JAMAIS :
// chaque entrée est examinée, et tous les échecs sont rapportés ensemble.
// C'est ce qui permet « afficher toutes les erreurs de validation »
// plutôt que « seulement la première ».
//
// Règle :
//   - au moins un Failure → Failure(uniquement les entrées en échec)
//   - sinon               → Success(toutes les valeurs)
//
// Trois formes :
//   collapse_map     → clés arbitraires, HashMap en sortie
//   collapse_list    → positions, l'ordre relatif est préservé
//   collapse_record! → champs d'une struct typée
//
// Les entrées sont des valeurs déjà construites (pas des thunks) :
// l'agrégation est synchrone, pure et totale.
//
// =============================================================================

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use super::disjoint::{Disjoint, Failure, Success};

/// Agrège une correspondance clé → Disjoint.
///
/// En cas d'échec, la map rendue ne contient QUE les clés en échec.
/// Si une clé apparaît plusieurs fois, la dernière entrée l'emporte.
pub fn collapse_map<K, L, R, I>(entries: I) -> Disjoint<HashMap<K, L>, HashMap<K, R>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, Disjoint<L, R>)>,
{
    let mut failures = HashMap::new();
    let mut successes = HashMap::new();

    for (key, entry) in entries {
        match entry {
            Failure(l) => {
                successes.remove(&key);
                failures.insert(key, l);
            }
            Success(r) => {
                failures.remove(&key);
                successes.insert(key, r);
            }
        }
    }

    if failures.is_empty() {
        Success(successes)
    } else {
        debug!(target: "faillible", failed = failures.len(), "collapse_map: échecs collectés");
        Failure(failures)
    }
}

/// Agrège une séquence de Disjoint.
///
/// En cas d'échec, seules les valeurs d'échec sont rendues, dans leur
/// ordre relatif d'origine.
pub fn collapse_list<L, R, I>(entries: I) -> Disjoint<Vec<L>, Vec<R>>
where
    I: IntoIterator<Item = Disjoint<L, R>>,
{
    let mut failures = Vec::new();
    let mut successes = Vec::new();

    for entry in entries {
        match entry {
            Failure(l) => failures.push(l),
            Success(r) => successes.push(r),
        }
    }

    if failures.is_empty() {
        Success(successes)
    } else {
        debug!(target: "faillible", failed = failures.len(), "collapse_list: échecs collectés");
        Failure(failures)
    }
}

/// Agrège les champs d'une struct, chacun calculé par un Disjoint.
///
/// ```
/// use faillible::{collapse_record, Disjoint};
///
/// #[derive(Debug, PartialEq)]
/// struct Person { name: String, age: u32 }
///
/// let person: Disjoint<_, Person> = collapse_record!(Person {
///     name: Disjoint::<&str, String>::Success("Zaphod".into()),
///     age: Disjoint::<&str, u32>::Success(42),
/// });
/// assert_eq!(person, Disjoint::Success(Person { name: "Zaphod".into(), age: 42 }));
/// ```
///
/// Le côté échec est une `HashMap<&'static str, L>` indexée par le nom
/// des champs en échec. Toutes les expressions sont évaluées, dans l'ordre.
#[macro_export]
macro_rules! collapse_record {
    ($record:ident { $($field:ident : $value:expr),+ $(,)? }) => {{
        // Toutes les expressions sont évaluées avant de lier le moindre champ :
        // un nom de champ ne masque jamais une variable de l'appelant.
        let ($($field,)+) = ($($value,)+);
        let mut failures = ::std::collections::HashMap::new();
        $(
            let $field = match $field {
                $crate::Disjoint::Success(v) => ::std::option::Option::Some(v),
                $crate::Disjoint::Failure(l) => {
                    failures.insert(::std::stringify!($field), l);
                    ::std::option::Option::None
                }
            };
        )+
        match ($($field,)+) {
            ($(::std::option::Option::Some($field),)+) => {
                $crate::Disjoint::Success($record { $($field),+ })
            }
            _ => $crate::Disjoint::Failure(failures),
        }
    }};
}
