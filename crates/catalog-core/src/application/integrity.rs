//! Referential-integrity checks.
//!
//! Before a genre or video is written, every identifier it references must
//! resolve in the owning aggregate's store. A missing group of identifiers is
//! reported as one validation error in the returned notification; the caller
//! merges it with field errors so that everything surfaces at once.

use crate::{
    domain::{AggregateKind, Identifier, Notification, ValidationError, unique_ids},
    error::CatalogResult,
};

/// Check that every id in `requested` is known to the store queried by `exists`.
///
/// - an empty request returns an empty notification without calling `exists`
/// - otherwise `exists` is called once and must return the subset that exists
/// - missing ids are listed in request order:
///   `"Some <plural> could not be found: <id1>, <id2>"`
///
/// Gateway failures from `exists` are propagated, not accumulated.
pub fn check_references<I, F>(
    kind: AggregateKind,
    requested: &[I],
    exists: F,
) -> CatalogResult<Notification>
where
    I: Identifier,
    F: FnOnce(&[I]) -> CatalogResult<Vec<I>>,
{
    let mut notification = Notification::new();
    if requested.is_empty() {
        return Ok(notification);
    }

    let requested = unique_ids(requested.iter().cloned());
    let found = exists(&requested)?;

    let missing: Vec<&str> = requested
        .iter()
        .filter(|id| !found.contains(*id))
        .map(|id| id.value())
        .collect();

    if !missing.is_empty() {
        notification.append(ValidationError::new(format!(
            "Some {} could not be found: {}",
            kind.plural(),
            missing.join(", ")
        )));
    }

    Ok(notification)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        application::ApplicationError,
        domain::{CastMemberId, CategoryId},
        error::CatalogError,
    };

    fn ids(values: &[&str]) -> Vec<CategoryId> {
        values.iter().copied().map(CategoryId::from).collect()
    }

    #[test]
    fn reports_missing_ids_in_request_order() {
        let notification = check_references(
            AggregateKind::Category,
            &ids(&["123", "456", "789"]),
            |_| Ok(ids(&["123"])),
        )
        .unwrap();

        assert_eq!(notification.len(), 1);
        assert_eq!(
            notification.first().unwrap().message(),
            "Some categories could not be found: 456, 789"
        );
    }

    #[test]
    fn empty_request_never_queries_the_store() {
        let calls = Cell::new(0);
        let notification = check_references::<CategoryId, _>(AggregateKind::Category, &[], |_| {
            calls.set(calls.get() + 1);
            Ok(Vec::new())
        })
        .unwrap();

        assert!(notification.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn store_is_queried_once_with_deduplicated_ids() {
        let calls = Cell::new(0);
        let notification = check_references(
            AggregateKind::Category,
            &ids(&["1", "2", "1"]),
            |requested| {
                calls.set(calls.get() + 1);
                assert_eq!(requested, ids(&["1", "2"]).as_slice());
                Ok(requested.to_vec())
            },
        )
        .unwrap();

        assert!(notification.is_empty());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn unrequested_ids_in_the_answer_do_not_hide_missing_ones() {
        let notification = check_references(
            AggregateKind::Category,
            &ids(&["1", "2"]),
            |_| Ok(ids(&["1", "99"])),
        )
        .unwrap();

        assert_eq!(notification.len(), 1);
        assert_eq!(
            notification.first().unwrap().message(),
            "Some categories could not be found: 2"
        );
    }

    #[test]
    fn cast_members_use_their_plural_name() {
        let requested = vec![CastMemberId::from("a")];
        let notification =
            check_references(AggregateKind::CastMember, &requested, |_| Ok(Vec::new())).unwrap();

        assert_eq!(
            notification.first().unwrap().message(),
            "Some cast members could not be found: a"
        );
    }

    #[test]
    fn store_failures_propagate() {
        let result = check_references(AggregateKind::Genre, &ids(&["1"]), |_| {
            Err(CatalogError::from(ApplicationError::StoreLockError))
        });

        assert!(matches!(
            result,
            Err(CatalogError::Application(ApplicationError::StoreLockError))
        ));
    }
}
