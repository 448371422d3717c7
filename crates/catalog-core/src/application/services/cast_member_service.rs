//! Cast Member Service - cast member use cases.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::ports::CastMemberGateway,
    domain::{AggregateKind, CastMember, CastMemberId, CastMemberType, DomainError},
    error::CatalogResult,
};

/// Input for [`CastMemberService::create`]. An unrecognised type label
/// arrives as `None` and is reported by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCastMember {
    pub name: String,
    pub kind: Option<CastMemberType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCastMember {
    pub id: CastMemberId,
    pub name: String,
    pub kind: Option<CastMemberType>,
}

pub struct CastMemberService {
    members: Arc<dyn CastMemberGateway>,
}

impl CastMemberService {
    pub fn new(members: Arc<dyn CastMemberGateway>) -> Self {
        Self { members }
    }

    #[instrument(skip_all, fields(name = %command.name))]
    pub fn create(&self, command: CreateCastMember) -> CatalogResult<CastMemberId> {
        let member = CastMember::new_member(command.name, command.kind)?;
        let created = self.members.create(member)?;

        info!(id = %created.id(), kind = %created.kind(), "Cast member created");
        Ok(created.id().clone())
    }

    #[instrument(skip_all, fields(id = %command.id))]
    pub fn update(&self, command: UpdateCastMember) -> CatalogResult<CastMemberId> {
        let mut member = self.get(&command.id)?;
        member.update(command.name, command.kind)?;
        let updated = self.members.update(member)?;

        info!("Cast member updated");
        Ok(updated.id().clone())
    }

    pub fn get(&self, id: &CastMemberId) -> CatalogResult<CastMember> {
        self.members
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(AggregateKind::CastMember, id).into())
    }

    /// Delete a cast member. Unknown ids are ignored.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete(&self, id: &CastMemberId) -> CatalogResult<()> {
        self.members.delete_by_id(id)?;
        info!("Cast member deleted");
        Ok(())
    }

    pub fn list(&self) -> CatalogResult<Vec<CastMember>> {
        self.members.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockCastMemberGateway;

    #[test]
    fn create_reports_name_and_type_together() {
        let mut gateway = MockCastMemberGateway::new();
        gateway.expect_create().never();

        let service = CastMemberService::new(Arc::new(gateway));
        let err = service
            .create(CreateCastMember {
                name: String::new(),
                kind: None,
            })
            .unwrap_err();

        let messages: Vec<_> = err.errors().into_iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec!["'name' should not be empty", "'type' should not be null"]
        );
    }

    #[test]
    fn create_returns_the_stored_id() {
        let mut gateway = MockCastMemberGateway::new();
        gateway
            .expect_create()
            .times(1)
            .returning(|member| Ok(member));

        let service = CastMemberService::new(Arc::new(gateway));
        let id = service
            .create(CreateCastMember {
                name: "Vin Diesel".into(),
                kind: Some(CastMemberType::Actor),
            })
            .unwrap();
        assert_eq!(id.as_str().len(), 32);
    }

    #[test]
    fn invalid_update_leaves_the_store_untouched() {
        let stored = CastMember::new_member("Vin Diesel", Some(CastMemberType::Actor)).unwrap();
        let id = stored.id().clone();

        let mut gateway = MockCastMemberGateway::new();
        gateway
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        gateway.expect_update().never();

        let service = CastMemberService::new(Arc::new(gateway));
        let err = service
            .update(UpdateCastMember {
                id,
                name: "Vi".into(),
                kind: Some(CastMemberType::Director),
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to update a Aggregate CastMember");
    }

    #[test]
    fn get_of_unknown_member_is_not_found() {
        let mut gateway = MockCastMemberGateway::new();
        gateway.expect_find_by_id().returning(|_| Ok(None));

        let service = CastMemberService::new(Arc::new(gateway));
        let err = service.get(&CastMemberId::from("abc")).unwrap_err();
        assert_eq!(err.to_string(), "CastMember with ID abc was not found");
    }
}
