//! The `CastMember` aggregate.
//!
//! The member type arrives as an `Option` because transport layers hand over
//! unknown labels as absent values; the validator reports that as a null
//! `type`. Only a member with a concrete type is ever constructed.

use chrono::{DateTime, Utc};

use crate::domain::{
    common::{CastMemberId, now},
    error::DomainError,
    validation::{Notification, Validator, rules},
    value_objects::CastMemberType,
};

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct CastMember {
    id: CastMemberId,
    name: String,
    kind: CastMemberType,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CastMember {
    pub fn new_member(
        name: impl Into<String>,
        kind: Option<CastMemberType>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let kind = Self::checked(&name, kind, "Failed to create a Aggregate CastMember")?;
        let now = now();
        Ok(Self {
            id: CastMemberId::unique(),
            name,
            kind,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a member from stored values. Still validated.
    pub fn with(
        id: CastMemberId,
        name: impl Into<String>,
        kind: CastMemberType,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let kind = Self::checked(&name, Some(kind), "Failed to load a Aggregate CastMember")?;
        Ok(Self {
            id,
            name,
            kind,
            created_at,
            updated_at,
        })
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        kind: Option<CastMemberType>,
    ) -> Result<&mut Self, DomainError> {
        let name = name.into();
        let kind = Self::checked(&name, kind, "Failed to update a Aggregate CastMember")?;
        self.name = name;
        self.kind = kind;
        self.updated_at = now();
        Ok(self)
    }

    pub fn validate(&self, handler: &mut Notification) {
        CastMemberValidator::new(&self.name, Some(self.kind)).validate(handler);
    }

    /// Validate the raw fields and hand back the concrete type.
    fn checked(
        name: &str,
        kind: Option<CastMemberType>,
        message: &str,
    ) -> Result<CastMemberType, DomainError> {
        let mut notification = Notification::new();
        CastMemberValidator::new(name, kind).validate(&mut notification);
        match kind {
            Some(kind) if !notification.has_error() => Ok(kind),
            _ => Err(DomainError::notification(message, notification)),
        }
    }

    pub fn id(&self) -> &CastMemberId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub const fn kind(&self) -> CastMemberType {
        self.kind
    }
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Field rules for [`CastMember`].
pub struct CastMemberValidator<'a> {
    name: &'a str,
    kind: Option<CastMemberType>,
}

impl<'a> CastMemberValidator<'a> {
    pub fn new(name: &'a str, kind: Option<CastMemberType>) -> Self {
        Self { name, kind }
    }
}

impl Validator for CastMemberValidator<'_> {
    fn validate(&self, handler: &mut Notification) {
        handler.check(rules::required_text(
            "name",
            self.name,
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
        ));
        handler.check(rules::present("type", self.kind.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(err: DomainError) -> Vec<String> {
        err.errors().iter().map(|e| e.message().to_owned()).collect()
    }

    #[test]
    fn new_member() {
        let member = CastMember::new_member("Vin Diesel", Some(CastMemberType::Actor)).unwrap();
        assert_eq!(member.name(), "Vin Diesel");
        assert_eq!(member.kind(), CastMemberType::Actor);
        assert_eq!(member.created_at(), member.updated_at());
    }

    #[test]
    fn both_rules_are_reported_together() {
        let err = CastMember::new_member("", None).unwrap_err();
        assert_eq!(
            messages(err),
            vec!["'name' should not be empty", "'type' should not be null"]
        );
    }

    #[test]
    fn short_name_is_rejected() {
        let err = CastMember::new_member("Vi", Some(CastMemberType::Director)).unwrap_err();
        assert_eq!(
            messages(err),
            vec!["'name' must be between 3 and 255 characters"]
        );
    }

    #[test]
    fn update_changes_name_and_type() {
        let mut member = CastMember::new_member("Vin Diesel", Some(CastMemberType::Actor)).unwrap();
        member
            .update("Steven Spielberg", Some(CastMemberType::Director))
            .unwrap();
        assert_eq!(member.name(), "Steven Spielberg");
        assert_eq!(member.kind(), CastMemberType::Director);
    }

    #[test]
    fn failed_update_leaves_member_untouched() {
        let mut member = CastMember::new_member("Vin Diesel", Some(CastMemberType::Actor)).unwrap();
        let before = member.clone();
        let err = member.update("", None).unwrap_err();
        assert_eq!(messages(err).len(), 2);
        assert_eq!(member, before);
    }

    #[test]
    fn validate_is_idempotent() {
        let member = CastMember::new_member("Vin Diesel", Some(CastMemberType::Actor)).unwrap();
        for _ in 0..2 {
            let mut notification = Notification::new();
            member.validate(&mut notification);
            assert!(notification.is_empty());
        }
    }
}
