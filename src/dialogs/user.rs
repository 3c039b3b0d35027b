//! User invitation, edit and removal dialogs

use crate::core::{EntityId, User, UserRole, UserStatus};
use crate::form::{is_filled, ConfirmationRule, Deletable, EntityDraft, FormDraft};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub contributions: u32,
}

#[derive(Debug, Clone)]
pub enum UserField {
    Name(String),
    Email(String),
    Role(UserRole),
    Status(UserStatus),
}

impl FormDraft for UserDraft {
    type Field = UserField;

    fn apply(&mut self, field: UserField) {
        match field {
            UserField::Name(value) => self.name = value,
            UserField::Email(value) => self.email = value,
            UserField::Role(value) => self.role = value,
            UserField::Status(value) => self.status = value,
        }
    }
}

impl EntityDraft for UserDraft {
    type Entity = User;

    fn from_entity(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.unwrap_or_default(),
            status: user.status.unwrap_or_default(),
            contributions: user.contributions.unwrap_or(0),
        }
    }

    fn is_complete(&self) -> bool {
        is_filled(&self.name) && is_filled(&self.email)
    }

    fn into_entity(self, id: EntityId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: Some(self.role),
            status: Some(self.status),
            contributions: Some(self.contributions),
        }
    }

    fn apply_to(self, user: &mut User) {
        user.name = self.name;
        user.email = self.email;
        user.role = Some(self.role);
        user.status = Some(self.status);
    }
}

impl Deletable for User {
    fn confirmation_rule(&self) -> ConfirmationRule {
        ConfirmationRule::DisplayName
    }
}
