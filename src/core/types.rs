//! Entity records displayed and edited through the management pages
//!
//! Optional fields stay optional here; the form drafts are the single place
//! where missing values are replaced with defaults.

use crate::i18n::LocalizedString;
use serde::{Deserialize, Serialize};

/// Identifier shared by every entity kind
pub type EntityId = u64;

/// A record that can be selected, edited and deleted from a management page
pub trait Identified {
    /// Stable kind name, used as the storage discriminator and in logs
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    /// Name shown in tables and matched by name-confirmed deletions
    fn display_name(&self) -> String;
}

/// Participatory process lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    #[default]
    Draft,
    Active,
    Closed,
    Archived,
}

impl ProcessStatus {
    /// Translation key of the status label
    pub fn label_key(self) -> &'static str {
        match self {
            ProcessStatus::Draft => "process.status.draft",
            ProcessStatus::Active => "process.status.active",
            ProcessStatus::Closed => "process.status.closed",
            ProcessStatus::Archived => "process.status.archived",
        }
    }
}

/// Phase a participatory process is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessPhase {
    #[default]
    Preparation,
    Consultation,
    Deliberation,
    Vote,
    Implementation,
}

impl ProcessPhase {
    /// Translation key of the phase label
    pub fn label_key(self) -> &'static str {
        match self {
            ProcessPhase::Preparation => "process.phase.preparation",
            ProcessPhase::Consultation => "process.phase.consultation",
            ProcessPhase::Deliberation => "process.phase.deliberation",
            ProcessPhase::Vote => "process.phase.vote",
            ProcessPhase::Implementation => "process.phase.implementation",
        }
    }
}

/// A participatory process (consultation, budget, vote...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProcessStatus>,
    #[serde(default)]
    pub phase: Option<ProcessPhase>,
    #[serde(default)]
    pub theme_id: Option<EntityId>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub participants: Option<u32>,
}

impl Process {
    pub fn new(id: EntityId, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: None,
            status: None,
            phase: None,
            theme_id: None,
            start_date: None,
            end_date: None,
            participants: None,
        }
    }
}

impl Identified for Process {
    const KIND: &'static str = "process";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }
}

/// Back-office role of a platform account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Citizen,
    Moderator,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Pending,
    Suspended,
}

/// A registered platform user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub contributions: Option<u32>,
}

impl Identified for User {
    const KIND: &'static str = "user";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Kind of calendar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    Meeting,
    Workshop,
    Vote,
    Deadline,
}

/// An entry of the municipal participation calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: EntityId,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "type")]
    pub event_type: Option<EventType>,
    #[serde(default)]
    pub process_id: Option<EntityId>,
}

impl Identified for CalendarEvent {
    const KIND: &'static str = "event";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }
}

/// A thematic category processes are filed under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: EntityId,
    pub name: LocalizedString,
    #[serde(default)]
    pub description: Option<LocalizedString>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Identified for Theme {
    const KIND: &'static str = "theme";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.primary_text().to_string()
    }
}

/// When a result becomes visible to the public
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishMode {
    #[default]
    Immediate,
    Scheduled,
}

/// Published outcome of a participatory process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub process_id: Option<EntityId>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub publish_mode: Option<PublishMode>,
    /// Older payloads used `scheduledDate` for the same value
    #[serde(default, alias = "scheduledDate")]
    pub scheduled_publish_date: Option<String>,
}

impl Identified for ProcessResult {
    const KIND: &'static str = "result";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }
}

/// Delivery channel of a notification template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    #[default]
    Email,
    Sms,
    Push,
}

/// A trilingual notification template managed from the operator console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTemplate {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub channel: Option<NotificationChannel>,
    #[serde(default)]
    pub subject: Option<LocalizedString>,
    #[serde(default)]
    pub body: Option<LocalizedString>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl Identified for NotificationTemplate {
    const KIND: &'static str = "notification_template";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}
