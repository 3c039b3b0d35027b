//! Core module - Configuration, errors, and the entity records managed by the back-office

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, PlatformConfig, StorageBackend, StorageConfig};
pub use error::{Error, Result};
pub use types::{
    CalendarEvent, EntityId, EventType, Identified, NotificationChannel, NotificationTemplate,
    Process, ProcessPhase, ProcessResult, ProcessStatus, PublishMode, Theme, User, UserRole,
    UserStatus,
};
