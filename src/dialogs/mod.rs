//! Drafts and dialog types of the back-office management pages
//!
//! Each entity gets one draft type; the create, edit and delete dialogs are
//! the generic form schemas instantiated with it.

mod event;
mod notification;
mod process;
mod result;
mod theme;
mod user;

pub use event::{EventDraft, EventField};
pub use notification::{TemplateDraft, TemplateField};
pub use process::{ProcessDraft, ProcessField};
pub use result::{ResultDraft, ResultField};
pub use theme::{ThemeDraft, ThemeField};
pub use user::{UserDraft, UserField};

use crate::core::{CalendarEvent, NotificationTemplate, Process, ProcessResult, Theme, User};
use crate::form::{CreateForm, DeleteForm, EditForm, FormController};

pub type CreateProcessDialog = FormController<CreateForm<ProcessDraft>>;
pub type EditProcessDialog = FormController<EditForm<ProcessDraft>>;
pub type DeleteProcessDialog = FormController<DeleteForm<Process>>;

pub type InviteUserDialog = FormController<CreateForm<UserDraft>>;
pub type EditUserDialog = FormController<EditForm<UserDraft>>;
pub type DeleteUserDialog = FormController<DeleteForm<User>>;

pub type CreateEventDialog = FormController<CreateForm<EventDraft>>;
pub type EditEventDialog = FormController<EditForm<EventDraft>>;
pub type DeleteEventDialog = FormController<DeleteForm<CalendarEvent>>;

pub type CreateThemeDialog = FormController<CreateForm<ThemeDraft>>;
pub type EditThemeDialog = FormController<EditForm<ThemeDraft>>;
pub type DeleteThemeDialog = FormController<DeleteForm<Theme>>;

pub type CreateResultDialog = FormController<CreateForm<ResultDraft>>;
pub type EditResultDialog = FormController<EditForm<ResultDraft>>;
pub type DeleteResultDialog = FormController<DeleteForm<ProcessResult>>;

pub type CreateTemplateDialog = FormController<CreateForm<TemplateDraft>>;
pub type EditTemplateDialog = FormController<EditForm<TemplateDraft>>;
pub type DeleteTemplateDialog = FormController<DeleteForm<NotificationTemplate>>;
