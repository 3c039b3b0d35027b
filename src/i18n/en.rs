//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<&'static str, &'static str> {
    let mut t = HashMap::new();

    // Navigation - public pages
    t.insert("nav.home", "Home");
    t.insert("nav.how_it_works", "How it works");
    t.insert("nav.processes", "Processes");
    t.insert("nav.resources", "Resources");
    t.insert("nav.newsletter", "Newsletter");
    t.insert("nav.terms", "Terms of use");

    // Navigation - administration
    t.insert("admin.dashboard", "Dashboard");
    t.insert("admin.users", "Users");
    t.insert("admin.processes", "Process management");
    t.insert("admin.themes", "Themes");
    t.insert("admin.calendar", "Calendar");
    t.insert("admin.results", "Results");

    // Operator console
    t.insert("saas.audit_logs", "Audit logs");
    t.insert("saas.notification_templates", "Notification templates");
    t.insert("saas.statistics", "Statistics");

    // Common actions
    t.insert("common.save", "Save");
    t.insert("common.cancel", "Cancel");
    t.insert("common.create", "Create");
    t.insert("common.edit", "Edit");
    t.insert("common.delete", "Delete");
    t.insert("common.close", "Close");

    // Process management
    t.insert("process.new", "New process");
    t.insert("process.edit", "Edit process");
    t.insert("process.title", "Title");
    t.insert("process.description", "Description");
    t.insert("process.status", "Status");
    t.insert("process.status.draft", "Draft");
    t.insert("process.status.active", "Active");
    t.insert("process.status.closed", "Closed");
    t.insert("process.status.archived", "Archived");
    t.insert("process.phase", "Phase");
    t.insert("process.phase.preparation", "Preparation");
    t.insert("process.phase.consultation", "Consultation");
    t.insert("process.phase.deliberation", "Deliberation");
    t.insert("process.phase.vote", "Vote");
    t.insert("process.phase.implementation", "Implementation");

    // Delete confirmation
    t.insert("delete.process.title", "Delete process");
    t.insert("delete.process.confirm_hint", "Type \"supprimer\" to confirm");
    t.insert("delete.name_confirm_hint", "Type the name to confirm");
    t.insert("delete.archive_data", "Archive data");
    t.insert("delete.notify_participants", "Notify participants");
    t.insert("delete.warning", "This action cannot be undone.");

    // Users
    t.insert("user.name", "Name");
    t.insert("user.email", "Email");
    t.insert("user.role", "Role");
    t.insert("user.role.citizen", "Citizen");
    t.insert("user.role.moderator", "Moderator");
    t.insert("user.role.admin", "Administrator");
    t.insert("user.contributions", "Contributions");

    // Calendar, themes, results, templates
    t.insert("event.new", "New event");
    t.insert("event.date", "Date");
    t.insert("event.location", "Location");
    t.insert("theme.new", "New theme");
    t.insert("theme.color", "Color");
    t.insert("result.publish_immediately", "Publish immediately");
    t.insert("result.schedule", "Schedule publication");
    t.insert("template.subject", "Subject");
    t.insert("template.body", "Message");
    t.insert("template.active", "Active");

    t
}
