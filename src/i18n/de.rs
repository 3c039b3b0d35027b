//! German translations / Deutsche \u{00DC}bersetzungen

use std::collections::HashMap;

pub fn get_translations() -> HashMap<&'static str, &'static str> {
    let mut t = HashMap::new();

    // Navigation - public pages
    t.insert("nav.home", "Startseite");
    t.insert("nav.how_it_works", "So funktioniert's");
    t.insert("nav.processes", "Prozesse");
    t.insert("nav.resources", "Ressourcen");
    t.insert("nav.newsletter", "Newsletter");
    t.insert("nav.terms", "Nutzungsbedingungen");

    // Navigation - administration
    t.insert("admin.dashboard", "Dashboard");
    t.insert("admin.users", "Benutzer");
    t.insert("admin.processes", "Prozessverwaltung");
    t.insert("admin.themes", "Themen");
    t.insert("admin.calendar", "Kalender");
    t.insert("admin.results", "Ergebnisse");

    // Operator console
    t.insert("saas.audit_logs", "Audit-Protokolle");
    t.insert("saas.notification_templates", "Benachrichtigungsvorlagen");
    t.insert("saas.statistics", "Statistiken");

    // Common actions
    t.insert("common.save", "Speichern");
    t.insert("common.cancel", "Abbrechen");
    t.insert("common.create", "Erstellen");
    t.insert("common.edit", "Bearbeiten");
    t.insert("common.delete", "L\u{00F6}schen");
    t.insert("common.close", "Schlie\u{00DF}en");

    // Process management
    t.insert("process.new", "Neuer Prozess");
    t.insert("process.edit", "Prozess bearbeiten");
    t.insert("process.title", "Titel");
    t.insert("process.description", "Beschreibung");
    t.insert("process.status", "Status");
    t.insert("process.status.draft", "Entwurf");
    t.insert("process.status.active", "Aktiv");
    t.insert("process.status.closed", "Abgeschlossen");
    t.insert("process.status.archived", "Archiviert");
    t.insert("process.phase", "Phase");
    t.insert("process.phase.preparation", "Vorbereitung");
    t.insert("process.phase.consultation", "Konsultation");
    t.insert("process.phase.deliberation", "Beratung");
    t.insert("process.phase.vote", "Abstimmung");
    t.insert("process.phase.implementation", "Umsetzung");

    // Delete confirmation
    t.insert("delete.process.title", "Prozess l\u{00F6}schen");
    t.insert("delete.process.confirm_hint", "Geben Sie \"supprimer\" zur Best\u{00E4}tigung ein");
    t.insert("delete.name_confirm_hint", "Geben Sie den Namen zur Best\u{00E4}tigung ein");
    t.insert("delete.archive_data", "Daten archivieren");
    t.insert("delete.notify_participants", "Teilnehmende benachrichtigen");
    t.insert("delete.warning", "Diese Aktion kann nicht r\u{00FC}ckg\u{00E4}ngig gemacht werden.");

    // Users
    t.insert("user.name", "Name");
    t.insert("user.email", "E-Mail");
    t.insert("user.role", "Rolle");
    t.insert("user.role.citizen", "B\u{00FC}rger");
    t.insert("user.role.moderator", "Moderator");
    t.insert("user.role.admin", "Administrator");
    t.insert("user.contributions", "Beitr\u{00E4}ge");

    // Calendar, themes, results, templates
    t.insert("event.new", "Neuer Termin");
    t.insert("event.date", "Datum");
    t.insert("event.location", "Ort");
    t.insert("theme.new", "Neues Thema");
    t.insert("theme.color", "Farbe");
    t.insert("result.publish_immediately", "Sofort ver\u{00F6}ffentlichen");
    t.insert("result.schedule", "Ver\u{00F6}ffentlichung planen");
    t.insert("template.subject", "Betreff");
    t.insert("template.body", "Nachricht");
    t.insert("template.active", "Aktiv");

    t
}
