//! French translations / Traductions fran\u{00E7}aises

use std::collections::HashMap;

pub fn get_translations() -> HashMap<&'static str, &'static str> {
    let mut t = HashMap::new();

    // Navigation - public pages
    t.insert("nav.home", "Accueil");
    t.insert("nav.how_it_works", "Comment \u{00E7}a marche");
    t.insert("nav.processes", "Processus");
    t.insert("nav.resources", "Ressources");
    t.insert("nav.newsletter", "Newsletter");
    t.insert("nav.terms", "Conditions d'utilisation");

    // Navigation - administration
    t.insert("admin.dashboard", "Tableau de bord");
    t.insert("admin.users", "Utilisateurs");
    t.insert("admin.processes", "Gestion des processus");
    t.insert("admin.themes", "Th\u{00E8}mes");
    t.insert("admin.calendar", "Calendrier");
    t.insert("admin.results", "R\u{00E9}sultats");

    // Operator console
    t.insert("saas.audit_logs", "Journaux d'audit");
    t.insert("saas.notification_templates", "Mod\u{00E8}les de notification");
    t.insert("saas.statistics", "Statistiques");

    // Common actions
    t.insert("common.save", "Enregistrer");
    t.insert("common.cancel", "Annuler");
    t.insert("common.create", "Cr\u{00E9}er");
    t.insert("common.edit", "Modifier");
    t.insert("common.delete", "Supprimer");
    t.insert("common.close", "Fermer");

    // Process management
    t.insert("process.new", "Nouveau processus");
    t.insert("process.edit", "Modifier le processus");
    t.insert("process.title", "Titre");
    t.insert("process.description", "Description");
    t.insert("process.status", "Statut");
    t.insert("process.status.draft", "Brouillon");
    t.insert("process.status.active", "Actif");
    t.insert("process.status.closed", "Cl\u{00F4}tur\u{00E9}");
    t.insert("process.status.archived", "Archiv\u{00E9}");
    t.insert("process.phase", "Phase");
    t.insert("process.phase.preparation", "Pr\u{00E9}paration");
    t.insert("process.phase.consultation", "Consultation");
    t.insert("process.phase.deliberation", "D\u{00E9}lib\u{00E9}ration");
    t.insert("process.phase.vote", "Vote");
    t.insert("process.phase.implementation", "Mise en \u{0153}uvre");

    // Delete confirmation
    t.insert("delete.process.title", "Supprimer le processus");
    t.insert("delete.process.confirm_hint", "Tapez \"supprimer\" pour confirmer");
    t.insert("delete.name_confirm_hint", "Tapez le nom pour confirmer");
    t.insert("delete.archive_data", "Archiver les donn\u{00E9}es");
    t.insert("delete.notify_participants", "Notifier les participants");
    t.insert("delete.warning", "Cette action est irr\u{00E9}versible.");

    // Users
    t.insert("user.name", "Nom");
    t.insert("user.email", "E-mail");
    t.insert("user.role", "R\u{00F4}le");
    t.insert("user.role.citizen", "Citoyen");
    t.insert("user.role.moderator", "Mod\u{00E9}rateur");
    t.insert("user.role.admin", "Administrateur");
    t.insert("user.contributions", "Contributions");

    // Calendar, themes, results, templates
    t.insert("event.new", "Nouvel \u{00E9}v\u{00E9}nement");
    t.insert("event.date", "Date");
    t.insert("event.location", "Lieu");
    t.insert("theme.new", "Nouveau th\u{00E8}me");
    t.insert("theme.color", "Couleur");
    t.insert("result.publish_immediately", "Publier imm\u{00E9}diatement");
    t.insert("result.schedule", "Programmer la publication");
    t.insert("template.subject", "Objet");
    t.insert("template.body", "Message");
    t.insert("template.active", "Actif");

    t
}
