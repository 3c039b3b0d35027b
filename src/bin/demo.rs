//! CiviAgora - Demo CLI
//!
//! Walks through the back-office engine: trilingual labels, then the
//! create/edit/delete dialogs of the process management page on top of the
//! configured storage backend.

use anyhow::Context;
use civiagora_lib::core::{Config, Process, ProcessPhase, ProcessStatus, StorageBackend};
use civiagora_lib::db::Database;
use civiagora_lib::dialogs::{ProcessDraft, ProcessField};
use civiagora_lib::form::DeleteField;
use civiagora_lib::i18n::{available_languages, Language, LanguageContext};
use civiagora_lib::page::ManagementPage;
use civiagora_lib::store::{InMemoryRepository, Repository};

fn mock_processes() -> Vec<Process> {
    vec![
        Process {
            status: Some(ProcessStatus::Active),
            phase: Some(ProcessPhase::Consultation),
            description: Some("R\u{00E9}duire les \u{00E9}missions de la commune".to_string()),
            participants: Some(412),
            ..Process::new(1, "Plan climat")
        },
        Process {
            status: Some(ProcessStatus::Draft),
            ..Process::new(2, "Budget participatif 2025")
        },
        Process::new(3, "R\u{00E9}am\u{00E9}nagement de la place du march\u{00E9}"),
    ]
}

fn print_processes(i18n: &LanguageContext, processes: &[Process]) {
    for process in processes {
        let status = process.status.unwrap_or_default();
        let phase = process.phase.unwrap_or_default();
        println!(
            "      #{:<3} {:<45} {:<12} {}",
            process.id,
            process.title,
            i18n.translate(status.label_key()),
            i18n.translate(phase.label_key())
        );
    }
}

fn run_process_page<R: Repository<ProcessDraft>>(
    i18n: &LanguageContext,
    repository: R,
) -> anyhow::Result<()> {
    let mut page: ManagementPage<ProcessDraft, R> = ManagementPage::new(repository)?;

    println!("    {}:", i18n.translate("admin.processes"));
    print_processes(i18n, page.entities());

    // Edit
    println!("\n    {} #1", i18n.translate("process.edit"));
    page.select_for_edit(1);
    let dialog = page.edit_dialog_mut();
    dialog.set_field(ProcessField::Phase(ProcessPhase::Deliberation));
    dialog.set_field(ProcessField::Title("Plan climat 2030".to_string()));
    if let Some(updated) = page.submit_edit()? {
        println!("      -> {} ({:?})", updated.title, updated.phase);
    }

    // Create
    println!("\n    {}", i18n.translate("process.new"));
    page.open_create();
    println!("      submit enabled: {}", page.create_dialog().can_submit());
    page.create_dialog_mut()
        .set_field(ProcessField::Title("V\u{00E9}lo en ville".to_string()));
    println!("      submit enabled: {}", page.create_dialog().can_submit());
    if let Some(created) = page.submit_create()? {
        println!("      -> #{} {}", created.id, created.title);
    }

    // Delete
    println!("\n    {} #3", i18n.translate("delete.process.title"));
    println!("      {}", i18n.translate("delete.process.confirm_hint"));
    page.select_for_delete(3);
    for typed in ["supprime", "SUPPRIMER"] {
        page.delete_dialog_mut()
            .set_field(DeleteField::Confirmation(typed.to_string()));
        println!(
            "      typed {:<10} -> submit enabled: {}",
            typed,
            page.delete_dialog().can_submit()
        );
    }
    if let Some(request) = page.submit_delete()? {
        println!(
            "      -> removed #{} (archive: {}, notify: {})",
            request.id, request.options.archive_data, request.options.notify_participants
        );
    }

    println!();
    print_processes(i18n, page.entities());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::load();

    let log_level = config
        .as_ref()
        .map(|c| c.general.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Could not load configuration ({}), using defaults", e);
        Config::default()
    });

    println!("==============================================");
    println!("   {} - Back-office demo", config.platform.tenant_name);
    println!("==============================================\n");

    // 1. Localization
    println!("[1/2] Localization");
    let i18n = LanguageContext::from_config(&config.general);
    let initial = i18n.language();
    for (code, name) in available_languages() {
        let lang: Language = code.parse()?;
        i18n.set_language(lang);
        println!(
            "      {} ({:<9}) {} | {} | {}",
            code,
            name,
            i18n.translate("nav.home"),
            i18n.translate("nav.how_it_works"),
            i18n.translate("common.cancel")
        );
    }
    i18n.set_language(initial);
    println!("      missing key -> {}\n", i18n.translate("nav.unknown"));

    // 2. Process management page
    println!("[2/2] Process management ({:?} storage)\n", config.storage.backend);
    match config.storage.backend {
        StorageBackend::Memory => {
            run_process_page(&i18n, InMemoryRepository::with_records(mock_processes()))?;
        }
        StorageBackend::Sqlite => {
            let path = config.storage.database_path()?;
            let mut db = Database::open(&path)
                .with_context(|| format!("opening {}", path.display()))?;
            db.import(&mock_processes())?;
            run_process_page(&i18n, &mut db)?;

            println!("\n    {}:", i18n.translate("saas.audit_logs"));
            for entry in db.audit_entries(Some(5))? {
                let when = chrono::DateTime::<chrono::Utc>::from_timestamp(entry.timestamp, 0)
                    .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_default();
                println!("      {} {:<8} {} #{}", when, entry.action, entry.kind, entry.entity_id);
            }
        }
    }

    println!("\n==============================================\n");
    Ok(())
}
