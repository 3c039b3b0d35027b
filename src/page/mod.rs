//! Management page glue
//!
//! A page owns the entity list, the current selection, and one create, edit
//! and delete dialog. Row actions select an entity and open a dialog; submits
//! go through the page's [`Repository`] and update the list.

use crate::core::{EntityId, Identified, Result};
use crate::form::{CreateForm, Deletable, DeleteForm, DeleteRequest, EditForm, EntityDraft, FormController};
use crate::store::Repository;

pub struct ManagementPage<D, R>
where
    D: EntityDraft,
    D::Entity: Deletable,
{
    repository: R,
    entities: Vec<D::Entity>,
    selected: Option<EntityId>,
    create: FormController<CreateForm<D>>,
    edit: FormController<EditForm<D>>,
    delete: FormController<DeleteForm<D::Entity>>,
}

impl<D, R> ManagementPage<D, R>
where
    D: EntityDraft,
    D::Entity: Deletable,
    R: Repository<D>,
{
    /// Create a page and load its entities
    pub fn new(repository: R) -> Result<Self> {
        let entities = repository.list()?;
        log::info!(
            "Loaded {} {} record(s)",
            entities.len(),
            <D::Entity as Identified>::KIND
        );

        Ok(Self {
            repository,
            entities,
            selected: None,
            create: FormController::new(),
            edit: FormController::new(),
            delete: FormController::new(),
        })
    }

    /// Re-read the list from the repository
    pub fn reload(&mut self) -> Result<()> {
        self.entities = self.repository.list()?;
        self.sync_dialogs();
        Ok(())
    }

    pub fn entities(&self) -> &[D::Entity] {
        &self.entities
    }

    pub fn find(&self, id: EntityId) -> Option<&D::Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    pub fn selected(&self) -> Option<&D::Entity> {
        self.selected.and_then(|id| self.find(id))
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn create_dialog(&self) -> &FormController<CreateForm<D>> {
        &self.create
    }

    pub fn create_dialog_mut(&mut self) -> &mut FormController<CreateForm<D>> {
        &mut self.create
    }

    pub fn edit_dialog(&self) -> &FormController<EditForm<D>> {
        &self.edit
    }

    pub fn edit_dialog_mut(&mut self) -> &mut FormController<EditForm<D>> {
        &mut self.edit
    }

    pub fn delete_dialog(&self) -> &FormController<DeleteForm<D::Entity>> {
        &self.delete
    }

    pub fn delete_dialog_mut(&mut self) -> &mut FormController<DeleteForm<D::Entity>> {
        &mut self.delete
    }

    /// "New" button
    pub fn open_create(&mut self) -> bool {
        self.create.open(None)
    }

    /// "Edit" row action
    pub fn select_for_edit(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.find(id).cloned() else {
            log::warn!("No {} #{} to edit", <D::Entity as Identified>::KIND, id);
            return false;
        };

        self.selected = Some(id);
        let opened = self.edit.open(Some(&entity));
        self.sync_dialogs();
        opened
    }

    /// "Delete" row action
    pub fn select_for_delete(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.find(id).cloned() else {
            log::warn!("No {} #{} to delete", <D::Entity as Identified>::KIND, id);
            return false;
        };

        self.selected = Some(id);
        let opened = self.delete.open(Some(&entity));
        self.sync_dialogs();
        opened
    }

    /// Drop the selection; entity-bound dialogs left open stop rendering
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.sync_dialogs();
    }

    /// Persist the "new" dialog's draft; `None` when the submit control is disabled
    pub fn submit_create(&mut self) -> Result<Option<D::Entity>> {
        let Some(draft) = self.create.submit() else {
            return Ok(None);
        };

        let entity = self.repository.create(draft)?;
        self.entities.push(entity.clone());
        Ok(Some(entity))
    }

    pub fn submit_edit(&mut self) -> Result<Option<D::Entity>> {
        let Some(patch) = self.edit.submit() else {
            return Ok(None);
        };
        self.clear_selection();

        let updated = self.repository.update(patch)?;
        if let Some(entity) = self
            .entities
            .iter_mut()
            .find(|entity| entity.id() == updated.id())
        {
            *entity = updated.clone();
        }
        Ok(Some(updated))
    }

    pub fn submit_delete(&mut self) -> Result<Option<DeleteRequest>> {
        let Some(request) = self.delete.submit() else {
            return Ok(None);
        };
        self.clear_selection();

        self.repository.delete(request)?;
        self.entities.retain(|entity| entity.id() != request.id);
        Ok(Some(request))
    }

    pub fn cancel_create(&mut self) {
        self.create.cancel();
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
        self.clear_selection();
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
        self.clear_selection();
    }

    /// Every change of `selected` ends here so both dialogs track it
    fn sync_dialogs(&mut self) {
        let selected = self.selected().cloned();
        self.edit.sync_entity(selected.as_ref());
        self.delete.sync_entity(selected.as_ref());
    }
}
