use chrono::NaiveDate;

use crate::model::{Celebrity, RecordId, RulesConfig};
use crate::ops::editor::{Field, RowEditor, ValidationError};
use crate::ops::selection::Selection;
use crate::ops::store::RecordStore;

/// Why a session operation was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no record with id {0}")]
    NotFound(RecordId),
    #[error("expand the record before editing it")]
    NotExpanded,
    #[error("record {0} is hidden by the current search")]
    NotVisible(RecordId),
    #[error("only records aged {min_age} or over can be edited (this one is {age})")]
    NotEligible { age: u32, min_age: u32 },
    #[error("finish or cancel the current edit first")]
    EditInProgress,
    #[error("not editing")]
    NotEditing,
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// Result of a successful save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The working copy was committed to the store
    Saved,
    /// Nothing had changed; no effect
    Unchanged,
}

/// All mutable UI state for one run of the program.
///
/// The store, the selection and the editor only change through these
/// methods, which keep them consistent: an editor exists exactly when the
/// selection is `Editing`, and always for that record.
#[derive(Debug, Clone)]
pub struct Session {
    store: RecordStore,
    selection: Selection,
    editor: Option<RowEditor>,
    rules: RulesConfig,
    today: NaiveDate,
}

impl Session {
    pub fn new(records: Vec<Celebrity>, rules: RulesConfig, today: NaiveDate) -> Self {
        Session {
            store: RecordStore::new(records),
            selection: Selection::Idle,
            editor: None,
            rules,
            today,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn editor(&self) -> Option<&RowEditor> {
        self.editor.as_ref()
    }

    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    /// Whether `id` may enter edit mode, judged from its current age
    pub fn can_edit(&self, id: RecordId) -> bool {
        self.store
            .get(id)
            .is_some_and(|c| c.is_editable(self.rules.min_edit_age))
    }

    pub fn set_query(&mut self, text: &str) {
        self.store.set_query(text);
        tracing::debug!(query = text, matches = self.store.filtered_len(), "query changed");
    }

    /// Expand/collapse a record. Ignored while editing.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        let changed = self.selection.toggle(id);
        tracing::debug!(id, changed, selection = ?self.selection, "toggle");
        changed
    }

    /// Enter edit mode on the expanded record `id`
    pub fn begin_edit(&mut self, id: RecordId) -> Result<(), SessionError> {
        if self.selection.is_editing() {
            return Err(SessionError::EditInProgress);
        }
        let record = self.store.get(id).ok_or(SessionError::NotFound(id))?;
        if self.selection.expanded() != Some(id) {
            return Err(SessionError::NotExpanded);
        }
        if self.store.filtered_position(id).is_none() {
            return Err(SessionError::NotVisible(id));
        }
        let min_age = self.rules.min_edit_age;
        if !record.is_editable(min_age) {
            return Err(SessionError::NotEligible {
                age: record.age,
                min_age,
            });
        }
        let editor = RowEditor::new(record, self.today);
        if !self.selection.edit(id, true) {
            return Err(SessionError::NotExpanded);
        }
        self.editor = Some(editor);
        tracing::debug!(id, "editing");
        Ok(())
    }

    /// Stage a field value in the working copy. Returns whether it was accepted.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<bool, SessionError> {
        let editor = self.editor.as_mut().ok_or(SessionError::NotEditing)?;
        let accepted = editor.set_field(field, value);
        if !accepted {
            tracing::debug!(?field, value, "rejected input");
        }
        Ok(accepted)
    }

    /// Validate and commit the working copy, then leave edit mode.
    /// On validation failure nothing changes and editing continues.
    pub fn save(&mut self) -> Result<SaveOutcome, SessionError> {
        let editor = self.editor.as_mut().ok_or(SessionError::NotEditing)?;
        let id = editor.id();
        match editor.save() {
            Ok(Some(record)) => {
                self.store.update_record(record);
                self.selection.finish(id);
                self.editor = None;
                tracing::debug!(id, "saved");
                Ok(SaveOutcome::Saved)
            }
            Ok(None) => Ok(SaveOutcome::Unchanged),
            Err(e) => {
                tracing::debug!(id, error = %e, "save refused");
                Err(e.into())
            }
        }
    }

    /// Discard the working copy and leave edit mode
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        let mut editor = self.editor.take().ok_or(SessionError::NotEditing)?;
        editor.cancel();
        self.selection.finish(editor.id());
        tracing::debug!(id = editor.id(), "edit cancelled");
        Ok(())
    }

    /// Permanently remove a record. Refused while an edit is open.
    /// Returns whether a record was removed.
    pub fn delete(&mut self, id: RecordId) -> Result<bool, SessionError> {
        if self.selection.is_editing() {
            return Err(SessionError::EditInProgress);
        }
        let removed = self.store.delete_record(id);
        if removed {
            self.selection.clear(id);
            tracing::info!(id, remaining = self.store.len(), "deleted record");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_support::{jane_and_jon, today};
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::new(jane_and_jon(), RulesConfig::default(), today())
    }

    fn assert_consistent(s: &Session) {
        match s.selection() {
            Selection::Editing(id) => assert_eq!(s.editor().map(|e| e.id()), Some(id)),
            _ => assert!(s.editor().is_none()),
        }
    }

    #[test]
    fn worked_example() {
        let mut s = session();

        s.set_query("day");
        let ids: Vec<_> = s.store().filtered().map(|c| c.id).collect();
        assert_eq!(ids, vec![2]);
        s.set_query("");

        s.toggle(2);
        assert_eq!(
            s.begin_edit(2),
            Err(SessionError::NotEligible { age: 17, min_age: 18 })
        );
        assert_eq!(s.selection(), Selection::Expanded(2));

        s.toggle(1);
        s.begin_edit(1).unwrap();
        assert_eq!(s.set_field(Field::Country, "123"), Ok(false));
        assert_eq!(s.editor().unwrap().working().country, "Canada");

        s.set_field(Field::Description, "").unwrap();
        let before = s.store().get(1).cloned();
        let err = s.save().unwrap_err();
        assert!(matches!(err, SessionError::Validation(_)));
        assert_eq!(s.store().get(1).cloned(), before);
        assert_eq!(s.selection(), Selection::Editing(1));
        assert_consistent(&s);
    }

    #[test]
    fn edit_requires_expansion() {
        let mut s = session();
        assert_eq!(s.begin_edit(1), Err(SessionError::NotExpanded));
        assert_eq!(s.begin_edit(99), Err(SessionError::NotFound(99)));
    }

    #[test]
    fn edit_of_record_hidden_by_query_is_rejected() {
        let mut s = session();
        s.toggle(1);
        s.set_query("jon");
        assert_eq!(s.begin_edit(1), Err(SessionError::NotVisible(1)));
        assert_eq!(s.selection(), Selection::Expanded(1));
        assert_consistent(&s);

        s.set_query("");
        assert_eq!(s.begin_edit(1), Ok(()));
    }

    #[test]
    fn second_edit_is_rejected_while_editing() {
        let mut records = jane_and_jon();
        records[1].age = 40;
        let mut s = Session::new(records, RulesConfig::default(), today());
        s.toggle(1);
        s.begin_edit(1).unwrap();
        assert!(!s.toggle(2));
        assert_eq!(s.begin_edit(2), Err(SessionError::EditInProgress));
        assert_eq!(s.selection(), Selection::Editing(1));
        assert_consistent(&s);
    }

    #[test]
    fn save_commits_and_returns_to_expanded() {
        let mut s = session();
        s.toggle(1);
        s.begin_edit(1).unwrap();
        s.set_field(Field::Country, "France").unwrap();
        assert_eq!(s.save(), Ok(SaveOutcome::Saved));
        assert_eq!(s.store().get(1).unwrap().country, "France");
        assert_eq!(s.selection(), Selection::Expanded(1));
        assert_consistent(&s);
    }

    #[test]
    fn save_without_changes_stays_in_edit_mode() {
        let mut s = session();
        s.toggle(1);
        s.begin_edit(1).unwrap();
        assert_eq!(s.save(), Ok(SaveOutcome::Unchanged));
        assert_eq!(s.selection(), Selection::Editing(1));
    }

    #[test]
    fn cancel_restores_and_leaves_no_trace() {
        let mut s = session();
        let original = s.store().get(1).cloned().unwrap();
        s.toggle(1);
        s.begin_edit(1).unwrap();
        s.set_field(Field::First, "Someone").unwrap();
        s.set_field(Field::Email, "x@y.z").unwrap();
        s.cancel().unwrap();
        assert_eq!(s.store().get(1), Some(&original));
        assert_eq!(s.selection(), Selection::Expanded(1));
        assert_consistent(&s);

        // A fresh edit starts from the canonical record again
        s.begin_edit(1).unwrap();
        assert_eq!(s.editor().unwrap().working(), &original);
        assert!(!s.editor().unwrap().is_dirty());
    }

    #[test]
    fn field_edits_outside_edit_mode_are_refused() {
        let mut s = session();
        assert_eq!(
            s.set_field(Field::Email, "a@b.c"),
            Err(SessionError::NotEditing)
        );
        assert_eq!(s.save(), Err(SessionError::NotEditing));
        assert_eq!(s.cancel(), Err(SessionError::NotEditing));
    }

    #[test]
    fn delete_clears_selection_of_the_deleted_record() {
        let mut s = session();
        s.toggle(1);
        assert_eq!(s.delete(1), Ok(true));
        assert_eq!(s.selection(), Selection::Idle);
        assert_eq!(s.delete(1), Ok(false));
        assert_eq!(s.store().len(), 1);
    }

    #[test]
    fn delete_keeps_other_expansion() {
        let mut s = session();
        s.toggle(1);
        assert_eq!(s.delete(2), Ok(true));
        assert_eq!(s.selection(), Selection::Expanded(1));
    }

    #[test]
    fn delete_is_refused_while_editing() {
        let mut s = session();
        s.toggle(1);
        s.begin_edit(1).unwrap();
        assert_eq!(s.delete(2), Err(SessionError::EditInProgress));
        assert_eq!(s.store().len(), 2);
    }

    #[test]
    fn eligibility_follows_configured_threshold() {
        let rules = RulesConfig { min_edit_age: 30 };
        let s = Session::new(jane_and_jon(), rules, today());
        assert!(!s.can_edit(1));
        assert!(!s.can_edit(2));
        assert!(!s.can_edit(99));
        assert!(session().can_edit(1));
    }

    #[test]
    fn saved_age_change_updates_eligibility() {
        let mut s = session();
        s.toggle(1);
        s.begin_edit(1).unwrap();
        s.set_field(Field::Age, "16").unwrap();
        s.save().unwrap();
        assert!(!s.can_edit(1));
    }
}
