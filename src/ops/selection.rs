use crate::model::RecordId;

/// Which record, if any, is expanded, and whether it is being edited.
///
/// `Editing` implies expansion, so "editing without expansion" cannot be
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Expanded(RecordId),
    Editing(RecordId),
}

impl Selection {
    /// The expanded record (also set while editing)
    pub fn expanded(self) -> Option<RecordId> {
        match self {
            Selection::Idle => None,
            Selection::Expanded(id) | Selection::Editing(id) => Some(id),
        }
    }

    pub fn editing(self) -> Option<RecordId> {
        match self {
            Selection::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, Selection::Editing(_))
    }

    /// Expand or collapse `id`. Expanding one record collapses any other.
    /// Ignored while editing. Returns whether the state changed.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        let next = match *self {
            Selection::Editing(_) => return false,
            Selection::Expanded(open) if open == id => Selection::Idle,
            Selection::Idle | Selection::Expanded(_) => Selection::Expanded(id),
        };
        *self = next;
        true
    }

    /// Enter edit mode on `id`. Only valid when `id` is the expanded record
    /// and `eligible` holds.
    pub fn edit(&mut self, id: RecordId, eligible: bool) -> bool {
        match *self {
            Selection::Expanded(open) if open == id && eligible => {
                *self = Selection::Editing(id);
                true
            }
            _ => false,
        }
    }

    /// Leave edit mode after a save or cancel, keeping the record expanded
    pub fn finish(&mut self, id: RecordId) -> bool {
        match *self {
            Selection::Editing(open) if open == id => {
                *self = Selection::Expanded(id);
                true
            }
            _ => false,
        }
    }

    /// Drop any reference to `id` (the record is gone)
    pub fn clear(&mut self, id: RecordId) {
        if self.expanded() == Some(id) {
            *self = Selection::Idle;
        }
    }
}
