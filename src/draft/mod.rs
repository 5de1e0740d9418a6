//! Draft/sync controller shared by every admin editor.
//!
//! Each editor holds a local working copy of one server-held collection.
//! Edits touch only the draft; a single explicit save pushes the whole
//! collection back to the backing store (replace-all, not per-item upsert).
//! Public pages never read a draft: they render live data only, so nothing
//! partially edited is ever visible outside the editor that owns it.

use std::future::Future;

use crate::errors::AppError;

/// Direction for the move-up/move-down reorder control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// What `seed` did with an incoming live value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SeedOutcome {
    /// The draft was clean and has been re-seeded from the new live value.
    Reseeded,
    /// The draft had unsaved edits and was left untouched; the stored live
    /// value was still updated for future seeding. The caller should warn.
    KeptDirtyDraft,
}

/// One editor's view of a server-held collection.
///
/// `dirty` is a might-have-changed flag, not a structural diff: any mutating
/// operation sets it, and only a successful commit, a discard, or a clean
/// re-seed clears it.
#[derive(Debug, Clone)]
pub struct DraftCollection<T: Clone> {
    live: Vec<T>,
    draft: Vec<T>,
    dirty: bool,
    saving: bool,
}

impl<T: Clone> Default for DraftCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> DraftCollection<T> {
    pub fn new() -> Self {
        Self {
            live: Vec::new(),
            draft: Vec::new(),
            dirty: false,
            saving: false,
        }
    }

    /// Create a controller seeded from the current live collection.
    pub fn seeded(live: Vec<T>) -> Self {
        Self {
            draft: live.clone(),
            live,
            dirty: false,
            saving: false,
        }
    }

    /// Last value received from the backing store.
    pub fn live(&self) -> &[T] {
        &self.live
    }

    /// The editable working copy.
    pub fn draft(&self) -> &[T] {
        &self.draft
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True while a commit is in flight; the save control stays disabled.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Take on a fresh authoritative value from upstream.
    ///
    /// A clean draft is discarded and re-seeded. A dirty draft is kept as-is
    /// so no in-progress edit is ever destroyed, but the stored live value
    /// is still replaced for future seeding; the outcome tells the caller
    /// the two have diverged.
    pub fn seed(&mut self, live: Vec<T>) -> SeedOutcome {
        if self.dirty {
            self.live = live;
            SeedOutcome::KeptDirtyDraft
        } else {
            self.draft = live.clone();
            self.live = live;
            SeedOutcome::Reseeded
        }
    }

    /// Apply an edit to the draft. Marks the collection dirty
    /// unconditionally, even when the closure changed nothing.
    pub fn mutate(&mut self, f: impl FnOnce(&mut Vec<T>)) {
        f(&mut self.draft);
        self.dirty = true;
    }

    /// Edit one record in place, resolved by index at call time. Out-of-range
    /// indices fall through to a no-op edit (the collection still becomes
    /// dirty, like any other mutate).
    pub fn mutate_item(&mut self, index: usize, f: impl FnOnce(&mut T)) {
        self.mutate(|items| {
            if let Some(item) = items.get_mut(index) {
                f(item);
            }
        });
    }

    /// Append a record to the draft.
    pub fn push(&mut self, item: T) {
        self.mutate(|items| items.push(item));
    }

    /// Remove the record at `index` from the draft. Out of range is a no-op.
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.draft.len() {
            return;
        }
        self.mutate(|items| {
            items.remove(index);
        });
    }

    /// Swap the record at `index` with its neighbor in the given direction.
    /// A move off either end of the array is a no-op and does not dirty the
    /// draft. Every list editor shares this one implementation.
    pub fn move_item(&mut self, index: usize, direction: Direction) {
        let len = self.draft.len();
        let target = match direction {
            Direction::Up => match index.checked_sub(1) {
                Some(t) => t,
                None => return,
            },
            Direction::Down => index + 1,
        };
        if index >= len || target >= len {
            return;
        }
        self.mutate(|items| items.swap(index, target));
    }

    /// Push the entire draft to the backing store through the injected
    /// `persist` action.
    ///
    /// On success the draft becomes the new live value and the collection is
    /// clean. On failure the draft and the dirty flag are left exactly as
    /// they were: nothing is lost, and the user retries by saving again.
    /// While a commit is in flight further commits are refused; the flag is
    /// per editor instance, never global.
    pub async fn commit<F, Fut>(&mut self, persist: F) -> Result<(), AppError>
    where
        F: FnOnce(Vec<T>) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        if self.saving {
            return Err(AppError::SaveInFlight);
        }
        self.saving = true;
        let result = persist(self.draft.clone()).await;
        self.saving = false;

        result.map(|()| {
            self.live = self.draft.clone();
            self.dirty = false;
        })
    }

    /// Throw the draft away and go back to the live value.
    pub fn discard(&mut self) {
        self.draft = self.live.clone();
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        title: String,
    }

    fn row(id: &str, title: &str) -> Row {
        Row {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_mutate_then_discard_restores_live() {
        let mut dc = DraftCollection::seeded(vec![row("1", "A")]);
        dc.mutate(|items| items.push(row("2", "B")));
        assert!(dc.is_dirty());

        dc.discard();
        assert_eq!(dc.draft(), dc.live());
        assert!(!dc.is_dirty());
    }

    #[test]
    fn test_noop_mutate_still_dirties() {
        let mut dc = DraftCollection::seeded(vec![row("1", "A")]);
        dc.mutate(|_| {});
        assert!(dc.is_dirty());
    }

    #[test]
    fn test_seed_while_clean_reseeds() {
        let mut dc = DraftCollection::seeded(vec![row("1", "A")]);
        let outcome = dc.seed(vec![row("1", "A"), row("2", "B")]);
        assert_eq!(outcome, SeedOutcome::Reseeded);
        assert_eq!(dc.draft().len(), 2);
    }

    #[test]
    fn test_seed_while_dirty_keeps_draft() {
        let mut dc = DraftCollection::seeded(vec![row("1", "A")]);
        dc.mutate_item(0, |r| r.title = "A (edited)".to_string());

        let outcome = dc.seed(vec![row("1", "A"), row("2", "B")]);
        assert_eq!(outcome, SeedOutcome::KeptDirtyDraft);
        assert_eq!(dc.draft().len(), 1);
        assert_eq!(dc.draft()[0].title, "A (edited)");
        // The live reference was still replaced for future seeding.
        assert_eq!(dc.live().len(), 2);
        assert!(dc.is_dirty());
    }

    #[tokio::test]
    async fn test_commit_success_promotes_draft() {
        let mut dc = DraftCollection::seeded(vec![row("1", "A")]);
        dc.push(row("2", "B"));
        assert_eq!(dc.draft().len(), 2);
        assert_eq!(dc.live().len(), 1);

        dc.commit(|_items| async { Ok(()) }).await.unwrap();
        assert_eq!(dc.live().len(), 2);
        assert!(!dc.is_dirty());
        assert!(!dc.is_saving());
    }

    #[tokio::test]
    async fn test_commit_failure_keeps_draft_and_dirty() {
        let mut dc = DraftCollection::seeded(vec![row("1", "A")]);
        dc.push(row("2", "B"));
        let before = dc.draft().to_vec();

        let err = dc
            .commit(|_items| async { Err(AppError::Store("network error".to_string())) })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "network error");
        assert!(dc.is_dirty());
        assert_eq!(dc.draft(), &before[..]);
        assert_eq!(dc.live().len(), 1);
        assert!(!dc.is_saving());
    }

    #[tokio::test]
    async fn test_commit_sends_whole_draft() {
        let mut dc = DraftCollection::seeded(vec![row("1", "A")]);
        dc.push(row("2", "B"));

        let mut sent = Vec::new();
        dc.commit(|items| {
            sent = items;
            async { Ok(()) }
        })
        .await
        .unwrap();
        assert_eq!(sent.len(), 2);
    }

    #[test]
    fn test_move_first_up_is_noop() {
        let mut dc = DraftCollection::seeded(vec![row("1", "A"), row("2", "B")]);
        dc.move_item(0, Direction::Up);
        assert_eq!(dc.draft()[0].id, "1");
        assert!(!dc.is_dirty());
    }

    #[test]
    fn test_move_last_down_is_noop() {
        let mut dc = DraftCollection::seeded(vec![row("1", "A"), row("2", "B")]);
        dc.move_item(1, Direction::Down);
        assert_eq!(dc.draft()[1].id, "2");
        assert!(!dc.is_dirty());
    }

    #[test]
    fn test_double_swap_restores_order() {
        let original = vec![row("1", "A"), row("2", "B"), row("3", "C")];
        let mut dc = DraftCollection::seeded(original.clone());
        dc.move_item(1, Direction::Down);
        assert_eq!(dc.draft()[2].id, "2");
        dc.move_item(2, Direction::Up);
        assert_eq!(dc.draft(), &original[..]);
        assert!(dc.is_dirty());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut dc = DraftCollection::seeded(vec![row("1", "A")]);
        dc.remove_item(5);
        assert_eq!(dc.draft().len(), 1);
        assert!(!dc.is_dirty());
    }
}
