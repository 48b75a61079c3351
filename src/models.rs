use std::collections::HashMap;

/// Stable identity of a directory, assigned at creation and never reused
/// within a run.
pub type DirectoryId = u64;

/// A named group of messages
#[derive(Clone, Debug, PartialEq)]
pub struct Directory {
    pub id: DirectoryId,
    pub title: String,
}

/// The board - single owner of both collections.
///
/// Directories keep their display order; message sequences are keyed by the
/// directory's stable id rather than its title, so a rename never has to
/// re-key the map.
#[derive(Clone, Debug, Default)]
pub struct Board {
    directories: Vec<Directory>,
    messages: HashMap<DirectoryId, Vec<String>>,
    next_id: DirectoryId,
}

impl Board {
    pub fn new() -> Self {
        Board {
            directories: Vec::new(),
            messages: HashMap::new(),
            next_id: 1,
        }
    }

    /// Board pre-populated with the demo notice groups
    pub fn seed() -> Self {
        let mut board = Board::new();
        let demo: [(&str, &[&str]); 4] = [
            (
                "University Announcements",
                &[
                    "Semester starts on September 5",
                    "Fee deadline: August 25",
                    "Midterms start in October",
                ],
            ),
            (
                "Club Notices",
                &[
                    "Coding Club meets every Friday",
                    "Dance Club auditions on Sept 10",
                    "Photography Club field trip on Sept 15",
                ],
            ),
            (
                "Event Alerts",
                &[
                    "Hackathon this weekend!",
                    "Tech Talk by Google Engineer on Sept 20",
                    "Annual Fest on Nov 1-3",
                ],
            ),
            (
                "Emergency Updates",
                &[
                    "COVID-19 protocols updated",
                    "Storm warning for Thursday",
                    "Fire drill scheduled next week",
                ],
            ),
        ];
        for (title, msgs) in demo {
            board.add_directory(title, "");
            for msg in msgs {
                board.add_message(title, msg);
            }
        }
        board
    }

    /// Generate a unique directory id
    fn allocate_id(&mut self) -> DirectoryId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn find(&self, title: &str) -> Option<&Directory> {
        self.directories.iter().find(|d| d.title == title)
    }

    // ========================
    // Read access
    // ========================

    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    pub fn contains(&self, title: &str) -> bool {
        self.find(title).is_some()
    }

    /// Messages of a directory, in order. Unknown titles yield an empty slice.
    pub fn messages(&self, title: &str) -> &[String] {
        self.find(title)
            .and_then(|d| self.messages.get(&d.id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ========================
    // Directory mutations
    // ========================

    /// Append a new directory. The initial message is optional: blank means
    /// the directory starts empty. Returns false on blank or duplicate title.
    pub fn add_directory(&mut self, title: &str, initial_message: &str) -> bool {
        let title = title.trim();
        if title.is_empty() || self.contains(title) {
            tracing::debug!(title, "Rejected directory add");
            return false;
        }

        let id = self.allocate_id();
        let initial = initial_message.trim();
        let msgs = if initial.is_empty() {
            Vec::new()
        } else {
            vec![initial.to_string()]
        };
        self.messages.insert(id, msgs);
        self.directories.push(Directory {
            id,
            title: title.to_string(),
        });
        tracing::info!(id, title, "Created directory");
        true
    }

    /// Rename a directory in place. A rename colliding with a *different*
    /// existing directory is rejected outright - silently merging the two
    /// message sequences would lose data.
    pub fn rename_directory(&mut self, old_title: &str, new_title: &str) -> bool {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            tracing::debug!(old_title, "Rejected rename to blank title");
            return false;
        }
        if new_title != old_title && self.contains(new_title) {
            tracing::debug!(old_title, new_title, "Rejected colliding rename");
            return false;
        }

        match self.directories.iter_mut().find(|d| d.title == old_title) {
            Some(dir) => {
                dir.title = new_title.to_string();
                tracing::info!(id = dir.id, old_title, new_title, "Renamed directory");
                true
            }
            None => false,
        }
    }

    /// Remove a directory and its entire message sequence. Idempotent:
    /// an unknown title is a successful no-op.
    pub fn delete_directory(&mut self, title: &str) -> bool {
        if let Some(pos) = self.directories.iter().position(|d| d.title == title) {
            let dir = self.directories.remove(pos);
            self.messages.remove(&dir.id);
            tracing::info!(id = dir.id, title, "Deleted directory");
        }
        true
    }

    // ========================
    // Message mutations
    // ========================

    /// Append a message to the end of a directory's sequence
    pub fn add_message(&mut self, title: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(id) = self.find(title).map(|d| d.id) else {
            return false;
        };

        if let Some(msgs) = self.messages.get_mut(&id) {
            msgs.push(text.to_string());
            tracing::info!(directory = title, "Added message");
            return true;
        }
        false
    }

    /// Replace the message at `index`. Out-of-range indices are a no-op.
    pub fn edit_message(&mut self, title: &str, index: usize, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(id) = self.find(title).map(|d| d.id) else {
            return false;
        };

        match self.messages.get_mut(&id).and_then(|m| m.get_mut(index)) {
            Some(slot) => {
                *slot = text.to_string();
                tracing::info!(directory = title, index, "Edited message");
                true
            }
            None => false,
        }
    }

    /// Remove the message at `index`, shifting later messages down one
    pub fn delete_message(&mut self, title: &str, index: usize) -> bool {
        let Some(id) = self.find(title).map(|d| d.id) else {
            return false;
        };

        match self.messages.get_mut(&id) {
            Some(msgs) if index < msgs.len() => {
                msgs.remove(index);
                tracing::info!(directory = title, index, "Deleted message");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_directory_creates_empty_sequence() {
        let mut board = Board::new();
        assert!(board.add_directory("Club Notices", ""));
        assert_eq!(board.directories().len(), 1);
        assert!(board.messages("Club Notices").is_empty());
    }

    #[test]
    fn test_add_directory_with_initial_message() {
        let mut board = Board::new();
        assert!(board.add_directory("Club Notices", "Meeting Friday"));
        assert_eq!(board.messages("Club Notices"), ["Meeting Friday"]);
    }

    #[test]
    fn test_add_directory_rejects_blank_title() {
        let mut board = Board::new();
        assert!(!board.add_directory("", "hello"));
        assert!(!board.add_directory("   ", "hello"));
        assert!(board.directories().is_empty());
    }

    #[test]
    fn test_add_directory_rejects_duplicate_title() {
        let mut board = Board::new();
        assert!(board.add_directory("A", ""));
        assert!(!board.add_directory("A", ""));
        assert!(!board.add_directory("  A  ", ""));
        assert_eq!(board.directories().len(), 1);
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let mut board = Board::new();
        board.add_directory("A", "");
        board.add_directory("B", "");
        let ids: Vec<_> = board.directories().iter().map(|d| d.id).collect();
        assert_ne!(ids[0], ids[1]);

        // Deleting and re-adding never reuses an id
        board.delete_directory("B");
        board.add_directory("C", "");
        let c = board.directories().iter().find(|d| d.title == "C").unwrap();
        assert!(!ids.contains(&c.id));
    }

    #[test]
    fn test_rename_preserves_messages() {
        let mut board = Board::new();
        board.add_directory("A", "m1");
        board.add_message("A", "m2");
        assert!(board.rename_directory("A", "B"));
        assert_eq!(board.messages("B"), ["m1", "m2"]);
        assert!(!board.contains("A"));
        assert!(board.messages("A").is_empty());
    }

    #[test]
    fn test_rename_rejects_collision() {
        let mut board = Board::new();
        board.add_directory("A", "a1");
        board.add_directory("B", "b1");
        assert!(!board.rename_directory("A", "B"));
        // Nothing was merged or dropped
        assert_eq!(board.messages("A"), ["a1"]);
        assert_eq!(board.messages("B"), ["b1"]);
    }

    #[test]
    fn test_rename_to_own_title_is_ok() {
        let mut board = Board::new();
        board.add_directory("A", "a1");
        assert!(board.rename_directory("A", "A"));
        assert_eq!(board.messages("A"), ["a1"]);
    }

    #[test]
    fn test_rename_rejects_blank() {
        let mut board = Board::new();
        board.add_directory("A", "");
        assert!(!board.rename_directory("A", "  "));
        assert!(board.contains("A"));
    }

    #[test]
    fn test_delete_directory_removes_messages() {
        let mut board = Board::new();
        board.add_directory("A", "m1");
        assert!(board.delete_directory("A"));
        assert!(board.directories().is_empty());
        assert!(board.messages("A").is_empty());
        // Idempotent
        assert!(board.delete_directory("A"));
    }

    #[test]
    fn test_add_message_appends() {
        let mut board = Board::new();
        board.add_directory("A", "");
        assert!(board.add_message("A", "m1"));
        assert!(board.add_message("A", "  m2  "));
        assert_eq!(board.messages("A"), ["m1", "m2"]);
    }

    #[test]
    fn test_add_message_rejects_blank_and_unknown() {
        let mut board = Board::new();
        board.add_directory("A", "");
        assert!(!board.add_message("A", "   "));
        assert!(!board.add_message("Nope", "text"));
        assert!(board.messages("A").is_empty());
    }

    #[test]
    fn test_edit_message_changes_only_target() {
        let mut board = Board::new();
        board.add_directory("A", "m1");
        board.add_message("A", "m2");
        board.add_message("A", "m3");
        assert!(board.edit_message("A", 1, "new"));
        assert_eq!(board.messages("A"), ["m1", "new", "m3"]);
    }

    #[test]
    fn test_edit_message_out_of_range_is_noop() {
        let mut board = Board::new();
        board.add_directory("A", "m1");
        assert!(!board.edit_message("A", 5, "new"));
        assert_eq!(board.messages("A"), ["m1"]);
    }

    #[test]
    fn test_delete_message_shifts_indices() {
        let mut board = Board::new();
        board.add_directory("A", "m1");
        board.add_message("A", "m2");
        assert!(board.delete_message("A", 0));
        assert_eq!(board.messages("A"), ["m2"]);
        assert!(!board.delete_message("A", 1));
    }

    #[test]
    fn test_add_edit_delete_round_trip() {
        let mut board = Board::new();
        board.add_directory("A", "m1");
        let before = board.messages("A").to_vec();

        board.add_message("A", "x");
        let last = board.messages("A").len() - 1;
        board.edit_message("A", last, "y");
        board.delete_message("A", last);

        assert_eq!(board.messages("A"), before);
    }

    #[test]
    fn test_seed_data() {
        let board = Board::seed();
        assert_eq!(board.directories().len(), 4);
        assert_eq!(board.messages("Club Notices").len(), 3);
        assert!(board.contains("Emergency Updates"));
    }
}
