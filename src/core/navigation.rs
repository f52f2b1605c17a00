//! # Navigation State
//!
//! The list currently on screen, which entry is selected, and what kind of
//! list it is. The list is replaced wholesale whenever a screen loads and is
//! never edited in place.
//!
//! Every mutation bumps `revision`. The renderer remembers the revision it
//! last drew and redraws when it changes.

/// One entry in a navigable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub label: String,
    pub target_url: String,
    /// `(season, number)` for episodes.
    pub sort_keys: Option<(u32, u32)>,
}

impl ListItem {
    pub fn new(label: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_url: target_url.into(),
            sort_keys: None,
        }
    }

    pub fn with_sort_keys(mut self, season: u32, number: u32) -> Self {
        self.sort_keys = Some((season, number));
        self
    }
}

/// What the current list contains. Decides what `select` means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListType {
    #[default]
    Main,
    Movies,
    Shows,
    Episodes,
}

impl ListType {
    /// Lists whose entries are playable media rather than links.
    pub fn is_playable(self) -> bool {
        matches!(self, ListType::Movies | ListType::Episodes)
    }
}

#[derive(Debug, Default)]
pub struct NavigationState {
    items: Vec<ListItem>,
    selected: usize,
    list_type: ListType,
    current_url: Option<String>,
    revision: u64,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list and select its first entry. An empty list clears the
    /// selection.
    pub fn set_list(&mut self, items: Vec<ListItem>) {
        self.current_url = items.first().map(|item| item.target_url.clone());
        self.items = items;
        self.selected = 0;
        self.touch();
    }

    /// Select the next entry, wrapping from last to first.
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.select((self.selected + 1) % self.items.len());
    }

    /// Select the previous entry, wrapping from first to last.
    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        self.select((self.selected + len - 1) % len);
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.current_url = Some(self.items[index].target_url.clone());
        self.touch();
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn set_list_type(&mut self, list_type: ListType) {
        if self.list_type != list_type {
            self.list_type = list_type;
            self.touch();
        }
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&ListItem> {
        self.items.get(self.selected)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
