use std::collections::HashMap;

/// Track uri → selected flag.
///
/// A uri that was never toggled counts as not selected. Selected uris come
/// back in the order they were first toggled, which is the order they end
/// up in the playlist.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    flags: HashMap<String, bool>,
    order: Vec<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the flag for `uri` and returns the new state.
    pub fn toggle(&mut self, uri: &str) -> bool {
        match self.flags.get_mut(uri) {
            Some(flag) => {
                *flag = !*flag;
                *flag
            }
            None => {
                self.flags.insert(uri.to_string(), true);
                self.order.push(uri.to_string());
                true
            }
        }
    }

    /// Whether `uri` is currently selected. Unknown uris are not.
    pub fn is_selected(&self, uri: &str) -> bool {
        self.flags.get(uri).copied().unwrap_or(false)
    }

    /// Selected uris in first-toggle order.
    pub fn selected_uris(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|uri| self.is_selected(uri))
            .cloned()
            .collect()
    }

    pub fn len_selected(&self) -> usize {
        self.flags.values().filter(|selected| **selected).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len_selected() == 0
    }

    /// Forgets every flag, including the toggle order.
    pub fn clear(&mut self) {
        self.flags.clear();
        self.order.clear();
    }
}
