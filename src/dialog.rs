//! Size selection sub-dialog: collects exactly one choice from a
//! server-supplied set before an add is retried.
//!
//! The dialog has no server awareness. It is a pure selection collector; the
//! retried add lives in the session.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeDialog {
    open: bool,
    title: String,
    price: String,
    options: Vec<String>,
    selected: Option<usize>,
}

impl SizeDialog {
    /// Opens with one selectable control per option and no selection made.
    pub fn open_with(&mut self, title: &str, price: &str, options: Vec<String>) {
        self.open = true;
        self.title = title.to_string();
        self.price = price.to_string();
        self.options = options;
        self.selected = None;
    }

    /// Exclusive selection: picking a new option deselects the previous one.
    /// Options not in the set are ignored.
    pub fn select(&mut self, option: &str) {
        if !self.open {
            return;
        }
        if let Some(index) = self.options.iter().position(|o| o == option) {
            self.selected = Some(index);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_size(&self) -> Option<&str> {
        self.selected.map(|index| self.options[index].as_str())
    }

    /// Closes and clears everything; used by confirm and dismiss alike.
    pub fn close(&mut self) {
        self.open = false;
        self.title.clear();
        self.price.clear();
        self.options.clear();
        self.selected = None;
    }
}
