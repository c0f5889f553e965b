use indexmap::IndexMap;

/// Per-diagram section store.
///
/// One instance is created per parsed diagram: the parser mutates it while
/// walking the statements, layout and rendering only read from it. There is
/// no process-wide shared state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieDb {
    sections: IndexMap<String, f64>,
    show_data: bool,
    title: String,
    acc_title: String,
    acc_description: String,
}

impl PieDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `(label, value)` unless the label is already present.
    ///
    /// Duplicate labels are a silent no-op: the first occurrence wins.
    pub fn add_section(&mut self, label: &str, value: f64) {
        if self.sections.contains_key(label) {
            tracing::debug!("ignoring duplicate section: {label}");
            return;
        }
        self.sections.insert(label.to_string(), value);
        tracing::debug!("added new section: {label}, with value: {value}");
    }

    /// Sections in insertion order. The renderer re-sorts by value, so the
    /// stored order only affects tie-breaking.
    pub fn sections(&self) -> &IndexMap<String, f64> {
        &self.sections
    }

    /// Whether legend entries show the raw value alongside the label.
    pub fn set_show_data(&mut self, show: bool) {
        self.show_data = show;
    }

    pub fn show_data(&self) -> bool {
        self.show_data
    }

    pub fn set_diagram_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn diagram_title(&self) -> &str {
        &self.title
    }

    pub fn set_acc_title(&mut self, title: &str) {
        self.acc_title = title.to_string();
    }

    pub fn acc_title(&self) -> &str {
        &self.acc_title
    }

    pub fn set_acc_description(&mut self, description: &str) {
        self.acc_description = description.to_string();
    }

    pub fn acc_description(&self) -> &str {
        &self.acc_description
    }

    /// Resets the store to its post-construction state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
