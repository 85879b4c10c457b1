use parking_lot::Mutex;
use std::collections::HashMap;

/// Fixed palette drawn from round-robin as new names appear.
pub const PALETTE: [&str; 10] = [
    "#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe", "#00f2fe", "#43e97b", "#38f9d7",
    "#ffecd2", "#fcb69f",
];

/// Process-wide username -> color table, first-seen-wins. Entries are
/// never evicted, so a returning user keeps a stable color for the
/// process lifetime.
#[derive(Default)]
pub struct ColorPalette {
    assigned: Mutex<HashMap<String, &'static str>>,
}

impl ColorPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_for(&self, username: &str) -> String {
        let mut assigned = self.assigned.lock();
        if let Some(color) = assigned.get(username) {
            return (*color).to_string();
        }
        let color = PALETTE[assigned.len() % PALETTE.len()];
        assigned.insert(username.to_string(), color);
        color.to_string()
    }
}
