use super::*;

impl App {
    /// Keep `selected` within the rows that exist.
    pub fn clamp_selected(&mut self) {
        self.selected = std::cmp::min(self.selected, self.row_count().saturating_sub(1));
    }

    /// Adjust `offset` so the selected row is visible within a viewport of
    /// `height` rows.
    pub fn ensure_selection_visible(&mut self, height: usize) {
        let len = self.row_count();
        if height == 0 || len == 0 {
            self.offset = 0;
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
            return;
        }
        let max_offset = len.saturating_sub(height);
        if self.selected >= self.offset + height {
            self.offset = std::cmp::min(self.selected + 1 - height, max_offset);
        } else if self.offset > max_offset {
            self.offset = max_offset;
        }
    }

    /// Move the cursor down one row.
    pub fn next(&mut self, list_height: usize) {
        if self.selected + 1 < self.row_count() {
            self.selected += 1;
        }
        self.ensure_selection_visible(list_height);
    }

    /// Move the cursor up one row.
    pub fn previous(&mut self, list_height: usize) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_selection_visible(list_height);
    }

    pub fn page_down(&mut self, list_height: usize) {
        self.selected = std::cmp::min(
            self.selected.saturating_add(list_height),
            self.row_count().saturating_sub(1),
        );
        self.ensure_selection_visible(list_height);
    }

    pub fn page_up(&mut self, list_height: usize) {
        self.selected = self.selected.saturating_sub(list_height);
        self.ensure_selection_visible(list_height);
    }
}
