use ratatui::widgets::ScrollbarState;

const PAGE: usize = 10;

/// Scroll position shared by the text dialogs (info, error, help, logs).
#[derive(Debug, Default, Clone)]
pub struct DialogScroll {
    pub offset: usize,
    pub scrollbar: ScrollbarState,
}

impl DialogScroll {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.scrollbar = ScrollbarState::default();
    }

    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE));
    }

    pub fn top(&mut self) {
        self.set(0);
    }

    /// Clamped to the content length at render time
    pub fn bottom(&mut self) {
        self.set(usize::MAX);
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar = self.scrollbar.position(offset);
    }
}
