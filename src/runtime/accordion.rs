/// Single-select accordion: at most one entry is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<u32>,
}

impl Accordion {
    /// Header of entry `id` was clicked. Collapses it if it was open,
    /// otherwise opens it and collapses whichever entry was open.
    pub fn toggle(&mut self, id: u32) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    pub fn open_id(&self) -> Option<u32> {
        self.open
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.open == Some(id)
    }
}
