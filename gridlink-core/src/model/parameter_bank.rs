use super::ParameterBank;

/// Parameter pages of the cursor device.
#[derive(Debug, Clone)]
pub struct ParameterPages {
    names: Vec<String>,
    selected: usize,
}

impl ParameterPages {
    pub fn new(names: Vec<String>) -> Self {
        Self { names, selected: 0 }
    }

    pub fn selected_page(&self) -> usize {
        self.selected
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.names.get(self.selected).map(String::as_str)
    }
}

impl ParameterBank for ParameterPages {
    fn select_previous_page(&mut self) {
        if self.has_previous_page() {
            self.selected -= 1;
        }
    }

    fn select_next_page(&mut self) {
        if self.has_next_page() {
            self.selected += 1;
        }
    }

    fn has_previous_page(&self) -> bool {
        self.selected > 0
    }

    fn has_next_page(&self) -> bool {
        self.selected + 1 < self.names.len()
    }
}
