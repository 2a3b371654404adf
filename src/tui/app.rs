use crate::todo::models::Task;
use crate::tui::handlers::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Creating,
}

/// Requests for the surrounding runtime; the app itself never touches disk or the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Save(Vec<Task>),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub mode: Mode,
    pub draft_input: String,
}

impl App {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            selected_index: 0,
            mode: Mode::Browsing,
            draft_input: String::new(),
        }
    }

    /// Applies one key press and returns the effects it emits, in order.
    pub fn update(&mut self, key: Key) -> Vec<Effect> {
        match self.mode {
            Mode::Browsing => self.handle_browsing_key(key),
            Mode::Creating => {
                self.handle_creating_key(key);
                Vec::new()
            }
        }
    }

    fn handle_browsing_key(&mut self, key: Key) -> Vec<Effect> {
        match key {
            Key::Down => self.move_selection_down(),
            Key::Up => self.move_selection_up(),
            Key::Enter => self.toggle_selected_task(),
            Key::Char('n') => self.enter_creating_mode(),
            Key::Esc | Key::CtrlC => {
                return vec![Effect::Save(self.tasks.clone()), Effect::Quit];
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_creating_key(&mut self, key: Key) {
        match key {
            Key::Esc | Key::CtrlC => self.leave_creating_mode(),
            Key::Enter => self.confirm_draft(),
            Key::Backspace => {
                self.draft_input.pop();
            }
            Key::Up | Key::Down => {}
            Key::Char(c) => self.draft_input.push(c),
            // Unlisted keys land in the draft under their name, e.g. "left".
            Key::Other(name) => self.draft_input.push_str(&name),
        }
    }

    fn move_selection_down(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.tasks.len();
    }

    fn move_selection_up(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    fn toggle_selected_task(&mut self) {
        if let Some(task) = self.tasks.get_mut(self.selected_index) {
            task.toggle();
        }
    }

    fn enter_creating_mode(&mut self) {
        self.mode = Mode::Creating;
        self.draft_input.clear();
    }

    fn leave_creating_mode(&mut self) {
        self.mode = Mode::Browsing;
        self.draft_input.clear();
    }

    fn confirm_draft(&mut self) {
        if self.draft_input.is_empty() {
            return;
        }
        let label = std::mem::take(&mut self.draft_input);
        self.tasks.push(Task::new(label));
        self.leave_creating_mode();
    }
}
