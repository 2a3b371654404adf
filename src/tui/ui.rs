use crate::tui::app::{App, Mode};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Padding, Paragraph},
};

const GREETING: &str = "🧙 Mornin', adventurer! ☁️⚡";
const INSTRUCTIONS: &str = "⚔️  Press 'n' to add a new daily battle ⚔️.";
const PROMPT: &str = "Add Task: ";

const ACCENT: Color = Color::Rgb(0x1F, 0x6F, 0xEB);

/// Styles used by `render`. Passed in by value; nothing here is global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub task: Style,
    pub completed: Style,
    pub pointer: Style,
    pub input: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            task: Style::default().fg(ACCENT),
            completed: Style::default()
                .fg(Color::Indexed(240))
                .add_modifier(Modifier::CROSSED_OUT),
            pointer: Style::default().fg(ACCENT),
            input: Style::default().fg(ACCENT),
        }
    }
}

pub fn render(app: &App, theme: &Theme) -> Text<'static> {
    match app.mode {
        Mode::Creating => Text::from(Line::from(Span::styled(
            format!("{}{}", PROMPT, app.draft_input),
            theme.input,
        ))),
        Mode::Browsing => {
            let mut lines = vec![Line::from(GREETING), Line::from("")];

            for (i, task) in app.tasks.iter().enumerate() {
                let marker = if i == app.selected_index {
                    Span::styled(">", theme.pointer)
                } else {
                    Span::raw(" ")
                };
                let style = if task.completed { theme.completed } else { theme.task };
                lines.push(Line::from(vec![
                    marker,
                    Span::raw(" "),
                    Span::styled(task.label.clone(), style),
                ]));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(INSTRUCTIONS));
            Text::from(lines)
        }
    }
}

pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let body = Paragraph::new(render(app, theme))
        .block(Block::default().padding(Padding::new(2, 2, 1, 1)));

    frame.render_widget(body, frame.size());
}
