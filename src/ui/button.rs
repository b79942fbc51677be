//! Purchase button component.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};
use tracing::trace;

use crate::ui::view::View;

/// Label shown on the button face.
const LABEL: &str = "I am sdk";

/// Plain background behind the label.
const BACKGROUND: Color = Color::White;

/// An embeddable button that shows a fixed label and reports activations.
///
/// The host owns everything behind an activation: the button only forwards
/// the event, exactly once per activation, with no arguments and no
/// debouncing. It holds no state beyond the callback.
pub struct PurchaseButton {
    on_activate: Box<dyn Fn() + Send>,
}

impl PurchaseButton {
    /// Creates a button that invokes `on_activate` on each activation.
    ///
    /// Construction cannot fail. The callback runs on whatever context the
    /// host runtime dispatches interaction events from.
    pub fn new(on_activate: impl Fn() + Send + 'static) -> Self {
        Self {
            on_activate: Box::new(on_activate),
        }
    }

    /// Describes what the button looks like.
    ///
    /// Pure: the same static description is produced on every call.
    pub fn view(&self) -> View {
        View::Text {
            label: LABEL.to_string(),
            background: BACKGROUND,
        }
    }

    /// Invokes the stored callback once.
    pub fn activate(&self) {
        trace!("purchase button activated");
        (self.on_activate)();
    }

    /// Routes a terminal input event to the button.
    ///
    /// Enter and space key-presses activate; every other event is ignored.
    /// Returns whether the event activated the button.
    pub fn handle_event(&self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.activate();
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }
}

/// Renders the button's current description into `area`.
pub fn render(frame: &mut Frame, area: Rect, button: &PurchaseButton) {
    let View::Text { label, background } = button.view();
    let para = Paragraph::new(label).style(Style::default().fg(Color::Black).bg(background));
    frame.render_widget(para, area);
}
