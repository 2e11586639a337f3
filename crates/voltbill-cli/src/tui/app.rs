use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use voltbill_core::{ExitDecision, Session, Settings};

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Id,
    Units,
    Class,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Id,
            Focus::Id => Focus::Units,
            Focus::Units => Focus::Class,
            Focus::Class => Focus::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Name => Focus::Class,
            Focus::Id => Focus::Name,
            Focus::Units => Focus::Id,
            Focus::Class => Focus::Units,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Name => "Customer Name",
            Focus::Id => "Customer ID",
            Focus::Units => "Units Consumed",
            Focus::Class => "Customer Type",
        }
    }
}

/// Blocking popup over the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Info(String),
    Error(String),
    ConfirmExit,
}

/// Application state for the TUI.
pub struct App {
    pub session: Session,
    pub focus: Focus,
    pub modal: Option<Modal>,
    pub should_quit: bool,
    pub receipt_scroll: u16,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(settings),
            focus: Focus::Name,
            modal: None,
            should_quit: false,
            receipt_scroll: 0,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.modal {
            Some(Modal::ConfirmExit) => return self.handle_confirm(key),
            // Any key dismisses a notification.
            Some(_) => {
                self.modal = None;
                return;
            }
            None => {}
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => self.save(),
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::Char('c') if ctrl => self.modal = Some(Modal::ConfirmExit),
            KeyCode::F(2) | KeyCode::Enter => self.generate(),
            KeyCode::F(3) => self.save(),
            KeyCode::F(4) => self.clear(),
            KeyCode::F(10) | KeyCode::Esc => self.modal = Some(Modal::ConfirmExit),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::PageDown => self.scroll_down(),
            KeyCode::PageUp => self.receipt_scroll = self.receipt_scroll.saturating_sub(1),
            KeyCode::Right if self.focus == Focus::Class => {
                self.session.input.class = self.session.input.class.next();
            }
            KeyCode::Left if self.focus == Focus::Class => {
                self.session.input.class = self.session.input.class.prev();
            }
            KeyCode::Char(' ') if self.focus == Focus::Class => {
                self.session.input.class = self.session.input.class.next();
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.focused_text_mut() {
                    field.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_text_mut() {
                    field.pop();
                }
            }
            _ => {}
        }
    }

    fn handle_confirm(&mut self, key: KeyEvent) {
        let confirmed = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
            _ => return,
        };
        self.modal = None;
        if self.session.exit(confirmed) == ExitDecision::Quit {
            self.should_quit = true;
        }
    }

    fn scroll_down(&mut self) {
        let max = self.session.receipt_text().lines().count();
        if usize::from(self.receipt_scroll) < max.saturating_sub(1) {
            self.receipt_scroll += 1;
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        let input = &mut self.session.input;
        match self.focus {
            Focus::Name => Some(&mut input.name),
            Focus::Id => Some(&mut input.id),
            Focus::Units => Some(&mut input.units),
            Focus::Class => None,
        }
    }

    fn generate(&mut self) {
        if let Err(e) = self.session.generate() {
            self.modal = Some(Modal::Error(e.user_message().to_string()));
            return;
        }
        self.receipt_scroll = 0;
    }

    fn save(&mut self) {
        self.modal = Some(match self.session.save() {
            Ok(path) => Modal::Info(format!("Bill saved successfully!\n{}", path.display())),
            Err(e) => Modal::Error(e.user_message().to_string()),
        });
    }

    fn clear(&mut self) {
        self.session.clear();
        self.focus = Focus::Name;
        self.receipt_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltbill_core::CustomerClass;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill(app: &mut App, name: &str, id: &str, units: &str) {
        type_str(app, name);
        press(app, KeyCode::Tab);
        type_str(app, id);
        press(app, KeyCode::Tab);
        type_str(app, units);
        press(app, KeyCode::Tab);
    }

    fn app_in(dir: &std::path::Path) -> App {
        App::new(Settings::default().with_out_dir(dir))
    }

    #[test]
    fn new_app_is_idle() {
        let app = App::new(Settings::default());
        assert_eq!(app.focus, Focus::Name);
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
        assert!(!app.session.is_ready());
    }

    #[test]
    fn focus_cycling() {
        assert_eq!(Focus::Name.next(), Focus::Id);
        assert_eq!(Focus::Class.next(), Focus::Name);
        assert_eq!(Focus::Name.prev(), Focus::Class);
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Class);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Focus::Name);
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut app = App::new(Settings::default());
        type_str(&mut app, "Ashx");
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "a");
        assert_eq!(app.session.input.name, "Asha");
        assert!(app.session.input.id.is_empty());
    }

    #[test]
    fn class_selector_cycles() {
        let mut app = App::new(Settings::default());
        app.focus = Focus::Class;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.input.class, CustomerClass::Commercial);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.input.class, CustomerClass::Industrial);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.input.class, CustomerClass::Commercial);
        // Letters do not leak into any text field while the selector has focus.
        press(&mut app, KeyCode::Char('x'));
        assert!(app.session.input.is_empty());
    }

    #[test]
    fn enter_generates_bill() {
        let mut app = App::new(Settings::default());
        fill(&mut app, "Asha", "C001", "250");
        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_none());
        assert!(app.session.receipt_text().contains("Total Payable   : ₹ 441.00"));
    }

    #[test]
    fn receipt_scroll_stops_at_last_line() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.receipt_scroll, 0);

        fill(&mut app, "Asha", "C001", "250");
        press(&mut app, KeyCode::Enter);
        let lines = app.session.receipt_text().lines().count() as u16;
        for _ in 0..50 {
            press(&mut app, KeyCode::PageDown);
        }
        assert_eq!(app.receipt_scroll, lines - 1);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.receipt_scroll, lines - 2);
    }

    #[test]
    fn missing_field_shows_error() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::F(2));
        assert_eq!(
            app.modal,
            Some(Modal::Error("Please fill all fields!".into()))
        );
        // Any key dismisses, and the key is not applied to the form.
        press(&mut app, KeyCode::Char('z'));
        assert!(app.modal.is_none());
        assert!(app.session.input.name.is_empty());
    }

    #[test]
    fn invalid_units_shows_error() {
        let mut app = App::new(Settings::default());
        fill(&mut app, "Asha", "C001", "abc");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.modal,
            Some(Modal::Error("Units must be a valid number!".into()))
        );
    }

    #[test]
    fn save_flow() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_in(tmp.path());
        ctrl(&mut app, 's');
        assert_eq!(app.modal, Some(Modal::Error("Generate a bill first!".into())));
        press(&mut app, KeyCode::Esc);

        fill(&mut app, "Asha", "C001", "250");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::F(3));
        match &app.modal {
            Some(Modal::Info(msg)) => assert!(msg.starts_with("Bill saved successfully!")),
            other => panic!("expected info modal, got {other:?}"),
        }
        let saved = std::fs::read_to_string(tmp.path().join("ElectricityBill_C001.txt")).unwrap();
        assert_eq!(saved, app.session.receipt_text());
    }

    #[test]
    fn clear_resets_form() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_in(tmp.path());
        fill(&mut app, "Asha", "C001", "250");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'l');
        assert!(app.session.input.is_empty());
        assert_eq!(app.session.input.class, CustomerClass::Industrial);
        assert_eq!(app.session.receipt_text(), "");
        assert_eq!(app.focus, Focus::Name);
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.modal, Some(Modal::Error("Generate a bill first!".into())));
    }

    #[test]
    fn exit_requires_confirmation() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, Some(Modal::ConfirmExit));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modal, Some(Modal::ConfirmExit));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.modal.is_none());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::F(10));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_asks_before_quitting() {
        let mut app = App::new(Settings::default());
        ctrl(&mut app, 'c');
        assert_eq!(app.modal, Some(Modal::ConfirmExit));
        assert!(!app.should_quit);
    }
}
