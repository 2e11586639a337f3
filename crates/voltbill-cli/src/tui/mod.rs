mod app;
mod ui;

use crossterm::event::{self, Event, KeyEventKind};
use voltbill_core::Settings;

use app::App;

/// Run the full-screen bill form until the user confirms exit.
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, App::new(settings));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> anyhow::Result<()> {
    tracing::debug!("bill form opened");
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
