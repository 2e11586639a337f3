use voltbill_core::{Session, Settings};

/// Launch the bill form.
///
/// With the `tui` feature (default): opens the full-screen ratatui form
/// unless `plain` is set. Without it, or with `plain`: line-by-line prompts
/// on stdin/stdout.
pub fn execute(settings: Settings, plain: bool) -> anyhow::Result<()> {
    #[cfg(feature = "tui")]
    {
        if !plain {
            return crate::tui::run(settings);
        }
    }

    #[cfg(not(feature = "tui"))]
    if !plain {
        eprintln!("voltbill form (plain mode; rebuild with the `tui` feature for the full-screen form)");
    }

    let mut session = Session::new(settings);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    crate::prompt::run(&mut session, stdin.lock(), stdout.lock())?;
    Ok(())
}
