//! Line-by-line version of the bill form, for terminals without the
//! full-screen UI and for piping input in scripts.

use std::io::{self, BufRead, Write};

use voltbill_core::{CustomerClass, ExitDecision, FormInput, Session};

const MENU: &str = "[g]enerate  [s]ave  [c]lear  [e]xit";

enum Line {
    Text(String),
    Eof,
}

fn read_line(input: &mut impl BufRead) -> io::Result<Line> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(Line::Eof);
    }
    let trimmed = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed);
    Ok(Line::Text(buf))
}

fn ask(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<Line> {
    write!(out, "{label}: ")?;
    out.flush()?;
    read_line(input)
}

/// Ask for the four form fields. Returns `None` on end of input.
fn ask_form(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Option<FormInput>> {
    let mut fields = Vec::with_capacity(3);
    for label in ["Customer Name", "Customer ID", "Units Consumed"] {
        match ask(input, out, label)? {
            Line::Text(v) => fields.push(v),
            Line::Eof => return Ok(None),
        }
    }
    let class = loop {
        let Line::Text(v) = ask(input, out, "Customer Type (domestic/commercial/industrial)")? else {
            return Ok(None);
        };
        if v.trim().is_empty() {
            break CustomerClass::default();
        }
        match v.parse::<CustomerClass>() {
            Ok(c) => break c,
            Err(e) => writeln!(out, "{e}")?,
        }
    };
    let mut fields = fields.into_iter();
    Ok(Some(FormInput {
        name: fields.next().unwrap_or_default(),
        id: fields.next().unwrap_or_default(),
        units: fields.next().unwrap_or_default(),
        class,
    }))
}

/// Drive `session` from `input` until a confirmed exit or end of input.
pub fn run(session: &mut Session, mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    loop {
        writeln!(out, "{MENU}")?;
        let Line::Text(cmd) = ask(&mut input, &mut out, ">")? else {
            return Ok(());
        };
        match cmd.trim().to_ascii_lowercase().as_str() {
            "g" | "generate" => {
                let Some(form) = ask_form(&mut input, &mut out)? else {
                    return Ok(());
                };
                session.input = form;
                match session.generate() {
                    Ok(receipt) => write!(out, "\n{}\n", receipt.text)?,
                    Err(e) => writeln!(out, "{}", e.user_message())?,
                }
            }
            "s" | "save" => match session.save() {
                Ok(path) => writeln!(out, "Bill saved successfully! ({})", path.display())?,
                Err(e) => writeln!(out, "{}", e.user_message())?,
            },
            "c" | "clear" => {
                session.clear();
                writeln!(out, "Form cleared.")?;
            }
            "e" | "exit" | "q" | "quit" => {
                let confirmed = match ask(&mut input, &mut out, "Exit Application? [y/N]")? {
                    Line::Text(a) => matches!(a.trim(), "y" | "Y" | "yes" | "Yes"),
                    Line::Eof => true,
                };
                if session.exit(confirmed) == ExitDecision::Quit {
                    return Ok(());
                }
            }
            "" => {}
            other => writeln!(out, "unknown command {other:?}")?,
        }
    }
}
