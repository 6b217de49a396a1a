//! folio terminal entry point.
//!
//! Runs the portfolio shell in a raw-mode terminal. When stdin is not a
//! terminal, each input line is run to completion and printed as plain text.
//! Pass a config file path as the first argument, or set `FOLIO_CONFIG`.

mod effects;
mod input;
mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;

use folio_terminal::content::Portfolio;
use folio_terminal::effects::{NoEffects, SideEffects};
use folio_terminal::input::{InputLine, LineAction};
use folio_terminal::Session;
use folio_types::config::ShellConfig;

use effects::DesktopEffects;
use render::{Frame, Renderer};

/// Longest wait for a key press while nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Log filter used when `RUST_LOG` is unset. Logs go to stderr, which is the
/// same screen the raw-mode loop paints, so interactive runs stay quiet.
fn default_log_filter(interactive: bool) -> &'static str {
    if interactive { "error" } else { "info" }
}

fn main() -> Result<()> {
    let interactive = io::stdin().is_terminal();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(interactive)),
    )
    .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ShellConfig::resolve(config_path.as_deref())?;
    let content = match config.content_path {
        Some(ref path) => Portfolio::load(path)?,
        None => Portfolio::builtin()?,
    };
    log::info!(
        "Starting folio for {} ({} projects)",
        content.profile.name,
        content.projects.len()
    );

    if interactive {
        let session = Session::new(config, content, DesktopEffects::new())?;
        run_interactive(session)
    } else {
        let session = Session::new(config, content, NoEffects)?;
        run_piped(session)
    }
}

/// Submit each stdin line, run it to idle, and print what it produced.
fn run_piped<E: SideEffects>(mut session: Session<E>) -> Result<()> {
    let prompt = session.config().prompt.clone();
    let mut renderer = Renderer::new();
    let mut out = io::stdout().lock();

    print_frame(&mut out, renderer.frame(session.log(), &prompt))?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        session.submit(&line);
        session.run_until_idle();
        print_frame(&mut out, renderer.frame(session.log(), &prompt))?;
    }
    out.flush()?;
    Ok(())
}

fn print_frame<W: Write>(out: &mut W, frame: Frame) -> io::Result<()> {
    let (Frame::Append(lines) | Frame::Redraw(lines)) = frame;
    out.write_all(render::plain_text(&lines).as_bytes())
}

fn run_interactive<E: SideEffects>(mut session: Session<E>) -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = event_loop(&mut session);
    // Restore the terminal even when the loop failed.
    terminal::disable_raw_mode()?;
    print!("\r\n");
    io::stdout().flush()?;
    log::info!("Session ended after {} commands", session.history().len());
    result
}

fn event_loop<E: SideEffects>(session: &mut Session<E>) -> Result<()> {
    let mut out = io::stdout();
    let mut renderer = Renderer::new();
    renderer.invalidate();
    let mut line = InputLine::new();
    let mut theme = session.theme();
    let mut last_tick = Instant::now();

    loop {
        if session.theme() != theme {
            theme = session.theme();
            renderer.invalidate();
        }
        let frame = renderer.frame(session.log(), &session.config().prompt);
        let dirty = match frame {
            Frame::Append(ref lines) => !lines.is_empty(),
            Frame::Redraw(_) => true,
        };
        if dirty {
            // New output replaces the input row, which is repainted below.
            crossterm::queue!(
                out,
                crossterm::cursor::MoveToColumn(0),
                terminal::Clear(terminal::ClearType::CurrentLine)
            )?;
            render::write_frame(&mut out, &frame, theme)?;
        }
        render::write_input_line(
            &mut out,
            &session.config().prompt,
            line.text(),
            line.cursor(),
            session.placeholder(),
            theme,
        )?;

        let timeout = session.next_deadline().map_or(IDLE_POLL, |d| d.min(IDLE_POLL));
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && let Some(input) = input::map_key(key)
            && line.handle(input, session) == LineAction::Quit
        {
            return Ok(());
        }

        let now = Instant::now();
        session.advance(now.duration_since(last_tick));
        last_tick = now;
    }
}
