//! `explorer`, a terminal browser for the PokéAPI catalog.
//!
//! Usage: `explorer [CONFIG_PATH]`.

use std::env;
use std::error::Error;
use std::fs;
use std::io;
use std::io::Stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam::channel;

use crossterm::cursor;
use crossterm::event;
use crossterm::terminal;

use env_logger::Env;
use env_logger::Target;

use pkcat::Api;
use pkcat::Config;

use tui::backend::CrosstermBackend;
use tui::Terminal;

mod dex;
mod ui;
mod util;

/// How often to redraw when nothing happens, to animate spinners.
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<(), Box<dyn Error>> {
  let config_path = env::args_os().nth(1).map(PathBuf::from);
  let config = Config::load(config_path.as_deref())?;
  init_logging(&config)?;

  let api = Api::with_options(config.api_options());
  log::info!(
    "starting explorer against {} with {} entries",
    api.base_url(),
    config.page_limit
  );
  let dex = dex::Dex::new(Arc::new(api), config.page_limit);

  let mut stdout = io::stdout();
  terminal::enable_raw_mode()?;
  crossterm::execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

  let result = Terminal::new(CrosstermBackend::new(stdout))
    .map_err(Box::<dyn Error>::from)
    .and_then(|mut terminal| run(&mut terminal, &dex));

  terminal::disable_raw_mode()?;
  crossterm::execute!(
    io::stdout(),
    terminal::LeaveAlternateScreen,
    cursor::Show
  )?;

  if let Err(e) = &result {
    log::error!("explorer exited with an error: {}", e);
  }
  result
}

fn run(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  dex: &dex::Dex,
) -> Result<(), Box<dyn Error>> {
  let mut app = ui::app::App::new();

  let (events_sink, events) = channel::unbounded();
  thread::spawn(move || loop {
    let event = event::read();
    let failed = event.is_err();
    if events_sink.send(event).is_err() || failed {
      return;
    }
  });
  let ticks = channel::tick(TICK);

  while !app.is_done() {
    terminal.draw(|f| app.render(dex, f))?;

    crossbeam::select! {
      recv(events) -> event => match event {
        Ok(event) => app.process_event(event?, dex),
        Err(_) => return Ok(()),
      },
      recv(ticks) -> _ => {},
    }

    while let Ok(event) = events.try_recv() {
      app.process_event(event?, dex);
    }
  }

  Ok(())
}

/// Sends logs to the configured file, never to the terminal the UI owns.
fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
  let path = match config.log_path("explorer") {
    Some(path) => path,
    None => return Ok(()),
  };
  if let Some(dir) = path.parent() {
    fs::create_dir_all(dir)?;
  }
  let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

  env_logger::Builder::from_env(
    Env::default().default_filter_or(config.log_level.as_str()),
  )
  .format_timestamp_secs()
  .target(Target::Pipe(Box::new(file)))
  .try_init()?;

  log::info!("logging to {}", path.display());
  Ok(())
}
