mod view;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use storystash_config::Config;
use storystash_engine::{
    FormatMode, RenderConfig, TranscriptFile, extract_stats, io, parse_transcript,
};

struct App {
    stories_path: PathBuf,
    render_config: RenderConfig,
    mode: FormatMode,
    files: Vec<TranscriptFile>,
    file_list_state: ListState,
    title: String,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(stories_path: PathBuf, mode: FormatMode, render_config: RenderConfig) -> Result<Self> {
        let files = io::list_transcript_files(&stories_path)?;

        let mut app = Self {
            stories_path,
            render_config,
            mode,
            files,
            file_list_state: ListState::default(),
            title: String::new(),
            current_content: Vec::new(),
        };

        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn cycle_format(&mut self) {
        self.mode = self.mode.next();
        log::info!("Switched format mode to {}", self.mode);
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            return;
        };

        match io::read_transcript_at(file.relative_path(), &self.stories_path) {
            Ok(text) => {
                let parsed = parse_transcript(&text, self.mode, &self.render_config);
                let stats = extract_stats(&file.relative_path().to_path(&self.stories_path));
                self.title = view::title(&parsed, &stats);
                self.current_content = view::transcript_lines(&parsed);
            }
            Err(e) => {
                self.title = file.label();
                self.current_content = vec![Line::from(format!("Error reading file: {e}"))];
            }
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr, which the TUI owns; stay quiet unless asked.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let from_config;
    let stories_path = match (args.len(), &config) {
        (2, _) => {
            from_config = false;
            PathBuf::from(&args[1])
        }
        (1, Some(config)) => {
            from_config = true;
            config.stories_path.clone()
        }
        (1, None) => {
            eprintln!("Error: No stories path provided and no config file found");
            eprintln!("Usage: {} <stories-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [stories-folder-path]", args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_stories_dir(&stories_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Stories path '{}'{} is invalid: {e}",
            stories_path.display(),
            source
        );
        process::exit(1);
    }

    let config = config.unwrap_or_else(|| remember_stories_path(&stories_path));
    let mut app = App::new(stories_path, config.default_format, config.render)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Writes a first config so later runs need no argument.
fn remember_stories_path(stories_path: &Path) -> Config {
    let absolute = std::fs::canonicalize(stories_path).unwrap_or_else(|_| stories_path.into());
    let config = Config::new(absolute);
    match config.save() {
        Ok(()) => log::info!("Saved config to {}", Config::config_path().display()),
        Err(e) => log::warn!("Could not save config: {e}"),
    }
    config
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Char('f') => app.cycle_format(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(Line::from(file.label())))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Transcripts"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a transcript to read it")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.title.as_str()),
        )
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw(format!("f: Format ({})", app.mode)),
    ]);

    f.render_widget(Paragraph::new(help_text), rows[1]);
}
