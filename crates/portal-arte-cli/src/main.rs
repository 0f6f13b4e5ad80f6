use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use portal_arte_config::Config;
use portal_arte_engine::{AdminGate, SharedSecretPolicy, to_html};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

mod library;
mod render;

struct App {
    content_path: PathBuf,
    files: Vec<RelativePathBuf>,
    file_list_state: ListState,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(content_path: PathBuf) -> Result<Self> {
        let files = library::scan(&content_path)?;
        log::info!(
            "Found {} authored-text files in {}",
            files.len(),
            content_path.display()
        );

        let mut app = Self {
            content_path,
            files,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first item if available
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

    fn update_content_for_selection(&mut self) {
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            return;
        };

        self.current_content = match library::read(&self.content_path, file) {
            Ok(text) => render::block_lines(&text.render()),
            Err(e) => {
                log::warn!("Failed to read {file}: {e}");
                vec![Line::from(format!("Erro ao ler o arquivo: {e}"))]
            }
        };
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("portal-arte-cli");

    match args.get(1).map(String::as_str) {
        Some("--html") => match args.get(2) {
            Some(file) => return print_html(Path::new(file)),
            None => usage_and_exit(program),
        },
        Some("--check-admin") => return check_admin(),
        Some("--help" | "-h") => usage_and_exit(program),
        _ => {}
    }

    // Determine content path from CLI args or config file
    let config_path = Config::config_path();
    let content_path;
    let from_config;

    if args.len() == 2 {
        content_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                content_path = config.content_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Or create a config file at {}", config_path.display());
                usage_and_exit(program);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                usage_and_exit(program);
            }
        }
    } else {
        usage_and_exit(program);
    };

    let mut app = match App::new(content_path.clone()) {
        Ok(app) => app,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Content path '{}'{} is invalid: {e}",
                content_path.display(),
                source
            );
            process::exit(1);
        }
    };

    if !from_config {
        remember_content_path(&config_path, &content_path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
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

/// Writes a config pointing at `content_path` when none exists yet, so the
/// next run can start without arguments.
fn remember_content_path(config_path: &Path, content_path: &Path) -> bool {
    match Config::load_from_path(config_path) {
        Ok(None) => {}
        Ok(Some(_)) | Err(_) => return false,
    }
    let absolute = content_path
        .canonicalize()
        .unwrap_or_else(|_| content_path.to_path_buf());
    match Config::new(absolute).save_to_path(config_path) {
        Ok(()) => {
            log::info!("Saved content path to {}", config_path.display());
            true
        }
        Err(e) => {
            log::warn!("Could not write {}: {e}", config_path.display());
            false
        }
    }
}

fn usage_and_exit(program: &str) -> ! {
    eprintln!("Usage: {program} [content-folder-path]");
    eprintln!("       {program} --html <file>");
    eprintln!("       {program} --check-admin   (reads a password from stdin)");
    process::exit(1);
}

fn print_html(file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    print!("{}", to_html(&portal_arte_engine::render_document(&raw)));
    Ok(())
}

fn check_admin() -> Result<()> {
    let config = Config::load()?;
    let password = portal_arte_config::admin_password(config.as_ref()).unwrap_or_default();
    let mut gate = AdminGate::new(SharedSecretPolicy::new(password));

    let mut credential = String::new();
    std::io::stdin().read_line(&mut credential)?;

    match gate.login(credential.trim_end_matches(['\r', '\n'])) {
        Ok(_) => {
            println!("Access granted");
            Ok(())
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(vec![Line::from(vec![Span::raw(format!("📄 {file}"))])]))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Conteúdo"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Rendered page panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Selecione um arquivo para pré-visualizar")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Pré-visualização"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(vec![help_line()]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}

fn help_line() -> Line<'static> {
    Line::from(vec![
        Span::raw("q: Sair | "),
        Span::raw("↑/k: Anterior | "),
        Span::raw("↓/j: Próximo"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn content_path_is_saved_when_no_config_exists() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config").join("config.toml");

        assert!(remember_content_path(&config_path, dir.path()));

        let saved = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(saved.content_path, dir.path().canonicalize().unwrap());
        assert_eq!(saved.admin_password, None);
    }

    #[test]
    fn existing_config_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "content_path = \"/srv/conteudo\"\nadmin_password = \"segredo\"\n",
        )
        .unwrap();

        assert!(!remember_content_path(&config_path, dir.path()));

        let kept = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(kept.content_path, PathBuf::from("/srv/conteudo"));
        assert_eq!(kept.admin_password.as_deref(), Some("segredo"));
    }

    #[test]
    fn help_line_matches_panel_language() {
        let help: String = help_line()
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(help, "q: Sair | ↑/k: Anterior | ↓/j: Próximo");
    }
}
