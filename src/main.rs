mod app;
mod event;

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use menutree::config::Config;
use menutree::store::menu_file;
use menutree::ui::components::menu::MenuView;
use menutree::ui::layout::{AppLayout, pack_hint_lines};
use menutree::ui::theme::Theme;

use app::App;
use event::{AppEvent, EventHandler};

#[derive(Parser)]
#[command(name = "menutree", version, about = "Keyboard and mouse driven cascading menu")]
struct Cli {
    #[arg(short, long, help = "Menu file path or bundled menu name")]
    menu: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Label shown on the menu trigger")]
    trigger: Option<String>,

    #[arg(long, help = "List bundled menus and themes, then exit")]
    list_menus: bool,

    #[arg(long, help = "Write the effective configuration to the config file")]
    save_config: bool,
}

fn init_tracing(log_file: &str) -> Result<()> {
    let path = Path::new(log_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path).with_context(|| format!("creating log file {log_file}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // The terminal belongs to the UI, so logs only go to the file
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_menus {
        println!("menus:");
        for name in menu_file::bundled_names() {
            println!("  {name}");
        }
        println!("themes:");
        for name in Theme::available_themes() {
            println!("  {name}");
        }
        return Ok(());
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        eprintln!("ignoring unreadable config: {err:#}");
        Config::default()
    });
    if let Some(menu) = cli.menu {
        config.menu = menu;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(trigger) = cli.trigger {
        config.trigger_label = trigger;
    }
    config.normalize_menu();

    if let Err(err) = init_tracing(&config.log_file) {
        eprintln!("logging disabled: {err:#}");
    }

    if cli.save_config {
        config.save()?;
        info!(path = %Config::config_path().display(), "configuration saved");
    }

    let items = match menu_file::resolve(&config.menu) {
        Ok(items) => items,
        Err(err) => {
            warn!(menu = %config.menu, error = %err, "falling back to bundled site menu");
            menu_file::load_bundled("site")?
        }
    };
    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!(theme = %config.theme, "unknown theme, using default");
        Theme::default()
    });
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config, items, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }
    for record in &app.selections {
        println!("{} {}", record.at.to_rfc3339(), record.selection.label);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    app.area = area;
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " menutree ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", app.focus_description()),
            Style::default().fg(colors.status()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let view = MenuView::new(&app.menu, &app.focus, &app.config.trigger_label, &app.theme);
    frame.render_widget(&view, layout.main);

    let hints = if app.menu.is_open() {
        vec![
            "[\u{2191}\u{2193}] Move",
            "[\u{2192}/Enter] Open",
            "[\u{2190}/Esc] Back",
            "[Home/End] Jump",
            "[a-z] Find",
            "[Tab] Leave",
        ]
    } else {
        vec!["[Enter/Space] Open menu", "[Tab] Focus trigger", "[q] Quit"]
    };
    let mut lines: Vec<Line> = pack_hint_lines(&hints, layout.footer.width as usize)
        .into_iter()
        .take(1)
        .map(|text| Line::from(Span::styled(text, Style::default().fg(colors.fg()))))
        .collect();
    if let Some(text) = app.last_selection_text() {
        lines.push(Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(colors.accent()),
        )));
    }
    frame.render_widget(Paragraph::new(lines), layout.footer);
}
