use std::fs;
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use windrift_assets::{DEFAULT_TEMPLATE, ImageCache};
use windrift_config::Config;
use windrift_core::ALL_COLORS;
use windrift_scene::Scene;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Everything that can fail happens before raw mode: a bad template or
    // config aborts startup with a readable report.
    let config = Config::load()?;
    let template = match &config.template {
        Some(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to load logo template {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };
    let images = ImageCache::init(&template, &ALL_COLORS)?;

    let terminal = ratatui::init();
    let result = App::new(config, images).run(terminal);
    ratatui::restore();
    result
}

/// The screensaver application: owns the tinted images and drives the
/// scene from a monotonic frame clock.
struct App {
    /// Is the application running?
    running: bool,
    /// Startup settings.
    config: Config,
    /// Tinted logo per palette color, built once before the loop.
    images: ImageCache,
}

impl App {
    /// Construct a new instance of [`App`].
    fn new(config: Config, images: ImageCache) -> Self {
        Self {
            running: false,
            config,
            images,
        }
    }

    /// Run the screensaver loop until a quit key arrives.
    fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        let size = terminal.size()?;
        let mut scene = Scene::new(
            self.config.logo_count,
            self.config.speed,
            size.width,
            size.height,
        );

        let started = Instant::now();
        while self.running {
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            // The scene throttles itself to the 60 Hz budget; frames that
            // come in under it are dropped but the loop polls on.
            if scene.advance(elapsed_ms) {
                terminal.draw(|frame| scene.render(frame, &self.images))?;
            }

            self.handle_crossterm_events(&mut scene)?;
        }
        Ok(())
    }

    /// Poll briefly for terminal events between frames.
    fn handle_crossterm_events(&mut self, scene: &mut Scene) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(4))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => scene.resize(width, height),
                Event::Mouse(_) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
