//! Application core — event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tracing::{debug, info};
use vitrina_config::ShowcaseConfig;
use vitrina_core::Catalog;

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    /// Kiosk branding and contact details for the status bar.
    config: ShowcaseConfig,
    /// Resolved accent color.
    accent: Color,
    /// Current active screen.
    active_screen: ScreenId,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Help overlay visibility.
    help_visible: bool,
    /// Terminal size for responsive layout.
    terminal_size: (u16, u16),
    /// Action sender — follow-up actions are re-dispatched through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Create the app with all three screens built from the config and
    /// catalog.
    pub fn new(config: ShowcaseConfig, catalog: Catalog, start: ScreenId) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let accent = theme::accent_from(&config);

        let screens: HashMap<ScreenId, Box<dyn Component>> =
            create_screens(&config, &catalog, accent).into_iter().collect();

        Self {
            config,
            accent,
            active_screen: start,
            screens,
            running: true,
            help_visible: false,
            terminal_size: (0, 0),
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop. This is the heart of the kiosk.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.terminal_size = tui
            .terminal
            .size()
            .map_or((80, 24), |s| (s.width, s.height));

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!(start = %self.active_screen, "kiosk event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick(dt) => {
                    self.action_tx.send(Action::Tick(dt))?;
                }
                Event::Clock => {
                    self.action_tx.send(Action::Clock)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("kiosk event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// everything else is delegated to the active screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Global keybindings
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),

            // Help
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),

            // Tab / Shift+Tab for screen cycling
            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }

            // Esc — the screen decides what "back" means
            (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),

            _ => {}
        }

        // Delegate to active screen component (digit keys included —
        // the TV uses them for slide jumps, the tablet for selection)
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Handle mouse events (delegate to active screen).
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_mouse_event(mouse);
        }
        Ok(None)
    }

    /// Process a single action — update app state and propagate to the
    /// active screen.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Resize(w, h) => {
                self.terminal_size = (*w, *h);
            }

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(true);
                    }
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            // Render is handled in the main loop, not here
            Action::Render => {}

            // Everything else — ticks, clock, GoBack, navigation —
            // belongs to the active screen. Only the focused screen
            // receives ticks, so a backgrounded slideshow never runs.
            other => {
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    if let Some(follow_up) = screen.update(other)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [tab bar] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }

        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Render the bottom tab bar showing the three screens.
    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active(self.accent)
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(format!(" {} ", id.label()), style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled("│", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    /// Render the bottom status bar with branding and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(&self.config.brand, theme::title_style(self.accent)),
        ];

        // Contact details only when the terminal is wide enough.
        if self.terminal_size.0 >= 80 {
            spans.push(Span::styled(
                format!("  WhatsApp +{}", self.config.whatsapp),
                theme::key_hint(),
            ));
            spans.push(Span::styled(
                format!("  {}", self.config.instagram),
                theme::key_hint(),
            ));
        }
        spans.push(Span::styled(
            "  │ Tab cambiar modo  ? ayuda  q salir",
            theme::key_hint(),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Render the help overlay centered on screen.
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 56u16.min(area.width.saturating_sub(4));
        let help_height = 20u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;

        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        // Clear the background
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Atajos de teclado ")
            .title_style(theme::title_style(self.accent))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_selected(self.accent));

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let key = |k: &str| Span::styled(format!("  {k:<10}"), theme::key_hint_key(self.accent));
        let desc = |d: &str| Span::styled(d.to_owned(), theme::key_hint());

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled("  Global", theme::title_style(self.accent))),
            Line::from(vec![key("Tab"), desc("Siguiente pantalla")]),
            Line::from(vec![key("Esc"), desc("Volver")]),
            Line::from(vec![key("?"), desc("Esta ayuda")]),
            Line::from(vec![key("q"), desc("Salir")]),
            Line::from(""),
            Line::from(Span::styled("  Modo TV", theme::title_style(self.accent))),
            Line::from(vec![key("←/→"), desc("Cambiar slide (sigue rotando)")]),
            Line::from(vec![key("1-9"), desc("Saltar a un producto")]),
            Line::from(""),
            Line::from(Span::styled("  Modo Tablet", theme::title_style(self.accent))),
            Line::from(vec![key("←/→"), desc("Producto anterior / siguiente")]),
            Line::from(vec![key("Enter"), desc("Abrir detalle")]),
            Line::from(vec![key("Space"), desc("Pausar / reanudar auto-avance")]),
            Line::from(vec![key("arrastrar"), desc("Swipe con el mouse")]),
            Line::from(""),
            Line::from(Span::styled(
                "                   Esc o ? para cerrar",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
