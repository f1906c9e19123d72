//! Home screen — the landing page with the mode selector.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use vitrina_config::ShowcaseConfig;

use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;

/// The two launchable modes, in card order.
const MODES: [ScreenId; 2] = [ScreenId::Tv, ScreenId::Tablet];

pub struct HomeScreen {
    brand: String,
    whatsapp: String,
    instagram: String,
    accent: Color,
    /// Which mode card is highlighted (0 = TV, 1 = Tablet).
    highlighted: usize,
    focused: bool,
}

impl HomeScreen {
    pub fn new(config: &ShowcaseConfig, accent: Color) -> Self {
        Self {
            brand: config.brand.clone(),
            whatsapp: config.whatsapp.clone(),
            instagram: config.instagram.clone(),
            accent,
            highlighted: 0,
            focused: false,
        }
    }

    fn render_mode_card(&self, frame: &mut Frame, area: Rect, index: usize) {
        let selected = self.focused && index == self.highlighted;
        let (title, lines) = match MODES[index] {
            ScreenId::Tv => (
                " Modo TV ",
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Para televisores y pantallas grandes.",
                        theme::muted(),
                    )),
                    Line::from(Span::styled(
                        "Presentación automática con reloj en vivo.",
                        theme::muted(),
                    )),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("[Pantalla completa] ", theme::key_hint()),
                        Span::styled("[Auto-rotación] ", theme::key_hint()),
                        Span::styled("[Ticker]", theme::key_hint()),
                    ]),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("t", theme::key_hint_key(self.accent)),
                        Span::styled(" para entrar →", theme::muted()),
                    ]),
                ],
            ),
            _ => (
                " Modo Tablet ",
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Para ferias, eventos y stands.",
                        theme::muted(),
                    )),
                    Line::from(Span::styled(
                        "Navegación táctil con gestos swipe.",
                        theme::muted(),
                    )),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("[Controles táctiles] ", theme::key_hint()),
                        Span::styled("[Gestos swipe] ", theme::key_hint()),
                        Span::styled("[Catálogo]", theme::key_hint()),
                    ]),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("b", theme::key_hint_key(self.accent)),
                        Span::styled(" para entrar →", theme::muted()),
                    ]),
                ],
            ),
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::title_style(self.accent))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if selected {
                theme::border_selected(self.accent)
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            inner,
        );
    }
}

impl Component for HomeScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.highlighted = self.highlighted.saturating_sub(1);
                Ok(None)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.highlighted = (self.highlighted + 1).min(MODES.len() - 1);
                Ok(None)
            }
            KeyCode::Enter => Ok(Some(Action::SwitchScreen(MODES[self.highlighted]))),
            KeyCode::Char('t') | KeyCode::Char('1') => {
                Ok(Some(Action::SwitchScreen(ScreenId::Tv)))
            }
            KeyCode::Char('b') | KeyCode::Char('2') => {
                Ok(Some(Action::SwitchScreen(ScreenId::Tablet)))
            }
            _ => Ok(None),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(4), // header
            Constraint::Min(10),   // mode cards
            Constraint::Length(4), // usage tips
            Constraint::Length(1), // contact footer
        ])
        .split(area);

        let header = vec![
            Line::from(""),
            Line::from(Span::styled(&self.brand, theme::product_name())).centered(),
            Line::from(Span::styled(
                "Selecciona el modo de visualización para tu catálogo",
                theme::muted(),
            ))
            .centered(),
        ];
        frame.render_widget(Paragraph::new(header), layout[0]);

        let cards = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[1]);
        self.render_mode_card(frame, cards[0], 0);
        self.render_mode_card(frame, cards[1], 1);

        let tips = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(" Modo TV: ", theme::title_style(self.accent)),
                Span::styled(
                    "vitrinas y presentaciones sin interacción directa.",
                    theme::muted(),
                ),
            ]),
            Line::from(vec![
                Span::styled(" Modo Tablet: ", theme::title_style(self.accent)),
                Span::styled(
                    "los clientes tocan y navegan por los productos.",
                    theme::muted(),
                ),
            ]),
        ])
        .block(
            Block::default()
                .title(" Consejos de uso ")
                .title_style(theme::title_style(self.accent))
                .borders(Borders::TOP),
        );
        frame.render_widget(tips, layout[2]);

        let footer = Line::from(vec![
            Span::styled(" WhatsApp ", theme::whatsapp_cta()),
            Span::styled(format!("+{}", self.whatsapp), theme::muted()),
            Span::styled("   Instagram ", theme::title_style(self.accent)),
            Span::styled(&self.instagram, theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(footer), layout[3]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
