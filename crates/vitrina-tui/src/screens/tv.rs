//! TV screen — unattended auto-rotating showcase for large displays.
//!
//! Rotation runs unconditionally; there is no pause control here. The
//! arrow keys act as a debug remote and the digit keys jump via the
//! mini-queue, neither of which stops the rotation. A one-second clock
//! action refreshes the wall-clock display independently of the slides.

use chrono::{DateTime, Local};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tracing::warn;
use vitrina_config::ShowcaseConfig;
use vitrina_core::{Catalog, TvShowcase, contact};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::{marquee, price_fmt};

pub struct TvScreen {
    showcase: TvShowcase,
    brand: String,
    whatsapp: String,
    instagram: String,
    qr_src: String,
    accent: Color,
    /// Wall-clock display value, refreshed by the 1 Hz clock action.
    now: DateTime<Local>,
    /// Cyclic ticker strip and its scroll position.
    ticker: String,
    ticker_offset: usize,
}

impl TvScreen {
    pub fn new(config: &ShowcaseConfig, catalog: Catalog, accent: Color) -> Self {
        let ticker = marquee::strip(&[
            format!("{} • Hecho con amor • Sabores del día", config.brand),
            "Descuento especial mostrando este QR".to_owned(),
            format!("WhatsApp: +{}", config.whatsapp),
            format!("Instagram: {}", config.instagram),
        ]);

        Self {
            showcase: TvShowcase::new(catalog, config.slide_interval()),
            brand: config.brand.clone(),
            whatsapp: config.whatsapp.clone(),
            instagram: config.instagram.clone(),
            qr_src: config.qr_src.clone(),
            accent,
            now: Local::now(),
            ticker,
            ticker_offset: 0,
        }
    }

    fn render_product_card(&self, frame: &mut Frame, area: Rect) {
        let product = self.showcase.current();

        let cols = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        // Image placeholder — the terminal shows the reference, not pixels.
        let image_title = product
            .badge
            .as_deref()
            .map_or_else(String::new, |b| format!(" {b} "));
        let image = Block::default()
            .title(image_title)
            .title_style(theme::badge_style(self.accent))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_selected(self.accent));
        let image_inner = image.inner(cols[0]);
        frame.render_widget(image, cols[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(product.image.as_str(), theme::muted()))
                .alignment(Alignment::Center),
            centered_line(image_inner),
        );

        let order = contact::product_inquiry(&self.whatsapp, &self.brand, product);
        let info = vec![
            Line::from(""),
            Line::from(Span::styled(product.name.as_str(), theme::product_name())),
            Line::from(""),
            Line::from(Span::styled(product.description.as_str(), theme::muted())),
            Line::from(""),
            Line::from(Span::styled(
                price_fmt::format_price(product.price),
                theme::price_style(self.accent),
            )),
            Line::from(""),
            Line::from(Span::styled("Pedir ahora →", theme::whatsapp_cta())),
            Line::from(Span::styled(order, theme::key_hint())),
            Line::from(""),
            Line::from(Span::styled(
                "• Ingredientes frescos y receta propia",
                theme::muted(),
            )),
            Line::from(Span::styled(
                "• Promoción válida mostrando el QR",
                theme::muted(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(info).wrap(Wrap { trim: true }),
            cols[1].inner(ratatui::layout::Margin::new(2, 0)),
        );
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([
            Constraint::Length(4),                                // brand + clock
            Constraint::Length(self.showcase.len() as u16 + 2),   // mini queue
            Constraint::Min(4),                                   // qr / contact
        ])
        .split(area);

        // Brand header with the live clock.
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(&self.brand, theme::product_name()),
                Span::raw("  "),
                Span::styled("Feria de Emprendimiento", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled(
                    self.now.format("%H:%M").to_string(),
                    theme::title_style(self.accent),
                ),
                Span::raw("  "),
                Span::styled(self.now.format("%A %d %B %Y").to_string(), theme::muted()),
            ]),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme::border_default()),
        );
        frame.render_widget(header, rows[0]);

        // Mini queue — one row per product, digit key jumps to it.
        let mut queue = Vec::with_capacity(self.showcase.len());
        for (i, product) in self.showcase.catalog().iter().enumerate() {
            let active = i == self.showcase.index();
            let marker = if active { "▶" } else { " " };
            let style = if active {
                theme::title_style(self.accent)
            } else {
                theme::muted()
            };
            queue.push(Line::from(vec![
                Span::styled(format!(" {marker} {} ", i + 1), theme::key_hint_key(self.accent)),
                Span::styled(product.name.as_str(), style),
            ]));
        }
        frame.render_widget(
            Paragraph::new(queue).block(
                Block::default()
                    .title(" Próximos ")
                    .title_style(theme::title_style(self.accent))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme::border_default()),
            ),
            rows[1],
        );

        // QR panel + general contact link.
        let link = contact::general_inquiry(&self.whatsapp, &self.brand);
        let qr = Paragraph::new(vec![
            Line::from(Span::styled("Escanéame para ordenar", theme::muted())),
            Line::from(Span::styled(self.qr_src.as_str(), theme::key_hint())),
            Line::from(""),
            Line::from(Span::styled("WhatsApp directo", theme::whatsapp_cta())),
            Line::from(Span::styled(link, theme::key_hint())),
            Line::from(Span::styled(self.instagram.as_str(), theme::muted())),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme::border_default()),
        );
        frame.render_widget(qr, rows[2]);
    }
}

impl Component for TvScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            // Debug remote — rotation keeps running.
            KeyCode::Left => Ok(Some(Action::PrevSlide)),
            KeyCode::Right => Ok(Some(Action::NextSlide)),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                Ok(Some(Action::JumpSlide(index)))
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick(dt) => {
                self.showcase.tick(*dt);
                self.ticker_offset = self.ticker_offset.wrapping_add(1);
            }
            Action::Clock => {
                self.now = Local::now();
            }
            Action::NextSlide => self.showcase.next(),
            Action::PrevSlide => self.showcase.prev(),
            Action::JumpSlide(index) => {
                if let Err(err) = self.showcase.jump(*index) {
                    warn!(%err, "ignoring mini-queue jump");
                }
            }
            Action::GoBack => {
                return Ok(Some(Action::SwitchScreen(crate::screen::ScreenId::Home)));
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        // Full-bleed dark backdrop, the terminal's Ken Burns.
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            area,
        );

        let layout = Layout::vertical([
            Constraint::Min(10),   // main stage
            Constraint::Length(1), // ticker
        ])
        .split(area);

        let stage = Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(layout[0]);
        self.render_product_card(frame, stage[0]);
        self.render_sidebar(frame, stage[1]);

        // Scrolling ticker, advanced one cell per tick.
        let text = marquee::window(&self.ticker, layout[1].width as usize, self.ticker_offset);
        frame.render_widget(
            Paragraph::new(Span::styled(text, theme::muted()))
                .style(Style::default().bg(theme::BG_HIGHLIGHT)),
            layout[1],
        );
    }
}

/// Single line vertically centered within `area`.
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect::new(area.x, y.min(area.y + area.height.saturating_sub(1)), area.width, 1.min(area.height))
}
