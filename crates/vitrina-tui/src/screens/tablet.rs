//! Tablet screen — interactive catalog with autoplay until first touch.
//!
//! Two views: the catalog grid (all products, one highlighted) and the
//! product detail. Navigation keys and swipes (mouse drags, the
//! terminal's touch surface) disable autoplay permanently; Space is the
//! explicit resume/pause toggle.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tracing::warn;
use vitrina_config::ShowcaseConfig;
use vitrina_core::{Catalog, Swipe, SwipeTracker, TabletShowcase, ViewMode, contact};

use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;
use crate::widgets::price_fmt;

/// Swipe deadzone in terminal cells. The classifier's 50-pixel default
/// assumes a touch surface; a terminal is ~200 cells wide, so the
/// deadzone shrinks proportionally.
const CELL_DEADZONE: i32 = 6;

/// Grid cards per row in the catalog view.
const GRID_COLS: usize = 3;

pub struct TabletScreen {
    showcase: TabletShowcase,
    swipe: SwipeTracker,
    brand: String,
    whatsapp: String,
    instagram: String,
    qr_src: String,
    accent: Color,
}

impl TabletScreen {
    pub fn new(config: &ShowcaseConfig, catalog: Catalog, accent: Color) -> Self {
        Self {
            showcase: TabletShowcase::new(catalog, config.auto_slide_interval()),
            swipe: SwipeTracker::with_deadzone(CELL_DEADZONE),
            brand: config.brand.clone(),
            whatsapp: config.whatsapp.clone(),
            instagram: config.instagram.clone(),
            qr_src: config.qr_src.clone(),
            accent,
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let autoplay = if self.showcase.auto_playing() {
            Span::styled("▶ auto", theme::title_style(self.accent))
        } else {
            Span::styled("⏸ pausado", theme::key_hint())
        };
        let view_hint = match self.showcase.view() {
            ViewMode::Catalog => "Enter detalle",
            ViewMode::Detail => "b catálogo",
        };
        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.brand), theme::product_name()),
            Span::styled("Feria de Emprendimiento", theme::key_hint()),
            Span::raw("  "),
            autoplay,
            Span::styled(
                format!("  ←/→ navegar  {view_hint}  Space auto  v vista"),
                theme::key_hint(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_catalog(&self, frame: &mut Frame, area: Rect) {
        let products = self.showcase.catalog().products();
        let rows_needed = products.len().div_ceil(GRID_COLS);
        let row_constraints: Vec<Constraint> = (0..rows_needed)
            .map(|_| Constraint::Ratio(1, rows_needed.max(1) as u32))
            .collect();
        let rows = Layout::vertical(row_constraints).split(area);

        for (r, row_area) in rows.iter().enumerate() {
            let col_constraints: Vec<Constraint> = (0..GRID_COLS)
                .map(|_| Constraint::Ratio(1, GRID_COLS as u32))
                .collect();
            let cols = Layout::horizontal(col_constraints).split(*row_area);

            for c in 0..GRID_COLS {
                let index = r * GRID_COLS + c;
                let Some(product) = products.get(index) else {
                    continue;
                };
                self.render_card(frame, cols[c], index, product);
            }
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, index: usize, product: &vitrina_core::Product) {
        let selected = index == self.showcase.selected();
        let block = Block::default()
            .title(format!(" {} ", index + 1))
            .title_style(theme::key_hint_key(self.accent))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if selected {
                theme::border_selected(self.accent)
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from(Span::styled(
            product.name.as_str(),
            theme::product_name(),
        ))];
        if let Some(badge) = &product.badge {
            lines.push(Line::from(Span::styled(
                format!(" {badge} "),
                theme::badge_style(self.accent),
            )));
        }
        lines.push(Line::from(Span::styled(
            product.description.as_str(),
            theme::muted(),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                price_fmt::format_price(product.price),
                theme::price_style(self.accent),
            ),
            Span::styled("  Ver más →", theme::key_hint()),
        ]));

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            inner.inner(Margin::new(1, 0)),
        );
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let product = self.showcase.current();
        let cols = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        // Image pane with position indicator.
        let image = Block::default()
            .title(format!(
                " {} de {} ",
                self.showcase.selected() + 1,
                self.showcase.len()
            ))
            .title_style(theme::title_style(self.accent))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_selected(self.accent));
        let image_inner = image.inner(cols[0]);
        frame.render_widget(image, cols[0]);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(product.image.as_str(), theme::muted())),
                Line::from(""),
                Line::from(Span::styled("← anterior   siguiente →", theme::key_hint())),
            ])
            .alignment(Alignment::Center),
            image_inner.inner(Margin::new(1, image_inner.height / 3)),
        );

        // Info pane.
        let order = contact::product_inquiry(&self.whatsapp, &self.brand, product);
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(product.name.as_str(), theme::product_name())),
        ];
        if let Some(badge) = &product.badge {
            lines.push(Line::from(Span::styled(
                format!(" {badge} "),
                theme::badge_style(self.accent),
            )));
        }
        lines.extend([
            Line::from(""),
            Line::from(Span::styled(product.description.as_str(), theme::muted())),
            Line::from(""),
            Line::from(Span::styled(
                price_fmt::format_price(product.price),
                theme::price_style(self.accent),
            )),
            Line::from(""),
            Line::from(Span::styled("✓ Ingredientes frescos y naturales", theme::muted())),
            Line::from(Span::styled("✓ Hecho artesanalmente", theme::muted())),
            Line::from(""),
            Line::from(Span::styled("Pedir por WhatsApp →", theme::whatsapp_cta())),
            Line::from(Span::styled(order, theme::key_hint())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Escanea para contactar: ", theme::muted()),
                Span::styled(self.qr_src.as_str(), theme::key_hint()),
                Span::styled(format!("  {}", self.instagram), theme::muted()),
            ]),
        ]);
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            cols[1].inner(Margin::new(2, 0)),
        );
    }
}

impl Component for TabletScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => Ok(Some(Action::PrevProduct)),
            KeyCode::Right | KeyCode::Char('l') => Ok(Some(Action::NextProduct)),
            KeyCode::Enter => match self.showcase.view() {
                ViewMode::Catalog => Ok(Some(Action::SelectProduct(self.showcase.selected()))),
                ViewMode::Detail => Ok(None),
            },
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                Ok(Some(Action::SelectProduct(index)))
            }
            KeyCode::Char(' ') => Ok(Some(Action::SetAutoPlay(!self.showcase.auto_playing()))),
            KeyCode::Char('v') => Ok(Some(Action::ToggleView)),
            KeyCode::Char('b') => Ok(Some(Action::BackToCatalog)),
            _ => Ok(None),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Mouse drags are this surface's touch gestures.
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.touch_start(i32::from(mouse.column));
                Ok(None)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.swipe.touch_move(i32::from(mouse.column));
                Ok(None)
            }
            MouseEventKind::Up(MouseButton::Left) => Ok(self.swipe.touch_end().map(|s| match s {
                Swipe::Next => Action::NextProduct,
                Swipe::Prev => Action::PrevProduct,
            })),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick(dt) => {
                self.showcase.tick(*dt);
            }
            Action::SelectProduct(index) => {
                if let Err(err) = self.showcase.select(*index) {
                    warn!(%err, "ignoring selection");
                }
            }
            Action::NextProduct => self.showcase.next(),
            Action::PrevProduct => self.showcase.prev(),
            Action::ToggleView => self.showcase.toggle_view(),
            Action::BackToCatalog => self.showcase.back(),
            Action::SetAutoPlay(flag) => self.showcase.set_auto_playing(*flag),
            Action::GoBack => {
                // Back out of the detail view first, then to Home.
                if self.showcase.view() == ViewMode::Detail {
                    self.showcase.back();
                    return Ok(None);
                }
                return Ok(Some(Action::SwitchScreen(ScreenId::Home)));
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(1), // header
            Constraint::Min(8),    // catalog / detail
            Constraint::Length(1), // contact footer
        ])
        .split(area);

        self.render_header(frame, layout[0]);

        match self.showcase.view() {
            ViewMode::Catalog => self.render_catalog(frame, layout[1]),
            ViewMode::Detail => self.render_detail(frame, layout[1]),
        }

        let footer = Line::from(vec![
            Span::styled(" WhatsApp ", theme::whatsapp_cta()),
            Span::styled(format!("+{}", self.whatsapp), theme::muted()),
            Span::styled("   Instagram ", theme::title_style(self.accent)),
            Span::styled(self.instagram.as_str(), theme::muted()),
            Span::styled("   ¡Gracias por visitarnos!", theme::key_hint()),
        ]);
        frame.render_widget(
            Paragraph::new(footer).style(Style::default().bg(theme::BG_HIGHLIGHT)),
            layout[2],
        );
    }
}
