//! Product card rendering

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, ListItem, Paragraph, Wrap};

use crate::core::product::Product;
use crate::tui::percent_of;
use crate::tui::theme::Theme;

/// Longest description shown inline on a card
const DESCRIPTION_WIDTH: usize = 72;

/// One product rendered as a list entry
pub struct Card<'a> {
    product: &'a Product,
    selected: bool,
}

impl<'a> Card<'a> {
    pub fn new(product: &'a Product, selected: bool) -> Self {
        Self { product, selected }
    }

    /// Title line, optional description line and tag line
    pub fn lines(&self) -> Vec<Line<'a>> {
        let product = self.product;
        let mut title = vec![
            Span::raw("  "),
            Span::styled(product.display_title(), Theme::card_title()),
        ];
        if let Some(price) = product.price() {
            title.push(Span::styled(format!("  ${:.2}", price), Theme::price()));
        }
        title.push(Span::styled(format!("  #{}", product.id), Theme::muted()));

        let mut lines = vec![Line::from(title)];

        if let Some(description) = product.description() {
            lines.push(Line::from(format!(
                "    {}",
                truncate(description, DESCRIPTION_WIDTH)
            )));
        }

        let mut tags = vec![Span::raw("    ")];
        let mut any = false;
        for title in product.tag_titles() {
            tags.push(Span::styled(format!("[{}]", title), Theme::tag()));
            tags.push(Span::raw(" "));
            any = true;
        }
        if !any {
            tags.push(Span::styled("(no tags)", Theme::muted()));
        }
        lines.push(Line::from(tags));

        lines
    }

    pub fn list_item(&self) -> ListItem<'a> {
        let item = ListItem::new(Text::from(self.lines()));
        if self.selected {
            item.style(Theme::selected())
        } else {
            item
        }
    }

    /// Render every field of the product in a centered popup
    pub fn render_detail(&self, frame: &mut Frame) {
        let area = frame.area();

        // Calculate centered popup area (70% width, 60% height)
        let popup_width = percent_of(area.width, 70).max(40).min(area.width);
        let popup_height = percent_of(area.height, 60).max(10).min(area.height);
        let popup_x = (area.width.saturating_sub(popup_width)) / 2;
        let popup_y = (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let product = self.product;
        let mut lines = vec![field_line("id", product.id.to_string())];
        if let Some(price) = product.price() {
            lines.push(field_line("price", format!("${:.2}", price)));
        }
        if let Some(description) = product.description() {
            lines.push(field_line("description", description.to_string()));
        }
        let tags: Vec<&str> = product.tag_titles().collect();
        lines.push(field_line(
            "tags",
            if tags.is_empty() {
                "(none)".to_string()
            } else {
                tags.join(", ")
            },
        ));
        for (key, value) in product.other_fields() {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            lines.push(field_line(key, value));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled("[Esc] Close", Theme::muted()));

        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!(" {} ", product.display_title()))
                    .borders(Borders::ALL)
                    .border_style(Theme::focused_border()),
            )
            .style(Style::default().bg(Color::Black));

        frame.render_widget(detail, popup_area);
    }
}

fn field_line(key: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:14}", key), Theme::header()),
        Span::raw(value),
    ])
}

/// Shorten to `max_chars` characters, ending with "..." when cut
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
