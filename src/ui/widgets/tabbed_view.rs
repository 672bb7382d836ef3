//! Section menu with one content page.
//!
//! Renders a row of section tabs and the page for the selected section
//! underneath it. Only the selected page is drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs, Widget},
};

/// A tabbed view widget that shows different content based on selected tab.
pub struct TabbedView<'a, T> {
    /// Block surrounding the entire widget
    block: Option<Block<'a>>,
    /// Tab titles
    titles: Vec<&'a str>,
    /// Currently selected tab index
    selected: usize,
    /// Style for normal tabs
    tab_style: Style,
    /// Style for the selected tab
    selected_tab_style: Style,
    /// Content to display for each tab
    content: T,
}

impl<'a, T> TabbedView<'a, T> {
    /// Create a new tabbed view
    pub fn new(content: T) -> Self {
        Self {
            block: None,
            titles: Vec::new(),
            selected: 0,
            tab_style: Style::default(),
            selected_tab_style: Style::default().add_modifier(Modifier::BOLD),
            content,
        }
    }

    /// Set the surrounding block
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Add tab titles
    pub fn titles(mut self, titles: Vec<&'a str>) -> Self {
        self.titles = titles;
        self.selected = self.selected.min(self.titles.len().saturating_sub(1));
        self
    }

    /// Set the selected tab index
    pub fn select(mut self, index: usize) -> Self {
        self.selected = index.min(self.titles.len().saturating_sub(1));
        self
    }

    /// Set style for normal tabs
    pub fn tab_style(mut self, style: Style) -> Self {
        self.tab_style = style;
        self
    }

    /// Set style for selected tab
    pub fn selected_tab_style(mut self, style: Style) -> Self {
        self.selected_tab_style = style;
        self
    }
}

impl<'a, T: TabRenderer> Widget for TabbedView<'a, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || self.titles.is_empty() {
            return;
        }

        let area = match self.block {
            Some(block) => {
                let inner_area = block.inner(area);
                block.render(area, buf);
                inner_area
            }
            None => area,
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tabs and separator
                Constraint::Min(1),
            ])
            .split(area);

        let titles: Vec<Line> = self
            .titles
            .iter()
            .enumerate()
            .map(|(index, title)| {
                let style = if index == self.selected {
                    self.selected_tab_style
                } else {
                    self.tab_style
                };
                Line::from(Span::styled(*title, style))
            })
            .collect();

        Tabs::new(titles)
            .select(self.selected)
            .divider("|")
            .block(Block::default().borders(Borders::BOTTOM))
            .render(chunks[0], buf);

        self.content.render_tab_content(self.selected, chunks[1], buf);
    }
}

/// Trait for rendering tab content
pub trait TabRenderer {
    /// Render content for the specific tab
    fn render_tab_content(&self, tab_index: usize, area: Rect, buf: &mut Buffer);
}

// Closure-based content rendering
impl<F> TabRenderer for F
where
    F: Fn(usize, Rect, &mut Buffer),
{
    fn render_tab_content(&self, tab_index: usize, area: Rect, buf: &mut Buffer) {
        self(tab_index, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn renders_only_the_selected_page() {
        let rendered = Cell::new(None);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        TabbedView::new(|index: usize, _area: Rect, _buf: &mut Buffer| rendered.set(Some(index)))
            .titles(vec!["Clock", "Stopwatch", "Timer"])
            .select(2)
            .render(area, &mut buf);

        assert_eq!(rendered.get(), Some(2));
    }

    #[test]
    fn selection_is_clamped_to_titles() {
        let rendered = Cell::new(None);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        TabbedView::new(|index: usize, _area: Rect, _buf: &mut Buffer| rendered.set(Some(index)))
            .titles(vec!["Clock", "Add"])
            .select(9)
            .render(area, &mut buf);

        assert_eq!(rendered.get(), Some(1));
    }
}
