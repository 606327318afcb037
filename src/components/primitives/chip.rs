//! Chip Component
//!
//! Clickable pill used for tag and expert filter values. Selecting the
//! already-selected chip clears the filter, so the selected state gets a
//! distinct fill.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::ExplorerColors;

/// A filter chip
#[derive(IntoElement)]
pub struct Chip {
    id: ElementId,
    label: SharedString,
    selected: bool,
    accent: Option<Rgba>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Chip {
    /// Create a new chip
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            selected: false,
            accent: None,
            on_click: None,
        }
    }

    /// Mark the chip as the currently selected filter value
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Tint the chip border with an expert accent
    pub fn accent(mut self, accent: Rgba) -> Self {
        self.accent = Some(accent);
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Chip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color) = if self.selected {
            (
                ExplorerColors::chip_selected_bg(),
                ExplorerColors::chip_selected_text(),
            )
        } else {
            (ExplorerColors::chip_bg(), ExplorerColors::chip_text())
        };

        let border_color = self.accent.unwrap_or(bg_color);

        let mut element = div()
            .id(self.id)
            .px(px(10.0))
            .py(px(4.0))
            .bg(bg_color)
            .border_1()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(12.0))
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded_full()
            .cursor_pointer()
            .hover(|s| s.opacity(0.85))
            .child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
