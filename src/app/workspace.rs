//! Workspace - Main Shell
//!
//! The workspace is the container that holds the header and the explorer
//! page. The app has a single page, so there is no tab navigation.

use gpui::{
    div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::features::explorer::page::ExplorerPage;
use crate::theme::colors::ExplorerColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    explorer: Entity<ExplorerPage>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let explorer = cx.new(|cx| ExplorerPage::new(entities.clone(), cx));

        Self { header, explorer }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(ExplorerColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.explorer.clone()),
            )
    }
}
