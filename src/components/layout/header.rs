//! Header Component
//!
//! The application header with logo, title, record count, and language
//! switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::assets::CustomIconName;
use crate::constants::HEADER_HEIGHT;
use crate::i18n::t;
use crate::theme::colors::ExplorerColors;
use crate::utils::config_store;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let count = self.entities.catalog.read(cx).catalog().len();
        let records_label = t(locale, "explorer-records");
        let lang_label = locale.display_name();

        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(ExplorerColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Icon::from(CustomIconName::Leaf)
                            .size_5()
                            .text_color(ExplorerColors::text_header()),
                    )
                    .child(
                        div()
                            .text_color(ExplorerColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(title),
                    )
                    .child(
                        div()
                            .text_color(gpui::rgba(0xffffffaa))
                            .text_size(px(12.0))
                            .child(format!("{} {}", count, records_label)),
                    ),
            )
            // Right side: language switcher
            .child(
                div()
                    .id("lang-switcher")
                    .flex()
                    .items_center()
                    .gap_2()
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        entities.i18n.update(cx, |i18n, cx| {
                            i18n.toggle_locale();
                            cx.notify();
                        });

                        // Persist the new locale alongside the rest of the settings
                        let locale = entities.i18n.read(cx).locale;
                        let settings = entities.config.update(cx, |config, cx| {
                            config.settings.locale = locale;
                            cx.notify();
                            config.settings.clone()
                        });
                        if let Err(error) = config_store::save_settings("settings.json", &settings) {
                            tracing::warn!("Failed to save settings: {error}");
                        }
                    })
                    .child(
                        Icon::from(CustomIconName::Languages)
                            .size_4()
                            .text_color(ExplorerColors::text_header()),
                    )
                    .child(
                        div()
                            .text_color(ExplorerColors::text_header())
                            .text_size(px(13.0))
                            .child(lang_label),
                    ),
            )
    }
}
