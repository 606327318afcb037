//! Explorer Page
//!
//! Renders the expert roster strip, the filter chip row, and the supplement
//! card grid. All visible data is derived from the immutable catalog plus
//! the current filter selection; the page never mutates the catalog.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::assets::{image_icon, CustomIconName};
use crate::catalog::composer;
use crate::catalog::{Endorsement, Expert, FilterDimension, Supplement};
use crate::components::primitives::button::Button;
use crate::components::primitives::chip::Chip;
use crate::constants::{CARD_IMAGE_SIZE, CARD_MIN_WIDTH, DESCRIPTION_PREVIEW_CHARS, PORTRAIT_SIZE};
use crate::features::explorer::controller::ExplorerController;
use crate::i18n::{t, Locale};
use crate::theme::colors::ExplorerColors;
use crate::utils::format::truncate;

/// Explorer page component
pub struct ExplorerPage {
    entities: AppEntities,
    controller: ExplorerController,
}

impl ExplorerPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = ExplorerController::new(entities.clone());

        // Observe filter changes (selection and dimension)
        cx.observe(&entities.filter, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn render_roster_chip(
        &self,
        expert: &Expert,
        dimension: FilterDimension,
        selection: Option<&str>,
    ) -> impl IntoElement {
        let accent = ExplorerColors::accent(expert.accent);
        let is_selected = selection == Some(expert.name.as_str());
        let controller = self.controller.clone();
        let name = expert.name.clone();

        let bg_color = if is_selected {
            ExplorerColors::endorsement_hover()
        } else {
            ExplorerColors::card_bg()
        };

        let mut chip = div()
            .id(SharedString::from(format!("roster-{}", expert.name)))
            .flex()
            .items_center()
            .gap_2()
            .px_3()
            .py_1()
            .bg(bg_color)
            .border_1()
            .border_color(accent)
            .rounded_full()
            .child(
                image_icon(&expert.image_path)
                    .size(px(PORTRAIT_SIZE))
                    .text_color(accent),
            )
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(ExplorerColors::text_primary())
                    .child(expert.name.clone()),
            );

        // The roster doubles as filter controls in the expert dimension
        if dimension == FilterDimension::Expert {
            chip = chip
                .cursor_pointer()
                .hover(|s| s.bg(ExplorerColors::endorsement_hover()))
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    controller.toggle_value(&name, cx);
                });
        }

        chip
    }

    fn render_filter_bar(
        &self,
        values: &[String],
        roster: &[Expert],
        dimension: FilterDimension,
        selection: Option<&str>,
        locale: Locale,
    ) -> impl IntoElement {
        let label_key = match dimension {
            FilterDimension::Tag => "filter-by-tag",
            FilterDimension::Expert => "filter-by-expert",
        };

        let controller = self.controller.clone();
        let other_dimension = match dimension {
            FilterDimension::Tag => FilterDimension::Expert,
            FilterDimension::Expert => FilterDimension::Tag,
        };
        let other_label_key = match other_dimension {
            FilterDimension::Tag => "filter-by-tag",
            FilterDimension::Expert => "filter-by-expert",
        };

        let mut bar = div()
            .w_full()
            .flex()
            .flex_wrap()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(ExplorerColors::text_secondary())
                    .child(t(locale, label_key)),
            );

        for value in values {
            let controller = self.controller.clone();
            let chip_value = value.clone();
            let mut chip = Chip::new(
                SharedString::from(format!("filter-{value}")),
                value.clone(),
            )
            .selected(selection == Some(value.as_str()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                controller.toggle_value(&chip_value, cx);
            });
            // Expert chips carry the expert's roster accent
            if dimension == FilterDimension::Expert {
                chip = chip.accent(ExplorerColors::accent(composer::accent_for(value, roster)));
            }
            bar = bar.child(chip);
        }

        if selection.is_some() {
            let controller = self.controller.clone();
            bar = bar.child(
                Button::ghost("clear-filter", t(locale, "action-clear-filter")).on_click(
                    move |_event: &ClickEvent, _window, cx| {
                        controller.clear_filter(cx);
                    },
                ),
            );
        }

        // Switch between tag and expert filtering
        bar.child(
            Button::ghost("switch-dimension", t(locale, other_label_key)).on_click(
                move |_event: &ClickEvent, _window, cx| {
                    controller.set_dimension(other_dimension, cx);
                },
            ),
        )
    }

    fn render_endorsement(
        &self,
        supplement_name: &str,
        endorsement: &Endorsement,
        roster: &[Expert],
    ) -> impl IntoElement {
        let accent = ExplorerColors::accent(composer::accent_for(&endorsement.expert, roster));
        let link = endorsement.link.clone();

        let mut row = div()
            .id(SharedString::from(format!(
                "endorsement-{}-{}",
                supplement_name, endorsement.expert
            )))
            .w_full()
            .flex()
            .items_center()
            .gap_3()
            .p_2()
            .border_1()
            .border_color(ExplorerColors::border())
            .rounded_md()
            .cursor_pointer()
            .hover(|s| s.bg(ExplorerColors::endorsement_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                cx.open_url(&link);
            })
            .child(
                image_icon(&endorsement.image_path)
                    .size(px(PORTRAIT_SIZE))
                    .text_color(accent),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(ExplorerColors::text_primary())
                            .child(endorsement.expert.clone()),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(ExplorerColors::text_secondary())
                            .child(endorsement.brand.clone()),
                    ),
            );

        if let Some(note) = &endorsement.note {
            row = row.child(
                div()
                    .text_xs()
                    .text_color(ExplorerColors::text_muted())
                    .italic()
                    .child(note.clone()),
            );
        }

        row.child(
            Icon::from(CustomIconName::ExternalLink)
                .size_4()
                .text_color(ExplorerColors::text_muted()),
        )
    }

    fn render_card(
        &self,
        supplement: &Supplement,
        roster: &[Expert],
        selection: Option<&str>,
        dimension: FilterDimension,
        locale: Locale,
    ) -> impl IntoElement {
        let mut card = div()
            .w(px(CARD_MIN_WIDTH))
            .flex()
            .flex_col()
            .gap_3()
            .p_6()
            .bg(ExplorerColors::card_bg())
            .border_1()
            .border_color(ExplorerColors::border())
            .rounded_xl()
            .shadow_md()
            // Product image
            .child(
                div()
                    .w_full()
                    .flex()
                    .justify_center()
                    .child(image_icon(&supplement.image_path).size(px(CARD_IMAGE_SIZE))),
            )
            // Name
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(ExplorerColors::text_primary())
                    .child(supplement.name.clone()),
            )
            // Description preview
            .child(
                div()
                    .text_sm()
                    .text_color(ExplorerColors::text_secondary())
                    .child(truncate(&supplement.description, DESCRIPTION_PREVIEW_CHARS)),
            );

        if let Some(dosage) = &supplement.dosage {
            card = card.child(
                div()
                    .flex()
                    .gap_1()
                    .text_sm()
                    .child(
                        div()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(ExplorerColors::text_primary())
                            .child(format!("{}:", t(locale, "card-dosage"))),
                    )
                    .child(
                        div()
                            .text_color(ExplorerColors::text_secondary())
                            .child(dosage.clone()),
                    ),
            );
        }

        // Tag chips; clickable in the tag dimension
        let mut tags_row = div().flex().flex_wrap().gap_2();
        for tag in &supplement.health_tags {
            let mut chip = Chip::new(
                SharedString::from(format!("card-{}-{tag}", supplement.name)),
                tag.clone(),
            )
            .selected(selection == Some(tag.as_str()));
            if dimension == FilterDimension::Tag {
                let controller = self.controller.clone();
                let chip_tag = tag.clone();
                chip = chip.on_click(move |_event: &ClickEvent, _window, cx| {
                    controller.toggle_value(&chip_tag, cx);
                });
            }
            tags_row = tags_row.child(chip);
        }
        card = card.child(tags_row);

        // Endorsement rows
        let mut endorsements = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_xs()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(ExplorerColors::text_muted())
                    .child(t(locale, "card-recommended-by")),
            );
        for endorsement in &supplement.endorsements {
            endorsements =
                endorsements.child(self.render_endorsement(&supplement.name, endorsement, roster));
        }

        card.child(endorsements)
    }

    fn render_empty_state(&self, locale: Locale) -> impl IntoElement {
        let controller = self.controller.clone();

        div()
            .w_full()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .py_12()
            .child(
                div()
                    .text_lg()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(ExplorerColors::text_secondary())
                    .child(t(locale, "empty-title")),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(ExplorerColors::text_muted())
                    .child(t(locale, "empty-hint")),
            )
            .child(
                Button::primary("empty-clear-filter", t(locale, "action-clear-filter")).on_click(
                    move |_event: &ClickEvent, _window, cx| {
                        controller.clear_filter(cx);
                    },
                ),
            )
    }
}

impl Render for ExplorerPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        let (dimension, selection) = {
            let filter = self.entities.filter.read(cx);
            (filter.dimension, filter.current().map(str::to_string))
        };

        // Derive the visible subset and chip values, then let go of the
        // catalog borrow before building click handlers.
        let (visible, chip_values, roster): (Vec<Supplement>, Vec<String>, Vec<Expert>) = {
            let state = self.entities.catalog.read(cx);
            let catalog = state.catalog();
            let visible = composer::visible_records(catalog, dimension, selection.as_deref())
                .into_iter()
                .cloned()
                .collect();
            let values = match dimension {
                FilterDimension::Tag => composer::distinct_tags(catalog),
                FilterDimension::Expert => composer::distinct_experts(catalog),
            };
            (visible, values, catalog.roster().to_vec())
        };

        let mut roster_strip = div().w_full().flex().flex_wrap().justify_center().gap_3();
        for expert in &roster {
            roster_strip =
                roster_strip.child(self.render_roster_chip(expert, dimension, selection.as_deref()));
        }

        let mut grid = div().w_full().flex().flex_wrap().gap_6();
        for supplement in &visible {
            grid = grid.child(self.render_card(
                supplement,
                &roster,
                selection.as_deref(),
                dimension,
                locale,
            ));
        }

        div()
            .id("explorer-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .overflow_y_scroll()
            .bg(ExplorerColors::background())
            .p_6()
            .gap_4()
            // Subtitle
            .child(
                div()
                    .max_w(px(760.0))
                    .text_sm()
                    .text_color(ExplorerColors::text_secondary())
                    .text_center()
                    .child(t(locale, "app-subtitle")),
            )
            // Expert roster strip
            .child(roster_strip)
            // Filter chips
            .child(self.render_filter_bar(
                &chip_values,
                &roster,
                dimension,
                selection.as_deref(),
                locale,
            ))
            // Card grid or empty state
            .child(if visible.is_empty() {
                self.render_empty_state(locale).into_any_element()
            } else {
                grid.into_any_element()
            })
    }
}
