//! Presets grid, keywords list and the toggle that opens them.

use floem::event::{EventListener, EventPropagation};
use floem::prelude::*;
use floem::reactive::SignalWith;
use floem::View;

use crate::constants;
use crate::dropdown::Surface;
use crate::events::{FocusTarget, MenuList};
use crate::palette::PresetsLayout;
use crate::picker_view::{PickerCx, dropdown_frame, key_of, paint_color, track_focus};

/// Handles arrow keys and activation on one menu option.
fn menu_option(
    cx: PickerCx,
    list: MenuList,
    index: usize,
    view: impl View + 'static,
) -> impl IntoView {
    cx.register(FocusTarget::MenuOption { list, index }, view.id());
    let click_cx = cx.clone();
    let key_cx = cx.clone();
    track_focus(view.keyboard_navigable(), cx)
        .on_click_stop(move |_| {
            click_cx.update(|c| match list {
                MenuList::Presets => c.select_preset(index),
                MenuList::Keywords => c.select_keyword(index),
            });
        })
        .on_event(EventListener::KeyDown, move |e| {
            let Some(key) = key_of(e) else {
                return EventPropagation::Continue;
            };
            match key_cx.update(|c| c.menu_key(list, index, key)) {
                Some(_) => EventPropagation::Stop,
                None => EventPropagation::Continue,
            }
        })
}

fn presets_grid(cx: PickerCx, layout: PresetsLayout) -> impl IntoView {
    let snapshot = cx.snapshot;
    let presets = cx.read(|c| c.presets().to_vec());
    let item = (layout.item_size * constants::REM) as f32;
    let gap = (layout.gap * constants::REM) as f32;
    cx.with_geometry(|g| g.set_columns(layout.fit));

    let rows = presets.chunks(layout.fit).enumerate().map(|(row, chunk)| {
        let cells = chunk.iter().enumerate().map(|(col, color)| {
            let index = row * layout.fit + col;
            let color = *color;
            let fill = paint_color(&color);
            let current_cx = cx.clone();
            let swatch = empty().style(move |s| {
                let active = snapshot.with(|_| current_cx.read(|c| c.is_current(&color)));
                s.size(item, item)
                    .background(fill)
                    .border_radius(if layout.multiline { 0.0 } else { constants::RADIUS })
                    .cursor(floem::style::CursorStyle::Pointer)
                    .apply_if(active, |s| s.border(2.0).border_color(Color::WHITE))
                    .focus_visible(|s| s.outline(2.0).outline_color(constants::BORDER))
            });
            menu_option(cx.clone(), MenuList::Presets, index, swatch)
        });
        h_stack_from_iter(cells).style(move |s| s.gap(gap))
    });

    let grid = v_stack_from_iter(rows.collect::<Vec<_>>()).style(move |s| s.gap(gap));
    let rest = (layout.height() * constants::REM) as f32;
    let hover = (layout.hover_height() * constants::REM) as f32;
    scroll(grid).style(move |s| {
        s.max_height(rest)
            .apply_if(layout.scrollable, |s| s.hover(|s| s.max_height(hover)))
    })
}

fn keywords_list(cx: PickerCx) -> impl IntoView {
    let snapshot = cx.snapshot;
    let keywords = cx.read(|c| c.keywords().to_vec());
    let items = keywords.into_iter().enumerate().map(|(index, keyword)| {
        let text = keyword.label().to_string();
        let current_cx = cx.clone();
        let entry = label(move || text.clone()).style(move |s| {
            let active = snapshot.with(|_| current_cx.read(|c| c.is_current_keyword(index)));
            s.padding_horiz(constants::PADDING)
                .padding_vert(2.0)
                .border_radius(constants::RADIUS)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgba8(128, 128, 128, 60)))
                .apply_if(active, |s| s.background(Color::rgba8(128, 128, 128, 100)))
        });
        menu_option(cx.clone(), MenuList::Keywords, index, entry)
    });
    v_stack_from_iter(items.collect::<Vec<_>>()).style(|s| s.gap(1.0))
}

/// Dropdown with the presets grid above the keywords list.
pub(crate) fn menu_dropdown(cx: PickerCx) -> impl IntoView {
    let (layout, has_keywords) = cx.read(|c| (c.presets_layout(), !c.keywords().is_empty()));
    let presets_label = cx.read(|c| c.locale().presets_label.clone());
    let defaults_label = cx.read(|c| c.locale().defaults_label.clone());

    let presets = match layout {
        Some(layout) => v_stack((
            label(move || presets_label.clone())
                .style(|s| s.font_size(constants::LABEL_FONT).color(constants::MUTED)),
            presets_grid(cx.clone(), layout),
        ))
        .into_any(),
        None => empty().style(|s| s.hide()).into_any(),
    };
    let keywords = if has_keywords {
        v_stack((
            label(move || defaults_label.clone())
                .style(|s| s.font_size(constants::LABEL_FONT).color(constants::MUTED)),
            keywords_list(cx.clone()),
        ))
        .into_any()
    } else {
        empty().style(|s| s.hide()).into_any()
    };

    dropdown_frame(cx, Surface::Menu, v_stack((presets, keywords)))
}

/// Chevron button that opens or closes the menu.
pub(crate) fn menu_toggle(cx: PickerCx) -> impl IntoView {
    let snapshot = cx.snapshot;
    let view = container(
        label(|| lucide_icons::Icon::ChevronDown.unicode().to_string())
            .style(|s| s.font_size(14.0).font_family("lucide".to_string())),
    )
    .style(move |s| {
        let open = snapshot.with(|snap| snap.is_laid_out(Surface::Menu));
        s.size(20.0, constants::PREVIEW_HEIGHT)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .color(constants::MUTED)
            .hover(|s| s.background(Color::rgba8(128, 128, 128, 60)))
            .apply_if(open, |s| s.background(Color::rgba8(128, 128, 128, 100)))
    })
    .keyboard_navigable();
    cx.register(FocusTarget::MenuToggle, view.id());

    let click_cx = cx.clone();
    track_focus(view, cx).on_click_stop(move |_| {
        click_cx.update(|c| c.toggle_menu());
    })
}
