//! Channel and hex fields of the picker form.

use floem::event::{Event, EventListener, EventPropagation};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::constants;
use crate::forms::{Channel, FieldValue, FormField};
use crate::picker_view::{PickerCx, track_focus};

fn field_text(field: &FormField) -> String {
    match &field.value {
        FieldValue::Number { value, .. } => format!("{}", *value as i64),
        FieldValue::Text(text) => text.clone(),
    }
}

/// Current display text of the field for `channel` (`None` = hex field).
fn current_text(cx: &PickerCx, channel: Option<Channel>) -> String {
    cx.read(|c| {
        c.form_fields()
            .iter()
            .find(|f| f.channel == channel)
            .map(field_text)
            .unwrap_or_default()
    })
}

fn field_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .color(constants::LIGHT_FG)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

fn is_enter(e: &Event) -> bool {
    matches!(
        e,
        Event::KeyDown(ke) if ke.key.logical_key
            == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
    )
}

/// A numeric field bound to one channel of the active format.
///
/// Committed on Enter or focus-lost; text that isn't a number snaps back.
fn channel_input(cx: PickerCx, field: FormField) -> impl IntoView {
    let Some(channel) = field.channel else {
        return hex_input(cx, field).into_any();
    };
    let text = RwSignal::new(field_text(&field));

    let sync_cx = cx.clone();
    let focus_cx = cx.clone();
    create_effect(move |_| {
        sync_cx.snapshot.track();
        let expected = current_text(&sync_cx, Some(channel));
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        match raw.trim().parse::<f64>() {
            Ok(num) => {
                cx.update(|c| c.set_channel(channel, num));
            }
            Err(_) => text.set(current_text(&cx, Some(channel))),
        }
    };
    let on_commit_clone = on_commit.clone();
    let short = field.short;
    let field_view = text_input(text).style(|s| field_style(s, constants::INPUT_WIDTH));

    v_stack((
        track_focus(field_view, focus_cx)
            .on_event_cont(EventListener::FocusLost, move |_| on_commit())
            .on_event(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_commit_clone();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(move || short).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(constants::MUTED)
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
    .into_any()
}

/// Hex digits field; Enter commits, focus-lost restores the current color.
fn hex_input(cx: PickerCx, field: FormField) -> impl IntoView {
    let short = field.short;
    let text = RwSignal::new(field_text(&field));

    let sync_cx = cx.clone();
    create_effect(move |_| {
        sync_cx.snapshot.track();
        let expected = current_text(&sync_cx, None);
        let current = text.get_untracked();
        if current.trim_start_matches('#').to_uppercase() != expected {
            text.set(expected);
        }
    });

    let reset_cx = cx.clone();
    let field_view = text_input(text).style(|s| field_style(s, constants::HEX_INPUT_WIDTH));
    h_stack((
        label(move || short).style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(constants::MUTED)
        }),
        track_focus(field_view, cx.clone())
            .on_event_cont(EventListener::FocusLost, move |_| {
                text.set(current_text(&reset_cx, None));
            })
            .on_event(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    let raw = text.get_untracked();
                    cx.update(|c| c.commit_hex(&raw));
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// The field row for the active format.
pub(crate) fn form_row(cx: PickerCx) -> impl IntoView {
    let fields = cx.read(|c| c.form_fields());
    h_stack_from_iter(fields.into_iter().map(move |field| channel_input(cx.clone(), field)))
        .style(|s| s.gap(constants::GAP / 2.0).items_center().justify_center())
}
