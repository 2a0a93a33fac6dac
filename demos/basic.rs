//! Standalone demo: two pickers in one window.
//!
//! Run with `RUST_LOG=floem_color_dropdown=debug` to watch the dropdown lifecycle.

use floem::event::{Event, EventListener};
use floem::prelude::*;
use floem::window::WindowConfig;
use floem_color_dropdown::{ColorKeyword, ColorPicker, ColorPresets, Format, PickerOptions, Theme};

fn main() {
    env_logger::init();

    floem::Application::new()
        .window(
            move |_| {
                let brand = ColorPicker::new(
                    PickerOptions::new()
                        .with_id("brand")
                        .with_value("#2554BD")
                        .with_presets(ColorPresets::default())
                        .with_keywords([
                            ColorKeyword::from("transparent"),
                            ColorKeyword::labeled("Default", "rgb(37, 84, 189)"),
                        ]),
                )
                .on_change(|value| log::info!("brand -> {value}"))
                .viewport(480.0, 640.0);
                let accent = ColorPicker::new(
                    PickerOptions::new()
                        .with_value("hsl(340, 80%, 55%)")
                        .with_format(Format::Hsl)
                        .with_theme(Theme::Light),
                )
                .on_change(|value| log::info!("accent -> {value}"))
                .viewport(480.0, 640.0);

                let handles = [brand.handle(), accent.handle()];
                let down = handles.clone();

                v_stack((brand.build(), accent.build()))
                    .style(|s| s.size_full().padding(24.0).gap(48.0))
                    .on_event_cont(EventListener::PointerDown, move |e| {
                        if let Event::PointerDown(pe) = e {
                            for handle in &down {
                                handle.pointer_down(pe.pos.x, pe.pos.y);
                            }
                        }
                    })
                    .on_event_cont(EventListener::PointerUp, move |e| {
                        if let Event::PointerUp(pe) = e {
                            for handle in &handles {
                                handle.pointer_up(pe.pos.x, pe.pos.y);
                            }
                        }
                    })
                    .on_event_stop(EventListener::WindowClosed, |_| floem::quit_app())
            },
            Some(
                WindowConfig::default()
                    .size((480.0, 640.0))
                    .title("floem-color-dropdown"),
            ),
        )
        .run();
}
