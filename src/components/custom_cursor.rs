use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::warn;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::{CURSOR_FRAME_MS, CURSOR_MIN_VIEWPORT_PX};
use crate::motion::{Spring, CURSOR_SPRING};
use crate::scheduler::{IntervalScheduler, Scheduler};

const INTERACTIVE_SELECTOR: &str = r#"button, a, [data-hover="true"]"#;
const OFFSCREEN: f64 = -100.0;

/// Whether the pointer is over something clickable.
pub fn classify_hover(tag_name: &str, inside_interactive: bool) -> bool {
    inside_interactive || tag_name.eq_ignore_ascii_case("input")
}

fn is_interactive(target: &Element) -> bool {
    let inside = target
        .closest(INTERACTIVE_SELECTOR)
        .ok()
        .flatten()
        .is_some();
    classify_hover(&target.tag_name(), inside)
}

/// Touch devices and narrow screens keep the native cursor.
fn cursor_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let coarse = window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    !coarse && width >= CURSOR_MIN_VIEWPORT_PX
}

/// Logs a failed listener registration. The cursor keeps running without it.
fn listener_ok<E: fmt::Debug>(action: &str, event: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!("could not {} {} listener: {:?}", action, event, err);
            false
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorLook {
    pub dot_scale: f64,
    pub ring_scale: f64,
    pub ring_opacity: f64,
    pub outer_scale: f64,
    pub outer_color: &'static str,
    pub reticle_size: f64,
    pub reticle_opacity: f64,
    pub reticle_rotate: f64,
}

pub fn cursor_look(hovering: bool, clicking: bool) -> CursorLook {
    CursorLook {
        dot_scale: if hovering || clicking { 0.5 } else { 1.0 },
        ring_scale: if hovering { 1.8 } else { 1.2 },
        ring_opacity: if hovering { 0.8 } else { 0.3 },
        outer_scale: if clicking { 0.9 } else { 1.0 },
        outer_color: if clicking { "#a8fbd3" } else { "#4fb7b3" },
        reticle_size: if hovering { 80.0 } else { 0.0 },
        reticle_opacity: if hovering { 1.0 } else { 0.0 },
        reticle_rotate: if clicking { 90.0 } else { 0.0 },
    }
}

struct CursorMotion {
    target: (f64, f64),
    x: Spring,
    y: Spring,
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let is_visible = use_state(|| false);
    let is_hovering = use_state_eq(|| false);
    let is_clicking = use_state_eq(|| false);
    let position = use_state_eq(|| (OFFSCREEN, OFFSCREEN));

    {
        let is_visible = is_visible.clone();
        let is_hovering = is_hovering.clone();
        let is_clicking = is_clicking.clone();
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let mut teardown: Option<Box<dyn FnOnce()>> = None;

                if let Some(window) = web_sys::window().filter(|_| cursor_supported()) {
                    is_visible.set(true);

                    let motion = Rc::new(RefCell::new(CursorMotion {
                        target: (OFFSCREEN, OFFSCREEN),
                        x: Spring::new(OFFSCREEN, CURSOR_SPRING),
                        y: Spring::new(OFFSCREEN, CURSOR_SPRING),
                    }));

                    let on_move = {
                        let motion = motion.clone();
                        Closure::wrap(Box::new(move |e: MouseEvent| {
                            motion.borrow_mut().target = (f64::from(e.client_x()), f64::from(e.client_y()));
                            let hovering = e
                                .target()
                                .and_then(|t| t.dyn_into::<Element>().ok())
                                .map(|el| is_interactive(&el))
                                .unwrap_or(false);
                            is_hovering.set(hovering);
                        }) as Box<dyn FnMut(MouseEvent)>)
                    };

                    let on_down = {
                        let is_clicking = is_clicking.clone();
                        Closure::wrap(Box::new(move |_: MouseEvent| {
                            is_clicking.set(true);
                        }) as Box<dyn FnMut(MouseEvent)>)
                    };

                    let on_up = Closure::wrap(Box::new(move |_: MouseEvent| {
                        is_clicking.set(false);
                    }) as Box<dyn FnMut(MouseEvent)>);

                    let listeners = [
                        ("mousemove", on_move),
                        ("mousedown", on_down),
                        ("mouseup", on_up),
                    ];
                    for (event, callback) in &listeners {
                        let result = window.add_event_listener_with_callback(
                            event,
                            callback.as_ref().unchecked_ref(),
                        );
                        listener_ok("add", event, result);
                    }

                    let frame_secs = f64::from(CURSOR_FRAME_MS) / 1_000.0;
                    let frames = IntervalScheduler.every(
                        CURSOR_FRAME_MS,
                        Box::new(move || {
                            let mut m = motion.borrow_mut();
                            let (tx, ty) = m.target;
                            let x = m.x.step(tx, frame_secs);
                            let y = m.y.step(ty, frame_secs);
                            position.set((x, y));
                        }),
                    );

                    teardown = Some(Box::new(move || {
                        drop(frames);
                        for (event, callback) in &listeners {
                            let result = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                            listener_ok("remove", event, result);
                        }
                    }));
                }

                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            (),
        );
    }

    if !*is_visible {
        return html! {};
    }

    let look = cursor_look(*is_hovering, *is_clicking);
    let (x, y) = *position;

    html! {
        <div
            class="custom-cursor"
            style={format!("transform: translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%);", x, y)}
        >
            <div class="cursor-inner">
                <div class="cursor-dot" style={format!("transform: scale({});", look.dot_scale)}></div>
                <div class="cursor-ring-spin">
                    <div
                        class="cursor-ring"
                        style={format!("transform: scale({}); opacity: {};", look.ring_scale, look.ring_opacity)}
                    ></div>
                </div>
                <div
                    class="cursor-outer"
                    style={format!("transform: scale({}); border-color: {};", look.outer_scale, look.outer_color)}
                ></div>
                <div
                    class="cursor-reticle"
                    style={format!(
                        "width: {0}px; height: {0}px; opacity: {1}; transform: rotate({2}deg);",
                        look.reticle_size, look.reticle_opacity, look.reticle_rotate
                    )}
                >
                    <span class="reticle-corner top-left"></span>
                    <span class="reticle-corner top-right"></span>
                    <span class="reticle-corner bottom-left"></span>
                    <span class="reticle-corner bottom-right"></span>
                </div>
            </div>

            <style>
                {r#"
                .custom-cursor {
                    position: fixed;
                    top: 0;
                    left: 0;
                    z-index: 9999;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                    will-change: transform;
                }

                .cursor-inner {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .cursor-dot {
                    position: relative;
                    z-index: 10;
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #a8fbd3;
                    box-shadow: 0 0 10px #a8fbd3;
                    transition: transform 0.2s ease;
                }

                .cursor-ring-spin {
                    position: absolute;
                    animation: cursorSpin 8s linear infinite;
                }

                @keyframes cursorSpin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(360deg); }
                }

                .cursor-ring {
                    width: 48px;
                    height: 48px;
                    border: 1px dashed #4fb7b3;
                    border-radius: 50%;
                    transition: transform 0.2s ease, opacity 0.2s ease;
                }

                .cursor-outer {
                    position: absolute;
                    width: 64px;
                    height: 64px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 50%;
                    transition: transform 0.2s ease, border-color 0.2s ease;
                }

                .cursor-reticle {
                    position: absolute;
                    transition: all 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
                }

                .reticle-corner {
                    position: absolute;
                    width: 16px;
                    height: 16px;
                    border-color: #a8fbd3;
                    border-style: solid;
                    border-width: 0;
                    box-shadow: 0 0 10px #a8fbd3;
                }

                .reticle-corner.top-left { top: 0; left: 0; border-top-width: 2px; border-left-width: 2px; }
                .reticle-corner.top-right { top: 0; right: 0; border-top-width: 2px; border-right-width: 2px; }
                .reticle-corner.bottom-left { bottom: 0; left: 0; border-bottom-width: 2px; border-left-width: 2px; }
                .reticle-corner.bottom-right { bottom: 0; right: 0; border-bottom-width: 2px; border-right-width: 2px; }

                @media (max-width: 767px) {
                    .custom-cursor {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_buttons_and_inputs_count_as_hover_targets() {
        assert!(classify_hover("DIV", true));
        assert!(classify_hover("INPUT", false));
        assert!(classify_hover("input", false));
        assert!(!classify_hover("P", false));
    }

    #[test]
    fn idle_cursor_hides_the_reticle() {
        let look = cursor_look(false, false);
        assert_eq!(look.dot_scale, 1.0);
        assert_eq!(look.reticle_size, 0.0);
        assert_eq!(look.reticle_opacity, 0.0);
        assert_eq!(look.outer_color, "#4fb7b3");
    }

    #[test]
    fn hover_and_click_states_combine() {
        let look = cursor_look(true, true);
        assert_eq!(look.dot_scale, 0.5);
        assert_eq!(look.ring_scale, 1.8);
        assert_eq!(look.reticle_size, 80.0);
        assert_eq!(look.reticle_rotate, 90.0);
        assert_eq!(look.outer_scale, 0.9);
        assert_eq!(look.outer_color, "#a8fbd3");
    }

    #[test]
    fn failed_listener_calls_are_reported_not_raised() {
        assert!(listener_ok::<&str>("add", "mousemove", Ok(())));
        assert!(!listener_ok("add", "mousemove", Err("TypeError")));
        assert!(!listener_ok("remove", "mouseup", Err("InvalidStateError")));
    }
}
