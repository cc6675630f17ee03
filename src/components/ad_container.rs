use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{AD_CLIENT, AD_SLOT, AD_WIDTH_POLL_MS};
use crate::scheduler::{IntervalScheduler, Scheduler, Subscription};

/// Empty request object for the ad loader queue.
#[derive(Serialize)]
struct AdRequest {}

/// Polls `width` until it reports a laid-out (non-zero) size, then calls
/// `on_ready` exactly once. Later ticks are ignored; the owner drops the
/// subscription once it has reacted.
pub fn watch_for_width<W, R>(
    scheduler: &dyn Scheduler,
    period_ms: u32,
    width: W,
    on_ready: R,
) -> Subscription
where
    W: Fn() -> i32 + 'static,
    R: Fn() + 'static,
{
    let fired = Rc::new(Cell::new(false));
    scheduler.every(
        period_ms,
        Box::new(move || {
            if !fired.get() && width() > 0 {
                fired.set(true);
                on_ready();
            }
        }),
    )
}

fn push_ad_request() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let key = JsValue::from_str("adsbygoogle");
    let mut queue = Reflect::get(&window, &key)?;
    if queue.is_undefined() || queue.is_null() {
        queue = Array::new().into();
        Reflect::set(&window, &key, &queue)?;
    }
    let push: Function = Reflect::get(&queue, &JsValue::from_str("push"))?.dyn_into()?;
    let request = serde_wasm_bindgen::to_value(&AdRequest {})?;
    push.call1(&queue, &request)?;
    Ok(())
}

/// Sponsored slot. The ad tag is only mounted once the container has a
/// width, since the loader errors out on zero-width slots.
#[function_component(AdContainer)]
pub fn ad_container() -> Html {
    let container_ref = use_node_ref();
    let should_render_ad = use_state(|| false);

    {
        let ready = *should_render_ad;
        let container_ref = container_ref.clone();
        let set_ready = should_render_ad.clone();
        use_effect_with_deps(
            move |ready| {
                let subscription = (!*ready).then(|| {
                    watch_for_width(
                        &IntervalScheduler,
                        AD_WIDTH_POLL_MS,
                        move || {
                            container_ref
                                .cast::<HtmlElement>()
                                .map(|el| el.offset_width())
                                .unwrap_or(0)
                        },
                        move || set_ready.set(true),
                    )
                });
                move || drop(subscription)
            },
            ready,
        );
    }

    {
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |ready| {
                if *ready {
                    let already_filled = container_ref
                        .cast::<HtmlElement>()
                        .and_then(|el| el.query_selector(".adsbygoogle").ok().flatten())
                        .map(|slot| slot.has_attribute("data-adsbygoogle-status"));
                    if already_filled == Some(false) {
                        if let Err(err) = push_ad_request() {
                            gloo_console::error!("AdSense push error:", err);
                        }
                    }
                }
                || ()
            },
            *should_render_ad,
        );
    }

    html! {
        <div class="ad-outer">
            <div class="ad-float">
                <div class="ad-blob"></div>

                <div class="ad-glass" ref={container_ref}>
                    <div class="ad-sheen"></div>
                    <div class="ad-shine"></div>

                    <div class="ad-header">
                        <div class="ad-header-left">
                            <span class="ad-dot"></span>
                            <span class="ad-label">{"Sponsored"}</span>
                        </div>
                        <div class="ad-header-right">{"ADVERTISEMENT"}</div>
                    </div>

                    <div class="ad-slot">
                        {
                            if *should_render_ad {
                                html! {
                                    <ins class="adsbygoogle"
                                        style="display: block; width: 100%;"
                                        data-ad-client={AD_CLIENT}
                                        data-ad-slot={AD_SLOT}
                                        data-ad-format="auto"
                                        data-full-width-responsive="true"></ins>
                                }
                            } else {
                                html! {
                                    <div class="ad-loading">
                                        <div class="ad-loading-dots">
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                        </div>
                                        <span class="ad-loading-text">{"Loading Content"}</span>
                                    </div>
                                }
                            }
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .ad-outer {
                    position: relative;
                    z-index: 20;
                    display: flex;
                    justify-content: center;
                    width: 100%;
                    margin: 2rem 0;
                    padding: 5rem 2rem;
                    pointer-events: auto;
                }

                .ad-float {
                    position: relative;
                    width: 100%;
                    max-width: 64rem;
                    animation: adFloat 6s ease-in-out infinite;
                }

                @keyframes adFloat {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-12px); }
                }

                .ad-blob {
                    position: absolute;
                    inset: -0.5rem;
                    border-radius: 2.5rem;
                    background: linear-gradient(to right, rgba(168,251,211,0.4), rgba(79,183,179,0.4), rgba(99,122,185,0.4));
                    background-size: 200% 200%;
                    filter: blur(40px);
                    opacity: 0.6;
                    animation: adBlob 8s linear infinite;
                }

                @keyframes adBlob {
                    0%, 100% { background-position: 0% 50%; transform: scale(1); }
                    50% { background-position: 100% 50%; transform: scale(1.02); }
                }

                .ad-glass {
                    position: relative;
                    overflow: hidden;
                    border-radius: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(40px);
                    box-shadow: 0 8px 32px 0 rgba(0, 0, 0, 0.36);
                }

                .ad-sheen {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, rgba(255,255,255,0.1), transparent, rgba(0,0,0,0.3));
                    pointer-events: none;
                }

                .ad-shine {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    left: -100%;
                    width: 150px;
                    background: linear-gradient(to right, transparent, rgba(255,255,255,0.1), transparent);
                    transform: skewX(-12deg);
                    pointer-events: none;
                    animation: adShine 8s ease-in-out infinite;
                }

                @keyframes adShine {
                    0% { left: -100%; }
                    37.5%, 100% { left: 200%; }
                }

                .ad-header {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1.5rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.2);
                    font-family: monospace;
                    font-size: 10px;
                }

                .ad-header-left {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .ad-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #a8fbd3;
                    animation: countdownPulse 2s infinite;
                }

                .ad-label {
                    letter-spacing: 0.2em;
                    color: rgba(255, 255, 255, 0.7);
                    text-transform: uppercase;
                }

                .ad-header-right {
                    letter-spacing: 0.1em;
                    color: rgba(255, 255, 255, 0.3);
                }

                .ad-slot {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    width: 100%;
                    min-height: 280px;
                    padding: 1.5rem;
                    background: linear-gradient(to bottom, transparent, rgba(0, 0, 0, 0.1));
                }

                .ad-loading {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }

                .ad-loading-dots {
                    display: flex;
                    gap: 0.5rem;
                }

                .ad-loading-dots span {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.4);
                    animation: adBounce 1s infinite;
                }

                .ad-loading-dots span:nth-child(2) { animation-delay: 0.1s; }
                .ad-loading-dots span:nth-child(3) { animation-delay: 0.2s; }

                @keyframes adBounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: translateY(0); }
                }

                .ad-loading-text {
                    font-family: monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    color: rgba(255, 255, 255, 0.3);
                    text-transform: uppercase;
                }

                @media (max-width: 768px) {
                    .ad-outer {
                        padding: 5rem 1rem;
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
    use crate::scheduler::ManualScheduler;

    #[test]
    fn becomes_ready_on_first_positive_width_only() {
        let scheduler = ManualScheduler::new();
        let width = Rc::new(Cell::new(0));
        let ready_calls = Rc::new(Cell::new(0));

        let _sub = {
            let width = width.clone();
            let ready_calls = ready_calls.clone();
            watch_for_width(&scheduler, AD_WIDTH_POLL_MS, move || width.get(), move || {
                ready_calls.set(ready_calls.get() + 1)
            })
        };

        scheduler.fire();
        scheduler.fire();
        assert_eq!(ready_calls.get(), 0);

        width.set(728);
        scheduler.fire();
        assert_eq!(ready_calls.get(), 1);

        width.set(300);
        scheduler.fire();
        assert_eq!(ready_calls.get(), 1);
    }

    #[test]
    fn polls_at_the_configured_period_until_dropped() {
        let scheduler = ManualScheduler::new();
        let sub = watch_for_width(&scheduler, AD_WIDTH_POLL_MS, || 0, || {});
        assert_eq!(scheduler.periods(), vec![100]);
        drop(sub);
        assert_eq!(scheduler.active(), 0);
    }
}
