use yew::prelude::*;

use crate::config::{COUNTDOWN_DURATION_SECS, COUNTDOWN_STORAGE_KEY, COUNTDOWN_TICK_MS};
use crate::countdown::{self, now_millis, Countdown};
use crate::scheduler::IntervalScheduler;
use crate::storage::browser_store;

#[derive(Properties, PartialEq)]
pub struct CountdownBannerProps {
    #[prop_or(COUNTDOWN_DURATION_SECS)]
    pub duration_secs: u32,
    #[prop_or(AttrValue::Static(COUNTDOWN_STORAGE_KEY))]
    pub storage_key: AttrValue,
}

#[function_component(CountdownBanner)]
pub fn countdown_banner(props: &CountdownBannerProps) -> Html {
    let remaining = use_state_eq(|| u64::from(props.duration_secs));

    {
        let remaining = remaining.clone();
        use_effect_with_deps(
            move |(duration_secs, storage_key)| {
                let store = browser_store();
                let countdown = Countdown::load(store.as_ref(), storage_key, *duration_secs, now_millis());
                let subscription = countdown.start(
                    &IntervalScheduler,
                    COUNTDOWN_TICK_MS,
                    now_millis,
                    move |secs| remaining.set(secs),
                );
                move || drop(subscription)
            },
            (props.duration_secs, props.storage_key.clone()),
        );
    }

    let time = countdown::format(*remaining);
    let finished = time.total_seconds() == 0;

    html! {
        <div class={classes!("countdown-banner", finished.then_some("finished"))}>
            <div class="countdown-label">
                <span class="countdown-pulse"></span>
                <span class="countdown-label-text">{"System Online In"}</span>
                <span class="countdown-pulse"></span>
            </div>

            <div class="countdown-digits">
                <div class="countdown-unit">
                    <span class="countdown-value">{time.hours_padded()}</span>
                    <span class="countdown-caption">{"HOURS"}</span>
                </div>
                <span class="countdown-separator">{":"}</span>
                <div class="countdown-unit">
                    <span class="countdown-value">{time.minutes_padded()}</span>
                    <span class="countdown-caption">{"MINS"}</span>
                </div>
                <span class="countdown-separator">{":"}</span>
                <div class="countdown-unit seconds">
                    <span class="countdown-value">{time.seconds_padded()}</span>
                    <span class="countdown-caption">{"SECS"}</span>
                </div>
            </div>

            <style>
                {r#"
                .countdown-banner {
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    margin: 2.5rem 0;
                    animation: countdownEnter 0.6s ease-out both;
                }

                @keyframes countdownEnter {
                    from { opacity: 0; transform: scale(0.95); }
                    to { opacity: 1; transform: scale(1); }
                }

                .countdown-label {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }

                .countdown-pulse {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #4fb7b3;
                    animation: countdownPulse 2s ease-in-out infinite;
                }

                .countdown-banner.finished .countdown-pulse {
                    animation: none;
                    opacity: 0.4;
                }

                @keyframes countdownPulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }

                .countdown-label-text {
                    color: #4fb7b3;
                    font-family: monospace;
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                }

                .countdown-digits {
                    display: flex;
                    align-items: baseline;
                    gap: 3rem;
                    font-family: 'Syne', sans-serif;
                    font-size: 4.5rem;
                    font-weight: 700;
                    color: #fff;
                    font-variant-numeric: tabular-nums;
                    letter-spacing: -0.05em;
                    line-height: 1;
                }

                .countdown-unit {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .countdown-value {
                    filter: drop-shadow(0 0 15px rgba(79, 183, 179, 0.5));
                }

                .countdown-unit.seconds {
                    color: #4fb7b3;
                }

                .countdown-unit.seconds .countdown-value {
                    filter: drop-shadow(0 0 20px rgba(79, 183, 179, 0.8));
                }

                .countdown-caption {
                    margin-top: 1rem;
                    font-family: monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    color: rgba(255, 255, 255, 0.4);
                }

                .countdown-unit.seconds .countdown-caption {
                    color: rgba(79, 183, 179, 0.6);
                }

                .countdown-separator {
                    color: rgba(255, 255, 255, 0.2);
                    transform: translateY(-1rem);
                }

                @media (max-width: 768px) {
                    .countdown-digits {
                        gap: 1rem;
                        font-size: 2.25rem;
                    }

                    .countdown-label-text {
                        font-size: 0.75rem;
                    }

                    .countdown-caption {
                        font-size: 0.625rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
