use yew::prelude::*;

use crate::config::{WAITLIST_EMAIL_FIELD, WAITLIST_FORM_ACTION};

/// Email capture. The form posts straight to the hosted form endpoint in a
/// new tab, so there is no submit handler here.
#[function_component(JoinWaitlist)]
pub fn join_waitlist() -> Html {
    let is_focused = use_state(|| false);

    let on_focus = {
        let is_focused = is_focused.clone();
        Callback::from(move |_: FocusEvent| is_focused.set(true))
    };

    let on_blur = {
        let is_focused = is_focused.clone();
        Callback::from(move |_: FocusEvent| is_focused.set(false))
    };

    html! {
        <div class="waitlist">
            <div class="waitlist-glow"></div>

            <div class={classes!("waitlist-frame", (*is_focused).then(|| "focused"))}>
                <form
                    class="waitlist-form"
                    action={WAITLIST_FORM_ACTION}
                    method="POST"
                    target="_blank"
                >
                    <div class="waitlist-input-wrapper">
                        <span class={classes!("waitlist-icon", (*is_focused).then(|| "focused"))}>{"✉"}</span>
                        <input
                            type="email"
                            name={WAITLIST_EMAIL_FIELD}
                            placeholder="Enter your email for early access"
                            required=true
                            onfocus={on_focus}
                            onblur={on_blur}
                            class="waitlist-input"
                        />
                    </div>
                    <button type="submit" class="waitlist-submit">
                        {"JOIN WAITLIST"}
                        <span class="waitlist-arrow">{"→"}</span>
                    </button>
                </form>
            </div>

            <div class="waitlist-footer">
                <span class="waitlist-sparkle">{"✦"}</span>
                <span>{"Limited Spots Available"}</span>
                <span class="waitlist-sparkle">{"✦"}</span>
            </div>

            <style>
                {r#"
                .waitlist {
                    position: relative;
                    z-index: 20;
                    width: 100%;
                    max-width: 36rem;
                    margin: 3rem auto 0;
                    padding: 0 1rem;
                    animation: waitlistEnter 0.8s ease-out 0.6s both;
                }

                @keyframes waitlistEnter {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .waitlist-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 140%;
                    height: 160%;
                    transform: translate(-50%, -50%);
                    background: rgba(79, 183, 179, 0.2);
                    filter: blur(80px);
                    border-radius: 50%;
                    opacity: 0.5;
                    pointer-events: none;
                }

                .waitlist-frame {
                    position: relative;
                    padding: 0.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to right, rgba(255,255,255,0.1), rgba(255,255,255,0.05), rgba(255,255,255,0.1));
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(24px);
                    transition: all 0.5s ease;
                }

                .waitlist-frame.focused {
                    background: linear-gradient(to right, rgba(168,251,211,0.4), rgba(79,183,179,0.4), rgba(168,251,211,0.4));
                    box-shadow: 0 0 40px rgba(168, 251, 211, 0.3);
                    border-color: transparent;
                }

                .waitlist-form {
                    position: relative;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.25rem;
                    background: rgba(15, 16, 33, 0.9);
                    border-radius: 9999px;
                }

                .waitlist-input-wrapper {
                    position: relative;
                    flex: 1;
                    width: 100%;
                }

                .waitlist-icon {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    left: 1.5rem;
                    display: flex;
                    align-items: center;
                    color: #6b7280;
                    pointer-events: none;
                    transition: color 0.3s ease;
                }

                .waitlist-icon.focused {
                    color: #a8fbd3;
                }

                .waitlist-input {
                    width: 100%;
                    padding: 1rem 1rem 1rem 3.5rem;
                    background: transparent;
                    border: none;
                    outline: none;
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 500;
                    border-radius: 9999px;
                }

                .waitlist-input::placeholder {
                    color: #6b7280;
                }

                .waitlist-submit {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #4fb7b3, #a8fbd3);
                    color: #0f1021;
                    font-family: 'Syne', sans-serif;
                    font-weight: 700;
                    white-space: nowrap;
                    cursor: pointer;
                    box-shadow: 0 0 20px rgba(79, 183, 179, 0.4);
                    transition: all 0.3s ease;
                }

                .waitlist-submit:hover {
                    background: linear-gradient(to right, #a8fbd3, #ffffff);
                    box-shadow: 0 0 40px rgba(168, 251, 211, 0.6);
                    transform: scale(1.05);
                }

                .waitlist-arrow {
                    transition: transform 0.3s ease;
                }

                .waitlist-submit:hover .waitlist-arrow {
                    transform: translateX(4px);
                }

                .waitlist-footer {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                    color: rgba(168, 251, 211, 0.8);
                    font-family: monospace;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    opacity: 0.8;
                }

                .waitlist-sparkle {
                    font-size: 0.75rem;
                    animation: countdownPulse 2s ease-in-out infinite;
                }

                @media (max-width: 640px) {
                    .waitlist-form {
                        flex-direction: column;
                        border-radius: 2rem;
                    }

                    .waitlist-submit {
                        width: 100%;
                    }

                    .waitlist-footer {
                        font-size: 0.75rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
