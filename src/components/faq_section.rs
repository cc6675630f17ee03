use yew::prelude::*;
use web_sys::MouseEvent;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ITEMS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is Filmfind?",
        answer: "A one-stop destination to stream movies, TV shows, and music. Filmfind is the most comprehensive entertainment platform available today. We combine free ad-supported movies, shows, and live TV together with the ability to easily search—and add to your Watchlist—any title ever made, no matter which streaming service it lives on.",
    },
    FaqEntry {
        question: "Is Filmfind really free?",
        answer: "Filmfind is a free streaming app for everyone, no credit cards or subscription costs or hidden fees. To keep our service free we monetize via optional premium tiers, but the core watching experience for our library is free.",
    },
    FaqEntry {
        question: "Where is Filmfind available?",
        answer: "Filmfind is available in almost every country in the world. No other free streaming service delivers more content to and from more countries worldwide.",
    },
    FaqEntry {
        question: "Where can I watch?",
        answer: "Watch instantly online from your personal computer or on any internet-connected device that offers a web browser. That includes smart TVs, smartphones, tablets, game consoles, and more!",
    },
    FaqEntry {
        question: "Do I need an account?",
        answer: "You do not need to create an account to use Filmfind, but you get more when you do. Benefits include your own universal Watchlist and the ability to pick up where you left off on any device.",
    },
    FaqEntry {
        question: "How does the 'Concierge' work?",
        answer: "Just select your favorite streaming services (like Hulu, Netflix, Max, etc.) in our settings. We then curate recommendations and show you where to watch any title, acting as your personal TV concierge.",
    },
];

/// Accordion rule: opening an item closes the rest, clicking the open one closes it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: String,
    answer: String,
    is_open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div
            class={classes!("faq-item", props.is_open.then(|| "open"))}
            style={format!("animation-delay: {:.1}s;", props.index as f64 * 0.1)}
        >
            <button class="faq-question" onclick={onclick}>
                <span class="question-text">{&props.question}</span>
                <span class="faq-chevron">{"⌄"}</span>
            </button>
            {
                if props.is_open {
                    html! {
                        <div class="faq-answer">
                            {&props.answer}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open_index = use_state(|| None::<usize>);

    let on_toggle = {
        let open_index = open_index.clone();
        Callback::from(move |index: usize| {
            open_index.set(toggle(*open_index, index));
        })
    };

    html! {
        <div class="faq-wrapper">
            <div class="faq-heading">
                <span class="faq-heading-icon">{"?"}</span>
                <h2>{"Question or two?"}</h2>
            </div>

            <div class="faq-list">
                { for FAQ_ITEMS.iter().enumerate().map(|(i, item)| html! {
                    <FaqItem
                        key={i}
                        index={i}
                        question={item.question}
                        answer={item.answer}
                        is_open={*open_index == Some(i)}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>

            <style>
                {r#"
                .faq-wrapper {
                    width: 100%;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .faq-heading {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }

                .faq-heading-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border: 2px solid #4fb7b3;
                    border-radius: 50%;
                    color: #4fb7b3;
                    font-weight: 700;
                }

                .faq-heading h2 {
                    font-family: 'Syne', sans-serif;
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #fff;
                    text-align: center;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    overflow: hidden;
                    animation: faqEnter 0.5s ease-out both;
                }

                @keyframes faqEnter {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .faq-question:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .question-text {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #fff;
                    transition: color 0.3s ease;
                }

                .faq-question:hover .question-text {
                    color: #a8fbd3;
                }

                .faq-chevron {
                    font-size: 1.5rem;
                    color: #9ca3af;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .faq-chevron {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    padding: 0 1.5rem 1.5rem;
                    color: #d1d5db;
                    line-height: 1.625;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    animation: faqAnswerOpen 0.3s ease-out both;
                }

                @keyframes faqAnswerOpen {
                    from { opacity: 0; max-height: 0; }
                    to { opacity: 1; max-height: 40rem; }
                }

                @media (max-width: 768px) {
                    .faq-heading h2 {
                        font-size: 1.5rem;
                    }

                    .faq-question {
                        padding: 1rem;
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
    fn opening_an_item_closes_the_previous_one() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(2), 4), Some(4));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(toggle(Some(3), 3), None);
    }

    #[test]
    fn at_most_one_item_is_ever_open() {
        let clicks = [0, 0, 5, 1, 1, 1, 3];
        let mut open = None;
        for click in clicks {
            open = toggle(open, click);
            let open_count = (0..FAQ_ITEMS.len()).filter(|i| open == Some(*i)).count();
            assert!(open_count <= 1);
        }
        assert_eq!(open, Some(3));
    }

    #[test]
    fn every_entry_has_copy() {
        assert_eq!(FAQ_ITEMS.len(), 6);
        assert!(FAQ_ITEMS
            .iter()
            .all(|item| !item.question.is_empty() && !item.answer.is_empty()));
    }
}
