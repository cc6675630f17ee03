use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextTag {
    H1,
    H2,
    H3,
    P,
    #[default]
    Span,
}

impl TextTag {
    pub fn name(self) -> &'static str {
        match self {
            TextTag::H1 => "h1",
            TextTag::H2 => "h2",
            TextTag::H3 => "h3",
            TextTag::P => "p",
            TextTag::Span => "span",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GradientTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub tag: TextTag,
    #[prop_or_default]
    pub class: Classes,
}

/// Gradient-filled text over a faded fallback layer, with a blurred glow behind.
#[function_component(GradientText)]
pub fn gradient_text(props: &GradientTextProps) -> Html {
    html! {
        <@{props.tag.name()} class={classes!("gradient-text", props.class.clone())}>
            <span class="gradient-text-main" aria-hidden="true">{props.text.clone()}</span>
            <span class="gradient-text-base">{props.text.clone()}</span>
            <span class="gradient-text-glow">{props.text.clone()}</span>

            <style>
                {r#"
                .gradient-text {
                    position: relative;
                    display: inline-block;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    isolation: isolate;
                }

                .gradient-text-main,
                .gradient-text-glow {
                    position: absolute;
                    inset: 0;
                    display: block;
                    background-size: 200% auto;
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                    color: transparent;
                    transform: translateZ(0);
                }

                .gradient-text-main {
                    z-index: 10;
                    background-image: linear-gradient(to right, #fff, #a8fbd3, #4fb7b3, #637ab9, #fff);
                    backface-visibility: hidden;
                }

                .gradient-text-base {
                    display: block;
                    background-image: linear-gradient(to right, #fff, #e5e7eb);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                    color: transparent;
                    opacity: 0.5;
                }

                .gradient-text-glow {
                    z-index: -10;
                    background-image: linear-gradient(to right, #a8fbd3, #4fb7b3, #637ab9, #a8fbd3);
                    filter: blur(40px);
                    opacity: 0.4;
                }

                @media (max-width: 768px) {
                    .gradient-text-glow {
                        filter: blur(24px);
                    }
                }
                "#}
            </style>
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_an_inline_span() {
        assert_eq!(TextTag::default().name(), "span");
        assert_eq!(TextTag::H1.name(), "h1");
    }
}
