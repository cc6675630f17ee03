use yew::prelude::*;

/// Static backdrop: base gradient, three drifting blobs, grid, grain and vignette.
#[function_component(FluidBackground)]
pub fn fluid_background() -> Html {
    html! {
        <div class="fluid-background">
            <div class="fluid-base"></div>
            <div class="fluid-blob blob-mint"></div>
            <div class="fluid-blob blob-teal"></div>
            <div class="fluid-blob blob-indigo"></div>
            <div class="fluid-grid"></div>
            <div class="fluid-grain"></div>
            <div class="fluid-vignette"></div>

            <style>
                {r#"
                .fluid-background {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    overflow: hidden;
                    background: #0f1021;
                    pointer-events: none;
                }

                .fluid-base {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 50% 50%, rgba(16, 24, 39, 1), rgba(15, 16, 33, 1));
                }

                .fluid-blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    opacity: 0.05;
                    will-change: transform;
                    animation: fluidBlob 7s infinite;
                }

                .blob-mint {
                    top: -10%;
                    left: -10%;
                    width: 50vw;
                    height: 50vw;
                    background: #a8fbd3;
                }

                .blob-teal {
                    top: 20%;
                    right: -10%;
                    width: 60vw;
                    height: 60vw;
                    background: #4fb7b3;
                    animation-delay: 2s;
                }

                .blob-indigo {
                    bottom: -10%;
                    left: 10%;
                    width: 60vw;
                    height: 60vw;
                    background: #637ab9;
                    animation-delay: 4s;
                }

                @keyframes fluidBlob {
                    0% { transform: translate(0px, 0px) scale(1); }
                    33% { transform: translate(30px, -50px) scale(1.1); }
                    66% { transform: translate(-20px, 20px) scale(0.9); }
                    100% { transform: translate(0px, 0px) scale(1); }
                }

                .fluid-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.02;
                    background-image:
                        linear-gradient(rgba(255, 255, 255, 0.1) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.1) 1px, transparent 1px);
                    background-size: 60px 60px;
                }

                .fluid-grain {
                    position: absolute;
                    inset: 0;
                    background-image: url('https://grainy-gradients.vercel.app/noise.svg');
                    opacity: 0.02;
                }

                .fluid-vignette {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle, transparent, rgba(0, 0, 0, 0.1), rgba(15, 16, 33, 0.8));
                }
                "#}
            </style>
        </div>
    }
}
