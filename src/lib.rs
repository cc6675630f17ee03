use log::{info, warn};
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod countdown;
pub mod motion;
pub mod scheduler;
pub mod storage;
pub mod components {
    pub mod ad_container;
    pub mod countdown_banner;
    pub mod custom_cursor;
    pub mod faq_section;
    pub mod fluid_background;
    pub mod gradient_text;
    pub mod join_waitlist;
}
pub mod pages {
    pub mod home;
}

use components::{custom_cursor::CustomCursor, fluid_background::FluidBackground};
use config::{INSTAGRAM_URL, LOGO_URL, NAV_HEADER_OFFSET_PX};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

pub const NAV_SECTIONS: &[&str] = &["Discover", "Features", "Community", "FAQ"];

/// Sections are addressed by their lowercased nav label.
pub fn section_id(label: &str) -> String {
    label.to_lowercase()
}

/// Document offset to scroll to so a section lands just below the floating nav.
pub fn scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y - NAV_HEADER_OFFSET_PX).max(0.0)
}

fn scroll_smoothly_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        warn!("No section with id {:?}", id);
        return;
    };
    let top = element.get_bounding_client_rect().top();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    scroll_smoothly_to(&window, scroll_target(top, scroll_y));
}

fn scroll_to_top() {
    if let Some(window) = window() {
        scroll_smoothly_to(&window, 0.0);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |label: &'static str| {
            menu_open.set(false);
            scroll_to_section(&section_id(label));
        })
    };

    let on_logo = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <div class="top-nav-wrapper">
                <nav class="top-nav">
                    <div class="nav-logo" onclick={on_logo}>
                        <img src={LOGO_URL} alt="Filmfind Logo" />
                        <span class="nav-wordmark">{"FILMFIND"}</span>
                    </div>

                    <div class="nav-links">
                        { for NAV_SECTIONS.iter().map(|label| {
                            let go_to = go_to.clone();
                            let label = *label;
                            html! {
                                <button
                                    key={label}
                                    class="nav-link"
                                    data-hover="true"
                                    onclick={Callback::from(move |_: MouseEvent| go_to.emit(label))}
                                >
                                    {label}
                                    <span class="nav-link-underline"></span>
                                </button>
                            }
                        }) }
                        <a
                            href={INSTAGRAM_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="nav-link"
                            data-hover="true"
                        >
                            {"Instagram"}
                        </a>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </nav>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_SECTIONS.iter().map(|label| {
                                let go_to = go_to.clone();
                                let label = *label;
                                html! {
                                    <button
                                        key={label}
                                        class="mobile-menu-link"
                                        onclick={Callback::from(move |_: MouseEvent| go_to.emit(label))}
                                    >
                                        {label}
                                    </button>
                                }
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-shell">
                <CustomCursor />
                <FluidBackground />
                <Nav />
                <Switch<Route> render={switch} />
            </div>
            <style>
                {r#"
                *, *::before, *::after {
                    box-sizing: border-box;
                    margin: 0;
                    padding: 0;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    background: #0f1021;
                    color: #fff;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                }

                ::selection {
                    background: #4fb7b3;
                    color: #000;
                }

                .app-shell {
                    position: relative;
                    min-height: 100vh;
                    overflow-x: hidden;
                }

                @media (min-width: 768px) {
                    .app-shell, .app-shell * {
                        cursor: none;
                    }
                }

                .top-nav-wrapper {
                    position: fixed;
                    top: 1.5rem;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    display: flex;
                    justify-content: center;
                    padding: 0 1rem;
                }

                .top-nav {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    width: 100%;
                    max-width: 64rem;
                    padding: 0.75rem 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 9999px;
                    background: rgba(15, 16, 33, 0.8);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 0 20px rgba(0, 0, 0, 0.3);
                    transition: border-color 0.3s ease;
                }

                .top-nav:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                }

                .nav-logo {
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    cursor: pointer;
                }

                .nav-logo img {
                    height: 2.5rem;
                    width: auto;
                    object-fit: contain;
                }

                .nav-wordmark {
                    font-family: 'Syne', sans-serif;
                    font-size: 1.125rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }

                .nav-link {
                    position: relative;
                    padding: 0.5rem 0;
                    border: none;
                    background: transparent;
                    color: rgba(255, 255, 255, 0.7);
                    font: inherit;
                    letter-spacing: inherit;
                    text-transform: inherit;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #a8fbd3;
                }

                .nav-link-underline {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 0;
                    height: 1px;
                    background: #a8fbd3;
                    transition: width 0.3s ease;
                }

                .nav-link:hover .nav-link-underline {
                    width: 100%;
                }

                .burger-menu {
                    display: none;
                    z-index: 50;
                    width: 2.5rem;
                    height: 2.5rem;
                    align-items: center;
                    justify-content: center;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: #fff;
                    font-size: 1.25rem;
                    transition: background 0.3s ease;
                }

                .burger-menu:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 30;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: rgba(15, 16, 33, 0.95);
                    backdrop-filter: blur(12px);
                    animation: mobileMenuOpen 0.5s ease-in-out both;
                }

                @keyframes mobileMenuOpen {
                    from { opacity: 0; clip-path: circle(0% at 100% 0%); }
                    to { opacity: 1; clip-path: circle(150% at 100% 0%); }
                }

                .mobile-menu-link {
                    border: none;
                    background: transparent;
                    color: #fff;
                    font-family: 'Syne', sans-serif;
                    font-size: 2.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                    transition: color 0.3s ease;
                }

                .mobile-menu-link:hover {
                    color: #a8fbd3;
                }

                @media (max-width: 767px) {
                    .nav-links, .nav-wordmark {
                        display: none;
                    }

                    .nav-logo img {
                        height: 2rem;
                    }

                    .burger-menu {
                        display: flex;
                    }
                }

                @media (min-width: 768px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::warn!("logger already initialized:", err.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_labels_map_to_section_ids() {
        let ids: Vec<String> = NAV_SECTIONS.iter().map(|l| section_id(l)).collect();
        assert_eq!(ids, vec!["discover", "features", "community", "faq"]);
    }

    #[test]
    fn scroll_target_leaves_room_for_the_nav() {
        assert_eq!(scroll_target(400.0, 1_000.0), 1_300.0);
        assert_eq!(scroll_target(20.0, 0.0), 0.0);
    }
}
