use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    ad_container::AdContainer,
    countdown_banner::CountdownBanner,
    faq_section::FaqSection,
    gradient_text::GradientText,
    join_waitlist::JoinWaitlist,
};
use crate::config::{DONATE_URL, INSTAGRAM_URL, LOGO_URL, SITE_URL};
use crate::motion::{element_progress, map_range, page_progress};

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { value: "180k+", label: "Movies & Shows" },
    Stat { value: "7+", label: "Services" },
    Stat { value: "0", label: "Ads" },
];

const DISCOVER_POINTS: &[&str] = &["Movies & Shows", "Live TV", "Universal Search"];

struct CommunityCard {
    title: &'static str,
    desc: &'static str,
}

const COMMUNITY_CARDS: &[CommunityCard] = &[
    CommunityCard { title: "Search", desc: "Find friends by name, location, or interest." },
    CommunityCard { title: "Build", desc: "Create a unified watchlist across services." },
    CommunityCard { title: "Profile", desc: "View watch stats and share your personality." },
];

/// (document scroll height, viewport height)
fn page_metrics() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let scroll_height = window.document()?.document_element()?.scroll_height();
    Some((f64::from(scroll_height), viewport))
}

fn section_progress(node: &NodeRef, viewport: f64) -> f64 {
    node.cast::<Element>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            element_progress(rect.top(), rect.height(), viewport)
        })
        .unwrap_or(0.0)
}

#[function_component(Home)]
pub fn home() -> Html {
    // Re-renders on every scroll so the transforms below track it.
    let (_, scroll_y) = use_window_scroll();
    let features_ref = use_node_ref();

    let (scroll_height, viewport) = page_metrics().unwrap_or((0.0, 0.0));
    let progress = page_progress(scroll_y, scroll_height, viewport);
    let hero_y = map_range(progress, (0.0, 1.0), (0.0, -100.0));
    let hero_opacity = map_range(progress, (0.0, 0.2), (1.0, 0.0));

    let feature_progress = section_progress(&features_ref, viewport);
    let watchlist_y = map_range(feature_progress, (0.0, 1.0), (50.0, -50.0));
    let discover_y = map_range(feature_progress, (0.0, 1.0), (-30.0, 30.0));

    html! {
        <div class="home-page">
            <header id="discover" class="hero">
                <div
                    class="hero-content"
                    style={format!("transform: translateY({:.2}px); opacity: {:.3};", hero_y, hero_opacity)}
                >
                    <div class="hero-badge">
                        <span class="hero-badge-icon">{"🛡"}</span>
                        <span>{"Verified Secure • Family Friendly"}</span>
                    </div>

                    <div class="hero-title">
                        <h1>{"Meet your"}<br/></h1>
                        <div class="hero-title-gradient">
                            <GradientText text="TV CONCIERGE" class={classes!("hero-gradient")} />
                        </div>
                    </div>

                    <p class="hero-subtitle">
                        {"Need something to watch? We’re on it. Filmfind combines free movies & TV with the best streaming services, so there’s always more to discover."}
                    </p>

                    <CountdownBanner />
                    <JoinWaitlist />
                </div>

                <div class="hero-stats">
                    { for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <div
                            class="hero-stat"
                            style={format!("animation-delay: {:.1}s;", 0.6 + i as f64 * 0.1)}
                        >
                            <div class="hero-stat-value">{stat.value}</div>
                            <div class="hero-stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </header>

            <section id="features" class="features" ref={features_ref}>
                <div class="features-inner">
                    <div class="feature-row">
                        <div class="feature-copy slide-from-left">
                            <div class="feature-icon">{"▤"}</div>
                            <h2>{"One list to rule them all."}</h2>
                            <p>
                                {"With a free Filmfind account you can keep a single, unified Watchlist for any movie or TV show you hear about, on any service—even theater releases! You can finally stop hopping between watchlists."}
                            </p>
                        </div>

                        <div
                            class="feature-visual watchlist"
                            style={format!("transform: translateY({:.2}px);", watchlist_y)}
                        >
                            <img
                                src="https://www.plex.tv/wp-content/uploads/2023/05/pms-devices-image.png"
                                alt="Watchlist Interface"
                                loading="lazy"
                            />
                            <div class="feature-visual-fade"></div>
                        </div>
                    </div>

                    <div class="press-quote">
                        <div class="press-quote-grain"></div>
                        <div class="press-quote-glow"></div>
                        <div class="press-quote-body">
                            <div class="press-quote-star">{"★"}</div>
                            <p>{"\"It essentially makes the app the center of your streaming universe.\""}</p>
                            <div class="press-quote-source">
                                <span class="press-quote-rule"></span>
                                <div>{"- The New York Times"}</div>
                                <span class="press-quote-rule"></span>
                            </div>
                        </div>
                    </div>

                    <div class="feature-row">
                        <div
                            class="feature-visual discover"
                            style={format!("transform: translateY({:.2}px);", discover_y)}
                        >
                            <img
                                src="https://www.plex.tv/wp-content/uploads/2025/02/home-sonic-apple-tv-02-21.png"
                                alt="Movies Discovery UI"
                                loading="lazy"
                            />
                            <div class="feature-visual-shade"></div>
                            <div class="feature-badges">
                                <div class="feature-badge">{"🎬"}</div>
                                <div class="feature-badge">{"📺"}</div>
                                <div class="feature-badge">{"📻"}</div>
                            </div>
                        </div>

                        <div class="feature-copy slide-from-right">
                            <div class="feature-icon indigo">{"⌕"}</div>
                            <h2>{"It’s a great day to Discover."}</h2>
                            <p>
                                {"Select from the best streaming services to discover more, search faster, and get curated recommendations—all without ever leaving Filmfind."}
                            </p>
                            <div class="discover-points">
                                { for DISCOVER_POINTS.iter().enumerate().map(|(idx, point)| html! {
                                    <div
                                        key={*point}
                                        class="discover-point"
                                        style={format!("animation-delay: {:.1}s;", 0.2 + idx as f64 * 0.1)}
                                    >
                                        <span class="discover-point-dot"></span>
                                        <span>{*point}</span>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <AdContainer />

            <section id="community" class="community">
                <div class="community-inner">
                    <div class="community-icon">{"👥"}</div>
                    <h2>{"Find your friends."}</h2>
                    <p class="community-pitch">
                        {"What if you could find what to watch next based on ratings and activity from people you know in real life?"}
                    </p>
                    <div class="community-grid">
                        { for COMMUNITY_CARDS.iter().enumerate().map(|(i, card)| html! {
                            <div
                                class="community-card"
                                style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}
                            >
                                <h3>{card.title}</h3>
                                <p>{card.desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="faq" class="faq-block">
                <FaqSection />
            </section>

            <footer class="site-footer">
                <div class="site-footer-inner">
                    <div class="site-footer-brand">
                        <a href={SITE_URL} class="site-footer-logo">
                            <img src={LOGO_URL} alt="Filmfind" loading="lazy" />
                            <div class="site-footer-wordmark">{"FILMFIND"}</div>
                        </a>
                        <p class="site-footer-legal">
                            {"© 2025 Filmfind.online. All rights reserved."}<br/>
                            {"We do not host explicit 18+ content."}
                        </p>
                    </div>

                    <div class="site-footer-links">
                        <a href={DONATE_URL} target="_blank" rel="noopener noreferrer" class="donate-link">
                            <span class="donate-heart">{"♥"}</span>
                            <span>{"Donate"}</span>
                        </a>
                        <a href={INSTAGRAM_URL} class="instagram-link" aria-label="Instagram">
                            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <rect width="20" height="20" x="2" y="2" rx="5" ry="5"></rect>
                                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
                                <line x1="17.5" x2="17.51" y1="6.5" y2="6.5"></line>
                            </svg>
                        </a>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                .home-page {
                    position: relative;
                    min-height: 100vh;
                    color: #fff;
                    overflow-x: hidden;
                }

                @keyframes riseIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes slideLeft {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes slideRight {
                    from { opacity: 0; transform: translateX(50px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 5rem 1rem 0;
                }

                .hero-content {
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 100%;
                    max-width: 72rem;
                    padding-bottom: 2.5rem;
                    text-align: center;
                    will-change: transform, opacity;
                }

                .hero-badge {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    box-shadow: 0 0 20px rgba(168, 251, 211, 0.1);
                    color: #a8fbd3;
                    font-family: monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    animation: riseIn 0.6s ease-out both;
                }

                .hero-title {
                    position: relative;
                    margin-bottom: 2.5rem;
                }

                .hero-title h1 {
                    font-size: 6rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    line-height: 1.1;
                    animation: riseIn 0.8s ease-out 0.1s both;
                }

                .hero-title-gradient {
                    animation: countdownEnter 0.8s ease-out 0.3s both;
                }

                .hero-gradient {
                    font-size: 8rem;
                    filter: drop-shadow(0 0 30px rgba(79, 183, 179, 0.3));
                }

                .hero-subtitle {
                    max-width: 42rem;
                    margin: 0 auto 4rem;
                    color: #d1d5db;
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.625;
                    animation: riseIn 1s ease-out 0.4s both;
                }

                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    width: 100%;
                    max-width: 64rem;
                    margin-top: 3rem;
                    padding: 2rem 1rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }

                .hero-stat {
                    text-align: center;
                    cursor: default;
                    transition: transform 0.3s ease, text-shadow 0.3s ease;
                    animation: riseIn 0.6s ease-out both;
                }

                .hero-stat:hover {
                    transform: scale(1.05);
                    text-shadow: 0 0 10px rgba(255, 255, 255, 0.5);
                }

                .hero-stat-value {
                    margin-bottom: 0.5rem;
                    font-family: 'Syne', sans-serif;
                    font-size: 3rem;
                    font-weight: 700;
                    transition: color 0.3s ease;
                }

                .hero-stat:hover .hero-stat-value {
                    color: #a8fbd3;
                }

                .hero-stat-label {
                    color: #637ab9;
                    font-family: monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }

                .features {
                    position: relative;
                    z-index: 10;
                    padding: 8rem 0;
                    background: rgba(0, 0, 0, 0.2);
                    overflow: hidden;
                }

                .features-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .feature-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 6rem;
                    align-items: center;
                    margin-bottom: 8rem;
                }

                .feature-row:last-child {
                    margin-bottom: 0;
                }

                .feature-copy h2 {
                    margin-bottom: 1.5rem;
                    font-family: 'Syne', sans-serif;
                    font-size: 3rem;
                    font-weight: 700;
                    line-height: 1.25;
                }

                .feature-copy p {
                    margin-bottom: 2rem;
                    color: #d1d5db;
                    font-size: 1.125rem;
                    line-height: 1.625;
                }

                .slide-from-left {
                    animation: slideLeft 0.8s ease-out both;
                }

                .slide-from-right {
                    animation: slideRight 0.8s ease-out both;
                }

                .feature-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    margin-bottom: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.1), transparent);
                    color: #a8fbd3;
                    font-size: 1.5rem;
                }

                .feature-icon.indigo {
                    color: #637ab9;
                }

                .feature-visual {
                    position: relative;
                    height: 500px;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 2rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    will-change: transform;
                    transition: box-shadow 0.5s ease, border-color 0.5s ease;
                }

                .feature-visual.watchlist {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #0f1021;
                }

                .feature-visual.watchlist:hover {
                    box-shadow: 0 0 50px -10px rgba(168, 251, 211, 0.15);
                    border-color: rgba(168, 251, 211, 0.3);
                }

                .feature-visual.watchlist img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    padding: 2rem;
                    filter: drop-shadow(0 0 30px rgba(168, 251, 211, 0.2));
                    transition: transform 0.7s ease;
                }

                .feature-visual.watchlist img:hover {
                    transform: scale(1.05);
                }

                .feature-visual.discover {
                    background: #1f2048;
                }

                .feature-visual.discover:hover {
                    box-shadow: 0 0 50px -10px rgba(99, 122, 185, 0.25);
                    border-color: rgba(99, 122, 185, 0.3);
                }

                .feature-visual.discover img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }

                .feature-visual.discover:hover img {
                    transform: scale(1.05);
                }

                .feature-visual-fade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #0f1021, transparent, transparent);
                    opacity: 0.2;
                }

                .feature-visual-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent, transparent);
                }

                .feature-badges {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    display: flex;
                    gap: 1rem;
                    width: 100%;
                    padding: 3rem;
                }

                .feature-badge {
                    padding: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .discover-points {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .discover-point {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    font-weight: 700;
                    letter-spacing: 0.025em;
                    cursor: default;
                    transition: background 0.3s ease;
                    animation: slideRight 0.5s ease-out both;
                }

                .discover-point:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .discover-point-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #4fb7b3;
                    box-shadow: 0 0 10px #4fb7b3;
                }

                .press-quote {
                    position: relative;
                    width: 100%;
                    margin-bottom: 8rem;
                    padding: 4rem;
                    overflow: hidden;
                    border-radius: 2.5rem;
                    background: #a8fbd3;
                    color: #000;
                    text-align: center;
                    animation: countdownEnter 0.6s ease-out both;
                }

                .press-quote-grain {
                    position: absolute;
                    inset: 0;
                    background-image: url('https://grainy-gradients.vercel.app/noise.svg');
                    opacity: 0.2;
                    mix-blend-mode: multiply;
                }

                .press-quote-glow {
                    position: absolute;
                    top: -5rem;
                    right: -5rem;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.3);
                    filter: blur(64px);
                }

                .press-quote-body {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .press-quote-star {
                    margin-bottom: 2rem;
                    font-size: 3rem;
                }

                .press-quote-body p {
                    margin-bottom: 2rem;
                    font-family: 'Syne', sans-serif;
                    font-size: 3rem;
                    font-weight: 700;
                    line-height: 1.25;
                    letter-spacing: -0.025em;
                }

                .press-quote-source {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: monospace;
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }

                .press-quote-rule {
                    width: 3rem;
                    height: 1px;
                    background: rgba(0, 0, 0, 0.2);
                }

                .community {
                    position: relative;
                    z-index: 10;
                    padding: 5rem 1.5rem;
                    background: linear-gradient(to bottom, transparent, #05060e);
                }

                .community-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .community-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 2rem;
                    padding: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 2rem;
                }

                .community h2 {
                    margin-bottom: 1.5rem;
                    font-family: 'Syne', sans-serif;
                    font-size: 3.75rem;
                    font-weight: 700;
                }

                .community-pitch {
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    color: #d1d5db;
                    font-size: 1.25rem;
                }

                .community-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    text-align: left;
                }

                .community-card {
                    padding: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    background: #0f1021;
                    transition: all 0.3s ease;
                    animation: riseIn 0.5s ease-out both;
                }

                .community-card:hover {
                    transform: translateY(-0.5rem);
                    box-shadow: 0 20px 40px -15px rgba(79, 183, 179, 0.2);
                    background: #16172e;
                    border-color: rgba(79, 183, 179, 0.5);
                }

                .community-card h3 {
                    margin-bottom: 0.75rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    transition: color 0.3s ease;
                }

                .community-card:hover h3 {
                    color: #a8fbd3;
                }

                .community-card p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    line-height: 1.625;
                }

                .faq-block {
                    position: relative;
                    z-index: 10;
                    padding: 5rem 0;
                }

                .site-footer {
                    position: relative;
                    z-index: 10;
                    padding: 3rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: #05060e;
                }

                .site-footer-inner {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .site-footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                    color: inherit;
                    text-decoration: none;
                }

                .site-footer-logo img {
                    height: 1.5rem;
                    width: auto;
                    opacity: 0.8;
                }

                .site-footer-wordmark {
                    font-family: 'Syne', sans-serif;
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                }

                .site-footer-legal {
                    color: #6b7280;
                    font-family: monospace;
                    font-size: 0.75rem;
                }

                .site-footer-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .donate-link {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #a8fbd3, #4fb7b3);
                    color: #0f1021;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    text-transform: uppercase;
                    box-shadow: 0 0 15px rgba(79, 183, 179, 0.4);
                    transition: transform 0.3s ease;
                }

                .donate-link:hover {
                    transform: scale(1.05);
                }

                .instagram-link {
                    color: #9ca3af;
                    transition: color 0.3s ease, transform 0.3s ease;
                }

                .instagram-link:hover {
                    color: #E1306C;
                    transform: scale(1.1);
                }

                @media (max-width: 768px) {
                    .hero-title h1 {
                        font-size: 2.25rem;
                    }

                    .hero-gradient {
                        font-size: 3rem;
                    }

                    .hero-subtitle {
                        margin-bottom: 3rem;
                        font-size: 1.125rem;
                    }

                    .hero-badge {
                        font-size: 10px;
                    }

                    .hero-stats {
                        gap: 1rem;
                    }

                    .hero-stat-value {
                        font-size: 1.5rem;
                    }

                    .hero-stat-label {
                        font-size: 10px;
                    }

                    .features {
                        padding: 5rem 0;
                    }

                    .feature-row {
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }

                    .feature-row:first-child .feature-visual {
                        order: -1;
                    }

                    .feature-visual {
                        height: 400px;
                    }

                    .feature-copy h2 {
                        font-size: 1.875rem;
                    }

                    .feature-badges {
                        justify-content: center;
                        padding: 2rem;
                    }

                    .press-quote {
                        padding: 2rem;
                    }

                    .press-quote-body p {
                        font-size: 1.5rem;
                    }

                    .community h2 {
                        font-size: 1.875rem;
                    }

                    .community-grid {
                        grid-template-columns: 1fr;
                    }

                    .site-footer-inner {
                        flex-direction: column;
                        text-align: center;
                    }

                    .site-footer-logo {
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
