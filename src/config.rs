use log::Level;

pub const COUNTDOWN_STORAGE_KEY: &str = "filmfind_countdown_target_v1";
/// 55 hours.
pub const COUNTDOWN_DURATION_SECS: u32 = 55 * 60 * 60;
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

pub const WAITLIST_FORM_ACTION: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLScJChSiLay5Oa2p8c5AVSye_oO7xZqQau7MNACteFGo3y8Tgg/formResponse";
pub const WAITLIST_EMAIL_FIELD: &str = "entry.280934693";

pub const AD_CLIENT: &str = "ca-pub-8800733866689221";
pub const AD_SLOT: &str = "6918675871";
pub const AD_WIDTH_POLL_MS: u32 = 100;

pub const SITE_URL: &str = "https://filmfind.online";
pub const LOGO_URL: &str = "https://6924480f06fc1305af77f4b7--miroudbdbdnrnn.netlify.app/logo.png";
pub const INSTAGRAM_URL: &str = "https://instagram.com/filmfind.online";
pub const DONATE_URL: &str = "https://tirikchilik.uz/mirhamid";

/// Keeps the floating nav from covering a section heading after scrolling to it.
pub const NAV_HEADER_OFFSET_PX: f64 = 100.0;
pub const CURSOR_MIN_VIEWPORT_PX: f64 = 768.0;
pub const CURSOR_FRAME_MS: u32 = 16;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_links_are_absolute_https() {
        for url in [SITE_URL, LOGO_URL, INSTAGRAM_URL, DONATE_URL, WAITLIST_FORM_ACTION] {
            assert!(url.starts_with("https://"), "{url}");
        }
        assert!(!SITE_URL.ends_with('/'));
    }
}
