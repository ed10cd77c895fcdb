/// Substrings of a lowercased user agent that mark a phone or tablet
const MOBILE_AGENT_MARKERS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "mobile",
    "tablet",
    "silk",
    "kindle",
    "playbook",
    "opera mini",
    "iemobile",
];

pub fn user_agent_is_mobile_or_tablet(user_agent: &str) -> bool {
    let user_agent = user_agent.to_lowercase();
    MOBILE_AGENT_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}

/// Whether the app runs on a touch-first device, which enables pan and zoom
/// gestures on the canvas.
#[cfg(target_arch = "wasm32")]
pub fn is_mobile_or_tablet(ctx: &egui::Context) -> bool {
    let from_agent = web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .is_some_and(|agent| user_agent_is_mobile_or_tablet(&agent));
    from_agent || ctx.input(|i| i.any_touches())
}

/// Whether the app runs on a touch-first device, which enables pan and zoom
/// gestures on the canvas.
#[cfg(not(target_arch = "wasm32"))]
pub fn is_mobile_or_tablet(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.any_touches())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_and_tablet_agents() {
        assert!(user_agent_is_mobile_or_tablet(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(user_agent_is_mobile_or_tablet(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36"
        ));
        assert!(user_agent_is_mobile_or_tablet(
            "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)"
        ));
    }

    #[test]
    fn test_desktop_agent() {
        assert!(!user_agent_is_mobile_or_tablet(
            "Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Gecko/20100101 Firefox/131.0"
        ));
    }
}
