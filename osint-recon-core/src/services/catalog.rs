//! Built-in catalog of platform probes.

use crate::types::{ExistenceRule, ProbeSpec};

/// The default platform catalog, in display order.
///
/// Most platforms answer a plain 404 for an unknown profile and get the
/// status-only rule. Three need a page-level heuristic instead:
/// `GitHub` and Instagram serve a soft-404 page with HTTP 200, and
/// Twitter redirects unknown profiles back to its home page.
#[must_use]
pub fn default_probes() -> Vec<ProbeSpec> {
    vec![
        ProbeSpec {
            name: "Facebook",
            url_template: "https://www.facebook.com/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Instagram",
            url_template: "https://www.instagram.com/{}/",
            rule: ExistenceRule::MarkerAbsent {
                marker: "Page Not Found",
            },
        },
        ProbeSpec {
            name: "Twitter/X",
            url_template: "https://twitter.com/{}",
            rule: ExistenceRule::RedirectToHome {
                home: "https://twitter.com/",
            },
        },
        ProbeSpec {
            name: "GitHub",
            url_template: "https://github.com/{}",
            rule: ExistenceRule::MarkerAbsent { marker: "Not Found" },
        },
        ProbeSpec {
            name: "LinkedIn",
            url_template: "https://www.linkedin.com/in/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "TikTok",
            url_template: "https://www.tiktok.com/@{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "YouTube",
            url_template: "https://www.youtube.com/@{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Reddit",
            url_template: "https://www.reddit.com/user/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Pinterest",
            url_template: "https://www.pinterest.com/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Twitch",
            url_template: "https://www.twitch.tv/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Telegram",
            url_template: "https://t.me/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Snapchat",
            url_template: "https://www.snapchat.com/add/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Discord",
            url_template: "https://discord.com/users/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Medium",
            url_template: "https://medium.com/@{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Dev.to",
            url_template: "https://dev.to/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Behance",
            url_template: "https://www.behance.net/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Dribbble",
            url_template: "https://dribbble.com/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Spotify",
            url_template: "https://open.spotify.com/user/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "Steam",
            url_template: "https://steamcommunity.com/id/{}",
            rule: ExistenceRule::StatusOnly,
        },
        ProbeSpec {
            name: "VK",
            url_template: "https://vk.com/{}",
            rule: ExistenceRule::StatusOnly,
        },
    ]
}
