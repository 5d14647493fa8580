//! Sidebar and footer links, plus the feature flags the layout reads.
//!
//! Rendering is done elsewhere; this module only decides which links exist,
//! where they point and when they are shown.

use strum::{Display, IntoStaticStr};

pub const ENABLE_LEADERBOARD: bool = true;
/// Requires the chat backend to be configured on the host.
pub const ENABLE_TROLLBOX: bool = false;
/// If true, the featured game is fully playable inline on the dashboard.
pub const FEATURED_GAME_INLINE: bool = false;
pub const FEATURED_GAME_ID: Option<&str> = Some("jackpot");

/// Icon shown next to a link. The name is what the UI layer maps to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum LinkIcon {
    Home,
    User,
    InfoCircle,
    FileAlt,
    BookOpen,
    Gamepad,
    Github,
    Twitter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Path(&'static str),
    /// Profile page, scoped to the wallet when one is known.
    Profile,
    /// Section header without a destination of its own.
    None,
}

impl LinkTarget {
    pub fn resolve(&self, wallet: Option<&str>) -> Option<String> {
        match self {
            LinkTarget::Path(path) => Some(path.to_string()),
            LinkTarget::Profile => Some(match wallet {
                Some(base58) => format!("/{base58}/profile"),
                None => "/profile".to_string(),
            }),
            LinkTarget::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    WhenConnected,
}

impl Visibility {
    pub fn shown(self, connected: bool) -> bool {
        match self {
            Visibility::Always => true,
            Visibility::WhenConnected => connected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLink {
    pub label: &'static str,
    pub icon: LinkIcon,
    pub target: LinkTarget,
    pub visibility: Visibility,
    pub external: bool,
}

pub const SIDEBAR_LINKS: [SidebarLink; 4] = [
    SidebarLink {
        label: "Home",
        icon: LinkIcon::Home,
        target: LinkTarget::Path("/"),
        visibility: Visibility::Always,
        external: false,
    },
    SidebarLink {
        label: "Profile",
        icon: LinkIcon::User,
        target: LinkTarget::Profile,
        visibility: Visibility::WhenConnected,
        external: false,
    },
    SidebarLink {
        label: "Games",
        icon: LinkIcon::Gamepad,
        target: LinkTarget::None,
        visibility: Visibility::WhenConnected,
        external: false,
    },
    SidebarLink {
        label: "Terms",
        icon: LinkIcon::FileAlt,
        target: LinkTarget::Path("/terms"),
        visibility: Visibility::Always,
        external: false,
    },
];

/// A sidebar entry after applying the wallet state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub label: &'static str,
    pub icon: LinkIcon,
    pub href: Option<String>,
    pub external: bool,
}

/// Sidebar entries for the given wallet state, in declaration order.
pub fn visible_sidebar_links(connected: bool, wallet: Option<&str>) -> Vec<ResolvedLink> {
    SIDEBAR_LINKS
        .iter()
        .filter(|link| link.visibility.shown(connected))
        .map(|link| ResolvedLink {
            label: link.label,
            icon: link.icon,
            href: link.target.resolve(wallet),
            external: link.external,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub href: &'static str,
    pub title: &'static str,
}

pub const FOOTER_LINKS: [FooterLink; 2] = [
    FooterLink {
        href: "https://github.com/Goshen-Digital-Group/heavenly-casino",
        title: "GitHub",
    },
    FooterLink {
        href: "https://x.com/HeavenlyCasino",
        title: "X",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(links: &[ResolvedLink]) -> Vec<&str> {
        links.iter().map(|l| l.label).collect()
    }

    #[test]
    fn disconnected_users_see_public_links_only() {
        let links = visible_sidebar_links(false, None);
        assert_eq!(labels(&links), ["Home", "Terms"]);
    }

    #[test]
    fn connected_users_see_everything() {
        let links = visible_sidebar_links(true, None);
        assert_eq!(labels(&links), ["Home", "Profile", "Games", "Terms"]);
        assert_eq!(links[2].href, None);
    }

    #[test]
    fn profile_link_is_scoped_to_wallet() {
        let wallet = "6o1iE4cKQcjW4UFd4vn35r43qD9LjNDhPGNUMBuS8ocZ";
        let links = visible_sidebar_links(true, Some(wallet));
        assert_eq!(
            links[1].href.as_deref(),
            Some("/6o1iE4cKQcjW4UFd4vn35r43qD9LjNDhPGNUMBuS8ocZ/profile")
        );
        assert_eq!(
            LinkTarget::Profile.resolve(None).as_deref(),
            Some("/profile")
        );
    }

    #[test]
    fn icon_names_are_kebab_case() {
        assert_eq!(LinkIcon::FileAlt.to_string(), "file-alt");
        let name: &'static str = LinkIcon::InfoCircle.into();
        assert_eq!(name, "info-circle");
    }

    #[test]
    fn footer_links_are_https() {
        assert!(FOOTER_LINKS.iter().all(|l| l.href.starts_with("https://")));
    }
}
