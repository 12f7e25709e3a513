use crate::theme::{ColorScheme, Theme};

pub const APP_NAME: &str = "NiftySync";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Profile screen: static menu plus the resolved theme. The only screen with
/// no remote data.
pub struct ProfileScreen {
    pub display_name: String,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const MENU: [MenuEntry; 5] = [
    MenuEntry {
        title: "Account",
        subtitle: "Manage your account settings",
    },
    MenuEntry {
        title: "Notification Settings",
        subtitle: "Configure your alert preferences",
    },
    MenuEntry {
        title: "Privacy & Security",
        subtitle: "Your data privacy settings",
    },
    MenuEntry {
        title: "Help & Support",
        subtitle: "Need help? Contact our support team",
    },
    MenuEntry {
        title: "About",
        subtitle: "App version and build information",
    },
];

impl ProfileScreen {
    pub fn new(display_name: impl Into<String>, scheme: ColorScheme) -> Self {
        Self {
            display_name: display_name.into(),
            theme: Theme::resolve(scheme),
        }
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.theme = Theme::resolve(scheme);
    }

    pub fn about_line(&self) -> String {
        format!("{APP_NAME} v{APP_VERSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_switch_swaps_tokens() {
        let mut screen = ProfileScreen::new("Investor", ColorScheme::Light);
        let light_bg = screen.theme.background;

        screen.set_scheme(ColorScheme::Dark);
        assert_ne!(screen.theme.background, light_bg);
    }

    #[test]
    fn about_line_carries_version() {
        let screen = ProfileScreen::new("Investor", ColorScheme::Light);
        assert!(screen.about_line().starts_with("NiftySync v"));
    }
}
