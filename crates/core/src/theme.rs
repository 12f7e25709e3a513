//! Color-token resolution for the two supported schemes. Pure data; the
//! OS-reported scheme is the only input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub scheme: ColorScheme,
    pub background: &'static str,
    pub surface: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
}

impl Theme {
    pub fn resolve(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Theme {
                scheme,
                background: "#121212",
                surface: "#1E1E1E",
                card: "#1E1E1E",
                text: "#FFFFFF",
                text_secondary: "rgba(255, 255, 255, 0.7)",
                text_tertiary: "rgba(255, 255, 255, 0.6)",
                border: "#404040",
                primary: "#E8FF4A",
                success: "#4AE85C",
                error: "#FF6B6B",
                warning: "#FFD60A",
            },
            ColorScheme::Light => Theme {
                scheme,
                background: "#FFFFFF",
                surface: "#FFFFFF",
                card: "#F6F6F6",
                text: "#0D0D0D",
                text_secondary: "#6B7280",
                text_tertiary: "#A1A1A1",
                border: "#E5E7EB",
                primary: "#D4FF3D",
                success: "#35C759",
                error: "#FF453A",
                warning: "#FF9500",
            },
        }
    }

    /// Token for a gain/loss figure.
    pub fn change_color(&self, is_positive: bool) -> &'static str {
        if is_positive {
            self.success
        } else {
            self.error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_deterministic() {
        assert_eq!(Theme::resolve(ColorScheme::Dark), Theme::resolve(ColorScheme::Dark));
        assert_ne!(
            Theme::resolve(ColorScheme::Dark).background,
            Theme::resolve(ColorScheme::Light).background
        );
    }

    #[test]
    fn change_color_maps_sign_to_brand_tokens() {
        let theme = Theme::resolve(ColorScheme::Light);
        assert_eq!(theme.change_color(true), theme.success);
        assert_eq!(theme.change_color(false), theme.error);
    }
}
