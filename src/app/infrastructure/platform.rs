use log::debug;

use crate::app::domain::ThemeMode;

/// Ask the host desktop for its light/dark preference.
///
/// Any failure (missing key, missing tool, unexpected output) yields
/// `ThemeMode::Light`.
pub fn detect_system_theme() -> ThemeMode {
    let mode = if query_dark_preference() {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    };
    debug!("System theme detected as {:?}", mode);
    mode
}

/// `AppsUseLightTheme`: 0 = dark mode, 1 = light mode
pub fn apps_use_light_theme_is_dark(value: u32) -> bool {
    value == 0
}

/// Output of `gsettings get org.gnome.desktop.interface gtk-theme`.
pub fn gtk_theme_is_dark(output: &str) -> bool {
    output.to_lowercase().contains("dark")
}

/// Output of `gsettings get org.gnome.desktop.interface color-scheme`.
pub fn color_scheme_is_dark(output: &str) -> bool {
    output.contains("prefer-dark")
}

/// Output of `defaults read -g AppleInterfaceStyle`.
pub fn apple_interface_style_is_dark(output: &str) -> bool {
    output.to_lowercase().contains("dark")
}

#[allow(unreachable_code)]
fn query_dark_preference() -> bool {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        return match RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
            .and_then(|key| key.get_value::<u32, _>("AppsUseLightTheme"))
        {
            Ok(value) => apps_use_light_theme_is_dark(value),
            Err(e) => {
                debug!("Theme registry lookup failed: {}", e);
                false
            }
        };
    }

    // Linux: Try to detect system theme on GNOME
    #[cfg(target_os = "linux")]
    {
        if let Some(theme) = run_and_capture("gsettings", &["get", "org.gnome.desktop.interface", "gtk-theme"]) {
            if gtk_theme_is_dark(&theme) {
                return true;
            }
        }

        // Try alternative method for other desktop environments
        if let Some(scheme) = run_and_capture("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"]) {
            return color_scheme_is_dark(&scheme);
        }
        return false;
    }

    // macOS: Check AppleInterfaceStyle
    #[cfg(target_os = "macos")]
    {
        return run_and_capture("defaults", &["read", "-g", "AppleInterfaceStyle"])
            .is_some_and(|style| apple_interface_style_is_dark(&style));
    }

    // Default to light mode if detection fails
    false
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn run_and_capture(program: &str, args: &[&str]) -> Option<String> {
    use std::process::Command;

    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            debug!("{} exited with {}", program, output.status);
            None
        }
        Err(e) => {
            debug!("Could not run {}: {}", program, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_value() {
        assert!(apps_use_light_theme_is_dark(0));
        assert!(!apps_use_light_theme_is_dark(1));
    }

    #[test]
    fn test_gtk_theme_output() {
        assert!(gtk_theme_is_dark("'Adwaita-dark'\n"));
        assert!(gtk_theme_is_dark("'Yaru-Dark'"));
        assert!(!gtk_theme_is_dark("'Adwaita'\n"));
        assert!(!gtk_theme_is_dark(""));
    }

    #[test]
    fn test_color_scheme_output() {
        assert!(color_scheme_is_dark("'prefer-dark'\n"));
        assert!(!color_scheme_is_dark("'default'\n"));
        assert!(!color_scheme_is_dark("'prefer-light'"));
    }

    #[test]
    fn test_apple_interface_style_output() {
        assert!(apple_interface_style_is_dark("Dark\n"));
        assert!(!apple_interface_style_is_dark(""));
    }

    #[test]
    fn test_detection_never_panics() {
        let mode = detect_system_theme();
        assert!(matches!(mode, ThemeMode::Light | ThemeMode::Dark));
    }
}
