//! Tests for the built-in theme registry

use rstest::rstest;

use cozydash::domain::{ColorRole, DomainError, RawPalette, ThemeName, ThemeRegistry};

fn registry(active: &str) -> ThemeRegistry {
    ThemeRegistry::builtin(active).expect("builtin registry is valid")
}

#[test]
fn given_builtin_registry_when_listing_then_every_theme_name_registered() {
    let registry = registry("dark");
    let names: Vec<ThemeName> = registry.names().collect();
    assert_eq!(names, ThemeName::ALL.to_vec());
}

#[test]
fn given_builtin_registry_when_inspecting_palettes_then_all_roles_non_empty() {
    let registry = registry("dark");
    for (name, palette) in registry.iter() {
        for role in ColorRole::ALL {
            let color = palette.get(role);
            assert!(!color.is_empty(), "{}.{} is empty", name, role);
            assert!(color.starts_with('#'), "{}.{} = {}", name, role, color);
        }
    }
}

#[rstest]
#[case::default("default", "#2185d0", "#ffffff")]
#[case::twitter("twitter", "#1da1f2", "#f5f8fa")]
#[case::material("material", "#4285f4", "#fafafa")]
#[case::bootstrap("bootstrap", "#007bff", "#f8f9fa")]
#[case::amazon("amazon", "#ff9900", "#ffffff")]
#[case::dark("dark", "#00bcd4", "#1e1e1e")]
fn given_theme_name_when_resolving_then_returns_its_palette(
    #[case] name: &str,
    #[case] primary: &str,
    #[case] background: &str,
) {
    let registry = registry("dark");
    let palette = registry.resolve(name);
    assert_eq!(palette.primary, primary);
    assert_eq!(palette.background, background);
}

#[rstest]
#[case::nonexistent("nonexistent")]
#[case::empty("")]
#[case::wrong_case("DARK")]
#[case::padded(" dark ")]
fn given_unregistered_name_when_resolving_then_default_palette(#[case] name: &str) {
    let registry = registry("dark");
    assert_eq!(registry.resolve(name), registry.default_palette());
    assert!(matches!(
        registry.lookup(name),
        Err(DomainError::UnknownTheme(_))
    ));
}

#[test]
fn given_no_configuration_when_resolving_active_then_dark() {
    let registry = registry(cozydash::domain::APP_THEME.as_str());
    let (name, palette) = registry.active();
    assert_eq!(name, ThemeName::Dark);
    assert_eq!(palette.text, "#f0f0f0");
}

#[test]
fn given_misconfigured_active_when_resolving_then_default_and_request_kept() {
    let registry = registry("neon");
    let (name, _) = registry.active();
    assert_eq!(name, ThemeName::Default);
    assert_eq!(registry.active_name(), "neon");
}

#[test]
fn given_custom_entries_when_one_is_incomplete_then_construction_fails() {
    let complete = ColorRole::ALL
        .into_iter()
        .fold(RawPalette::new(), |raw, role| raw.with(role, "#abcdef"));
    let partial = RawPalette::from_pairs(&[(ColorRole::Primary, "#000000")]);

    let result = ThemeRegistry::new(
        [(ThemeName::Default, complete), (ThemeName::Dark, partial)],
        ThemeName::Default,
        "dark",
    );

    assert_eq!(
        result.unwrap_err(),
        DomainError::IncompletePalette {
            theme: "dark".to_string(),
            role: ColorRole::Secondary,
        }
    );
}
