// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

fn load_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::error!(%locale, ?errors, "failed to parse translation file");
            return None;
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Plain text rendering has no use for bidi isolation marks.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::error!(%locale, ?errors, "failed to add translation resource");
        return None;
    }
    Some(bundle)
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            if let Some(bundle) = load_bundle(&locale, source) {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or_else(default_locale);
        tracing::debug!(locale = %current_locale, "selected UI locale");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeholders from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn parse_available(lang_str: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let lang = lang_str.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    // "fr-FR" falls back to "fr" when only the bare language ships.
    available
        .iter()
        .find(|candidate| candidate.language == lang.language && candidate.region.is_none())
        .cloned()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(|s| parse_available(s, available)) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|s| parse_available(s, available))
    {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().and_then(|s| parse_available(&s, available))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_cli_beats_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("en-US".to_string()), &config, &available());
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_regional_variant_falls_back_to_language() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr-CA".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_default() {
        let config = Config::default();
        // System dependent: whatever comes back must be one of ours.
        if let Some(l) = resolve_locale(None, &config, &available()) {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_catalogs_load() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales.len() >= 2);
        assert_eq!(i18n.current_locale(), &default_locale());
        assert_eq!(i18n.tr("nav-home"), "Home");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let text = i18n.tr_with_args("boot-loading", &[("percent", "42")]);
        assert_eq!(text, "LOADING: 42%");
    }

    #[test]
    fn french_catalog_is_selected_from_cli() {
        let i18n = I18n::new(Some("fr".into()), &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        assert_eq!(i18n.tr("nav-home"), "Accueil");
    }
}
