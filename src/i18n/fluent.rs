// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when neither the CLI, the config, nor the OS names an
/// available one.
const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded `.ftl` bundle and picks the locale from the
    /// first matching source: CLI flag, config file, OS locale.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let bundles = load_embedded_bundles();

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(|locale| locale.to_string());

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| FALLBACK_LOCALE.parse().expect("valid fallback locale"));

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates `key` in the current locale. Unknown keys come back as
    /// a visible `MISSING:` marker so untranslated UI is noticed early.
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key)
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.into_owned())
    }
}

fn load_embedded_bundles() -> HashMap<LanguageIdentifier, FluentBundle<FluentResource>> {
    let mut bundles = HashMap::new();

    for file in Asset::iter() {
        let name = file.as_ref();
        let Some(locale) = name
            .strip_suffix(".ftl")
            .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
        else {
            continue;
        };
        let Some(content) = Asset::get(name) else {
            continue;
        };

        let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
        let resource = match FluentResource::try_new(source) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                eprintln!(
                    "warning: translation file {name} has {} syntax errors",
                    errors.len()
                );
                resource
            }
        };

        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        if bundle.add_resource(resource).is_err() {
            eprintln!("warning: translation file {name} redefines existing messages");
        }
        bundles.insert(locale, bundle);
    }

    bundles
}

/// First candidate that parses and is actually shipped wins.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang, config.language.clone(), sys_locale::get_locale()];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|locale| available.contains(locale))
}
