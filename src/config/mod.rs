//! Configuration layer: typed settings with layered precedence (file → env).

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "finestra";
const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:3000/assets/";
const DEFAULT_INDICATOR_PATH: &str = "spinner.svg";
const DEFAULT_AJAX_ACTION_PARAM: &str = "action";
const DEFAULT_MODAL_ID_PREFIX: &str = "popup-modal";
const DEFAULT_BUTTON_CLASSES: &str = "btn btn-primary";

/// Fully validated renderer settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub assets: AssetSettings,
    pub ajax: AjaxSettings,
    pub markup: MarkupSettings,
}

/// Where bundled frontend assets live, resolved to absolute URLs.
#[derive(Debug, Clone)]
pub struct AssetSettings {
    pub base_url: Url,
    /// Loading-indicator image URL, joined against `base_url` at load time.
    pub indicator_url: Url,
}

/// Endpoint the `ajax` attribute resolves actions against.
#[derive(Debug, Clone)]
pub struct AjaxSettings {
    pub endpoint: Option<Url>,
    pub action_param: String,
}

impl AjaxSettings {
    /// Resolve an AJAX action name to a fetch URL. `None` when no
    /// endpoint is configured.
    pub fn action_url(&self, action: &str) -> Option<Url> {
        let endpoint = self.endpoint.as_ref()?;
        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .append_pair(&self.action_param, action);
        Some(url)
    }
}

/// Markup knobs the host may retheme without forking templates.
#[derive(Debug, Clone)]
pub struct MarkupSettings {
    /// Prefix for synthesized dialog ids.
    pub modal_id_prefix: String,
    /// Class list applied to button triggers that declare none.
    pub button_classes: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from_raw(RawSettings::default()).expect("default settings must be valid")
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (files → environment).
pub fn load(config_file: Option<&Path>) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("FINESTRA").separator("__"));

    let raw: RawSettings = builder.build()?.try_deserialize()?;
    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    assets: RawAssetSettings,
    ajax: RawAjaxSettings,
    markup: RawMarkupSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawAssetSettings {
    base_url: Option<String>,
    indicator_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawAjaxSettings {
    endpoint: Option<String>,
    action_param: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawMarkupSettings {
    modal_id_prefix: Option<String>,
    button_classes: Option<String>,
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        Ok(Self {
            assets: build_asset_settings(raw.assets)?,
            ajax: build_ajax_settings(raw.ajax)?,
            markup: build_markup_settings(raw.markup)?,
        })
    }
}

fn build_asset_settings(assets: RawAssetSettings) -> Result<AssetSettings, LoadError> {
    let base_raw = assets
        .base_url
        .unwrap_or_else(|| DEFAULT_ASSET_BASE_URL.to_string());
    let base_url =
        Url::parse(&base_raw).map_err(|err| LoadError::invalid("assets.base_url", err.to_string()))?;
    if base_url.cannot_be_a_base() {
        return Err(LoadError::invalid("assets.base_url", "must be a base URL"));
    }

    let indicator_path = assets
        .indicator_path
        .unwrap_or_else(|| DEFAULT_INDICATOR_PATH.to_string());
    if indicator_path.trim().is_empty() {
        return Err(LoadError::invalid(
            "assets.indicator_path",
            "path must not be empty",
        ));
    }

    let indicator_url = base_url
        .join(&indicator_path)
        .map_err(|err| LoadError::invalid("assets.indicator_path", err.to_string()))?;

    Ok(AssetSettings {
        base_url,
        indicator_url,
    })
}

fn build_ajax_settings(ajax: RawAjaxSettings) -> Result<AjaxSettings, LoadError> {
    let endpoint = match ajax.endpoint {
        Some(value) if !value.trim().is_empty() => Some(
            Url::parse(&value)
                .map_err(|err| LoadError::invalid("ajax.endpoint", err.to_string()))?,
        ),
        _ => None,
    };

    let action_param = ajax
        .action_param
        .unwrap_or_else(|| DEFAULT_AJAX_ACTION_PARAM.to_string());
    if action_param.trim().is_empty() {
        return Err(LoadError::invalid(
            "ajax.action_param",
            "parameter name must not be empty",
        ));
    }

    Ok(AjaxSettings {
        endpoint,
        action_param,
    })
}

fn build_markup_settings(markup: RawMarkupSettings) -> Result<MarkupSettings, LoadError> {
    let modal_id_prefix = markup
        .modal_id_prefix
        .unwrap_or_else(|| DEFAULT_MODAL_ID_PREFIX.to_string());
    if modal_id_prefix.trim().is_empty() {
        return Err(LoadError::invalid(
            "markup.modal_id_prefix",
            "prefix must not be empty",
        ));
    }

    let button_classes = markup
        .button_classes
        .unwrap_or_else(|| DEFAULT_BUTTON_CLASSES.to_string());

    Ok(MarkupSettings {
        modal_id_prefix,
        button_classes,
    })
}

#[cfg(test)]
mod tests;
