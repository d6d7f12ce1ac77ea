use super::*;

#[test]
fn defaults_cover_every_section() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.assets.base_url.as_str(), DEFAULT_ASSET_BASE_URL);
    assert_eq!(
        settings.assets.indicator_url.as_str(),
        "http://localhost:3000/assets/spinner.svg"
    );
    assert!(settings.ajax.endpoint.is_none());
    assert_eq!(settings.ajax.action_param, "action");
    assert_eq!(settings.markup.modal_id_prefix, "popup-modal");
    assert_eq!(settings.markup.button_classes, "btn btn-primary");
}

#[test]
fn indicator_path_joins_against_base_url() {
    let mut raw = RawSettings::default();
    raw.assets.base_url = Some("https://cdn.example.com/static/".to_string());
    raw.assets.indicator_path = Some("img/loader.svg".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(
        settings.assets.indicator_url.as_str(),
        "https://cdn.example.com/static/img/loader.svg"
    );
}

#[test]
fn unparsable_base_url_is_rejected() {
    let mut raw = RawSettings::default();
    raw.assets.base_url = Some("not a url".to_string());

    let error = Settings::from_raw(raw).expect_err("base url must be rejected");
    assert!(matches!(
        error,
        LoadError::Invalid {
            key: "assets.base_url",
            ..
        }
    ));
}

#[test]
fn empty_indicator_path_is_rejected() {
    let mut raw = RawSettings::default();
    raw.assets.indicator_path = Some("  ".to_string());

    let error = Settings::from_raw(raw).expect_err("indicator path must be rejected");
    assert!(matches!(
        error,
        LoadError::Invalid {
            key: "assets.indicator_path",
            ..
        }
    ));
}

#[test]
fn blank_ajax_endpoint_counts_as_unset() {
    let mut raw = RawSettings::default();
    raw.ajax.endpoint = Some("   ".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert!(settings.ajax.endpoint.is_none());
    assert!(settings.ajax.action_url("load_profile").is_none());
}

#[test]
fn action_url_appends_the_action_parameter() {
    let mut raw = RawSettings::default();
    raw.ajax.endpoint = Some("https://example.com/wp-admin/admin-ajax.php".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    let url = settings
        .ajax
        .action_url("load_profile")
        .expect("endpoint configured");
    assert_eq!(
        url.as_str(),
        "https://example.com/wp-admin/admin-ajax.php?action=load_profile"
    );
}

#[test]
fn empty_modal_id_prefix_is_rejected() {
    let mut raw = RawSettings::default();
    raw.markup.modal_id_prefix = Some(String::new());

    let error = Settings::from_raw(raw).expect_err("prefix must be rejected");
    assert!(matches!(
        error,
        LoadError::Invalid {
            key: "markup.modal_id_prefix",
            ..
        }
    ));
}
