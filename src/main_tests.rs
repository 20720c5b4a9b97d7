use super::*;

#[test]
fn keep_flags_force_toggles_off() {
    let keep = KeepFlags {
        keep_lineage: true,
        keep_display: true,
        ..KeepFlags::default()
    };
    let strip = apply_keep_flags(StripConfig::default(), &keep);

    assert!(!strip.lineage);
    assert!(!strip.display);
    assert!(strip.annotations);
    assert!(strip.language_data);
}

#[test]
fn no_keep_flags_leave_config_untouched() {
    let strip = apply_keep_flags(StripConfig::default(), &KeepFlags::default());
    assert_eq!(strip, StripConfig::default());
}

#[test]
fn default_output_path_uses_root_name() {
    assert_eq!(
        default_output_path(Path::new("model/AdventureWorks")),
        PathBuf::from("AdventureWorks.slim.tmdl")
    );
}

#[test]
fn default_output_path_for_bare_dot() {
    assert_eq!(default_output_path(Path::new(".")), PathBuf::from("model.slim.tmdl"));
}

#[test]
fn config_template_parses_to_defaults() {
    let config: Config = toml::from_str(&config_template()).unwrap();
    assert_eq!(config, Config::default());
}
