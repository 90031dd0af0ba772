use feature_engine::{Featurizer, FeaturizerConfig};
use std::fs;

// Kept in its own test binary: the override is process-wide
#[test]
fn environment_overrides_file_values() {
    let path = std::env::temp_dir().join(format!(
        "feature-engine-env-{}.toml",
        std::process::id()
    ));
    fs::write(
        &path,
        "[stoichiometry]\nenabled = true\np_list = [2]\n\n[elemental]\nenabled = false\n\n[valence_orbital]\nenabled = false\n",
    )
    .unwrap();

    std::env::set_var("FEATURE_ENGINE__STOICHIOMETRY__ENABLED", "false");
    let config = FeaturizerConfig::from_file(&path);
    std::env::remove_var("FEATURE_ENGINE__STOICHIOMETRY__ENABLED");
    fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert!(!config.stoichiometry.enabled);
    assert_eq!(config.stoichiometry.p_list, vec![2]);
    assert_eq!(
        config.build().generate_labels(),
        vec!["compound possible", "Max Ionic Char", "Avg Ionic Char"]
    );
}
