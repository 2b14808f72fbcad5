use ag_design::Technology;
use ag_influent::{FlowUnit, Influent};
use ag_project::*;
use std::path::PathBuf;

fn cases_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // go to crates
    dir.pop(); // go to repo root
    dir.push("cases");
    dir
}

#[test]
fn bundled_cases_load() {
    let yaml = load_case(&cases_dir().join("municipal_1mgd.yaml")).unwrap();
    assert_eq!(yaml.name, "Municipal 1 MGD");
    let inf = yaml.influent.to_influent().unwrap();
    assert_eq!(inf.unit(), FlowUnit::Mgd);
    assert_eq!(yaml.selected_technologies().unwrap(), Technology::ALL);

    let json = load_case(&cases_dir().join("small_town_mld.json")).unwrap();
    assert_eq!(
        json.selected_technologies().unwrap(),
        [Technology::Mbr, Technology::Mbbr]
    );
}

#[test]
fn yaml_save_and_load() {
    let dir = std::env::temp_dir().join("ag_project_test_yaml");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("case.yaml");

    let inf = Influent::new(3.0, FlowUnit::Mld, 280.0, 240.0, 45.0, 6.0).unwrap();
    let mut case = DesignCase::new("Roundtrip", &inf);
    case.technologies = vec!["ifas".to_string(), "CAS".to_string()];

    save_yaml(&path, &case).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(loaded, case);
    assert_eq!(loaded.influent.to_influent().unwrap(), inf);
    assert_eq!(
        loaded.selected_technologies().unwrap(),
        [Technology::Cas, Technology::Ifas]
    );
}

#[test]
fn invalid_case_is_not_saved() {
    let dir = std::env::temp_dir().join("ag_project_test_invalid");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("case.json");

    let inf = Influent::new(1.0, FlowUnit::Mgd, 250.0, 220.0, 40.0, 7.0).unwrap();
    let mut case = DesignCase::new("Bad", &inf);
    case.influent.unit = "GPD".to_string();

    let err = save_json(&path, &case).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
    assert!(!path.exists());
}
