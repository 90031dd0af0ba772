use composition::{Composition, Element};
use element_data::{
    ElementTable, LookupError, PropertyProvider, PropertyValue, TableConfig, TableFormat,
    ELECTRONEGATIVITY, OXIDATION_STATES,
};
use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/elements.json");

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn fixture() -> ElementTable {
    ElementTable::from_json_file(FIXTURE).unwrap()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("element-data-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn series_orders_by_electronegativity() {
    init_logging();
    let table = fixture();
    let comp = Composition::from_formula("LiFePO4").unwrap();

    let series = table.series(&comp, "Number").unwrap();
    assert_eq!(
        series.scalars().unwrap(),
        vec![3.0, 26.0, 15.0, 8.0, 8.0, 8.0, 8.0]
    );
    assert_eq!(series.property(), "Number");
}

#[test]
fn element_values_keep_lists() {
    let table = fixture();
    let comp = Composition::from_formula("NaCl").unwrap();
    let values = table.element_values(&comp, OXIDATION_STATES).unwrap();
    assert_eq!(values[0], (Element::Na, PropertyValue::List(vec![1.0])));
    assert_eq!(values[1].1.as_slice().map(<[f64]>::len), Some(5));
}

#[test]
fn missing_electronegativity_is_reported() {
    let table = fixture();
    let comp = Composition::from_formula("NaAr").unwrap();
    assert_eq!(
        table.series(&comp, "Number").unwrap_err(),
        LookupError::MissingValue {
            element: Element::Ar,
            property: ELECTRONEGATIVITY.to_string()
        }
    );
}

#[test]
fn decorated_composition_resolves_ionic_radius() {
    let table = fixture();
    let comp = Composition::from_annotated_formula("Fe2+3O3-2").unwrap();
    let series = table.series(&comp, "IonicRadius").unwrap();
    assert_eq!(
        series.scalars().unwrap(),
        vec![0.785, 0.785, 1.26, 1.26, 1.26]
    );
}

#[test]
fn magpie_directory_round_trip() {
    init_logging();
    let dir = scratch_dir("magpie");

    let mut electronegativity = vec!["None".to_string(); 26];
    electronegativity[7] = "3.44".to_string();
    electronegativity[25] = "1.83".to_string();
    fs::write(dir.join("Electronegativity.table"), electronegativity.join("\n")).unwrap();

    let mut oxidation = vec![String::new(); 26];
    oxidation[7] = "-2".to_string();
    oxidation[25] = "2 3".to_string();
    fs::write(dir.join("OxidationStates.table"), oxidation.join("\n")).unwrap();
    fs::write(dir.join("README.txt"), "not a table").unwrap();

    let table = ElementTable::from_magpie_dir(&dir).unwrap();
    assert_eq!(
        table.property_names().collect::<Vec<_>>(),
        vec!["Electronegativity", "OxidationStates"]
    );

    let comp = Composition::from_formula("FeO").unwrap();
    let states = table.element_values(&comp, OXIDATION_STATES).unwrap();
    assert_eq!(states[0], (Element::Fe, PropertyValue::List(vec![2.0, 3.0])));
    assert_eq!(states[1], (Element::O, PropertyValue::Scalar(-2.0)));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn magpie_blank_line_is_empty_list() {
    let dir = scratch_dir("magpie-blank");

    let mut oxidation = vec!["None".to_string(); 18];
    oxidation[7] = "-2".to_string();
    oxidation[17] = String::new();
    fs::write(dir.join("OxidationStates.table"), oxidation.join("\n")).unwrap();

    let table = ElementTable::from_magpie_dir(&dir).unwrap();
    assert_eq!(
        table.property(Element::Ar, OXIDATION_STATES).unwrap(),
        PropertyValue::List(Vec::new())
    );
    assert!(matches!(
        table.property(Element::Ne, OXIDATION_STATES),
        Err(LookupError::MissingValue { element: Element::Ne, .. })
    ));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn config_file_selects_snapshot() {
    init_logging();
    let dir = scratch_dir("config");
    let snapshot = dir.join("table.bin");
    fs::write(&snapshot, fixture().to_postcard().unwrap()).unwrap();

    let config_path = dir.join("element-data.toml");
    fs::write(
        &config_path,
        format!("source = {:?}\nformat = \"postcard\"\n", snapshot.display().to_string()),
    )
    .unwrap();

    let config = TableConfig::from_file(&config_path).unwrap();
    assert_eq!(config.format, TableFormat::Postcard);
    assert_eq!(config.open().unwrap(), fixture());

    fs::remove_dir_all(&dir).unwrap();
}

proptest! {
    #[test]
    fn series_length_matches_atom_count(
        li in 1u32..6, fe in 1u32..6, p in 1u32..6, o in 1u32..9,
    ) {
        let table = fixture();
        let comp = Composition::from_formula(&format!("Li{li}Fe{fe}P{p}O{o}")).unwrap();
        let series = table.series(&comp, "NValance").unwrap();
        prop_assert_eq!(series.len() as u32, li + fe + p + o);
    }
}
