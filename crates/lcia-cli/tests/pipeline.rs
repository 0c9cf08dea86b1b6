//! Integration tests for the map pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use lcia_cli::pipeline::{MapRequest, list_systems, run_mapping};
use lcia_ingest::read_method_csv;
use lcia_model::{MappingOptions, Method};

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("lcia_cli_{label}_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

const METHOD_CSV: &str = "\
Method,Indicator,Indicator unit,Flowable,Context,Unit,CAS No,Characterization Factor
TRACI 2.1,Smog formation,kg O3 eq,\"Xylene, m-\",air,kg,108383,2.0
TRACI 2.1,Smog formation,kg O3 eq,\"Xylene, o-\",air,kg,95476,4.0
TRACI 2.1,Smog formation,kg O3 eq,Nitrogen oxides,Emission to air,kg,,20
TRACI 2.1,Global warming,kg CO2 eq,Methane,air,kg,74828,25
TRACI 2.1,Global warming,kg CO2 eq,Unobtainium,air,kg,,1
";

const MAPPING_CSV: &str = "\
SourceListName,SourceFlowName,SourceFlowContext,SourceUnit,ConversionFactor,TargetFlowName,TargetFlowUUID,TargetFlowContext,TargetUnit
TRACI2.1,\"Xylene, m-\",air,kg,,Xylene,xylene-id,emission/air,kg
TRACI2.1,\"Xylene, o-\",air,kg,,Xylene,xylene-id,emission/air,kg
TRACI2.1,Nitrogen oxides,air,kg,1,Nitrogen oxides,nox-id,emission/air,kg
TRACI2.1,Nitrogen oxides,air,kg,2,Nitrogen dioxide,no2-id,emission/air,kg
TRACI2.1,Methane,air,kg,,Methane,ch4-id,emission/air,kg
ReCiPe2016,Methane,air,kg,,Methane,ch4-recipe,emission/air,kg
";

#[test]
fn maps_supported_method_and_writes_output() {
    let dir = temp_dir("method");
    let input = write(&dir, "traci.csv", METHOD_CSV);
    let mapping = write(&dir, "mapping.csv", MAPPING_CSV);
    let output = dir.join("mapped.csv");

    let summary = run_mapping(&MapRequest {
        input,
        mapping: Some(mapping),
        output: Some(output.clone()),
        method: Some(Method::Traci),
        ..Default::default()
    })
    .expect("run mapping");

    assert_eq!(summary.system.as_deref(), Some("TRACI2.1"));
    assert_eq!(summary.stats.input_rows, 5);
    assert_eq!(summary.stats.matched, 4);
    assert_eq!(summary.stats.created, 5);
    assert_eq!(summary.stats.unmapped, 1);
    assert_eq!(summary.stats.duplicates.factor_count, 2);
    assert_eq!(summary.output_rows, 4);

    let mapped = read_method_csv(&output).expect("read output");
    let mut factors: Vec<_> = mapped
        .iter()
        .map(|row| (row.flow_id.as_str(), row.characterization_factor))
        .collect();
    factors.sort_by(|a, b| a.0.cmp(b.0));
    assert_eq!(
        factors,
        vec![("ch4-id", 25.0), ("no2-id", 10.0), ("nox-id", 20.0), ("xylene-id", 3.0)]
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn custom_table_with_filters_and_preserved_flows() {
    let dir = temp_dir("custom");
    let input = write(&dir, "custom.csv", METHOD_CSV);
    let mapping = write(&dir, "mapping.csv", MAPPING_CSV);

    let summary = run_mapping(&MapRequest {
        input,
        mapping: Some(mapping),
        options: MappingOptions::new()
            .with_system("TRACI2.1")
            .with_preserve_unmapped(true),
        indicators: vec!["Global warming".to_string()],
        ..Default::default()
    })
    .expect("run mapping");

    assert_eq!(summary.stats.preserved, 1);
    assert_eq!(summary.output_rows, 2);
    assert!(summary.output.is_none());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn case_insensitive_custom_table_lowercases_kept_flows() {
    let dir = temp_dir("case");
    let input = write(&dir, "custom.csv", METHOD_CSV);
    let mapping = write(&dir, "mapping.csv", MAPPING_CSV);
    let output = dir.join("mapped.csv");

    let summary = run_mapping(&MapRequest {
        input,
        mapping: Some(mapping),
        output: Some(output.clone()),
        options: MappingOptions::new()
            .with_system("TRACI2.1")
            .with_preserve_unmapped(true)
            .with_case_insensitive(true),
        ..Default::default()
    })
    .expect("run mapping");
    assert_eq!(summary.stats.matched, 4);
    assert_eq!(summary.stats.preserved, 1);

    let mapped = read_method_csv(&output).expect("read output");
    let kept: Vec<_> = mapped
        .iter()
        .filter(|row| row.flow_id.is_empty())
        .map(|row| row.flowable.as_str())
        .collect();
    assert_eq!(kept, vec!["unobtainium"]);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn without_mapping_the_table_passes_through() {
    let dir = temp_dir("passthrough");
    let input = write(&dir, "custom.csv", METHOD_CSV);
    let summary = run_mapping(&MapRequest {
        input,
        ..Default::default()
    })
    .expect("run mapping");
    assert!(!summary.stats.applied);
    assert_eq!(summary.output_rows, 5);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_reports_context() {
    let err = run_mapping(&MapRequest {
        input: PathBuf::from("/nonexistent/lcia/method.csv"),
        ..Default::default()
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("read method table"));
}

#[test]
fn lists_systems_in_mapping_file() {
    let dir = temp_dir("systems");
    let mapping = write(&dir, "mapping.csv", MAPPING_CSV);
    assert_eq!(
        list_systems(&mapping).expect("list systems"),
        vec!["ReCiPe2016", "TRACI2.1"]
    );
    let _ = fs::remove_dir_all(&dir);
}
