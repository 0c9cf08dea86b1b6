use std::fs;
use std::path::{Path, PathBuf};

use lcia_ingest::{
    CanonicalCsvSource, CsvMappingProvider, IngestError, MethodSource, read_mapping_csv,
    read_method_csv, write_method_csv,
};
use lcia_map::{MappingProvider, supported_mapping_systems};
use lcia_model::Method;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("lcia_ingest_{name}_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn cleanup(path: &Path) {
    let _ = fs::remove_file(path);
    if let Some(parent) = path.parent() {
        let _ = fs::remove_dir_all(parent);
    }
}

const METHOD_CSV: &str = "\
Method,Indicator,Indicator unit,Flowable,Context,Unit,CAS No,Characterization Factor,Comment
TRACI 2.1,Global warming,kg CO2 eq,Methane,air,kg,74828,25,from AR4
TRACI 2.1,Global warming,kg CO2 eq,Carbon dioxide,air,kg,x,1.0,
";

#[test]
fn reads_custom_method_and_fills_missing_columns() {
    let path = temp_file("method.csv", METHOD_CSV);
    let rows = read_method_csv(&path).expect("read method");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].flowable, "Methane");
    assert_eq!(rows[0].cas_number, "74-82-8");
    assert_eq!(rows[0].characterization_factor, 25.0);
    assert_eq!(rows[0].flow_id, "");
    assert_eq!(rows[0].location, "");
    assert_eq!(rows[1].cas_number, "");
    cleanup(&path);
}

#[test]
fn missing_required_column_is_reported() {
    let path = temp_file("no_context.csv", "Flowable,Characterization Factor\nMethane,25\n");
    let err = read_method_csv(&path).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "Context"));
    cleanup(&path);
}

#[test]
fn bad_factor_fails_with_row_number() {
    let path = temp_file(
        "bad_factor.csv",
        "Flowable,Context,Characterization Factor\nMethane,air,25\nLead,air,n/a\n",
    );
    let err = read_method_csv(&path).unwrap_err();
    match err {
        IngestError::InvalidValue { value, row, .. } => {
            assert_eq!(value, "n/a");
            assert_eq!(row, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    cleanup(&path);
}

#[test]
fn written_table_reads_back() {
    let source = temp_file("source.csv", METHOD_CSV);
    let rows = read_method_csv(&source).expect("read method");
    let target = source.with_file_name("written.csv");
    write_method_csv(&target, &rows).expect("write method");

    let written = fs::read_to_string(&target).expect("read written");
    let header = written.lines().next().unwrap_or_default();
    assert_eq!(
        header,
        "Method,Method UUID,Indicator,Indicator UUID,Indicator unit,Flowable,Flow UUID,\
         Context,Unit,CAS No,Location,Location UUID,Characterization Factor"
    );
    assert_eq!(read_method_csv(&target).expect("reread"), rows);
    let _ = fs::remove_file(&target);
    cleanup(&source);
}

#[test]
fn csv_source_names_unnamed_rows() {
    let path = temp_file(
        "unnamed.csv",
        "Flowable,Context,Characterization Factor\nMethane,air,25\n",
    );
    let source = CanonicalCsvSource::new(&path).with_method(Method::Ipcc);
    assert_eq!(source.method(), Some(Method::Ipcc));
    let rows = source.read().expect("read source");
    assert_eq!(rows[0].method, "IPCC");
    cleanup(&path);
}

const MAPPING_CSV: &str = "\
SourceListName,SourceFlowName,SourceFlowUUID,SourceFlowContext,SourceUnit,MatchCondition,ConversionFactor,TargetFlowName,TargetFlowUUID,TargetFlowContext,TargetUnit
TRACI2.1,Methane,,air,kg,=,,Methane,ch4-id,air/unspecified,kg
TRACI2.1,Nitrogen oxides,,air,kg,=,0.5,Nitrogen dioxide,no2-id,air/unspecified,kg
ReCiPe2016,Methane,,air,kg,=,1,Methane,ch4-id,air/unspecified,kg
";

#[test]
fn reads_mapping_file_and_lists_systems() {
    let path = temp_file("mapping.csv", MAPPING_CSV);
    let entries = read_mapping_csv(&path).expect("read mapping");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].conversion_factor, None);
    assert_eq!(entries[1].conversion_factor, Some(0.5));
    assert_eq!(entries[1].target_id, "no2-id");
    assert_eq!(supported_mapping_systems(&entries), vec!["ReCiPe2016", "TRACI2.1"]);

    let provider = CsvMappingProvider::new(&path);
    let traci = provider.load("TRACI2.1").expect("load system");
    assert_eq!(traci.len(), 2);
    assert!(provider.load("IPCC").expect("load system").is_empty());
    cleanup(&path);
}

#[test]
fn unparseable_conversion_factor_is_an_error() {
    let path = temp_file(
        "bad_mapping.csv",
        "SourceListName,SourceFlowName,TargetFlowName,ConversionFactor\nTRACI2.1,Lead,Lead,one\n",
    );
    assert!(matches!(
        read_mapping_csv(&path),
        Err(IngestError::InvalidValue { .. })
    ));
    let provider = CsvMappingProvider::new(&path);
    assert!(provider.load("TRACI2.1").is_err());
    cleanup(&path);
}
