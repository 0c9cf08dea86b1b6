use anyhow::{Context, Result, bail};
use comfy_table::Table;

use lcia_cli::pipeline::{
    MAPPING_ENV_VAR, MapRequest, MapSummary, default_mapping_file, list_systems, run_mapping,
};
use lcia_model::{MappingOptions, UnspecifiedContext, supported_methods};

use crate::cli::{MapArgs, SystemsArgs};
use crate::summary::apply_table_style;

pub fn run_map(args: &MapArgs) -> Result<MapSummary> {
    let mut options = MappingOptions::new()
        .with_preserve_unmapped(args.preserve_unmapped)
        .with_case_insensitive(args.case_insensitive);
    if let Some(system) = &args.system {
        options = options.with_system(system.as_str());
    }
    if args.drop_unspecified {
        options = options.with_unspecified(UnspecifiedContext::Drop);
    }
    let request = MapRequest {
        input: args.input.clone(),
        mapping: args.mapping.clone().or_else(default_mapping_file),
        output: args.output.clone(),
        method: args.method,
        options,
        collapse: args.collapse,
        indicators: args.indicators.clone(),
        methods: args.method_names.clone(),
    };
    run_mapping(&request)
}

pub fn run_systems(args: &SystemsArgs) -> Result<()> {
    let Some(mapping) = args.mapping.clone().or_else(default_mapping_file) else {
        bail!("no mapping file given and {MAPPING_ENV_VAR} is not set");
    };
    let systems = list_systems(&mapping)?;
    let mut table = Table::new();
    table.set_header(vec!["Mapping system"]);
    apply_table_style(&mut table);
    for system in systems {
        table.add_row(vec![system]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_methods() -> Result<()> {
    let methods = supported_methods().context("load method metadata")?;
    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Mapping system", "Case-insensitive"]);
    apply_table_style(&mut table);
    for meta in methods {
        table.add_row(vec![
            meta.id,
            meta.name,
            meta.mapping.unwrap_or_else(|| "-".to_string()),
            if meta.case_insensitivity { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
