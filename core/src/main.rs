use clap::Parser;
use ctslice_core::cli::{read_request, Cli};
use ctslice_core::protocol::{respond, SelectionResponse};
use ctslice_core::{CoverageReport, SliceSelector};
use log::{debug, error};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let input = match read_request(cli.input.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            error!("Failed to read request: {}", e);
            emit(&SelectionResponse::failure(e.to_string()));
            process::exit(1);
        }
    };

    let selector = SliceSelector::new(cli.selector_config());
    debug!("Using configuration: {:?}", selector.config());

    let (response, result) = respond(&input, &selector, cli.target_count);

    if let Some(result) = result.as_ref() {
        if !cli.no_report {
            eprintln!("{}", CoverageReport::new(result));
        }
    }

    emit(&response);

    if !response.is_success() {
        process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn emit(response: &SelectionResponse) {
    match response.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            println!(r#"{{"success":false,"error":"Failed to serialize response"}}"#);
            process::exit(1);
        }
    }
}
