use std::process::ExitCode;

use reqres_core::{logging, scenarios, ApiConfig};

fn main() -> ExitCode {
    logging::init();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    println!("running {} scenarios against {}", scenarios::all().len(), config.base_url);

    let session = config.session();
    let mut failed = 0;
    for (name, scenario) in scenarios::all() {
        match scenario(&session) {
            Ok(()) => println!("PASS {name}"),
            Err(err) => {
                failed += 1;
                println!("FAIL {name}: {err}");
            }
        }
    }

    println!("{} passed, {failed} failed", scenarios::all().len() - failed);
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
