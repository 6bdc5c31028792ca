//! Command-line front end.
//!
//! ```text
//! u-cpu-schedule [REQUEST.json | -]
//! u-cpu-schedule --generate COUNT SEED POLICIES [END_TIME]
//! ```
//!
//! The first form reads a JSON `SimulationRequest` from a file, or from
//! stdin when the path is `-` or omitted. The second builds a synthetic
//! workload; POLICIES is a list such as `1,2-2,3,4,5`.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use tracing::{error, info};

use u_cpu_schedule::report::{RunReport, COMPLETION_LINE};
use u_cpu_schedule::scheduler::{parse_policy_list, SimulationRequest, Simulator};
use u_cpu_schedule::telemetry::init_tracing;
use u_cpu_schedule::workload::WorkloadSpec;

const USAGE: &str = "usage: u-cpu-schedule [REQUEST.json | -]\n       \
                     u-cpu-schedule --generate COUNT SEED POLICIES [END_TIME]";

fn main() -> ExitCode {
    init_tracing();

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "simulation aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let request = match args.first().map(String::as_str) {
        Some("-h") | Some("--help") => {
            println!("{USAGE}");
            return Ok(());
        }
        Some("--generate") => generated_request(&args[1..])?,
        Some("-") | None => SimulationRequest::from_reader(io::stdin().lock())?,
        Some(path) => SimulationRequest::from_reader(BufReader::new(File::open(path)?))?,
    };

    info!(
        processes = request.processes.len(),
        policies = request.policies.len(),
        end_time = request.end_time,
        "request loaded"
    );

    for result in Simulator::run_request(&request)? {
        println!("{}", RunReport::new(&result));
    }
    println!("{COMPLETION_LINE}");
    Ok(())
}

fn generated_request(args: &[String]) -> Result<SimulationRequest, Box<dyn Error>> {
    let [count, seed, policies, rest @ ..] = args else {
        return Err(USAGE.into());
    };

    let processes = WorkloadSpec::new(count.parse()?, seed.parse()?).generate();
    let end_time = match rest.first() {
        Some(t) => t.parse()?,
        None => 0,
    };

    Ok(SimulationRequest::new(processes)
        .with_policies(parse_policy_list(policies)?)
        .with_end_time(end_time))
}
