use std::io::Write;
use std::process::ExitCode;

use env_logger::Builder;

use rr_sched::report::Report;
use rr_sched::scheduler::{Policy, RoundRobin};
use rr_sched::workload::Workload;

const USAGE: &str = "usage: rr-sched <workload.json> [strict|threshold|1|2]";

fn main() -> ExitCode {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let requested = match args.next().map(|s| s.parse::<Policy>()).transpose() {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&path, requested) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, requested: Option<Policy>) -> Result<(), Box<dyn std::error::Error>> {
    let mut workload = Workload::from_file(path)?;
    if let Some(policy) = requested {
        workload = workload.with_policy(policy);
    }
    let (processes, configs) = workload.into_parts()?;

    for config in &configs {
        let result = RoundRobin::from_config(config).simulate(&processes, config.policy);
        println!();
        print!("{}", Report::new(&result));
    }

    Ok(())
}
