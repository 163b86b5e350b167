//! Minimal command-line driver: loads a program binary and runs it to
//! completion against the real console.

use std::io;
use std::process::ExitCode;

use synacor_vm::config::VmConfig;
use synacor_vm::interpreter::{RunOutcome, Vm};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: synacor-vm <program.bin>");
        return ExitCode::FAILURE;
    };

    let mut vm: Vm<io::Stdin, io::Stdout> = Vm::new(VmConfig::default(), io::stdin(), io::stdout());

    if let Err(fault) = vm.load_file(&path) {
        eprintln!("synacor-vm: {fault}");
        return ExitCode::FAILURE;
    }

    match vm.run() {
        RunOutcome::Halted => ExitCode::SUCCESS,
        RunOutcome::Faulted(fault) => {
            eprintln!("synacor-vm: {fault}");
            ExitCode::FAILURE
        }
    }
}
