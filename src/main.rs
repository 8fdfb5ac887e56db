use std::process::ExitCode;

use clap::Parser;

mod cli;

use cli::CliFlags;

fn main() -> ExitCode {
    disable_core_dumps();

    let flags = CliFlags::parse();
    cli::logging::init(flags.log_level());

    match cli::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}
