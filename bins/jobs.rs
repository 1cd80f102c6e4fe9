#[path = "launch.rs"]
mod launch;

fn main() -> std::process::ExitCode {
    launch::launch("jobs", server::run_jobs::<launch::Shutdown>)
}
