#[path = "launch.rs"]
mod launch;

fn main() -> std::process::ExitCode {
    launch::launch("complaints", server::run_complaints::<launch::Shutdown>)
}
