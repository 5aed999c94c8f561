//! FILENAME: app/cli/src/main.rs
// PURPOSE: Command-line entry point. All work happens in `polycalc::run`.

fn main() -> anyhow::Result<()> {
    polycalc::run()
}
