use clap::Parser;

use student_marks::cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli::CliArgs::parse();
    cli::run(args)
}
