mod cli;
mod logging;
mod runner;
mod scaffold;
mod util;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
