mod commands;
mod terminal;

use commands::{CommandLine, Commands, list, menu};
use roster_common::config::Config;
use roster_common::{info, success};
use roster_core::{LoadStatus, Registry};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(&cfg)?;
    print::banner(cfg.quiet);

    let mut registry = Registry::open(cfg.data_file.clone());
    report_load(registry.load_status(), &cfg);

    match commands.action() {
        Commands::Menu => {
            print::header("school management", cfg.quiet);
            menu::run(&mut registry)
        }
        Commands::List { kind } => {
            list::list(&registry, kind, &cfg);
            Ok(())
        }
    }
}

fn report_load(status: &LoadStatus, cfg: &Config) {
    let path = cfg.data_file.display();
    match status {
        LoadStatus::Fresh => info!("No data at {path}, starting empty"),
        LoadStatus::Restored {
            students,
            teachers,
            courses,
        } => success!("Loaded {students} students, {teachers} teachers and {courses} courses from {path}"),
        LoadStatus::Discarded { .. } => info!("Starting empty, the next save will overwrite {path}"),
    }
}
