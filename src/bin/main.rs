use std::process;
use clap::Parser;

#[macro_use]
extern crate log;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;


/// Parse command line arguments and run `ped_pca::run()`
fn main() {
    // ----------------------------- Run CLI Parser
    let cli = parser::Cli::parse();

    // ----------------------------- Init logger.
    if let Err(e) = logger::Logger::init(ped_pca::verbosity(&cli)) {
        eprintln!("{e:?}");
        process::exit(1);
    }

    // ----------------------------- Run.
    if let Err(e) = ped_pca::run(cli) {
        error!("{:?}", e);
        process::exit(1);
    };
}
