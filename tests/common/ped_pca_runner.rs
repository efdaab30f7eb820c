use std::{fs, path::PathBuf};

use clap::Parser;

use super::Fixture;

/// Run `ped_pca::run()` on a copy of some test PED file.
pub struct PedPcaRunner {
    ped : Fixture,
    args: Vec<String>,
}

impl PedPcaRunner {
    pub fn new(ped: &str) -> Self {
        Self{ped: Fixture::copy(ped), args: Vec::new()}
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn ped(&self) -> &Fixture {
        &self.ped
    }

    /// Default location of the scatter plot.
    pub fn output(&self) -> PathBuf {
        pca_plot::default_output(&self.ped)
    }

    pub fn cli(&self) -> parser::Cli {
        let args = ["ped-pca".to_string(), self.ped.to_string()].into_iter()
            .chain(self.args.iter().cloned());
        parser::Cli::parse_from(args)
    }

    pub fn run(&self) -> anyhow::Result<()> {
        ped_pca::run(self.cli())
    }

    /// Every serialized `.yaml` argument file found next to the PED file.
    pub fn yaml_files(&self) -> Vec<PathBuf> {
        fs::read_dir(self.ped.dir()).expect("Failed to read fixture directory")
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().map_or(false, |ext| ext == "yaml"))
            .collect()
    }
}
