#[cfg(test)]
mod fixture;
pub use fixture::Fixture;

#[cfg(test)]
mod ped_pca_runner;
pub use ped_pca_runner::PedPcaRunner;
