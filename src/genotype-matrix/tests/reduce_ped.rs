use std::{fs, io::Write, path::PathBuf};

use anyhow::Result;
use float_cmp::approx_eq;
use genotype::{Affectation, GenotypeCall};
use genotype_matrix::{impute, reduce, MissingColumnPolicy};
use ped_io::decode_ped;
use tempfile::TempDir;

fn ped_fixture(contents: &str) -> Result<(TempDir, PathBuf)> {
    let tmpdir = tempfile::tempdir()?;
    let path = tmpdir.path().join("cohort.ped");
    fs::File::create(&path)?.write_all(contents.as_bytes())?;
    Ok((tmpdir, path))
}

/// Allele pair encoding a given alternate allele count, or a missing call.
fn alleles(value: i8) -> &'static str {
    match value {
        0 => "1 1",
        1 => "1 2",
        2 => "2 2",
        _ => "0 0",
    }
}

fn cohort(rows: &[(i32, Vec<i8>)]) -> String {
    rows.iter().enumerate()
        .map(|(i, (status, values))| {
            let genotypes = values.iter().map(|v| alleles(*v)).collect::<Vec<_>>().join(" ");
            format!("FAM{i} IND{i} 0 0 1 {status} {genotypes}\n")
        })
        .collect()
}

#[test]
fn two_sample_scenario() -> Result<()> {
    let (_tmpdir, path) = ped_fixture("F1 I1 0 0 1 2 1 1 2 2\nF2 I2 0 0 1 1 1 2 0 0\n")?;
    let dataset = decode_ped(&path)?;
    let imputed = impute(dataset.genotypes.clone(), MissingColumnPolicy::Fail)?;
    assert_eq!(imputed.calls()[[1, 1]], GenotypeCall::HomAlt);

    let projection = reduce(dataset, MissingColumnPolicy::Fail)?;
    assert_eq!(projection.labels.to_vec(), vec![1, 0]);
    let pc1 = projection.coordinates.column(0);
    assert!(approx_eq!(f64, pc1[0], -pc1[1], epsilon = 1e-9));
    assert!(approx_eq!(f64, pc1[0].abs(), 0.5, epsilon = 1e-9));
    Ok(())
}

#[test]
fn separated_cohorts_split_on_first_component() -> Result<()> {
    let mut rng = fastrand::Rng::with_seed(1234);
    let n_variants = 40;
    let rows: Vec<(i32, Vec<i8>)> = (0..30)
        .map(|i| {
            let (status, center) = if i % 2 == 0 { (1, 0) } else { (2, 2) };
            let values = (0..n_variants)
                .map(|_| if rng.u8(0..10) == 0 { -1 } else if rng.u8(0..5) == 0 { 1 } else { center })
                .collect();
            (status, values)
        })
        .collect();

    let (_tmpdir, path) = ped_fixture(&cohort(&rows))?;
    let projection = reduce(decode_ped(&path)?, MissingColumnPolicy::Fail)?;

    let controls = projection.points(Affectation::Control);
    let cases = projection.points(Affectation::Case);
    assert_eq!((controls.len(), cases.len()), (15, 15));

    let controls_sign = controls[0].0.signum();
    assert!(controls.iter().all(|(pc1, _)| pc1.signum() == controls_sign));
    assert!(cases.iter().all(|(pc1, _)| pc1.signum() == -controls_sign));
    assert!(projection.explained_variance_ratio[0] > projection.explained_variance_ratio[1]);
    Ok(())
}

#[test]
fn imputation_leaves_no_missing_call() -> Result<()> {
    let mut rng = fastrand::Rng::with_seed(99);
    let rows: Vec<(i32, Vec<i8>)> = (0..12)
        .map(|i| (1 + i % 2, (0..25).map(|_| rng.i8(-1..3)).collect()))
        .collect();

    let (_tmpdir, path) = ped_fixture(&cohort(&rows))?;
    let dataset = decode_ped(&path)?;
    let (n_samples, n_variants) = (dataset.n_samples(), dataset.n_variants());
    let imputed = impute(dataset.genotypes, MissingColumnPolicy::HomRef)?;
    assert_eq!((imputed.n_samples(), imputed.n_variants()), (n_samples, n_variants));
    assert!(imputed.to_f64().iter().all(|v| [0.0, 1.0, 2.0].contains(v)));
    Ok(())
}
