mod error;
pub use error::PcaError;

use log::trace;
use nalgebra::{DMatrix, DVector, SymmetricEigen};
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Principal component analysis through an exact eigendecomposition.
///
/// Columns are mean-centered before projection. Depending on the shape of the input, the
/// decomposition is applied on either the samples x samples Gram matrix, or the
/// variants x variants scatter matrix, whichever is the smallest. Both yield the same scores.
#[derive(Debug, Clone, Copy)]
pub struct Pca {
    n_components: usize,
}

/// Output of `Pca::fit_transform()`. Rows of `scores` follow the order of the input rows.
#[derive(Debug, Clone)]
pub struct PcaFit {
    pub scores                  : Array2<f64>,
    pub explained_variance      : Array1<f64>,
    pub explained_variance_ratio: Array1<f64>,
}

impl Pca {
    #[must_use]
    pub fn new(n_components: usize) -> Self {
        Self{n_components}
    }

    /// Project every row of `data` onto the first `n_components` directions of maximal variance.
    ///
    /// The sign of each component is normalized so that its largest absolute score is positive.
    /// Components are sorted by decreasing explained variance.
    ///
    /// # Errors
    /// - `TooFewDimensions` if `data` carries less rows or columns than the requested number of components.
    /// - `NonFinite` if the decomposition produced NaN or infinite scores.
    pub fn fit_transform(&self, data: ArrayView2<'_, f64>) -> Result<PcaFit, PcaError> {
        let (n_samples, n_variants) = data.dim();
        let n_components = self.n_components;
        let too_few = || PcaError::TooFewDimensions{samples: n_samples, variants: n_variants, components: n_components};
        if n_components == 0 || n_samples.min(n_variants) < n_components {
            return Err(too_few())
        }

        let means = data.mean_axis(Axis(0)).ok_or_else(too_few)?;
        let centered = &data - &means;
        let x = DMatrix::from_row_iterator(n_samples, n_variants, centered.iter().copied());

        let (eigenvalues, mut scores) = if n_samples <= n_variants {
            trace!("Solving PCA through the {n_samples}x{n_samples} Gram matrix");
            Self::from_gram(&x, n_components)
        } else {
            trace!("Solving PCA through the {n_variants}x{n_variants} scatter matrix");
            Self::from_scatter(&x, n_components)
        };

        if scores.iter().any(|score| !score.is_finite()) {
            return Err(PcaError::NonFinite)
        }
        Self::normalize_signs(&mut scores);

        let total_variance = x.norm_squared();
        let explained_variance_ratio = match total_variance > 0.0 {
            true  => &eigenvalues / total_variance,
            false => Array1::zeros(n_components),
        };
        let explained_variance = &eigenvalues / (n_samples - 1) as f64;

        Ok(PcaFit{scores, explained_variance, explained_variance_ratio})
    }

    /// Scores are obtained from the eigenvectors `u` of X.Xt: `score = u * sqrt(lambda)`
    fn from_gram(x: &DMatrix<f64>, n_components: usize) -> (Array1<f64>, Array2<f64>) {
        let eigen = SymmetricEigen::new(x * x.transpose());
        let mut eigenvalues = Array1::zeros(n_components);
        let mut scores = Array2::zeros((x.nrows(), n_components));
        for (c, idx) in Self::descending_order(&eigen.eigenvalues).into_iter().take(n_components).enumerate() {
            let lambda = eigen.eigenvalues[idx].max(0.0);
            let u = eigen.eigenvectors.column(idx);
            for (i, score) in scores.column_mut(c).iter_mut().enumerate() {
                *score = u[i] * lambda.sqrt();
            }
            eigenvalues[c] = lambda;
        }
        (eigenvalues, scores)
    }

    /// Scores are obtained by projecting X onto the eigenvectors `v` of Xt.X: `score = X.v`
    fn from_scatter(x: &DMatrix<f64>, n_components: usize) -> (Array1<f64>, Array2<f64>) {
        let eigen = SymmetricEigen::new(x.transpose() * x);
        let mut eigenvalues = Array1::zeros(n_components);
        let mut scores = Array2::zeros((x.nrows(), n_components));
        for (c, idx) in Self::descending_order(&eigen.eigenvalues).into_iter().take(n_components).enumerate() {
            let projection = x * eigen.eigenvectors.column(idx);
            for (i, score) in scores.column_mut(c).iter_mut().enumerate() {
                *score = projection[i];
            }
            eigenvalues[c] = eigen.eigenvalues[idx].max(0.0);
        }
        (eigenvalues, scores)
    }

    fn descending_order(eigenvalues: &DVector<f64>) -> Vec<usize> {
        let mut order: Vec<usize> = (0..eigenvalues.len()).collect();
        order.sort_by(|&a, &b| eigenvalues[b].total_cmp(&eigenvalues[a]));
        order
    }

    fn normalize_signs(scores: &mut Array2<f64>) {
        for mut component in scores.axis_iter_mut(Axis(1)) {
            let pivot = component.iter()
                .fold(0.0_f64, |pivot, &score| if score.abs() > pivot.abs() { score } else { pivot });
            if pivot < 0.0 {
                component.mapv_inplace(|score| -score);
            }
        }
    }
}
