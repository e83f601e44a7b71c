/// Compatibility layer for rayon/sequential execution.
///
/// When the `parallel` feature is enabled, paired cells are mapped through
/// ndarray's rayon-backed `Zip::par_map_collect`. When disabled (e.g., for
/// WASM builds), the same closure runs through the sequential
/// `Zip::map_collect`. Both produce the same array.
use ndarray::{ArrayD, ArrayViewD, Zip};

/// Map two equally-shaped views cell by cell into a new array.
///
/// Panics if the shapes differ; callers broadcast first.
#[cfg(feature = "parallel")]
pub(crate) fn zip_map_collect<F>(a: ArrayViewD<'_, f64>, b: ArrayViewD<'_, f64>, f: F) -> ArrayD<f64>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    tracing::trace!(threads = rayon::current_num_threads(), "parallel cell map");
    Zip::from(&a).and(&b).par_map_collect(|&x, &y| f(x, y))
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn zip_map_collect<F>(a: ArrayViewD<'_, f64>, b: ArrayViewD<'_, f64>, f: F) -> ArrayD<f64>
where
    F: Fn(f64, f64) -> f64,
{
    tracing::trace!("sequential cell map");
    Zip::from(&a).and(&b).map_collect(|&x, &y| f(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_zip_map_collect_shape_and_order() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn();
        let b = Array2::<f64>::ones((2, 3)).into_dyn();

        let out = zip_map_collect(a.view(), b.view(), |x, y| x - y);
        assert_eq!(out, array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]].into_dyn());
    }

    #[test]
    fn test_zip_map_collect_empty() {
        let a = Array2::<f64>::zeros((0, 4)).into_dyn();
        let out = zip_map_collect(a.view(), a.view(), |x, y| x + y);
        assert_eq!(out.shape(), &[0, 4]);
    }
}
