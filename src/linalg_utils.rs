extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;

///Computes the outer product `ab^T` of vectors `a` and `b`.
pub fn outer(a : ArrayView1<f64>, b : ArrayView1<f64>) -> Array2<f64> {
    let a_column = a.insert_axis(Axis(1));
    let b_row = b.insert_axis(Axis(0));
    a_column.dot(&b_row)
}

///Computes `L L^T` for every `L` in a batch of square matrices,
///which undoes a batched Cholesky factorization.
pub fn batch_gram(factors : ArrayView3<f64>) -> Array3<f64> {
    let mut result = Array::zeros(factors.raw_dim());
    for (i, L) in factors.outer_iter().enumerate() {
        result.index_axis_mut(Axis(0), i).assign(&L.dot(&L.t()));
    }
    result
}

///True when every entry strictly above the diagonal is zero.
pub fn is_lower_triangular(mat : ArrayView2<f64>) -> bool {
    for ((i, j), elem) in mat.indexed_iter() {
        if (j > i && *elem != 0.0) {
            return false;
        }
    }
    true
}
