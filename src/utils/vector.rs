//! Summary statistics over `faer` columns.

use faer::Col;

/// Arithmetic mean. Returns NaN for an empty column.
pub fn mean(v: &Col<f64>) -> f64 {
    v.iter().sum::<f64>() / v.nrows() as f64
}

/// Center a vector by subtracting the mean.
pub fn center_vector(y: &Col<f64>) -> (Col<f64>, f64) {
    let n = y.nrows();
    let mean = mean(y);

    let centered = Col::from_fn(n, |i| y[i] - mean);

    (centered, mean)
}

/// Squared deviations (vᵢ - center)².
pub fn centered_squares(v: &Col<f64>, center: f64) -> Col<f64> {
    Col::from_fn(v.nrows(), |i| (v[i] - center).powi(2))
}

/// Standard deviation with divisor n (numpy's default `ddof = 0`).
pub fn population_std(v: &Col<f64>) -> f64 {
    let (centered, _) = center_vector(v);
    let ss: f64 = centered.iter().map(|c| c * c).sum();
    (ss / v.nrows() as f64).sqrt()
}

/// Reorder `values` by ascending `key`. Ties keep their original order.
pub fn sort_by_key(key: &Col<f64>, values: &Col<f64>) -> (Col<f64>, Col<f64>) {
    let mut order: Vec<usize> = (0..key.nrows()).collect();
    order.sort_by(|&a, &b| key[a].total_cmp(&key[b]));

    let sorted_key = Col::from_fn(order.len(), |i| key[order[i]]);
    let sorted_values = Col::from_fn(order.len(), |i| values[order[i]]);

    (sorted_key, sorted_values)
}
