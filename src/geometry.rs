pub mod filament;

pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

pub fn midpoints(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_spans_endpoints() {
        let xs = linspace(-0.5, 0.5, 5);
        assert_eq!(xs.len(), 5);
        assert_relative_eq!(xs[0], -0.5);
        assert_relative_eq!(xs[2], 0.0);
        assert_relative_eq!(xs[4], 0.5);
    }

    #[test]
    fn midpoints_of_uniform_edges() {
        let mids = midpoints(&linspace(0.0, 1.0, 3));
        assert_eq!(mids.len(), 2);
        assert_relative_eq!(mids[0], 0.25);
        assert_relative_eq!(mids[1], 0.75);
    }
}
