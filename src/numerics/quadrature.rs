use std::f64::consts::PI;

use crate::error::{Result, ScallopError};

// Nodes are stored in ascending order; each node owns the weight at the same index.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule {
    pub nodes: Vec<f64>,
    pub weights: Vec<f64>,
}

impl QuadratureRule {
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn weight_sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Map the rule from [-1, 1] onto [a, b].
    pub fn rescale(&self, a: f64, b: f64) -> QuadratureRule {
        let half_width = 0.5 * (b - a);
        let centre = 0.5 * (b + a);
        QuadratureRule {
            nodes: self.nodes.iter().map(|x| half_width * x + centre).collect(),
            weights: self.weights.iter().map(|w| half_width * w).collect(),
        }
    }

    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F) -> f64 {
        self.nodes
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| w * f(*x))
            .sum()
    }
}

/// Clenshaw-Curtis rule with `n + 1` points on the Chebyshev extreme points.
pub fn clenshaw_curtis(n: usize) -> Result<QuadratureRule> {
    if n < 1 {
        return Err(ScallopError::Configuration(format!(
            "Clenshaw-Curtis order must be at least 1, got {}",
            n
        )));
    }
    let nf = n as f64;
    let angles: Vec<f64> = (0..=n).map(|k| PI * k as f64 / nf).collect();

    // -cos gives ascending nodes. The weights are symmetric so their order is unaffected.
    let nodes = angles.iter().map(|th| -th.cos()).collect();

    let mut weights = vec![0.0; n + 1];
    let end_weight = if n % 2 == 0 {
        1.0 / (nf * nf - 1.0)
    } else {
        1.0 / (nf * nf)
    };
    weights[0] = end_weight;
    weights[n] = end_weight;

    for (k, th) in angles.iter().enumerate().take(n).skip(1) {
        let mut v = 1.0;
        for j in 1..=(n - 1) / 2 {
            let jf = j as f64;
            v -= 2.0 * (2.0 * jf * th).cos() / (4.0 * jf * jf - 1.0);
        }
        if n % 2 == 0 {
            v -= (nf * th).cos() / (nf * nf - 1.0);
        }
        weights[k] = 2.0 * v / nf;
    }

    Ok(QuadratureRule { nodes, weights })
}

/// Gauss-Legendre rule with `n` points, found by Newton iteration on P_n.
pub fn gauss_legendre(n: usize) -> Result<QuadratureRule> {
    if n < 1 {
        return Err(ScallopError::Configuration(format!(
            "Gauss-Legendre point count must be at least 1, got {}",
            n
        )));
    }
    let nf = n as f64;
    let tolerance = 1e-15;
    let max_iterations = 100;

    let mut nodes = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);
    for i in 0..n {
        // Initial guess from the asymptotic root formula.
        let a = (3.0 + 4.0 * i as f64) / (4.0 * nf + 2.0);
        let mut x = (PI * a + 1.0 / (8.0 * nf * nf * (PI * a).tan())).cos();

        for _ in 0..max_iterations {
            let (p, dp) = legendre(n, x);
            let dx = p / dp;
            x -= dx;
            if dx.abs() < tolerance {
                break;
            }
        }
        let (_, dp) = legendre(n, x);
        nodes.push(x);
        weights.push(2.0 / ((1.0 - x * x) * dp * dp));
    }

    nodes.reverse();
    weights.reverse();
    Ok(QuadratureRule { nodes, weights })
}

// Returns (P_n(x), P_n'(x)) via the three-term recurrence.
fn legendre(n: usize, x: f64) -> (f64, f64) {
    let mut p_prev = 1.0;
    let mut p = x;
    for k in 1..n {
        let kf = k as f64;
        let p_next = ((2.0 * kf + 1.0) * x * p - kf * p_prev) / (kf + 1.0);
        p_prev = p;
        p = p_next;
    }
    let dp = n as f64 * (p_prev - x * p) / (1.0 - x * x);
    (p, dp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn clenshaw_curtis_weights_sum_to_two() {
        for n in [1, 2, 3, 8, 101] {
            let rule = clenshaw_curtis(n).unwrap();
            assert_eq!(rule.n_nodes(), n + 1);
            assert_abs_diff_eq!(rule.weight_sum(), 2.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn clenshaw_curtis_nodes_ascend_over_reference_interval() {
        let rule = clenshaw_curtis(101).unwrap();
        assert_abs_diff_eq!(rule.nodes[0], -1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(rule.nodes[101], 1.0, epsilon = 1e-15);
        assert!(rule.nodes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn clenshaw_curtis_single_interval() {
        let rule = clenshaw_curtis(1).unwrap();
        assert_eq!(rule.nodes, vec![-1.0, 1.0]);
        assert_abs_diff_eq!(rule.weights[0], 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(rule.weights[1], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn clenshaw_curtis_integrates_smooth_functions() {
        let rule = clenshaw_curtis(16).unwrap();
        assert_abs_diff_eq!(rule.integrate(|x| x * x), 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            rule.integrate(|x| x.exp()),
            1f64.exp() - (-1f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_order_is_rejected() {
        assert!(matches!(
            clenshaw_curtis(0),
            Err(ScallopError::Configuration(_))
        ));
        assert!(matches!(
            gauss_legendre(0),
            Err(ScallopError::Configuration(_))
        ));
    }

    #[test]
    fn rescale_preserves_order_and_width() {
        let rule = clenshaw_curtis(10).unwrap().rescale(-0.5, 0.5);
        assert_eq!(rule.n_nodes(), 11);
        assert_abs_diff_eq!(rule.weight_sum(), 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(rule.nodes[0], -0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(rule.nodes[10], 0.5, epsilon = 1e-15);
        assert!(rule.nodes.windows(2).all(|w| w[0] < w[1]));

        let shifted = clenshaw_curtis(7).unwrap().rescale(2.0, 5.0);
        assert_abs_diff_eq!(shifted.weight_sum(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn gauss_legendre_is_exact_to_degree_2n_minus_1() {
        let rule = gauss_legendre(6).unwrap();
        assert_abs_diff_eq!(rule.weight_sum(), 2.0, epsilon = 1e-12);
        assert!(rule.nodes.windows(2).all(|w| w[0] < w[1]));
        // x^10 over [-1, 1] is 2/11.
        assert_abs_diff_eq!(rule.integrate(|x| x.powi(10)), 2.0 / 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rule.integrate(|x| x.powi(11)), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn gauss_legendre_two_point_nodes() {
        let rule = gauss_legendre(2).unwrap();
        let x = 1.0 / 3f64.sqrt();
        assert_abs_diff_eq!(rule.nodes[0], -x, epsilon = 1e-14);
        assert_abs_diff_eq!(rule.nodes[1], x, epsilon = 1e-14);
        assert_abs_diff_eq!(rule.weights[0], 1.0, epsilon = 1e-14);
    }
}
