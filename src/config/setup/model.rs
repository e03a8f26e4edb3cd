#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(tag = "type")]
pub enum ModelConfig {
    // Nonlocal slender-body theory on a Clenshaw-Curtis grid.
    #[default]
    Nonlocal,
    // Regularized-Stokeslet boundary elements, Gauss-Legendre per element.
    BoundaryElement(BoundaryElementConfig),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct BoundaryElementConfig {
    pub segments: usize,
    pub gauss_points: usize,
}

impl Default for BoundaryElementConfig {
    fn default() -> Self {
        BoundaryElementConfig {
            segments: 100,
            gauss_points: 6,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationScheme {
    #[default]
    AdamsBashforth2,
    ForwardEuler,
}
