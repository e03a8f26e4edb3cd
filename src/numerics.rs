pub mod linalg;
pub mod quadrature;
