use std::fmt::Display;

use super::{Float, Vector4};

impl<Real: Float> Display for Vector4<Real> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x, y, z, w] = self.to_array();
        write!(f, "({x}, {y}, {z}, {w})")
    }
}
