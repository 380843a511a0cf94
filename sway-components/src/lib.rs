//! Physical components for the Sway workspace.
//!
//! The only component here is the [`SmallAnglePendulum`]: a pivoted point
//! mass on a rigid massless rod, linearized for small angles so its motion
//! has the closed-form solution `θ(t) = θ₀·cos(√(g/L)·t)`. There is no
//! numerical integration and no damping; amplitude never decays.

mod small_angle;

pub use small_angle::{
    Input, Output, ParameterError, Parameters, SmallAnglePendulum,
};
