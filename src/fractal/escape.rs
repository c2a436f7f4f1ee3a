//! Escape-time evaluation of z -> z^2 + c

/// |z|^2 bound; an orbit that exceeds it is known to diverge
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Outcome of iterating a single point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeResult {
    /// Completed iterations, in `1..=max_iterations`
    pub iterations: u32,
    /// False exactly when `iterations` reached the cap
    pub escaped: bool,
}

/// Iterate z_{k+1} = z_k^2 + c from z_0 = 0 with c = x0 + i*y0.
///
/// The bound is checked on the value committed by the previous iteration,
/// so the first check always passes and at least one iteration runs. An
/// orbit that leaves the radius on the final allowed iteration is reported
/// as not escaped.
#[inline]
pub fn escape_time(x0: f64, y0: f64, max_iterations: u32) -> EscapeResult {
    let mut a = 0.0_f64;
    let mut b = 0.0_f64;
    let mut rx = 0.0_f64;
    let mut ry = 0.0_f64;
    let mut iterations = 0u32;

    while iterations < max_iterations && rx * rx + ry * ry <= ESCAPE_RADIUS_SQR {
        rx = a * a - b * b + x0;
        ry = 2.0 * a * b + y0;
        a = rx;
        b = ry;
        iterations += 1;
    }

    EscapeResult {
        iterations,
        escaped: iterations != max_iterations,
    }
}
