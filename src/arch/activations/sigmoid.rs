/// Inputs are clamped to this magnitude before exponentiating.
pub const CLIP: f32 = 500.;

/// Bounds of the sigmoid's output, the representable values closest to 0 and 1.
const LOWER: f32 = f32::MIN_POSITIVE;
const UPPER: f32 = 1. - f32::EPSILON / 2.;

/// Logistic sigmoid activation with clamped input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn new() -> Self {
        Self
    }

    /// Evaluated in `f64` and saturated so the output never reaches 0 or 1.
    pub fn f(&self, z: f32) -> f32 {
        let clip = f64::from(CLIP);
        let z = f64::from(z).clamp(-clip, clip);
        let s = 1. / (1. + (-z).exp());
        (s as f32).clamp(LOWER, UPPER)
    }

    /// The derivative of the sigmoid evaluated at `z`, that is `σ(z)·(1 - σ(z))`.
    pub fn df(&self, z: f32) -> f32 {
        let s = self.f(z);
        s * (1. - s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint() {
        let sigmoid = Sigmoid::new();
        assert_eq!(sigmoid.f(0.), 0.5);
        assert_eq!(sigmoid.df(0.), 0.25);
    }

    #[test]
    fn moderate_inputs_stay_in_open_unit_interval() {
        let sigmoid = Sigmoid::new();

        for z in [-20., -15., -5., -1., -0.1, 0.1, 1., 5., 15., 20.] {
            let s = sigmoid.f(z);
            assert!(s > 0. && s < 1., "sigmoid({z}) = {s}");
        }
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        let sigmoid = Sigmoid::new();

        for z in [-1e6, -CLIP, CLIP, 1e6, f32::MAX, f32::MIN] {
            let s = sigmoid.f(z);
            assert!(s > 0. && s < 1., "sigmoid({z}) = {s}");

            let ds = sigmoid.df(z);
            assert!(ds.is_finite() && ds > 0.);
        }

        assert_eq!(sigmoid.f(1e6), sigmoid.f(CLIP));
        assert_eq!(sigmoid.f(-1e6), sigmoid.f(-CLIP));
    }

    #[test]
    fn saturates_inside_the_open_interval() {
        let sigmoid = Sigmoid::new();

        assert_eq!(sigmoid.f(-1e6), f32::MIN_POSITIVE);
        assert_eq!(sigmoid.f(-200.), f32::MIN_POSITIVE);
        assert_eq!(sigmoid.f(20.), 1. - f32::EPSILON / 2.);
        assert_eq!(sigmoid.f(1e6), 1. - f32::EPSILON / 2.);

        // still resolved below the saturation point
        assert!(sigmoid.f(-80.) > f32::MIN_POSITIVE);
    }

    #[test]
    fn monotonic() {
        let sigmoid = Sigmoid::new();
        let zs = [-4., -2., -1., 0., 1., 2., 4.];

        for w in zs.windows(2) {
            assert!(sigmoid.f(w[0]) < sigmoid.f(w[1]));
        }
    }
}
