use fracplorer_compute::{mandelbrot, KernelConfig, SmoothingCoefficients, IN_SET_SENTINEL};

fn coefficients(bailout: f64) -> (f64, f64) {
    let s = SmoothingCoefficients::for_bailout(bailout);
    (s.il, s.lp)
}

#[test]
fn interior_points_return_exact_sentinel() {
    let (il, lp) = coefficients(128.0);
    for (x, y) in [(0.0, 0.0), (-1.0, 0.0), (-0.5, 0.5), (0.0, 1.0)] {
        let value = mandelbrot(x, y, 128, 128.0, il, lp);
        assert_eq!(value.to_bits(), IN_SET_SENTINEL.to_bits(), "({}, {})", x, y);
    }
}

#[test]
fn escaped_points_return_finite_positive_mu() {
    let (il, lp) = coefficients(4.0);
    let value = mandelbrot(2.0, 0.0, 2, 4.0, il, lp);
    assert!(value.is_finite());
    assert!(value > 0.0);
    assert_ne!(value, IN_SET_SENTINEL);
}

#[test]
fn default_config_values_work_at_boundary() {
    let config = KernelConfig::default();
    let s = config.smoothing();
    let value = mandelbrot(1.0, 1.0, config.max_iterations, config.bailout, s.il, s.lp);
    assert!(value.is_finite() && value > 0.0, "got {}", value);
}

#[test]
fn bailout_at_or_below_one_is_non_finite() {
    for bailout in [1.0, 0.5] {
        let (il, lp) = coefficients(bailout);
        let value = mandelbrot(2.0, 0.0, 10, bailout, il, lp);
        assert!(!value.is_finite(), "bailout {} gave {}", bailout, value);
    }
}

#[test]
fn negative_cap_is_non_finite() {
    let (il, lp) = coefficients(4.0);
    assert!(mandelbrot(2.0, 0.0, -5, 4.0, il, lp).is_nan());
}

#[test]
fn nan_parameter_is_non_finite() {
    let (il, lp) = coefficients(4.0);
    assert!(!mandelbrot(f64::NAN, 0.0, 10, 4.0, il, lp).is_finite());
}
