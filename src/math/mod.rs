pub fn normal_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

pub fn normal_cdf(x: f64) -> f64 {
    // Abramowitz & Stegun 7.1.26
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.231_641_9 * z);
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782
                + t * (1.781_477_937 + t * (-1.821_255_978 + t * 1.330_274_429))));
    let approx = 1.0 - normal_pdf(z) * poly;
    if x >= 0.0 { approx } else { 1.0 - approx }
}

/// `num` evenly spaced values from `start` to `stop`, both endpoints included.
///
/// `num == 0` yields an empty vector, `num == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Values `start, start + step, ...` strictly below `stop`.
pub fn frange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    assert!(step > 0.0, "step must be > 0");
    let span = stop - start;
    if span <= 0.0 {
        return Vec::new();
    }
    let count = (span / step).ceil() as usize;
    (0..count).map(|i| start + step * i as f64).collect()
}
