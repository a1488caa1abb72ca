// src/math_utils.rs

/// Rectangle-rule integral of equally spaced samples `ys` with spacing `step`.
pub fn rectangle_integral(ys: &[f64], step: f64) -> f64 {
    ys.iter().sum::<f64>() * step
}

/// Clamp a cosine into the domain of `acos`.
pub fn clamp_cosine(c: f64) -> f64 {
    c.clamp(-1.0, 1.0)
}

/// Format `value` with `digits` significant digits.
///
/// Fixed notation for exponents in [-4, digits), scientific otherwise.
/// Trailing zeros are dropped but a fixed value keeps one decimal, so
/// `format_significant(1.0, 2)` is `"1.0"` and `format_significant(0.987, 2)`
/// is `"0.99"`.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 || !value.is_finite() {
        return format!("{:.1}", value);
    }

    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };
    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs());
    }

    let rounded = sci.parse::<f64>().unwrap_or(value);
    let decimals = (digits as i32 - 1 - exponent) as usize;
    let fixed = format!("{:.*}", decimals, rounded);
    let fixed = trim_zeros(&fixed);
    if fixed.contains('.') {
        fixed.to_string()
    } else {
        format!("{}.0", fixed)
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}
