use serde::Serialize;

/// Coarse categorical risk derived from the Global Posture Score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// The metrics record produced by one analysis. Numeric fields are in
/// degrees or centimeters as named, each rounded half-up to two decimal
/// places at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiomechanicsMetrics {
    pub q_angle_left: f64,
    pub q_angle_right: f64,
    pub fhp_angle: f64,
    pub fhp_distance_cm: f64,
    pub shoulder_asymmetry_cm: f64,
    pub global_posture_score: f64,
    pub risk_level: RiskLevel,
}

/// Round to two decimal places, half away from zero.
///
/// Operates on the shortest decimal representation of the value (what
/// `Display` prints) rather than its binary expansion: 12.345 is stored as
/// a double slightly below the midpoint, but its shortest representation is
/// still "12.345", so it rounds up to 12.35 the way fixed-scale decimal
/// consumers expect.
pub fn round2_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let repr = format!("{}", value);
    let (sign, digits) = match repr.strip_prefix('-') {
        Some(stripped) => (-1.0, stripped),
        None => (1.0, repr.as_str()),
    };

    let (whole, frac) = match digits.find('.') {
        Some(dot) => (&digits[..dot], &digits[dot + 1..]),
        None => return value,
    };
    if frac.len() <= 2 {
        return value;
    }

    // metric magnitudes here are far below the i64 range
    let mut cents = whole.parse::<i64>().unwrap_or(0) * 100
        + frac[..2].parse::<i64>().unwrap_or(0);
    if frac.as_bytes()[2] >= b'5' {
        cents += 1;
    }

    sign * cents as f64 / 100.0
}
