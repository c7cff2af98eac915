// Security level formatting for badges and the circular meter

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityTier {
    High,
    Low,
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityBadge {
    pub tier: SecurityTier,
    pub badge_class: &'static str,
    pub label: &'static str,
    pub meter_color: &'static str,
}

const HIGH_SEC: SecurityBadge = SecurityBadge {
    tier: SecurityTier::High,
    badge_class: "bg-green-800 text-green-200",
    label: "High Sec",
    meter_color: "#48bb78",
};

const LOW_SEC: SecurityBadge = SecurityBadge {
    tier: SecurityTier::Low,
    badge_class: "bg-yellow-800 text-yellow-200",
    label: "Low Sec",
    meter_color: "#f6ad55",
};

const NULL_SEC: SecurityBadge = SecurityBadge {
    tier: SecurityTier::Null,
    badge_class: "bg-red-800 text-red-200",
    label: "Null Sec",
    meter_color: "#f56565",
};

/// Classify a security value. Each tier's lower bound is inclusive; NaN falls
/// through to Null Sec.
pub fn format_security(security: f64) -> SecurityBadge {
    if security >= 0.5 {
        HIGH_SEC
    } else if security >= 0.0 {
        LOW_SEC
    } else {
        NULL_SEC
    }
}

/// `stroke-dashoffset` for the meter: 100 when empty, 0 when full.
pub fn meter_offset(security: f64) -> f64 {
    if security.is_nan() {
        return 100.0;
    }
    100.0 - security.clamp(0.0, 1.0) * 100.0
}

/// Security shown with one decimal, e.g. `0.5` or `-0.3`.
///
/// Exact halves round away from zero (`0.25` reads `0.3`, `-0.25` reads
/// `-0.3`); everything else rounds to the nearest tenth of its exact value.
pub fn security_text(security: f64) -> String {
    if security == 0.0 {
        return "0.0".to_string();
    }
    // Only odd multiples of 0.25 sit exactly between two tenths
    let quarters = security * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (security * 10.0).round() / 10.0);
    }
    format!("{:.1}", security)
}
