use crate::utils::round2;

/// Per-column payment indicators: 1 when the parsed amount is strictly
/// positive, 0 otherwise. Missing amounts count as unpaid.
pub fn payment_indicators(amounts: &[Option<f64>]) -> Vec<u8> {
    amounts
        .iter()
        .map(|amount| match amount {
            Some(v) if *v > 0.0 => 1,
            _ => 0,
        })
        .collect()
}

pub fn payment_count(indicators: &[u8]) -> u32 {
    indicators.iter().map(|&i| i as u32).sum()
}

/// Length of the longest run of consecutive unpaid periods.
pub fn longest_gap(indicators: &[u8]) -> u32 {
    let mut gap = 0u32;
    let mut max_gap = 0u32;
    for &paid in indicators {
        if paid == 0 {
            gap += 1;
            max_gap = max_gap.max(gap);
        } else {
            gap = 0;
        }
    }
    max_gap
}

/// Gap-tolerant compliance score in percent. A never-active entity scores
/// zero; gaps under three consecutive missed periods are fully forgiven;
/// otherwise the score is the payment count over active months. The count
/// covers every accepted column while the denominator is window-restricted,
/// so the ratio can exceed 100 and is deliberately not clamped.
pub fn compliance_score(payment_count: u32, active_months: u32, max_gap: u32) -> f64 {
    if active_months == 0 {
        return 0.0;
    }
    if max_gap < 3 {
        return 100.0;
    }
    round2(payment_count as f64 / active_months as f64 * 100.0)
}
