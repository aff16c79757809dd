//! Formatting utilities for terminal output

use num_bigint::BigUint;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Probabilities below 1e-4 switch to scientific notation
#[must_use]
pub fn format_probability(p: f64) -> String {
    if p == 0.0 || p >= 1e-4 {
        format!("{p:.6}")
    } else {
        format!("{p:.3e}")
    }
}

/// Exact counts, abbreviated once they get longer than `max_digits`
#[must_use]
pub fn format_count(count: &BigUint, max_digits: usize) -> String {
    let digits = count.to_string();
    if digits.len() <= max_digits.max(4) {
        return digits;
    }
    format!("{}.{}e{}", &digits[..1], &digits[1..4], digits.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(0.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn probability_formatting() {
        assert_eq!(format_probability(0.5), "0.500000");
        assert_eq!(format_probability(0.0), "0.000000");
        assert_eq!(format_probability(0.000_012_5), "1.250e-5");
    }

    #[test]
    fn count_formatting() {
        assert_eq!(format_count(&BigUint::from(168u32), 10), "168");
        assert_eq!(
            format_count(&BigUint::from(123_456_789_012u64), 6),
            "1.234e11"
        );
    }
}
