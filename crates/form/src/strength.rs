//! Password strength heuristic for the signup form.

/// Coarse strength bucket shown next to the strength bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn text(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// Indicator text color for this bucket.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "#ef4444",
            StrengthLabel::Medium => "#f59e0b",
            StrengthLabel::Strong => "#10b981",
        }
    }
}

/// Result of scoring one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    /// Number of satisfied signals, 0..=5.
    pub score: u8,
    pub label: StrengthLabel,
}

impl StrengthReport {
    /// Bar fill percentage for the strength indicator.
    pub fn percent(&self) -> f32 {
        self.score as f32 / 5.0 * 100.0
    }
}

/// Score a password on five additive signals: length >= 6, length >=
/// 10, mixed case, a digit, a symbol.
pub fn password_strength(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let mut score = 0u8;
    if length >= 6 {
        score += 1;
    }
    if length >= 10 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    let label = match score {
        0..=2 => StrengthLabel::Weak,
        3 => StrengthLabel::Medium,
        _ => StrengthLabel::Strong,
    };
    StrengthReport { score, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_weak() {
        let report = password_strength("");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::Weak);
        assert_eq!(report.percent(), 0.0);
    }

    #[test]
    fn test_short_lowercase_is_weak() {
        // length >= 6 only.
        let report = password_strength("abcdef");
        assert_eq!(report.score, 1);
        assert_eq!(report.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_three_signals_is_medium() {
        // length >= 6, mixed case, digit.
        let report = password_strength("Abc123");
        assert_eq!(report.score, 3);
        assert_eq!(report.label, StrengthLabel::Medium);
    }

    #[test]
    fn test_all_signals_is_strong() {
        let report = password_strength("Abcdef123!xy");
        assert_eq!(report.score, 5);
        assert_eq!(report.label, StrengthLabel::Strong);
        assert_eq!(report.percent(), 100.0);
    }

    #[test]
    fn test_symbol_counts_without_length() {
        // Symbol + digit, but too short for either length signal.
        let report = password_strength("a1!");
        assert_eq!(report.score, 2);
        assert_eq!(report.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_label_colors() {
        assert_eq!(StrengthLabel::Weak.color(), "#ef4444");
        assert_eq!(StrengthLabel::Medium.color(), "#f59e0b");
        assert_eq!(StrengthLabel::Strong.color(), "#10b981");
    }
}
