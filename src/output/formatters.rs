//! Formatting utilities for terminal output

/// Render a proportional count bar
///
/// The bar is scaled so `max` fills the full width; a zero `max` renders an
/// empty track.
#[must_use]
pub fn count_bar(count: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let filled = ((f64::from(count) / f64::from(max)) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_bar_empty() {
        let bar = count_bar(0, 100, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn count_bar_full() {
        let bar = count_bar(100, 100, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn count_bar_half() {
        let bar = count_bar(50, 100, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn count_bar_zero_max() {
        let bar = count_bar(0, 0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }
}
