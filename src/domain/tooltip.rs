// Tooltip content for a hovered cell
use super::scale::round_half_up;
use super::temperature::MonthIndex;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub year: i32,
    pub month_name: &'static str,
    pub temperature: f64,
    pub variance: f64,
}

impl Tooltip {
    pub fn new(year: i32, month: MonthIndex, variance: f64, base_temperature: f64) -> Self {
        Self {
            year,
            month_name: month.name(),
            temperature: round_to_thousandths(base_temperature + variance),
            variance,
        }
    }

    pub fn temperature_label(&self) -> String {
        format!("{}", self.temperature)
    }

    /// Variance with an explicit sign, e.g. `+1.234` or `-2.5`.
    pub fn variance_label(&self) -> String {
        if self.variance >= 0.0 {
            // -0.0 would otherwise print as "+-0"
            format!("+{}", self.variance.abs())
        } else {
            format!("{}", self.variance)
        }
    }

    pub fn markup(&self) -> String {
        format!(
            "<strong>{} - {}</strong><br>{}&#8451;<br>{}&#8451;",
            self.year,
            self.month_name,
            self.temperature_label(),
            self.variance_label()
        )
    }
}

fn round_to_thousandths(value: f64) -> f64 {
    round_half_up(value * 1000.0) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(index: u8) -> MonthIndex {
        MonthIndex::new(index).unwrap()
    }

    #[test]
    fn test_negative_variance() {
        let tooltip = Tooltip::new(1753, month(0), -2.5, 8.66);
        assert_eq!(tooltip.temperature_label(), "6.16");
        assert_eq!(tooltip.variance_label(), "-2.5");
        assert_eq!(tooltip.month_name, "January");
    }

    #[test]
    fn test_positive_variance() {
        let tooltip = Tooltip::new(2015, month(11), 1.234, 8.66);
        assert_eq!(tooltip.temperature_label(), "9.894");
        assert_eq!(tooltip.variance_label(), "+1.234");
        assert_eq!(tooltip.month_name, "December");
    }

    #[test]
    fn test_zero_variance_is_signed() {
        assert_eq!(Tooltip::new(1900, month(5), 0.0, 8.66).variance_label(), "+0");
        assert_eq!(Tooltip::new(1900, month(5), -0.0, 8.66).variance_label(), "+0");
    }

    #[test]
    fn test_rounds_to_three_decimals() {
        let tooltip = Tooltip::new(1900, month(2), 0.12345, 8.0);
        assert_eq!(tooltip.temperature_label(), "8.123");
        let tooltip = Tooltip::new(1900, month(2), 2.0, 8.0);
        assert_eq!(tooltip.temperature_label(), "10");
    }

    #[test]
    fn test_every_month_name() {
        let names = [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ];
        for (i, expected) in names.iter().enumerate() {
            let tooltip = Tooltip::new(2000, month(i as u8), 0.0, 0.0);
            assert_eq!(tooltip.month_name, *expected);
        }
    }

    #[test]
    fn test_markup() {
        let tooltip = Tooltip::new(1753, month(0), -2.5, 8.66);
        assert_eq!(
            tooltip.markup(),
            "<strong>1753 - January</strong><br>6.16&#8451;<br>-2.5&#8451;"
        );
    }
}
