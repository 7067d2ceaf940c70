use crate::MetaValue;

/// Format a value in copper pieces with the largest fitting unit.
///
/// At least 100 cp is shown in gold, at least 10 cp in silver, anything less
/// in copper.
#[must_use]
pub fn format_value(copper: f64) -> String {
    let (amount, unit) = if copper >= 100.0 {
        (copper / 100.0, "gp")
    } else if copper >= 10.0 {
        (copper / 10.0, "sp")
    } else {
        (copper, "cp")
    };
    format!("{} {unit}", MetaValue::number(amount).display())
}

/// Value in copper pieces converted to gold.
#[must_use]
pub fn value_in_gold(copper: f64) -> MetaValue {
    MetaValue::number(copper / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_thresholds() {
        assert_eq!(format_value(2500.0), "25 gp");
        assert_eq!(format_value(150.0), "1.5 gp");
        assert_eq!(format_value(100.0), "1 gp");
        assert_eq!(format_value(50.0), "5 sp");
        assert_eq!(format_value(5.0), "5 cp");
    }

    #[test]
    fn test_value_in_gold() {
        assert_eq!(value_in_gold(1500.0), MetaValue::Int(15));
        assert_eq!(value_in_gold(5.0), MetaValue::Float(0.05));
    }
}
