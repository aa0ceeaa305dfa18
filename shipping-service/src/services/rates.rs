//! Shipping rate calculation.

const BASE_CHARGE: f64 = 50.0;
const SAME_CITY_RATE: f64 = 20.0;
const CROSS_CITY_RATE: f64 = 60.0;
const PER_UNIT_WEIGHT_RATE: f64 = 10.0;

/// Quote the charge for moving `weight` from `origin` to `destination`.
///
/// `charge = 50 + distance_rate + weight * 10`, where the distance rate is
/// 20 when origin and destination match exactly (case-sensitive) and 60
/// otherwise. Pure; callers validate inputs before invoking.
pub fn quote_charge(origin: &str, destination: &str, weight: f64) -> f64 {
    let distance_rate = if origin == destination {
        SAME_CITY_RATE
    } else {
        CROSS_CITY_RATE
    };
    BASE_CHARGE + distance_rate + weight * PER_UNIT_WEIGHT_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_city_rate() {
        assert_eq!(quote_charge("New York", "Los Angeles", 5.0), 160.0);
    }

    #[test]
    fn same_city_rate() {
        assert_eq!(quote_charge("Chicago", "Chicago", 2.0), 90.0);
    }

    #[test]
    fn city_match_is_case_sensitive() {
        // "paris" and "Paris" are different cities as far as pricing goes.
        assert_eq!(quote_charge("paris", "Paris", 1.0), 120.0);
    }

    #[test]
    fn weight_scales_linearly() {
        let light = quote_charge("A", "B", 1.0);
        let heavy = quote_charge("A", "B", 11.0);
        assert_eq!(heavy - light, 100.0);
    }

    #[test]
    fn zero_weight_is_base_plus_distance() {
        // The HTTP layer rejects zero weight, but the formula itself is
        // defined there too.
        assert_eq!(quote_charge("X", "X", 0.0), 70.0);
    }
}
