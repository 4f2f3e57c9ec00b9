//! Display arithmetic for balances and pool ratios.

/// Smallest unit of SUI (1 SUI = 10^9 MIST).
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Flat base rate the supply APY scales against.
pub const BASE_INTEREST_RATE: f64 = 0.05;

pub fn mist_to_sui(units: u128) -> f64 {
    units as f64 / MIST_PER_SUI as f64
}

/// USD value of a MIST balance at the given oracle price.
pub fn usd_value(units: u128, price: f64) -> f64 {
    mist_to_sui(units) * price
}

/// Two fixed decimals, the format balances are displayed in.
pub fn format_usd(value: f64) -> String {
    format!("{value:.2}")
}

/// Share of deposits currently lent out. Zero deposits means zero
/// utilization rather than a division error.
pub fn utilization_ratio(total_deposits: u128, total_liquidity: u128) -> f64 {
    if total_deposits == 0 {
        return 0.0;
    }
    1.0 - total_liquidity as f64 / total_deposits as f64
}

pub fn supply_apy(utilization: f64) -> f64 {
    utilization * BASE_INTEREST_RATE
}

/// Render a ratio as a percentage with two decimals, e.g. `"56.25%"`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_value_matches_scaled_product() {
        for (units, price) in [(5_000_000_000u128, 1.23), (0, 2.5), (1, 0.0001)] {
            assert_eq!(usd_value(units, price), (units as f64 / 1e9) * price);
        }
    }

    #[test]
    fn five_sui_at_1_23_formats_to_6_15() {
        let usd = usd_value(5_000_000_000, 1.23);
        assert_eq!(format_usd(usd), "6.15");
    }

    #[test]
    fn zero_deposits_is_zero_utilization() {
        assert_eq!(utilization_ratio(0, 0), 0.0);
        assert_eq!(utilization_ratio(0, 500), 0.0);
    }

    #[test]
    fn utilization_and_apy_track_lent_share() {
        let utilization = utilization_ratio(1_000, 400);
        assert!((utilization - 0.6).abs() < 1e-12);
        assert_eq!(format_percent(utilization), "60.00%");
        assert_eq!(format_percent(supply_apy(utilization)), "3.00%");
    }

    #[test]
    fn fully_liquid_pool_has_zero_utilization() {
        assert_eq!(utilization_ratio(800, 800), 0.0);
    }
}
