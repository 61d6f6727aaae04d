//! Net profitability math for a single listing.
//!
//! [`compute`] is a pure function over [`CalculationInput`]: no state, no
//! I/O, defined for every real-number input. The UI calls it on every
//! keystroke and throws the result away after rendering.

use super::entities::CalculationInput;

/// Figures derived from one evaluation of the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CalculationResult {
    /// Expected revenue per unit once the return rate has eaten its share.
    pub real_revenue: f64,
    /// Cost price plus both fees plus ads and miscellaneous spend.
    pub total_cost: f64,
    pub net_profit: f64,
    /// Net profit as a percentage of the selling price; exactly `0` when
    /// the selling price is zero.
    pub profit_margin: f64,
    /// Lowest selling price that still yields zero net profit. `0` is a
    /// sentinel meaning no finite break-even price exists: the combined
    /// fee and return rates consume 100% or more of every đồng of revenue.
    pub break_even_price: f64,
    /// Strictly positive net profit; exactly breaking even does not count.
    pub is_profit: bool,
}

pub fn compute(input: &CalculationInput) -> CalculationResult {
    let return_rate = input.return_rate_percent / 100.0;
    // Returned units yield nothing. A return rate past 100% is the caller's
    // business and simply drives revenue negative.
    let real_revenue = input.selling_price * (1.0 - return_rate);

    // Both fees are charged on the gross listed price, not on real revenue:
    // the marketplace takes its cut on the transaction whether or not the
    // unit later comes back.
    let platform_fee = input.selling_price * (input.platform_fee_percent / 100.0);
    let payment_fee = input.selling_price * (input.payment_fee_percent / 100.0);
    let total_cost =
        input.cost_price + platform_fee + payment_fee + input.ads_cost + input.other_costs;

    let net_profit = real_revenue - total_cost;

    let profit_margin = if input.selling_price > 0.0 {
        net_profit / input.selling_price * 100.0
    } else {
        0.0
    };

    // Solve price * (1 - return_rate - fee_rate) = cost + ads + other.
    let fee_rate = (input.platform_fee_percent + input.payment_fee_percent) / 100.0;
    let denominator = 1.0 - return_rate - fee_rate;
    let fixed_costs = input.cost_price + input.ads_cost + input.other_costs;
    let break_even_price = if denominator > 0.0 {
        fixed_costs / denominator
    } else {
        0.0
    };

    CalculationResult {
        real_revenue,
        total_cost,
        net_profit,
        profit_margin,
        break_even_price,
        is_profit: net_profit > 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn typical_listing() -> CalculationInput {
        CalculationInput {
            selling_price: 200_000.0,
            cost_price: 100_000.0,
            platform_fee_percent: 5.0,
            payment_fee_percent: 2.5,
            ads_cost: 20_000.0,
            other_costs: 5_000.0,
            return_rate_percent: 5.0,
        }
    }

    #[test]
    fn typical_listing_breakdown() {
        let result = compute(&typical_listing());

        assert!(close(result.real_revenue, 190_000.0));
        assert!(close(result.total_cost, 140_000.0));
        assert!(close(result.net_profit, 50_000.0));
        assert!(close(result.profit_margin, 25.0));
        assert!(result.is_profit);
        // 125_000 / (1 - 0.05 - 0.075)
        assert!(close(result.break_even_price, 142_857.142_857_142_85));
    }

    #[test]
    fn all_zero_input_yields_all_zero_result() {
        let result = compute(&CalculationInput::default());

        assert_eq!(result.real_revenue, 0.0);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.net_profit, 0.0);
        assert_eq!(result.profit_margin, 0.0);
        assert_eq!(result.break_even_price, 0.0);
        assert!(!result.is_profit);
    }

    #[test]
    fn break_even_is_sentinel_zero_when_rates_consume_all_revenue() {
        // 60 + 30 + 10 = exactly 100%.
        let at_limit = CalculationInput {
            cost_price: 50_000.0,
            return_rate_percent: 60.0,
            platform_fee_percent: 30.0,
            payment_fee_percent: 10.0,
            ..CalculationInput::default()
        };
        assert_eq!(compute(&at_limit).break_even_price, 0.0);

        let past_limit = CalculationInput {
            cost_price: 50_000.0,
            return_rate_percent: 50.0,
            platform_fee_percent: 30.0,
            payment_fee_percent: 25.0,
            ..CalculationInput::default()
        };
        assert_eq!(compute(&past_limit).break_even_price, 0.0);
    }

    #[test]
    fn margin_is_zero_when_selling_price_is_zero_even_at_a_loss() {
        let input = CalculationInput {
            cost_price: 80_000.0,
            ads_cost: 10_000.0,
            ..CalculationInput::default()
        };
        let result = compute(&input);

        assert_eq!(result.profit_margin, 0.0);
        assert!(result.net_profit < 0.0);
        assert!(!result.is_profit);
    }

    #[test]
    fn exactly_breaking_even_is_not_profit() {
        let input = CalculationInput {
            selling_price: 100_000.0,
            cost_price: 100_000.0,
            ..CalculationInput::default()
        };
        let result = compute(&input);

        assert_eq!(result.net_profit, 0.0);
        assert!(!result.is_profit);
    }

    #[test]
    fn net_profit_and_total_cost_identities_hold() {
        let inputs = [
            typical_listing(),
            CalculationInput {
                selling_price: 99.0,
                cost_price: 1_000_000.0,
                platform_fee_percent: 12.0,
                payment_fee_percent: 3.3,
                ads_cost: 0.5,
                other_costs: 7.25,
                return_rate_percent: 140.0,
            },
            CalculationInput {
                selling_price: 1e12,
                platform_fee_percent: 0.01,
                ..CalculationInput::default()
            },
        ];

        for input in inputs {
            let result = compute(&input);
            let fee_total =
                input.selling_price * (input.platform_fee_percent + input.payment_fee_percent)
                    / 100.0;
            assert!(close(
                result.total_cost,
                input.cost_price + fee_total + input.ads_cost + input.other_costs,
            ));
            assert_eq!(result.net_profit, result.real_revenue - result.total_cost);
            assert_eq!(result.is_profit, result.net_profit > 0.0);
        }
    }

    #[test]
    fn return_rate_past_one_hundred_drives_revenue_negative() {
        let input = CalculationInput {
            selling_price: 100_000.0,
            return_rate_percent: 150.0,
            ..CalculationInput::default()
        };
        let result = compute(&input);

        assert!(close(result.real_revenue, -50_000.0));
        assert!(!result.is_profit);
    }

    #[test]
    fn recomputing_an_unchanged_input_is_bit_identical() {
        let input = typical_listing();
        assert_eq!(compute(&input), compute(&input));
    }
}
