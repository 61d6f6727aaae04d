use serde::{Deserialize, Serialize};

/// Per-unit numbers describing one marketplace listing, as handed to the
/// calculation engine. Percentages are whole percent values (5 means 5%),
/// currency fields are đồng per unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub cost_price: f64,
    pub selling_price: f64,
    pub platform_fee_percent: f64,
    pub payment_fee_percent: f64,
    pub ads_cost: f64,
    pub other_costs: f64,
    pub return_rate_percent: f64,
}

/// Form-level mirror of [`CalculationInput`]. A field the seller has not
/// touched yet stays `None` and renders as an empty control, which is not
/// the same thing as an explicit `0`. [`DraftInput::normalized`] collapses
/// both to zero right before the numbers reach the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftInput {
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub selling_price: Option<f64>,
    #[serde(default)]
    pub platform_fee_percent: Option<f64>,
    #[serde(default)]
    pub payment_fee_percent: Option<f64>,
    #[serde(default)]
    pub ads_cost: Option<f64>,
    #[serde(default)]
    pub other_costs: Option<f64>,
    #[serde(default)]
    pub return_rate_percent: Option<f64>,
}

impl DraftInput {
    pub fn normalized(&self) -> CalculationInput {
        CalculationInput {
            cost_price: self.cost_price.unwrap_or_default(),
            selling_price: self.selling_price.unwrap_or_default(),
            platform_fee_percent: self.platform_fee_percent.unwrap_or_default(),
            payment_fee_percent: self.payment_fee_percent.unwrap_or_default(),
            ads_cost: self.ads_cost.unwrap_or_default(),
            other_costs: self.other_costs.unwrap_or_default(),
            return_rate_percent: self.return_rate_percent.unwrap_or_default(),
        }
    }

    pub fn get(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::SellingPrice => self.selling_price,
            InputField::CostPrice => self.cost_price,
            InputField::PlatformFeePercent => self.platform_fee_percent,
            InputField::PaymentFeePercent => self.payment_fee_percent,
            InputField::AdsCost => self.ads_cost,
            InputField::OtherCosts => self.other_costs,
            InputField::ReturnRatePercent => self.return_rate_percent,
        }
    }

    pub fn set(&mut self, field: InputField, value: Option<f64>) {
        match field {
            InputField::SellingPrice => self.selling_price = value,
            InputField::CostPrice => self.cost_price = value,
            InputField::PlatformFeePercent => self.platform_fee_percent = value,
            InputField::PaymentFeePercent => self.payment_fee_percent = value,
            InputField::AdsCost => self.ads_cost = value,
            InputField::OtherCosts => self.other_costs = value,
            InputField::ReturnRatePercent => self.return_rate_percent = value,
        }
    }
}

/// The seven editable fields on the calculator form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    SellingPrice,
    CostPrice,
    PlatformFeePercent,
    PaymentFeePercent,
    AdsCost,
    OtherCosts,
    ReturnRatePercent,
}

impl InputField {
    pub const ALL: [InputField; 7] = [
        InputField::SellingPrice,
        InputField::CostPrice,
        InputField::PlatformFeePercent,
        InputField::PaymentFeePercent,
        InputField::AdsCost,
        InputField::OtherCosts,
        InputField::ReturnRatePercent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InputField::SellingPrice => "Selling price",
            InputField::CostPrice => "Cost price",
            InputField::PlatformFeePercent => "Platform fee",
            InputField::PaymentFeePercent => "Payment fee",
            InputField::AdsCost => "Ads cost / order",
            InputField::OtherCosts => "Other costs",
            InputField::ReturnRatePercent => "Return rate",
        }
    }

    /// Unit shown inside the control: đồng for amounts, percent for rates.
    pub fn suffix(self) -> &'static str {
        match self {
            InputField::SellingPrice
            | InputField::CostPrice
            | InputField::AdsCost
            | InputField::OtherCosts => "₫",
            InputField::PlatformFeePercent
            | InputField::PaymentFeePercent
            | InputField::ReturnRatePercent => "%",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            InputField::SellingPrice => "200000",
            InputField::CostPrice => "100000",
            InputField::PlatformFeePercent => "5",
            InputField::PaymentFeePercent => "2.5",
            InputField::AdsCost => "20000",
            InputField::OtherCosts => "5000",
            InputField::ReturnRatePercent => "5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_draft_normalizes_to_all_zeroes() {
        let input = DraftInput::default().normalized();
        assert_eq!(input, CalculationInput::default());
    }

    #[test]
    fn normalized_keeps_explicit_values_and_zeroes_the_rest() {
        let mut draft = DraftInput::default();
        draft.set(InputField::SellingPrice, Some(200_000.0));
        draft.set(InputField::ReturnRatePercent, Some(0.0));

        let input = draft.normalized();
        assert_eq!(input.selling_price, 200_000.0);
        assert_eq!(input.return_rate_percent, 0.0);
        assert_eq!(input.cost_price, 0.0);
        assert_eq!(input.ads_cost, 0.0);
    }

    #[test]
    fn get_and_set_cover_every_field() {
        let mut draft = DraftInput::default();
        for (slot, field) in InputField::ALL.into_iter().enumerate() {
            draft.set(field, Some(slot as f64 + 1.0));
        }
        for (slot, field) in InputField::ALL.into_iter().enumerate() {
            assert_eq!(draft.get(field), Some(slot as f64 + 1.0));
        }
    }

    #[test]
    fn clearing_a_field_is_distinct_from_zero() {
        let mut draft = DraftInput::default();
        draft.set(InputField::AdsCost, Some(0.0));
        assert_eq!(draft.get(InputField::AdsCost), Some(0.0));

        draft.set(InputField::AdsCost, None);
        assert_eq!(draft.get(InputField::AdsCost), None);
        assert_eq!(draft.normalized().ads_cost, 0.0);
    }
}
