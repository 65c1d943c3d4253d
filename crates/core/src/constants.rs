use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Consumption percentage at which a budget counts as nearly exhausted
pub const NEAR_LIMIT_THRESHOLD: Decimal = dec!(90);

/// Consumption percentage at which a budget counts as exceeded
pub const EXCEEDED_THRESHOLD: Decimal = dec!(100);

/// Multiplier from a spent/amount ratio to a percentage
pub const PERCENT: Decimal = dec!(100);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Slug of the category subscription expenses are filed under
pub const SUBSCRIPTIONS_CATEGORY_SLUG: &str = "suscripciones";
