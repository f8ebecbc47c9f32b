use super::accounts_model::AccountCategory;

/// Default currency for new accounts when the caller supplies none
pub const DEFAULT_CURRENCY: &str = "USD";

/// Returns the display name used for the segment grouping a category.
///
/// These names label the purse segments in the UI.
pub fn segment_display_name(category: AccountCategory) -> &'static str {
    match category {
        AccountCategory::Cash => "Cash & Bank",
        AccountCategory::Bank => "Bank Accounts",
        AccountCategory::Investment => "Investments",
        AccountCategory::Property => "Property",
        AccountCategory::Vehicle => "Vehicles",
        AccountCategory::Equipment => "Equipment",
        AccountCategory::Crypto => "Crypto",
        AccountCategory::Gold => "Gold",
        AccountCategory::Business => "Business",
        AccountCategory::Loan => "Loans",
        AccountCategory::CreditCard => "Credit Cards",
        AccountCategory::Mortgage => "Mortgages",
        AccountCategory::Other => "Other Assets",
        AccountCategory::Liability => "Liabilities",
    }
}

/// Returns the snake_case key string for a category, for serialization
/// into allocation breakdowns.
pub fn category_key(category: AccountCategory) -> &'static str {
    match category {
        AccountCategory::Cash => "cash",
        AccountCategory::Bank => "bank",
        AccountCategory::Investment => "investment",
        AccountCategory::Property => "property",
        AccountCategory::Vehicle => "vehicle",
        AccountCategory::Equipment => "equipment",
        AccountCategory::Crypto => "crypto",
        AccountCategory::Gold => "gold",
        AccountCategory::Business => "business",
        AccountCategory::Loan => "loan",
        AccountCategory::CreditCard => "credit_card",
        AccountCategory::Mortgage => "mortgage",
        AccountCategory::Other => "other",
        AccountCategory::Liability => "liability",
    }
}

/// Categories whose balances count toward zakatable cash wealth.
pub const ZAKATABLE_CASH_CATEGORIES: [AccountCategory; 2] =
    [AccountCategory::Cash, AccountCategory::Bank];
