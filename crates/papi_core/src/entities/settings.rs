//! Activity/transaction type (ATD) settings record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier/label pair used by the option pickers in ATD settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingOption {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Account scope for origin or destination accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountsData {
    #[serde(rename = "IDs")]
    pub ids: Vec<String>,
    pub label: String,
    pub all_types: bool,
    pub user_account: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLinesFilter {
    #[serde(rename = "AdvancedFormula")]
    pub advanced_formula: bool,
    pub formula: String,
    #[serde(rename = "participatingAPINames")]
    pub participating_api_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AtdSettings {
    pub icon: String,
    pub show_order_details: bool,
    pub search_all: bool,
    pub share_order: bool,
    pub main_action: SettingOption,
    pub order_view: SettingOption,
    pub inventory_limitation: SettingOption,
    pub case_quantity_limitation: SettingOption,
    #[serde(rename = "Type")]
    pub kind: SettingOption,
    #[serde(rename = "EPayment")]
    pub e_payment: Value,
    pub origin_accounts_data: AccountsData,
    pub destination_accounts_data: AccountsData,
    #[serde(rename = "TransactionItemsScopeFilterID")]
    pub transaction_items_scope_filter_id: String,
    pub transaction_lines_filter: TransactionLinesFilter,
}
