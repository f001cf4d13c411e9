use serde::{Deserialize, Serialize};

/// One investor's latest row, shaped for the JSON API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InvestorRecord {
    #[serde(rename = "Investor")]
    pub investor: String,
    #[serde(rename = "Deals")]
    pub deals: String,
    #[serde(rename = "Median_Amount")]
    pub median_amount: String,
    #[serde(rename = "Round_Type")]
    pub round_type: String,
    #[serde(rename = "Project_Category")]
    pub project_category: String,
    #[serde(rename = "Project_Name")]
    pub project_name: String,
    #[serde(rename = "Chains")]
    pub chains: String,
    #[serde(rename = "Scrape_Date")]
    pub scrape_date: String,
}

/// Column lists pulled from the page in one scroll step, one list per visual
/// column. The lists are not guaranteed to have equal lengths; alignment
/// happens in the session.
#[derive(Debug, Default, Clone)]
pub struct RawExtraction {
    pub investors: Vec<String>,
    /// The 120px column mixes deal counts and round types; it is split
    /// during alignment.
    pub deal_or_round: Vec<String>,
    pub categories: Vec<String>,
    pub project_names: Vec<String>,
    /// Chain icon URLs per row.
    pub chains: Vec<Vec<String>>,
    pub median_amounts: Vec<String>,
}
