use std::collections::HashSet;

use chrono::Local;

use crate::config::{MAX_SCROLL_DISTANCE, QUIESCENCE_LIMIT, SCROLL_STEP};
use crate::types::{InvestorRecord, RawExtraction};

const MISSING: &str = "N/A";

/// Accumulates aligned rows across the scroll steps of one collector run.
///
/// The table exposes no per-row identifier to structural queries, so rows
/// are assembled by position: index i of every column list is assumed to
/// belong to the same investor. Columns shorter than the investor list fill
/// with "N/A". Scroll-budget and quiescence bookkeeping lives here too, so
/// the termination rules can be exercised without a browser.
pub struct ScrapeSession {
    records: Vec<InvestorRecord>,
    seen: HashSet<String>,
    position: u32,
    stale_steps: u32,
    scrape_date: String,
}

impl ScrapeSession {
    pub fn start() -> Self {
        Self {
            records: Vec::new(),
            seen: HashSet::new(),
            position: 0,
            stale_steps: 0,
            scrape_date: Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    /// Scroll budget spent so far, in pixels.
    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn stale_steps(&self) -> u32 {
        self.stale_steps
    }

    /// True once either termination rule fires: the page stopped yielding
    /// new investors, or the scroll distance cap is spent.
    pub fn finished(&self) -> bool {
        self.stale_steps >= QUIESCENCE_LIMIT || self.position >= MAX_SCROLL_DISTANCE
    }

    /// Accounts one scroll step against the distance cap.
    pub fn record_scroll(&mut self) {
        self.position += SCROLL_STEP;
    }

    /// Aligns one step's column lists into records, keeping rows whose
    /// investor name is non-empty and unseen. Returns the number of new
    /// investors the step produced.
    pub fn ingest(&mut self, raw: RawExtraction) -> usize {
        let (deals, round_types) = split_deal_or_round(&raw.deal_or_round);

        let mut fresh = 0;
        for (i, investor) in raw.investors.iter().enumerate() {
            if investor.is_empty() || self.seen.contains(investor) {
                continue;
            }
            self.seen.insert(investor.clone());
            self.records.push(InvestorRecord {
                investor: investor.clone(),
                deals: column_value(&deals, i),
                median_amount: column_value(&raw.median_amounts, i),
                round_type: column_value(&round_types, i),
                project_category: column_value(&raw.categories, i),
                project_name: column_value(&raw.project_names, i),
                chains: join_chains(raw.chains.get(i)),
                scrape_date: self.scrape_date.clone(),
            });
            fresh += 1;
        }

        if fresh == 0 {
            self.stale_steps += 1;
        } else {
            self.stale_steps = 0;
        }
        fresh
    }

    pub fn into_records(self) -> Vec<InvestorRecord> {
        self.records
    }
}

/// Splits the mixed 120px column into deal counts and round types, keeping
/// the relative order within each half.
fn split_deal_or_round(mixed: &[String]) -> (Vec<String>, Vec<String>) {
    let mut deals = Vec::new();
    let mut round_types = Vec::new();
    for text in mixed {
        if is_deal_count(text) {
            deals.push(text.clone());
        } else {
            round_types.push(text.clone());
        }
    }
    (deals, round_types)
}

/// A cell is a deal count when it is all digits after dropping one
/// trailing `+` ("12", "12+"); anything else is a round type.
fn is_deal_count(text: &str) -> bool {
    let digits = text.strip_suffix('+').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn column_value(column: &[String], index: usize) -> String {
    column
        .get(index)
        .cloned()
        .unwrap_or_else(|| MISSING.to_string())
}

fn join_chains(urls: Option<&Vec<String>>) -> String {
    match urls {
        Some(urls) if !urls.is_empty() => urls.join(", "),
        _ => MISSING.to_string(),
    }
}
