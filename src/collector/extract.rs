use chromiumoxide::error::CdpError;
use chromiumoxide::Page;
use serde::de::DeserializeOwned;

use crate::types::RawExtraction;

// CSS signatures of the six visual columns. The table exposes no stable
// per-row ids, so the min-width inline styles are the only selectable
// distinction between columns.
const INVESTOR_COLUMN: &str = "div[style*='min-width: 200px']";
const DEAL_OR_ROUND_COLUMN: &str = "div[style*='min-width: 120px']";
const MEDIAN_AMOUNT_COLUMN: &str = "div[style*='min-width: 140px']";
const CATEGORY_COLUMN: &str = "div[style*='min-width: 160px']";
const PROJECT_NAME_COLUMN: &str = "div[style*='min-width: 240px']";
// Chain icons sit in a flex container with no column marker at all.
const CHAIN_CELL: &str = "div.flex.items-center.justify-end";

pub async fn scroll_by(page: &Page, step: u32) -> Result<(), CdpError> {
    page.evaluate(format!("window.scrollBy(0, {step})")).await?;
    Ok(())
}

/// Pulls all six column lists from the current DOM state.
pub async fn raw_columns(page: &Page) -> Result<RawExtraction, CdpError> {
    Ok(RawExtraction {
        investors: text_column(page, INVESTOR_COLUMN).await?,
        deal_or_round: text_column(page, DEAL_OR_ROUND_COLUMN).await?,
        categories: text_column(page, CATEGORY_COLUMN).await?,
        project_names: text_column(page, PROJECT_NAME_COLUMN).await?,
        chains: chain_column(page).await?,
        median_amounts: text_column(page, MEDIAN_AMOUNT_COLUMN).await?,
    })
}

async fn text_column(page: &Page, selector: &str) -> Result<Vec<String>, CdpError> {
    eval_json(
        page,
        format!(
            r#"Array.from(document.querySelectorAll("{selector}")).map(el => (el.innerText || "").trim())"#
        ),
    )
    .await
}

async fn chain_column(page: &Page) -> Result<Vec<Vec<String>>, CdpError> {
    eval_json(
        page,
        format!(
            r#"Array.from(document.querySelectorAll("{CHAIN_CELL}")).map(cell =>
                Array.from(cell.querySelectorAll("img")).map(img => img.src))"#
        ),
    )
    .await
}

async fn eval_json<T>(page: &Page, script: String) -> Result<T, CdpError>
where
    T: DeserializeOwned + Default,
{
    let value = page.evaluate(script).await?;
    Ok(value.into_value().unwrap_or_default())
}
