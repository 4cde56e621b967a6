//! Token-pagination driver shared by the export commands
//!
//! Every export follows the same flow: fetch a page, hand the records
//! to a sink, and repeat with the returned continuation token until it
//! is absent. Request pacing lives in the client, so this loop stays a
//! plain sequential await.

use std::future::Future;

use log::debug;

use crate::client::Page;
use crate::error::Result;

/// Drive a token-paginated fetch to exhaustion.
///
/// `fetch` is called with `None` first and then with each continuation
/// token; `on_page` receives every page's records in order. Returns the
/// total number of records seen.
///
/// # Example
///
/// ```ignore
/// let client = ctx.client.clone();
/// let total = for_each_page(
///     move |token| {
///         let client = client.clone();
///         async move { client.list_agents(token.as_deref()).await }
///     },
///     |agents| {
///         for agent in &agents {
///             sink.write(&AgentRow::from(agent))?;
///         }
///         Ok(())
///     },
/// )
/// .await?;
/// ```
pub async fn for_each_page<T, F, Fut>(
    mut fetch: F,
    mut on_page: impl FnMut(Vec<T>) -> Result<()>,
) -> Result<usize>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut token: Option<String> = None;
    let mut page_number = 1usize;
    let mut total = 0usize;

    loop {
        let page = fetch(token.clone()).await?;
        debug!("Fetched page {} ({} records)", page_number, page.data.len());

        total += page.data.len();
        let has_next = page.has_next();
        token = page.token;
        on_page(page.data)?;

        if !has_next {
            break;
        }
        page_number += 1;
    }

    Ok(total)
}

/// Fetch every page and collect the records.
pub async fn fetch_all<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    for_each_page(fetch, |mut page| {
        items.append(&mut page);
        Ok(())
    })
    .await?;

    Ok(items)
}
