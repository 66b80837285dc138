use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::view::{project, ListQuery};

pub fn run<S: DataStore>(store: &S, query: &ListQuery) -> Result<CmdResult> {
    let listed: Vec<_> = project(store.list_products(), query)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() && !query.search.trim().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products match '{}'",
            query.search.trim()
        )));
    }
    Ok(result.with_listed_products(listed))
}
