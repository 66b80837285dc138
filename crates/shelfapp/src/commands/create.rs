use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::form::ProductDraft;
use crate::store::DataStore;

/// Validate `draft` and add it. Invalid drafts never reach the store.
pub fn run<S: DataStore>(store: &mut S, draft: &ProductDraft) -> Result<CmdResult> {
    let valid = draft.validate().map_err(ShelfError::Validation)?;
    let product = valid.into_product();
    store.add_product(product.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} has been added",
        product.name
    )));
    result.affected_products.push(product);
    Ok(result)
}
