use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::DataStore;

/// The product a delete of `code` would remove, for a confirmation prompt.
pub fn preview<S: DataStore>(store: &S, code: u64) -> Option<Product> {
    store.get_product(code).cloned()
}

/// Removes the product with `code`. Unknown codes are not an error.
///
/// **Important**: This function does NOT prompt for confirmation. The CLI layer should
/// call `preview()` first, show confirmation to the user, then call this function.
pub fn run<S: DataStore>(store: &mut S, code: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.delete_product(code)? {
        Some(product) => {
            result.add_message(CmdMessage::success(format!(
                "Product deleted (#{}): {}",
                product.code, product.name
            )));
            result.affected_products.push(product);
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "No product with code {}",
                code
            )));
        }
    }
    Ok(result)
}
