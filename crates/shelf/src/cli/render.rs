//! # Rendering Module
//!
//! Turns command results into terminal text or JSON. Every function returns a
//! `String`; printing happens in `commands.rs`.
//!
//! Layout calculations (width, truncation, padding) are Unicode-aware so that
//! names with wide characters still line up.

use super::styles::{message, SHELF_THEME};
use chrono::{DateTime, Utc};
use shelfapp::api::{CmdMessage, MessageLevel};
use shelfapp::form::FieldErrors;
use shelfapp::model::Product;
use unicode_width::UnicodeWidthStr;

/// Configuration for list rendering.
pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
pub const CODE_WIDTH: usize = 8;
pub const QUANTITY_WIDTH: usize = 14;
const DETAIL_INDENT: &str = "          ";

/// Per-product image state, only present when images were requested.
pub type Images<'a> = Option<&'a [Option<String>]>;

pub fn render_product_list(products: &[Product], images: Images) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let theme = &*SHELF_THEME;
    let mut out = String::new();
    let noun = if products.len() == 1 { "product" } else { "products" };
    out.push_str(&format!(
        "{}\n\n",
        theme.count.apply_to(format!("{} {} found", products.len(), noun))
    ));

    let name_width = LINE_WIDTH.saturating_sub(2 + CODE_WIDTH + QUANTITY_WIDTH + TIME_WIDTH);

    for (i, product) in products.iter().enumerate() {
        let code = pad_right(&format!("#{}", product.code), CODE_WIDTH);
        let name = pad_right(&truncate_to_width(&product.name, name_width), name_width);
        let quantity = pad_left(&format_quantity(product.quantity), QUANTITY_WIDTH);
        let quantity_style = if product.quantity == 0 {
            &theme.out_of_stock
        } else {
            &theme.quantity
        };

        out.push_str(&format!(
            "  {}{}{}{}\n",
            theme.code.apply_to(code),
            theme.name.apply_to(name),
            quantity_style.apply_to(quantity),
            theme.time.apply_to(format_time_ago(product.created_at)),
        ));

        let description_width = LINE_WIDTH.saturating_sub(DETAIL_INDENT.len());
        out.push_str(&format!(
            "{}{}\n",
            DETAIL_INDENT,
            theme
                .description
                .apply_to(truncate_to_width(&product.description, description_width))
        ));

        if let Some(images) = images {
            let line = match images.get(i).and_then(|img| img.as_deref()) {
                Some(url) => format!("image: {}", url),
                None => "no image".to_string(),
            };
            out.push_str(&format!("{}{}\n", DETAIL_INDENT, theme.image.apply_to(line)));
        }
    }

    out
}

/// JSON array of products. With images, each record gains an `image` key.
pub fn render_product_list_json(products: &[Product], images: Images) -> serde_json::Result<String> {
    let mut records = Vec::with_capacity(products.len());
    for (i, product) in products.iter().enumerate() {
        let mut value = serde_json::to_value(product)?;
        if let (Some(images), Some(obj)) = (images, value.as_object_mut()) {
            let image = images.get(i).cloned().flatten();
            obj.insert("image".to_string(), serde_json::to_value(image)?);
        }
        records.push(value);
    }
    serde_json::to_string_pretty(&records)
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for msg in messages {
        let style = match msg.level {
            MessageLevel::Info => &*message::INFO,
            MessageLevel::Success => &*message::SUCCESS,
        };
        out.push_str(&format!("{}\n", style.apply_to(&msg.content)));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// One line per invalid field, for display next to the form input.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for error in errors.iter() {
        out.push_str(&format!(
            "  {} {}\n",
            message::ERROR.apply_to(format!("{}:", error.field)),
            error.message
        ));
    }
    out
}

pub fn render_delete_prompt(product: &Product) -> String {
    format!(
        "Are you sure? This cannot be undone. This will permanently delete the product {} (#{}). [y/N] ",
        product.name, product.code
    )
}

fn format_quantity(quantity: u64) -> String {
    if quantity == 1 {
        "1 unit".to_string()
    } else {
        format!("{} units", quantity)
    }
}

fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shelfapp::form::ProductDraft;

    fn no_color() {
        console::set_colors_enabled(false);
    }

    fn product(code: u64, name: &str, quantity: u64) -> Product {
        Product::with_created_at(
            code,
            name.to_string(),
            format!("{} description", name),
            quantity,
            Utc::now() - Duration::hours(2),
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render_product_list(&[], None), "No products found.\n");
    }

    #[test]
    fn test_list_shows_fields() {
        no_color();
        let output = render_product_list(&[product(1, "Widget", 10), product(2, "Lamp", 1)], None);

        assert!(output.starts_with("2 products found\n"));
        assert!(output.contains("#1"));
        assert!(output.contains("Widget"));
        assert!(output.contains("10 units"));
        assert!(output.contains("1 unit "));
        assert!(output.contains("Lamp description"));
        assert!(output.contains("hours ago"));
        assert!(!output.contains("image"));
    }

    #[test]
    fn test_list_with_images() {
        no_color();
        let products = [product(1, "Widget", 10), product(2, "Lamp", 1)];
        let images = vec![Some("https://img/widget.jpg".to_string()), None];

        let output = render_product_list(&products, Some(&images));

        assert!(output.contains("image: https://img/widget.jpg"));
        assert!(output.contains("no image"));
    }

    #[test]
    fn test_rows_share_a_width() {
        no_color();
        let output = render_product_list(
            &[product(1, "Widget", 10), product(22, "名前のある製品", 100)],
            None,
        );
        let rows: Vec<&str> = output.lines().filter(|l| l.starts_with("  #")).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].width(), rows[1].width());
    }

    #[test]
    fn test_json_output() {
        let products = [product(1, "Widget", 10)];
        let json = render_product_list_json(&products, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["code"], 1);
        assert_eq!(value[0]["name"], "Widget");
        assert!(value[0]["createdAt"].is_string());
        assert!(value[0].get("image").is_none());
    }

    #[test]
    fn test_json_output_with_images() {
        let products = [product(1, "Widget", 10), product(2, "Lamp", 1)];
        let images = vec![None, Some("https://img/lamp.jpg".to_string())];
        let json = render_product_list_json(&products, Some(&images)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value[0]["image"].is_null());
        assert_eq!(value[1]["image"], "https://img/lamp.jpg");
    }

    #[test]
    fn test_field_errors() {
        no_color();
        let errors = ProductDraft::new("0", "W", "A basic widget", "1")
            .validate()
            .unwrap_err();
        let output = render_field_errors(&errors);
        assert_eq!(
            output,
            "  code: Code must be a positive number\n  name: Name must be at least 2 characters\n"
        );
    }

    #[test]
    fn test_messages() {
        no_color();
        let output = render_messages(&[
            CmdMessage::success("Widget has been added"),
            CmdMessage::info("No product with code 3"),
        ]);
        assert_eq!(output, "Widget has been added\nNo product with code 3\n");
    }

    #[test]
    fn test_delete_prompt_names_product() {
        let prompt = render_delete_prompt(&product(4, "Lamp", 1));
        assert!(prompt.contains("Lamp (#4)"));
        assert!(prompt.ends_with("[y/N] "));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a longer name", 6), "a lon…");
    }
}
