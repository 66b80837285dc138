use console::Style;
use once_cell::sync::Lazy;

pub struct ShelfTheme {
    pub code: Style,
    pub name: Style,
    pub quantity: Style,
    pub out_of_stock: Style,
    pub time: Style,
    pub description: Style,
    pub image: Style,
    pub count: Style,
}

pub static SHELF_THEME: Lazy<ShelfTheme> = Lazy::new(|| ShelfTheme {
    code: Style::new().yellow(),
    name: Style::new().bold(),
    quantity: Style::new(),
    out_of_stock: Style::new().red(),
    time: Style::new().color256(246).italic(),
    description: Style::new().dim(),
    image: Style::new().cyan(),
    count: Style::new().dim(),
});

/// Message styles by level
pub mod message {
    use console::Style;
    use once_cell::sync::Lazy;

    pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
    pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
    pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
}
