//! HTML rendering of the inventory widget.

use stockroom_inventory::Product;

use crate::view::{InventoryView, Snapshot};

/// View that renders to an HTML fragment and keeps the latest one.
#[derive(Debug, Default)]
pub struct HtmlView {
    html: String,
    renders: usize,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup from the most recent render.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Number of renders so far.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl InventoryView for HtmlView {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        self.html = render_html(snapshot);
        self.renders += 1;
    }
}

/// Render messages, stats and the product grid (or the empty state).
pub fn render_html(snapshot: &Snapshot<'_>) -> String {
    let mut out = String::new();

    out.push_str("<div id=\"messages\">");
    if let Some(msg) = snapshot.message {
        out.push_str(&format!(
            "<div class=\"{}\">{}</div>",
            msg.kind.css_class(),
            escape_html(&msg.text)
        ));
    }
    out.push_str("</div>");

    let stats = snapshot.stats;
    out.push_str(&format!(
        "<div class=\"stats\">\
         <span id=\"totalProducts\">{}</span>\
         <span id=\"totalQuantity\">{}</span>\
         <span id=\"totalValue\">${}</span>\
         </div>",
        stats.count,
        stats.total_quantity,
        stats.total_value_display()
    ));

    out.push_str("<div id=\"productsContainer\">");
    if snapshot.products.is_empty() {
        out.push_str(
            "<div class=\"empty-state\">\
             <h3>No products yet</h3>\
             <p>Add your first product using the form above</p>\
             </div>",
        );
    } else {
        out.push_str("<div class=\"products-grid\">");
        for product in snapshot.products {
            out.push_str(&render_card(product));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");

    out
}

fn render_card(product: &Product) -> String {
    let id = product.id_typed();
    let description = product
        .description()
        .map(|d| format!("<div class=\"product-description\">{}</div>", escape_html(d)))
        .unwrap_or_default();

    format!(
        "<div class=\"product-card\" data-id=\"{id}\">\
         <div class=\"product-header\">\
         <div class=\"product-name\">{name}</div>\
         <div class=\"product-price\">${price}</div>\
         </div>\
         <div class=\"product-category\">{category}</div>\
         {description}\
         <div class=\"product-actions\">\
         <div class=\"quantity-controls\">\
         <button class=\"btn-quantity\" data-action=\"decrement\" data-id=\"{id}\">-</button>\
         <span class=\"quantity-display\">{quantity}</span>\
         <button class=\"btn-quantity\" data-action=\"increment\" data-id=\"{id}\">+</button>\
         </div>\
         <button class=\"btn-delete\" data-action=\"delete\" data-id=\"{id}\">Delete</button>\
         </div>\
         </div>",
        name = escape_html(product.name()),
        price = product.price(),
        category = escape_html(product.category()),
        quantity = product.quantity(),
    )
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
