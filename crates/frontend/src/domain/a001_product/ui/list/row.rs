use contracts::domain::a001_product::aggregate::{Product, ProductId};

use crate::shared::export::{CsvCell, CsvExportable};
use crate::shared::image_url::normalize_image_url;

/// Строка таблицы товаров, готовая к отображению
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: ProductId,
    pub image_src: String,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub category_name: String,
}

impl ProductRow {
    pub fn from_product(p: &Product, placeholder_image: &str) -> Self {
        Self {
            id: p.id,
            image_src: normalize_image_url(p.primary_image(), placeholder_image),
            title: p.title.clone(),
            description: p.description.clone(),
            price_label: format_price(p.price),
            category_name: p.category.name.clone(),
        }
    }
}

impl ProductRow {
    /// Описание всплывает под названием при наведении, если оно есть
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// `$<price>`: целые без дробной части, остальные как есть
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

impl CsvExportable for Product {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Price", "Category"]
    }

    fn to_csv_row(&self) -> Vec<CsvCell> {
        vec![
            CsvCell::Plain(self.id.to_string()),
            CsvCell::Quoted(self.title.clone()),
            CsvCell::Plain(self.price.to_string()),
            CsvCell::Quoted(self.category.name.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ui::list::state::tests::product;
    use crate::shared::export::build_csv;

    const PLACEHOLDER: &str = "https://placehold.co/70x70?text=No+Image";

    #[test]
    fn test_row_projection() {
        let mut p = product(7, "Red Shirt", 25.0);
        p.images = vec!["[\"http://x.com/a.png\"]".to_string()];
        let row = ProductRow::from_product(&p, PLACEHOLDER);
        assert_eq!(row.id, 7);
        assert_eq!(row.image_src, "http://x.com/a.png");
        assert_eq!(row.price_label, "$25");
        assert_eq!(row.category_name, "Clothes");
    }

    #[test]
    fn test_row_without_images_uses_placeholder() {
        let mut p = product(1, "Hat", 9.99);
        p.images.clear();
        let row = ProductRow::from_product(&p, PLACEHOLDER);
        assert_eq!(row.image_src, PLACEHOLDER);
        assert_eq!(row.price_label, "$9.99");
    }

    #[test]
    fn test_description_box_only_for_described_products() {
        let row = ProductRow::from_product(&product(1, "Hat", 5.0), PLACEHOLDER);
        assert!(row.has_description());
        assert_eq!(row.description, "Hat description");

        let mut p = product(2, "Cap", 3.0);
        p.description = "  ".to_string();
        assert!(!ProductRow::from_product(&p, PLACEHOLDER).has_description());
    }

    #[test]
    fn test_csv_of_filtered_view() {
        let view = vec![product(1, "Red Shirt", 10.0), product(3, "shirt classic", 7.5)];
        let csv = build_csv(&view);
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "ID,Title,Price,Category",
                "1,\"Red Shirt\",10,\"Clothes\"",
                "3,\"shirt classic\",7.5,\"Clothes\"",
            ]
        );
    }
}
