use crate::core::mean;
use crate::domain::model::Product;
use crate::domain::report::{money, plain_real, Section};
use std::collections::HashMap;

pub const EXPENSIVE_THRESHOLD: f64 = 100.0;
pub const REPORT_SEPARATOR: &str = ";";

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductAnalytics;

impl ProductAnalytics {
    pub fn new() -> Self {
        Self
    }

    /// Products priced strictly above [`EXPENSIVE_THRESHOLD`], most expensive first.
    pub fn expensive_sorted_descending<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut expensive: Vec<&Product> = products
            .iter()
            .filter(|p| p.price > EXPENSIVE_THRESHOLD)
            .collect();
        expensive.sort_by(|a, b| b.price.total_cmp(&a.price));
        expensive
    }

    pub fn stock_by_category<'a>(&self, products: &'a [Product]) -> HashMap<&'a str, i64> {
        let mut totals: HashMap<&str, i64> = HashMap::new();
        for product in products {
            *totals.entry(product.category.as_str()).or_insert(0) += i64::from(product.stock);
        }
        totals
    }

    /// `name;price;name;price;...` over every product in input order.
    pub fn report_line(&self, products: &[Product]) -> String {
        products
            .iter()
            .map(|p| format!("{}{}{}", p.name, REPORT_SEPARATOR, plain_real(p.price)))
            .collect::<Vec<_>>()
            .join(REPORT_SEPARATOR)
    }

    pub fn average_price(&self, products: &[Product]) -> f64 {
        mean(products.iter().map(|p| p.price))
    }

    pub fn average_price_by_category<'a>(&self, products: &'a [Product]) -> HashMap<&'a str, f64> {
        let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
        for product in products {
            let slot = sums.entry(product.category.as_str()).or_insert((0.0, 0));
            slot.0 += product.price;
            slot.1 += 1;
        }
        sums.into_iter()
            .map(|(category, (sum, count))| (category, sum / count as f64))
            .collect()
    }

    pub fn section(&self, products: &[Product]) -> Section {
        tracing::debug!("Building product section from {} records", products.len());

        let expensive = self
            .expensive_sorted_descending(products)
            .iter()
            .map(|p| format!("- {}: {}", p.name, money(p.price)))
            .collect();

        let mut stock: Vec<(&str, i64)> = self.stock_by_category(products).into_iter().collect();
        stock.sort_by(|a, b| a.0.cmp(b.0));
        let stock = stock
            .into_iter()
            .map(|(category, units)| format!("{category}: {units} units"))
            .collect();

        let line = self.report_line(products);
        let report_line = if line.is_empty() { vec![] } else { vec![line] };

        let mut averages: Vec<(&str, f64)> =
            self.average_price_by_category(products).into_iter().collect();
        averages.sort_by(|a, b| a.0.cmp(b.0));
        let averages = averages
            .into_iter()
            .map(|(category, avg)| format!("{}: {}", category, money(avg)))
            .collect();

        Section::new("PRODUCT ANALYTICS")
            .entry("Products priced above $100 (by price, descending)", expensive)
            .entry("Total stock per category", stock)
            .entry("Product report (name;price)", report_line)
            .entry("Overall average price", vec![money(self.average_price(products))])
            .entry("Average price per category", averages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Laptop", "Electronics", 1200.0, 15),
            Product::new("Mouse", "Electronics", 25.0, 50),
            Product::new("Keyboard", "Electronics", 80.0, 30),
            Product::new("Monitor", "Electronics", 350.0, 20),
            Product::new("Shirt", "Clothing", 45.0, 100),
            Product::new("Trousers", "Clothing", 65.0, 80),
            Product::new("Shoes", "Clothing", 120.0, 40),
            Product::new("Rice", "Food", 15.0, 200),
            Product::new("Oil", "Food", 30.0, 150),
            Product::new("Smartphone", "Electronics", 800.0, 25),
        ]
    }

    fn service() -> ProductAnalytics {
        ProductAnalytics::new()
    }

    #[test]
    fn test_expensive_sorted_descending() {
        let products = catalog();
        let expensive = service().expensive_sorted_descending(&products);
        let names: Vec<&str> = expensive.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop", "Smartphone", "Monitor", "Shoes"]);
        assert!(expensive.iter().all(|p| p.price > 100.0));
    }

    #[test]
    fn test_expensive_threshold_is_strict() {
        let products = vec![
            Product::new("exact", "x", 100.0, 1),
            Product::new("a", "x", 150.0, 1),
            Product::new("b", "x", 150.0, 1),
        ];
        let expensive = service().expensive_sorted_descending(&products);
        let names: Vec<&str> = expensive.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_stock_by_category() {
        let products = catalog();
        let stock = service().stock_by_category(&products);
        assert_eq!(stock.len(), 3);
        assert_eq!(stock["Electronics"], 140);
        assert_eq!(stock["Clothing"], 220);
        assert_eq!(stock["Food"], 350);
    }

    #[test]
    fn test_report_line() {
        let line = service().report_line(&catalog());
        assert!(line.starts_with("Laptop;1200.0;Mouse;25.0"));
        assert!(line.contains("Smartphone;800.0"));
        assert_eq!(line.split(';').count(), 20);
        assert_eq!(service().report_line(&[]), "");
    }

    #[test]
    fn test_average_price() {
        assert!((service().average_price(&catalog()) - 273.0).abs() < 0.01);
        assert_eq!(service().average_price(&[]), 0.0);

        let single = [Product::new("Desk", "Furniture", 149.99, 3)];
        assert_eq!(service().average_price(&single), 149.99);
    }

    #[test]
    fn test_average_price_by_category() {
        let products = catalog();
        let averages = service().average_price_by_category(&products);
        assert_eq!(averages.len(), 3);
        assert!((averages["Electronics"] - 491.0).abs() < 0.01);
        assert!((averages["Clothing"] - 76.67).abs() < 0.01);
        assert!((averages["Food"] - 22.5).abs() < 0.01);
        assert!(service().average_price_by_category(&[]).is_empty());
    }

    #[test]
    fn test_section_lines() {
        let section = service().section(&catalog());
        assert_eq!(section.entries.len(), 5);
        assert_eq!(section.entries[0].lines[0], "- Laptop: $1200.00");
        assert_eq!(
            section.entries[1].lines,
            vec!["Clothing: 220 units", "Electronics: 140 units", "Food: 350 units"]
        );
        assert_eq!(section.entries[3].lines, vec!["$273.00"]);
    }

    fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec(
            ("[a-z]{1,6}", "(food|tools|toys)", -50.0f64..500.0, -10i32..1000)
                .prop_map(|(name, category, price, stock)| Product::new(name, category, price, stock)),
            0..30,
        )
    }

    proptest! {
        #[test]
        fn prop_expensive_is_sorted_filtered_subset(products in arb_products()) {
            let expensive = service().expensive_sorted_descending(&products);
            prop_assert!(expensive.iter().all(|p| p.price > EXPENSIVE_THRESHOLD));
            prop_assert!(expensive.windows(2).all(|w| w[0].price >= w[1].price));
            prop_assert_eq!(
                expensive.len(),
                products.iter().filter(|p| p.price > EXPENSIVE_THRESHOLD).count()
            );

            let owned: Vec<Product> = expensive.iter().map(|p| (*p).clone()).collect();
            let again = service().expensive_sorted_descending(&owned);
            prop_assert_eq!(again, expensive);
        }

        #[test]
        fn prop_stock_totals_cover_input(products in arb_products()) {
            let stock = service().stock_by_category(&products);
            let total: i64 = stock.values().sum();
            let expected: i64 = products.iter().map(|p| i64::from(p.stock)).sum();
            prop_assert_eq!(total, expected);
        }

        #[test]
        fn prop_report_line_has_two_tokens_per_product(products in arb_products()) {
            let line = service().report_line(&products);
            let tokens = if line.is_empty() { 0 } else { line.split(';').count() };
            prop_assert_eq!(tokens, products.len() * 2);
        }
    }
}
