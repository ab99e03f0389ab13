/*!
 * # Export Module
 *
 * CSV rendering and file delivery for order reports.
 */

pub mod csv;

pub use csv::{render_csv, CsvExport, CsvValue, CSV_MIME};

use crate::models::order::{OrderRequest, Quantity};

/// Header row of the order report.
const ORDER_REPORT_HEADERS: [&str; 7] = [
    "Date",
    "Requester",
    "Subdistrict",
    "Product",
    "Quantity",
    "Unit",
    "Observations",
];

/// Flattens order requests into a CSV report, one line per product.
pub fn order_report(orders: &[OrderRequest]) -> CsvExport {
    let mut rows = Vec::new();
    for order in orders {
        for product in &order.products {
            rows.push(vec![
                CsvValue::from(order.request_date.format("%Y-%m-%d").to_string()),
                CsvValue::from(order.requester_name.as_str()),
                CsvValue::from(order.subdistrict.to_string()),
                CsvValue::from(product.product_name.as_str()),
                match product.quantity {
                    Quantity::Count(n) => CsvValue::from(n),
                    Quantity::Draft => CsvValue::from(""),
                },
                CsvValue::from(product.unit_of_measure.as_str()),
                CsvValue::from(order.observations.as_deref().unwrap_or("")),
            ]);
        }
    }
    CsvExport::new(&ORDER_REPORT_HEADERS, &rows, "order-requests")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{OrderProduct, Subdistrict};
    use chrono::{TimeZone, Utc};

    #[test]
    fn report_emits_one_line_per_product() {
        let order = OrderRequest {
            requester_name: "João Pereira".to_string(),
            subdistrict: Subdistrict::Ubv,
            products: vec![
                OrderProduct::new("A-1".into(), "Sprayer nozzle".into(), 4, "unit".into()),
                OrderProduct::new("B-2".into(), "Glove pair".into(), 10, "pair".into()),
            ],
            observations: None,
            request_date: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
        };

        let export = order_report(&[order]);
        let lines: Vec<&str> = export.content().split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "\"Date\",\"Requester\",\"Subdistrict\",\"Product\",\"Quantity\",\"Unit\",\"Observations\""
        );
        assert_eq!(
            lines[1],
            "\"2024-03-05\",\"João Pereira\",\"UBV\",\"Sprayer nozzle\",\"4\",\"unit\",\"\""
        );
        assert_eq!(export.filename(), "order-requests.csv");
    }
}
