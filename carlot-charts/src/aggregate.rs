use std::collections::BTreeMap;

use carlot_api_types::{AggregationResult, SaleDimension, SaleRecord};

/// Sums sale prices per distinct value of the chosen dimension.
///
/// `sale_price` is stored as entered by the user, so every record goes
/// through a fallible parse here. A record whose price does not parse still
/// registers its group key, it just adds nothing to the total; reports never
/// fail over bad data in a single row. Totals are not clamped, negative
/// prices pass straight through.
pub fn aggregate(records: &[SaleRecord], dimension: SaleDimension) -> AggregationResult {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        let key = match dimension {
            SaleDimension::Salesperson => &record.salesperson,
            SaleDimension::CarMake => &record.car_make,
        };
        let total = totals.entry(key.clone()).or_insert(0.0);
        if let Ok(price) = record.sale_price.trim().parse::<f64>() {
            *total += price;
        }
    }
    AggregationResult::new(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(salesperson: &str, car_make: &str, sale_price: &str) -> SaleRecord {
        SaleRecord {
            id: 0,
            date: "2023-03-01".to_string(),
            salesperson: salesperson.to_string(),
            customer_name: "Pat".to_string(),
            car_make: car_make.to_string(),
            car_model: "Model".to_string(),
            car_year: 2020,
            sale_price: sale_price.to_string(),
            commission_rate: 0.1,
            commission_earned: 0.0,
        }
    }

    #[test]
    fn empty_input_gives_empty_result() {
        let result = aggregate(&[], SaleDimension::Salesperson);
        assert!(result.is_empty());
    }

    #[test]
    fn groups_by_salesperson() {
        let records = vec![
            record("Alice", "Toyota", "1000"),
            record("Alice", "Honda", "abc"),
            record("Bob", "Toyota", "500.50"),
        ];
        let result = aggregate(&records, SaleDimension::Salesperson);
        assert_eq!(result.get("Alice"), Some(1000.0));
        assert_eq!(result.get("Bob"), Some(500.5));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn groups_by_car_make_in_lexical_order() {
        let records = vec![
            record("Alice", "Toyota", "2000"),
            record("Bob", "Honda", "3000"),
        ];
        let result = aggregate(&records, SaleDimension::CarMake);
        let keys: Vec<_> = result.totals().keys().cloned().collect();
        assert_eq!(keys, vec!["Honda", "Toyota"]);
        assert_eq!(result.get("Honda"), Some(3000.0));
        assert_eq!(result.get("Toyota"), Some(2000.0));
    }

    #[test]
    fn unparsable_price_still_registers_the_group() {
        let records = vec![record("Carol", "Kia", "not a number")];
        let result = aggregate(&records, SaleDimension::Salesperson);
        assert_eq!(result.get("Carol"), Some(0.0));
    }

    #[test]
    fn keys_are_exactly_the_distinct_dimension_values() {
        let records = vec![
            record("Alice", "Toyota", "1"),
            record("Alice", "Honda", "2"),
            record("Bob", "Toyota", "oops"),
        ];
        let result = aggregate(&records, SaleDimension::Salesperson);
        let keys: Vec<_> = result.totals().keys().cloned().collect();
        assert_eq!(keys, vec!["Alice", "Bob"]);
    }

    #[test]
    fn totals_are_conserved_for_parsable_input() {
        let records = vec![
            record("Alice", "Toyota", "100.25"),
            record("Bob", "Honda", "200"),
            record("Alice", "Kia", "49.75"),
        ];
        let result = aggregate(&records, SaleDimension::Salesperson);
        let input_sum: f64 = records
            .iter()
            .map(|r| r.sale_price.parse::<f64>().unwrap())
            .sum();
        assert!((result.grand_total() - input_sum).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_is_idempotent_over_the_same_input() {
        let records = vec![
            record("Alice", "Toyota", "1000"),
            record("Bob", "Honda", "bad"),
        ];
        let first = aggregate(&records, SaleDimension::CarMake);
        let second = aggregate(&records, SaleDimension::CarMake);
        assert_eq!(first, second);
    }

    #[test]
    fn negative_prices_are_not_clamped() {
        let records = vec![
            record("Alice", "Toyota", "-500"),
            record("Alice", "Toyota", "200"),
        ];
        let result = aggregate(&records, SaleDimension::Salesperson);
        assert_eq!(result.get("Alice"), Some(-300.0));
    }
}
