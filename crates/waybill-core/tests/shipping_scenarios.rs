//! Rate-card scenarios for every shipping method, checked to the cent.
//!
//! Each table row is `(quantity, customer tier, expected cents)` for a cart
//! holding a single $10.00 line.

use waybill_core::{Address, Cart, CustomerTier, Item, ShippingCalculator, ShippingMethod};

use CustomerTier::{Premium, Standard};

type Row = (u32, CustomerTier, i64);

fn dallas() -> Address {
    Address::new("USA", "Dallas", "1234 left lane.")
}

fn seattle() -> Address {
    Address::new("USA", "Seatle", "1234 left lane.")
}

fn rio() -> Address {
    Address::new("BRA", "Rio de Janeiro", "Celso queiroz")
}

fn single_line_cart(
    customer: CustomerTier,
    quantity: u32,
    method: ShippingMethod,
    destination: Address,
) -> Cart {
    Cart::new("id", customer)
        .with_method(method)
        .with_item(Item::new("id", 1000, quantity))
        .ship_to(destination)
}

fn assert_rows(method: ShippingMethod, warehouse: Address, destination: Address, rows: &[Row]) {
    let calculator = ShippingCalculator::new(warehouse);
    for &(quantity, customer, expected) in rows {
        let cart = single_line_cart(customer, quantity, method, destination.clone());
        let cost = calculator
            .calculate_shipping_cost(&cart)
            .expect("cart has a destination");
        assert_eq!(
            cost.cents(),
            expected,
            "{method}: qty {quantity}, {customer} customer to {destination}"
        );
    }
}

fn assert_empty_cart_is_free(method: ShippingMethod) {
    let calculator = ShippingCalculator::default();
    let cart = Cart::new("id", Standard)
        .with_method(method)
        .ship_to(dallas());
    assert!(calculator.calculate_shipping_cost(&cart).unwrap().is_zero());

    // A single zero-quantity line is also free.
    let cart = single_line_cart(Standard, 0, method, dallas());
    assert!(calculator.calculate_shipping_cost(&cart).unwrap().is_zero());
}

mod standard {
    use super::*;

    const METHOD: ShippingMethod = ShippingMethod::Standard;

    fn both_tiers(rows: &[(u32, i64)]) -> Vec<Row> {
        rows.iter()
            .flat_map(|&(q, c)| [(q, Standard, c), (q, Premium, c)])
            .collect()
    }

    #[test]
    fn empty_cart_costs_nothing() {
        assert_empty_cart_is_free(METHOD);
    }

    #[test]
    fn same_country_same_city() {
        let rows = both_tiers(&[(5, 500), (10, 1000), (12, 1200), (78, 7800)]);
        assert_rows(METHOD, dallas(), dallas(), &rows);
    }

    #[test]
    fn same_country_different_city() {
        let rows = both_tiers(&[(5, 1000), (10, 2000), (12, 2400), (78, 15_600)]);
        assert_rows(METHOD, seattle(), dallas(), &rows);
    }

    #[test]
    fn international() {
        let rows = both_tiers(&[(5, 7500), (10, 15_000), (12, 18_000), (78, 117_000)]);
        assert_rows(METHOD, dallas(), rio(), &rows);
    }
}

mod expedited {
    use super::*;

    const METHOD: ShippingMethod = ShippingMethod::Expedited;

    #[test]
    fn empty_cart_costs_nothing() {
        assert_empty_cart_is_free(METHOD);
    }

    #[test]
    fn same_country_same_city() {
        let rows: &[Row] = &[
            (5, Standard, 600),
            (10, Standard, 1200),
            (12, Standard, 1440),
            (78, Standard, 9360),
            (5, Premium, 500),
            (10, Premium, 1000),
            (12, Premium, 1200),
            (78, Premium, 7800),
        ];
        assert_rows(METHOD, dallas(), dallas(), rows);
    }

    #[test]
    fn same_country_different_city() {
        let rows: &[Row] = &[
            (5, Standard, 1200),
            (10, Standard, 2400),
            (12, Standard, 2880),
            (78, Standard, 18_720),
            (5, Premium, 1000),
            (10, Premium, 2000),
            (12, Premium, 2400),
            (78, Premium, 15_600),
        ];
        assert_rows(METHOD, dallas(), seattle(), rows);
    }

    #[test]
    fn international() {
        let rows: &[Row] = &[
            (5, Standard, 9000),
            (10, Standard, 18_000),
            (12, Standard, 21_600),
            (78, Standard, 140_400),
            (5, Premium, 7500),
            (10, Premium, 15_000),
            (12, Premium, 18_000),
            (78, Premium, 117_000),
        ];
        assert_rows(METHOD, dallas(), rio(), rows);
    }
}

mod priority {
    use super::*;

    const METHOD: ShippingMethod = ShippingMethod::Priority;

    #[test]
    fn empty_cart_costs_nothing() {
        assert_empty_cart_is_free(METHOD);
    }

    #[test]
    fn same_country_same_city() {
        let rows: &[Row] = &[
            (5, Standard, 1000),
            (10, Standard, 2000),
            (12, Standard, 2400),
            (78, Standard, 15_600),
            (13, Premium, 1300),
            (78, Premium, 7800),
        ];
        assert_rows(METHOD, dallas(), dallas(), rows);
    }

    #[test]
    fn same_country_different_city() {
        let rows: &[Row] = &[
            (5, Standard, 2000),
            (10, Standard, 4000),
            (12, Standard, 4800),
            (78, Standard, 31_200),
            (78, Premium, 15_600),
            (397, Premium, 79_400),
        ];
        assert_rows(METHOD, seattle(), dallas(), rows);
    }

    #[test]
    fn international() {
        let rows: &[Row] = &[
            (5, Standard, 15_000),
            (10, Standard, 30_000),
            (12, Standard, 36_000),
            (78, Standard, 234_000),
            (5, Premium, 7500),
            (10, Premium, 15_000),
            (12, Premium, 18_000),
            (78, Premium, 117_000),
        ];
        assert_rows(METHOD, dallas(), rio(), rows);
    }
}

mod express {
    use super::*;

    const METHOD: ShippingMethod = ShippingMethod::Express;

    #[test]
    fn empty_cart_costs_nothing() {
        assert_empty_cart_is_free(METHOD);
    }

    #[test]
    fn same_country_same_city() {
        let rows: &[Row] = &[
            (5, Standard, 1250),
            (10, Standard, 2500),
            (12, Standard, 3000),
            (78, Standard, 19_500),
            (13, Premium, 3250),
            (78, Premium, 19_500),
        ];
        assert_rows(METHOD, dallas(), dallas(), rows);
    }

    #[test]
    fn same_country_different_city() {
        let rows: &[Row] = &[
            (5, Standard, 2500),
            (10, Standard, 5000),
            (12, Standard, 6000),
            (78, Standard, 39_000),
            (397, Premium, 198_500),
        ];
        assert_rows(METHOD, seattle(), dallas(), rows);
    }

    #[test]
    fn international() {
        let rows: &[Row] = &[
            (5, Standard, 18_750),
            (10, Standard, 37_500),
            (12, Standard, 45_000),
            (78, Standard, 292_500),
            (5, Premium, 18_750),
            (10, Premium, 37_500),
            (12, Premium, 45_000),
            (78, Premium, 292_500),
        ];
        assert_rows(METHOD, dallas(), rio(), rows);
    }
}

#[test]
fn missing_destination_is_an_error_not_a_tier() {
    let calculator = ShippingCalculator::default();
    let cart = Cart::new("id", Premium).with_item(Item::new("id", 1000, 1));
    let err = calculator.calculate_shipping_cost(&cart).unwrap_err();
    assert!(err.to_string().contains("no shipping address"));
}
