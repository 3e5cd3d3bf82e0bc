use chrono::NaiveDate;
use order_catalog::clients::{OrderClient, OrderLineClient, ProductClient};
use order_catalog::model::{Order, OrderId, OrderLine, Product, ProductRef};
use order_catalog::services::{OrderedProduct, ProductService};
use store_actor::mock::MockClient;

// ProductService joins tested against mocked tables (Pattern 0).
// Each `expect_query` answers like a table holding exactly the given rows.

fn date(d: u32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2013, m, d).unwrap()
}

fn product(reference: &str, price: f64) -> Product {
    Product::new(reference, price, "CAT1".into()).unwrap()
}

fn line(order: u32, product: &str, quantity: u32) -> OrderLine {
    OrderLine::new(OrderId(order), product.into(), quantity).unwrap()
}

struct Tables {
    products: MockClient<Product>,
    orders: MockClient<Order>,
    lines: MockClient<OrderLine>,
}

impl Tables {
    fn new() -> Self {
        Self {
            products: MockClient::new(),
            orders: MockClient::new(),
            lines: MockClient::new(),
        }
    }

    fn clients(&self) -> (ProductClient, OrderClient, OrderLineClient) {
        (
            ProductClient::new(self.products.client()),
            OrderClient::new(self.orders.client()),
            OrderLineClient::new(self.lines.client()),
        )
    }

    fn verify(&self) {
        self.products.verify();
        self.orders.verify();
        self.lines.verify();
    }
}

#[tokio::test]
async fn test_products_for_order_joins_lines_and_prices() {
    let mut tables = Tables::new();
    tables
        .lines
        .expect_query()
        .return_ok(vec![line(1, "EE85", 5), line(1, "ES12", 7), line(2, "AB45", 3)]);
    tables.products.expect_query().return_ok(vec![
        product("AB45", 150.0),
        product("EE85", 200.0),
        product("ES12", 120.0),
    ]);

    let (products, orders, lines) = tables.clients();
    let service = ProductService::new(&products, &orders, &lines);

    let rows = service.find_products_for_order(OrderId(1)).await.unwrap();
    assert_eq!(
        rows,
        vec![
            OrderedProduct {
                reference: ProductRef::from("EE85"),
                price: 200.0,
                quantity: 5,
            },
            OrderedProduct {
                reference: ProductRef::from("ES12"),
                price: 120.0,
                quantity: 7,
            },
        ]
    );
    tables.verify();
}

#[tokio::test]
async fn test_order_without_lines_skips_product_lookup() {
    let mut tables = Tables::new();
    tables.lines.expect_query().return_ok(vec![line(2, "AB45", 3)]);

    let (products, orders, lines) = tables.clients();
    let service = ProductService::new(&products, &orders, &lines);

    let rows = service.find_products_for_order(OrderId(1)).await.unwrap();
    assert!(rows.is_empty());
    tables.verify();
}

#[tokio::test]
async fn test_products_ordered_between_are_distinct() {
    let mut tables = Tables::new();
    tables.orders.expect_query().return_ok(vec![
        Order::new(OrderId(1), date(14, 3)),
        Order::new(OrderId(2), date(20, 4)),
        Order::new(OrderId(3), date(15, 5)),
    ]);
    tables.lines.expect_query().return_ok(vec![
        line(1, "ES12", 7),
        line(1, "ZR85", 14),
        line(2, "ES12", 3),
        line(3, "CD78", 10),
    ]);
    tables.products.expect_query().return_ok(vec![
        product("CD78", 80.0),
        product("ES12", 120.0),
        product("ZR85", 100.0),
    ]);

    let (products, orders, lines) = tables.clients();
    let service = ProductService::new(&products, &orders, &lines);

    let found = service
        .find_products_ordered_between(date(1, 3), date(30, 4))
        .await
        .unwrap();
    let references: Vec<&str> = found.iter().map(|p| p.reference().0.as_str()).collect();
    assert_eq!(references, vec!["ES12", "ZR85"]);
    tables.verify();
}

#[tokio::test]
async fn test_no_orders_in_range_returns_empty() {
    let mut tables = Tables::new();
    tables
        .orders
        .expect_query()
        .return_ok(vec![Order::new(OrderId(3), date(15, 5))]);

    let (products, orders, lines) = tables.clients();
    let service = ProductService::new(&products, &orders, &lines);

    let found = service
        .find_products_ordered_between(date(1, 3), date(30, 4))
        .await
        .unwrap();
    assert!(found.is_empty());
    tables.verify();
}
