//! The eight demo scenarios.
//!
//! [`run_scenarios`] fills an empty catalog, queries it, and writes a labeled section per
//! scenario to `out`. The first failure stops the run and is returned unchanged; releasing the
//! catalog is left to the caller.

use crate::error::CatalogError;
use crate::lifecycle::CatalogSystem;
use crate::model::{
    parse_order_date, CategoryCode, CategoryCreate, OrderCreate, OrderId, OrderLineCreate,
    Product, ProductCreate, ORDER_DATE_FORMAT,
};
use chrono::{Datelike, NaiveDate};
use std::io::Write;
use store_actor::ActorClient;
use tracing::{info, info_span, Instrument};

const CATEGORIES: [(&str, &str); 3] = [
    ("CAT1", "Ordinateurs"),
    ("CAT2", "Périphériques"),
    ("CAT3", "Composants"),
];

const PRODUCTS: [(&str, f64, &str); 5] = [
    ("ES12", 120.0, "CAT1"),
    ("ZR85", 100.0, "CAT2"),
    ("EE85", 200.0, "CAT3"),
    ("AB45", 150.0, "CAT1"),
    ("CD78", 80.0, "CAT2"),
];

const ORDER_DATES: [&str; 3] = ["14/03/2013", "20/04/2013", "15/05/2013"];

/// `(order index into ORDER_DATES, product, quantity)`
const LINES: [(usize, &str, u32); 5] = [
    (0, "ES12", 7),
    (0, "ZR85", 14),
    (0, "EE85", 5),
    (1, "AB45", 3),
    (2, "CD78", 10),
];

const RANGE_START: &str = "01/03/2013";
const RANGE_END: &str = "30/04/2013";
const PRICE_THRESHOLD: f64 = 100.0;

const MONTHS: [&str; 12] = [
    "Janvier", "Février", "Mars", "Avril", "Mai", "Juin", "Juillet", "Août", "Septembre",
    "Octobre", "Novembre", "Décembre",
];

/// Runs all eight scenarios against `system`, in order.
pub async fn run_scenarios<W: Write>(
    system: &CatalogSystem,
    out: &mut W,
) -> Result<(), CatalogError> {
    create_categories(system, out)
        .instrument(info_span!("scenario", n = 1))
        .await?;
    create_products(system, out)
        .instrument(info_span!("scenario", n = 2))
        .await?;
    list_category(system, out, &CategoryCode::from(CATEGORIES[0].0))
        .instrument(info_span!("scenario", n = 3))
        .await?;
    let orders = create_orders(system, out)
        .instrument(info_span!("scenario", n = 4))
        .await?;
    create_lines(system, out, &orders)
        .instrument(info_span!("scenario", n = 5))
        .await?;
    show_order(system, out, orders[0])
        .instrument(info_span!("scenario", n = 6))
        .await?;
    products_between(system, out)
        .instrument(info_span!("scenario", n = 7))
        .await?;
    expensive_products(system, out)
        .instrument(info_span!("scenario", n = 8))
        .await?;

    writeln!(out, "\n=== Tous les tests ont été exécutés avec succès! ===")?;
    info!("All scenarios completed");
    Ok(())
}

async fn create_categories<W: Write>(
    system: &CatalogSystem,
    out: &mut W,
) -> Result<(), CatalogError> {
    writeln!(out, "=== TEST 1: Création des catégories ===")?;
    for (code, label) in CATEGORIES {
        system
            .categories()
            .create_category(CategoryCreate {
                code: code.to_string(),
                label: label.to_string(),
            })
            .await?;
    }
    writeln!(out, "Catégories créées avec succès!")?;
    Ok(())
}

async fn create_products<W: Write>(
    system: &CatalogSystem,
    out: &mut W,
) -> Result<(), CatalogError> {
    writeln!(out, "\n=== TEST 2: Création des produits ===")?;
    let products = system.products();
    for (reference, price, category) in PRODUCTS {
        products
            .create(ProductCreate {
                reference: reference.to_string(),
                price,
                category: category.into(),
            })
            .await?;
    }
    writeln!(out, "Produits créés avec succès!")?;
    Ok(())
}

async fn list_category<W: Write>(
    system: &CatalogSystem,
    out: &mut W,
    code: &CategoryCode,
) -> Result<(), CatalogError> {
    writeln!(out, "\n=== TEST 3: Afficher les produits par catégorie ===")?;
    let category = system.categories().require(code.clone()).await?;
    writeln!(out, "Produits de la catégorie {}:", category.label())?;
    for product in system.products().find_by_category(code).await? {
        writeln!(out, "  - {}", price_line(&product))?;
    }
    Ok(())
}

async fn create_orders<W: Write>(
    system: &CatalogSystem,
    out: &mut W,
) -> Result<Vec<OrderId>, CatalogError> {
    writeln!(out, "\n=== TEST 4: Création des commandes ===")?;
    let mut ids = Vec::with_capacity(ORDER_DATES.len());
    for date in ORDER_DATES {
        let date = parse_order_date(date)?;
        ids.push(system.orders().create_order(OrderCreate { date }).await?);
    }
    writeln!(out, "Commandes créées avec succès!")?;
    Ok(ids)
}

async fn create_lines<W: Write>(
    system: &CatalogSystem,
    out: &mut W,
    orders: &[OrderId],
) -> Result<(), CatalogError> {
    writeln!(out, "\n=== TEST 5: Création des lignes de commande ===")?;
    for (order, product, quantity) in LINES {
        system
            .order_lines()
            .create_line(OrderLineCreate {
                order: orders[order],
                product: product.into(),
                quantity,
            })
            .await?;
    }
    writeln!(out, "Lignes de commande créées avec succès!")?;
    Ok(())
}

async fn show_order<W: Write>(
    system: &CatalogSystem,
    out: &mut W,
    id: OrderId,
) -> Result<(), CatalogError> {
    writeln!(
        out,
        "\n=== TEST 6: Afficher les produits commandés dans une commande ==="
    )?;
    let order = system.orders().require(id).await?;
    writeln!(
        out,
        "Commande : {}     Date : {}",
        order.id(),
        long_date(order.date())
    )?;
    writeln!(out, "Liste des produits :")?;
    writeln!(out, "Référence\tPrix\t\tQuantité")?;
    for row in system.products().find_products_for_order(id).await? {
        writeln!(
            out,
            "{}\t\t{} DH\t{}",
            row.reference,
            amount(row.price),
            row.quantity
        )?;
    }
    Ok(())
}

async fn products_between<W: Write>(
    system: &CatalogSystem,
    out: &mut W,
) -> Result<(), CatalogError> {
    writeln!(out, "\n=== TEST 7: Produits commandés entre deux dates ===")?;
    let start = parse_order_date(RANGE_START)?;
    let end = parse_order_date(RANGE_END)?;
    let products = system
        .products()
        .find_products_ordered_between(start, end)
        .await?;
    writeln!(
        out,
        "Produits commandés entre {} et {}:",
        start.format(ORDER_DATE_FORMAT),
        end.format(ORDER_DATE_FORMAT)
    )?;
    for product in products {
        writeln!(out, "  - {}", price_line(&product))?;
    }
    Ok(())
}

async fn expensive_products<W: Write>(
    system: &CatalogSystem,
    out: &mut W,
) -> Result<(), CatalogError> {
    writeln!(
        out,
        "\n=== TEST 8: Produits dont le prix est supérieur à {PRICE_THRESHOLD:.0} DH (requête nommée) ==="
    )?;
    writeln!(out, "Produits avec prix > {PRICE_THRESHOLD:.0} DH:")?;
    for product in system.products().find_by_price_above(PRICE_THRESHOLD).await? {
        let category = system
            .categories()
            .require(product.category().clone())
            .await?;
        writeln!(out, "  - {} ({})", price_line(&product), category.label())?;
    }
    Ok(())
}

fn price_line(product: &Product) -> String {
    format!("{} : {} DH", product.reference(), amount(product.price()))
}

/// Shortest decimal form, always with a fractional part (`120.0`, `99.99`).
fn amount(price: f64) -> String {
    format!("{price:?}")
}

/// `14 Mars 2013`
fn long_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}
