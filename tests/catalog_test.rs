use rust_decimal::Decimal;
use smart_inventory::catalog::{CatalogError, ProductFilter, NO_CATEGORY};
use smart_inventory::category_actor::CategoryError;
use smart_inventory::config::Settings;
use smart_inventory::intake::OrderSubmission;
use smart_inventory::lifecycle::InventorySystem;
use smart_inventory::model::{CategoryCreate, CategoryId, ProductCreate, ProductUpdate};
use smart_inventory::product_actor::ProductError;
use smart_inventory::tracking::UNKNOWN_PRODUCT;

#[tokio::test]
async fn test_product_in_unknown_category_is_refused() {
    let system = InventorySystem::new(&Settings::for_test());
    let catalog = system.catalog();

    let err = catalog
        .create_product(ProductCreate::new("Ghost", Decimal::ONE, 1).in_category(CategoryId(9)))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCategory(CategoryId(9))));
    assert!(system.product_client.list_products().await.unwrap().is_empty());

    drop(catalog);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_search_lists_category_names() {
    let system = InventorySystem::new(&Settings::for_test());
    let catalog = system.catalog();

    let tools = catalog.create_category(CategoryCreate::new("Tools")).await.unwrap();
    catalog
        .create_product(ProductCreate::new("Hammer", Decimal::new(1250, 2), 3).in_category(tools))
        .await
        .unwrap();
    catalog
        .create_product(ProductCreate::new("Loose Nail", Decimal::new(5, 2), 900))
        .await
        .unwrap();

    let all = catalog.search(&ProductFilter::default()).await.unwrap();
    let names: Vec<_> = all
        .iter()
        .map(|l| (l.product.name.as_str(), l.category_name.as_str()))
        .collect();
    assert_eq!(names, [("Hammer", "Tools"), ("Loose Nail", NO_CATEGORY)]);

    let low = catalog.low_stock().await.unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].name, "Hammer");

    drop(catalog);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_category_in_use_cannot_be_deleted() {
    let system = InventorySystem::new(&Settings::for_test());
    let catalog = system.catalog();

    let food = catalog
        .create_category(CategoryCreate::new("Food").described("Grocery and food items"))
        .await
        .unwrap();
    let coffee = catalog
        .create_product(ProductCreate::new("Coffee", Decimal::new(899, 2), 50).in_category(food))
        .await
        .unwrap();

    let err = catalog.delete_category(food).await.unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Category(CategoryError::CategoryInUse { products: 1, .. })
    ));

    let empty = catalog.create_category(CategoryCreate::new("Empty")).await.unwrap();
    catalog
        .update_product(
            coffee,
            ProductUpdate {
                category_id: Some(empty),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    catalog.delete_category(food).await.unwrap();
    assert_eq!(catalog.categories().await.unwrap().len(), 1);

    drop(catalog);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stock_adjustment_and_availability() {
    let system = InventorySystem::new(&Settings::for_test());
    let catalog = system.catalog();

    let id = catalog
        .create_product(ProductCreate::new("Widget", Decimal::ONE, 4))
        .await
        .unwrap();
    assert_eq!(catalog.adjust_stock(id, 0).await.unwrap(), 0);
    assert!(catalog.available_for_order().await.unwrap().is_empty());

    let missing = catalog.adjust_stock(smart_inventory::model::ProductId(99), 5).await;
    assert!(matches!(missing, Err(CatalogError::Product(ProductError::NotFound(_)))));

    drop(catalog);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleted_product_is_gone_but_order_summary_keeps_the_line() {
    let system = InventorySystem::new(&Settings::for_test());
    let catalog = system.catalog();
    let intake = system.intake();
    let tracking = system.tracking();

    let kept = catalog
        .create_product(ProductCreate::new("Kettle", Decimal::new(2500, 2), 5))
        .await
        .unwrap();
    let retired = catalog
        .create_product(ProductCreate::new("Toaster", Decimal::new(4000, 2), 5))
        .await
        .unwrap();

    let placed = intake
        .place_order(OrderSubmission {
            guest_name: "Ada".into(),
            guest_email: "ada@example.com".into(),
            product_ids: Some(vec![kept.0, retired.0]),
            quantities: Some(vec![1, 2]),
        })
        .await
        .unwrap();

    catalog.delete_product(retired).await.unwrap();
    assert_eq!(catalog.available_for_order().await.unwrap().len(), 1);

    let summary = tracking.summary(placed.order_id).await.unwrap().unwrap();
    let names: Vec<_> = summary.lines.iter().map(|l| l.product_name.as_str()).collect();
    assert_eq!(names, ["Kettle", UNKNOWN_PRODUCT]);
    assert_eq!(summary.total_amount, Decimal::new(10500, 2));

    let tracked = tracking.track(&placed.order_number).await.unwrap();
    assert_eq!(tracked.map(|s| s.id), Some(placed.order_id));
    assert!(tracking.track("  ").await.unwrap().is_none());
    assert!(tracking.track("ORD-19990101-0000").await.unwrap().is_none());

    let missing = catalog.delete_product(retired).await;
    assert!(matches!(missing, Err(CatalogError::Product(ProductError::NotFound(_)))));

    drop((catalog, intake, tracking));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_category_can_be_cleared() {
    let system = InventorySystem::new(&Settings::for_test());
    let catalog = system.catalog();

    let tools = catalog.create_category(CategoryCreate::new("Tools")).await.unwrap();
    let hammer = catalog
        .create_product(ProductCreate::new("Hammer", Decimal::ONE, 3).in_category(tools))
        .await
        .unwrap();
    let updated = catalog
        .update_product(
            hammer,
            ProductUpdate {
                clear_category: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.category_id, None);

    let listing = catalog.search(&ProductFilter::default()).await.unwrap();
    assert_eq!(listing[0].category_name, NO_CATEGORY);
    catalog.delete_category(tools).await.unwrap();

    drop(catalog);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_blank_names_are_refused() {
    let system = InventorySystem::new(&Settings::for_test());
    let catalog = system.catalog();

    let category = catalog.create_category(CategoryCreate::new("  ")).await;
    assert!(matches!(
        category,
        Err(CatalogError::Category(CategoryError::ValidationError(_)))
    ));
    let product = catalog
        .create_product(ProductCreate::new(" ", Decimal::ONE, 1))
        .await;
    assert!(matches!(
        product,
        Err(CatalogError::Product(ProductError::ValidationError(_)))
    ));
    assert!(catalog.categories().await.unwrap().is_empty());
    assert!(system.product_client.list_products().await.unwrap().is_empty());

    drop(catalog);
    system.shutdown().await.unwrap();
}
