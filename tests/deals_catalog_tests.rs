use foodplan::catalog::{CatalogError, DealsCatalog, DealsQuery, SortBy, SortOrder};
use foodplan_shared::StoreSlug;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn latest_date_folder_ignores_other_entries() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    helpers::seed_sale_dir(dir.path());
    std::fs::write(dir.child("2099-01-01"), "a file, not a folder")?;

    let catalog = DealsCatalog::new(dir.path());

    assert_eq!(
        catalog.latest_date_folder().await?,
        Some("2025-03-15".to_owned())
    );

    Ok(())
}

#[tokio::test]
async fn load_enriches_and_skips_missing_stores() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    helpers::seed_sale_dir(dir.path());

    let loaded = DealsCatalog::new(dir.path()).load(None).await?;

    assert_eq!(loaded.date, "2025-03-15");
    // meny has no file that week
    assert_eq!(
        loaded.stores,
        vec!["Netto".to_owned(), "REMA 1000".to_owned()]
    );
    assert_eq!(loaded.deals.len(), 4);

    let bananas = loaded
        .deals
        .iter()
        .find(|deal| deal.deal.normalized_name == "bananer")
        .unwrap();
    assert_eq!(bananas.store_slug, StoreSlug::Rema);
    assert_eq!(bananas.valid_to, "2025-03-21");
    assert_eq!(bananas.id(), "rema-bananer");

    Ok(())
}

#[tokio::test]
async fn missing_sale_dir_is_no_data() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = DealsCatalog::new(dir.child("sale"));

    let err = catalog.load(None).await.unwrap_err();

    assert!(matches!(err, CatalogError::NoData));

    Ok(())
}

#[tokio::test]
async fn store_without_file_is_no_deals() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    helpers::seed_sale_dir(dir.path());

    let err = DealsCatalog::new(dir.path())
        .load(Some(StoreSlug::Meny))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::NoDeals));

    Ok(())
}

#[tokio::test]
async fn broken_store_file_is_skipped() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    helpers::seed_sale_dir(dir.path());
    std::fs::write(dir.path().join("2025-03-15").join("meny_deals.json"), "{ nope")?;

    let loaded = DealsCatalog::new(dir.path()).load(None).await?;

    assert_eq!(loaded.deals.len(), 4);

    Ok(())
}

#[tokio::test]
async fn query_filters_and_sorts() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    helpers::seed_sale_dir(dir.path());
    let catalog = DealsCatalog::new(dir.path());

    let page = catalog
        .query(&DealsQuery {
            category: Some("kød".to_owned()),
            sort_by: Some(SortBy::Price),
            sort_order: SortOrder::Desc,
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total_count, 2);
    assert_eq!(page.deals[0].deal.price, 39.0);
    assert_eq!(page.deals[1].deal.price, 35.0);
    assert_eq!(page.latest_date, "2025-03-15");
    // categories cover every loaded deal, not only the filtered ones
    assert_eq!(
        page.categories,
        vec![
            "Frugt & grønt".to_owned(),
            "Kød".to_owned(),
            "Mejeri".to_owned()
        ]
    );

    let page = catalog
        .query(&DealsQuery {
            search: Some("MÆLK".to_owned()),
            store: Some("netto".to_owned()),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total_count, 1);
    assert_eq!(page.deals[0].id(), "netto-letmælk");
    assert_eq!(page.stores, vec!["Netto".to_owned()]);

    let page = catalog
        .query(&DealsQuery {
            search: Some("kaviar".to_owned()),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total_count, 0);

    Ok(())
}

#[tokio::test]
async fn query_unknown_store() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    helpers::seed_sale_dir(dir.path());

    let err = DealsCatalog::new(dir.path())
        .query(&DealsQuery {
            store: Some("lidl".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Unknown store: lidl");

    Ok(())
}

#[tokio::test]
async fn query_ignores_blank_filters() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    helpers::seed_sale_dir(dir.path());

    let page = DealsCatalog::new(dir.path())
        .query(&DealsQuery {
            store: Some(" ".to_owned()),
            category: Some(String::new()),
            search: Some("  ".to_owned()),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total_count, 4);

    Ok(())
}
